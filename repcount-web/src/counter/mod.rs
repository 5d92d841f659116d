//! Counter module - repetition state machine and exercise calibration
//!
//! Re-exports only. All logic in submodules.

mod config;
mod exercise;
mod gate;
mod machine;
mod stage;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{
    AngleConvention, ExerciseConfig, JointTriplet, LimbConfig, Side, TransitionPolicy,
    DEFAULT_VISIBILITY_THRESHOLD,
};
pub use exercise::ExerciseKind;
pub use gate::VisibilityGate;
pub use machine::RepMachine;
pub use stage::{RepState, Stage, BOUNDARY_EMPTY, BOUNDARY_FULL, MAX_LIMBS};
