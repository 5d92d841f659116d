//! Pose module - landmark data as delivered by the pose estimator
//!
//! Re-exports only. All logic in submodules.

mod landmark;
mod topology;

pub use landmark::Landmark;
pub use topology::*;
