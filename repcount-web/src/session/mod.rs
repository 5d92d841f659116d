//! Session module - one workout's counter behind a uniform read model
//!
//! Re-exports only. All logic in submodules.

mod facade;
mod snapshot;

pub use facade::Session;
pub use snapshot::{RepSnapshot, WorkoutSummary};
