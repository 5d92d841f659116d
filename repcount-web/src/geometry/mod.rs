//! Geometry module - joint angles and percentage mapping
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod interpolate;

pub use angles::{directional_angle, magnitude_angle, Point};
pub use interpolate::{interpolate, to_percentage};
