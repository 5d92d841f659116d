//! Visibility gate - rejects frames the counter should not learn from
//!
//! A frame passes only when every required landmark is present, has a finite
//! position, and none reports a visibility below the threshold. A rejected frame must leave the
//! counter state exactly as it was.

use crate::pose::Landmark;

pub struct VisibilityGate {
    /// Landmark indices that must be present and visible
    required: Vec<usize>,
    /// Minimum confidence to accept raw data
    threshold: f32,
}

impl VisibilityGate {
    pub fn new(required: Vec<usize>, threshold: f32) -> Self {
        Self { required, threshold }
    }

    /// Check a frame against the gate
    ///
    /// Short frames fail: a missing landmark is treated like an occluded one,
    /// and so is one with a NaN or infinite coordinate.
    pub fn admits(&self, frame: &[Landmark]) -> bool {
        self.required.iter().all(|&index| {
            frame
                .get(index)
                .is_some_and(|landmark| landmark.has_position() && landmark.is_visible(self.threshold))
        })
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}
