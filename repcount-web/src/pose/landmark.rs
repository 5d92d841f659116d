//! A single estimated keypoint

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// One body keypoint in the estimator's native 2D space
///
/// `z` and `visibility` are optional: not every estimator supplies them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            z: None,
            visibility: None,
        }
    }

    pub fn with_visibility(mut self, visibility: f32) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn with_depth(mut self, z: f32) -> Self {
        self.z = Some(z);
        self
    }

    /// Position projected to the image plane
    pub fn point(&self) -> Point {
        (self.x, self.y)
    }

    /// True unless a visibility is present and below `threshold`
    pub fn is_visible(&self, threshold: f32) -> bool {
        self.visibility.map_or(true, |v| v >= threshold)
    }

    /// Both image-plane coordinates are finite numbers
    pub fn has_position(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_visibility_counts_as_visible() {
        assert!(Landmark::new(0.1, 0.2).is_visible(0.5));
    }

    #[test]
    fn test_visibility_threshold_is_inclusive() {
        assert!(Landmark::new(0.0, 0.0).with_visibility(0.5).is_visible(0.5));
        assert!(!Landmark::new(0.0, 0.0).with_visibility(0.49).is_visible(0.5));
    }

    #[test]
    fn test_non_finite_position() {
        assert!(Landmark::new(0.1, 0.9).has_position());
        assert!(!Landmark::new(f32::NAN, 0.9).has_position());
        assert!(!Landmark::new(0.1, f32::INFINITY).has_position());
    }

    #[test]
    fn test_json_optional_fields() {
        let lm: Landmark = serde_json::from_str(r#"{"x":0.25,"y":0.75}"#).unwrap();
        assert_eq!(lm, Landmark::new(0.25, 0.75));
        assert_eq!(serde_json::to_string(&lm).unwrap(), r#"{"x":0.25,"y":0.75}"#);
    }
}
