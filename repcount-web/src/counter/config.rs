//! Per-exercise calibration: which joints to track, how to measure them and
//! how the limbs gate a stage change.

use serde::{Deserialize, Serialize};

use super::stage::MAX_LIMBS;
use crate::error::{RepCountError, Result};
use crate::geometry::{directional_angle, magnitude_angle, Point};
use crate::pose::LANDMARK_COUNT;

/// Default minimum landmark visibility for a frame to be counted
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleConvention {
    /// Unsigned arccos angle, [0, 180]
    Magnitude,
    /// Signed atan2 difference, [0, 360)
    Directional,
}

impl AngleConvention {
    pub fn measure(&self, first: Point, vertex: Point, last: Point) -> f32 {
        match self {
            AngleConvention::Magnitude => magnitude_angle(first, vertex, last),
            AngleConvention::Directional => directional_angle(first, vertex, last),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// How tracked limbs combine into a stage change
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Only the first limb decides
    SingleLimb,
    /// Every limb must sit on the boundary in the same frame
    AllLimbs,
}

/// Three landmark indices; the angle is measured at `vertex`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointTriplet {
    pub first: usize,
    pub vertex: usize,
    pub last: usize,
}

impl JointTriplet {
    pub const fn new(first: usize, vertex: usize, last: usize) -> Self {
        Self { first, vertex, last }
    }

    pub fn indices(&self) -> [usize; 3] {
        [self.first, self.vertex, self.last]
    }
}

/// Calibration for one tracked limb
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LimbConfig {
    pub side: Side,
    pub joints: JointTriplet,
    pub convention: AngleConvention,
    /// Angle range in degrees, mapped onto `percent_range`
    pub angle_range: (f32, f32),
    /// Percentages at `angle_range.0` and `angle_range.1`
    #[serde(default = "default_percent_range")]
    pub percent_range: (f32, f32),
}

fn default_percent_range() -> (f32, f32) {
    (100.0, 0.0)
}

fn default_visibility_threshold() -> f32 {
    DEFAULT_VISIBILITY_THRESHOLD
}

/// Full calibration for one exercise
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExerciseConfig {
    pub limbs: Vec<LimbConfig>,
    pub policy: TransitionPolicy,
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f32,
}

impl ExerciseConfig {
    /// Parse calibration JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ExerciseConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.limbs.is_empty() || self.limbs.len() > MAX_LIMBS {
            return Err(RepCountError::invalid_config(format!(
                "expected 1 to {} limbs, got {}",
                MAX_LIMBS,
                self.limbs.len()
            )));
        }

        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(RepCountError::invalid_config(format!(
                "visibility threshold {} outside [0, 1]",
                self.visibility_threshold
            )));
        }

        for limb in &self.limbs {
            if let Some(index) = limb.joints.indices().into_iter().find(|&i| i >= LANDMARK_COUNT) {
                return Err(RepCountError::invalid_config(format!(
                    "landmark index {} out of range (max {})",
                    index,
                    LANDMARK_COUNT - 1
                )));
            }

            let (a, b) = limb.angle_range;
            let (p, q) = limb.percent_range;
            if !(a.is_finite() && b.is_finite() && p.is_finite() && q.is_finite()) {
                return Err(RepCountError::invalid_config(format!(
                    "{:?} limb has a non-finite range",
                    limb.side
                )));
            }
        }

        Ok(())
    }

    /// Every landmark index any limb reads, deduplicated
    pub fn required_landmarks(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .limbs
            .iter()
            .flat_map(|limb| limb.joints.indices())
            .collect();
        indices.sort_unstable();
        indices.dedup();
        indices
    }

    /// Index of the limb on `side`, if tracked
    pub fn limb_index(&self, side: Side) -> Option<usize> {
        self.limbs.iter().position(|limb| limb.side == side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limb(side: Side, joints: JointTriplet) -> LimbConfig {
        LimbConfig {
            side,
            joints,
            convention: AngleConvention::Magnitude,
            angle_range: (80.0, 175.0),
            percent_range: (100.0, 0.0),
        }
    }

    #[test]
    fn test_required_landmarks_dedup() {
        let config = ExerciseConfig {
            limbs: vec![
                limb(Side::Left, JointTriplet::new(11, 13, 15)),
                limb(Side::Right, JointTriplet::new(11, 14, 16)),
            ],
            policy: TransitionPolicy::AllLimbs,
            visibility_threshold: 0.5,
        };
        assert_eq!(config.required_landmarks(), vec![11, 13, 14, 15, 16]);
    }

    #[test]
    fn test_rejects_empty_limbs() {
        let config = ExerciseConfig {
            limbs: vec![],
            policy: TransitionPolicy::SingleLimb,
            visibility_threshold: 0.5,
        };
        assert!(matches!(config.validate(), Err(RepCountError::InvalidConfig { .. })));
    }

    #[test]
    fn test_rejects_out_of_range_index() {
        let config = ExerciseConfig {
            limbs: vec![limb(Side::Right, JointTriplet::new(12, 14, 40))],
            policy: TransitionPolicy::SingleLimb,
            visibility_threshold: 0.5,
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("40"));
    }

    #[test]
    fn test_from_json_defaults() {
        let json = r#"{
            "limbs": [{
                "side": "right",
                "joints": { "first": 12, "vertex": 14, "last": 16 },
                "convention": "directional",
                "angle_range": [30.0, 160.0]
            }],
            "policy": "single_limb"
        }"#;
        let config = ExerciseConfig::from_json(json).unwrap();
        assert_eq!(config.visibility_threshold, DEFAULT_VISIBILITY_THRESHOLD);
        assert_eq!(config.limbs[0].percent_range, (100.0, 0.0));
        assert_eq!(config.limbs[0].convention, AngleConvention::Directional);
    }

    #[test]
    fn test_from_json_rejects_bad_threshold() {
        let json = r#"{
            "limbs": [{
                "side": "left",
                "joints": { "first": 11, "vertex": 13, "last": 15 },
                "convention": "magnitude",
                "angle_range": [80.0, 175.0]
            }],
            "policy": "all_limbs",
            "visibility_threshold": 1.5
        }"#;
        assert!(ExerciseConfig::from_json(json).is_err());
    }
}
