//! Supported exercises and their built-in calibration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::config::{
    AngleConvention, ExerciseConfig, JointTriplet, LimbConfig, Side, TransitionPolicy,
    DEFAULT_VISIBILITY_THRESHOLD,
};
use crate::error::RepCountError;
use crate::pose::{
    LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, LEFT_WRIST, RIGHT_ANKLE,
    RIGHT_ELBOW, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER, RIGHT_WRIST,
};

const LEFT_ARM: JointTriplet = JointTriplet::new(LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST);
const RIGHT_ARM: JointTriplet = JointTriplet::new(RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST);
const LEFT_LEG: JointTriplet = JointTriplet::new(LEFT_HIP, LEFT_KNEE, LEFT_ANKLE);
const RIGHT_LEG: JointTriplet = JointTriplet::new(RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE);

/// Elbow angle: 80° = chest at the floor, 175° = arms locked out
const PUSH_UP_RANGE: (f32, f32) = (80.0, 175.0);
/// Elbow angle: 30° = fully curled, 160° = arm hanging
const CURL_RANGE: (f32, f32) = (30.0, 160.0);
/// Knee angle: 90° = thighs parallel, 170° = standing
const SQUAT_RANGE: (f32, f32) = (90.0, 170.0);

/// Exercise selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseKind {
    PushUp,
    Curl,
    Squat,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 3] = [ExerciseKind::PushUp, ExerciseKind::Curl, ExerciseKind::Squat];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseKind::PushUp => "push-up",
            ExerciseKind::Curl => "curl",
            ExerciseKind::Squat => "squat",
        }
    }

    /// Built-in calibration
    ///
    /// Push-up and squat gate on both sides at once; curl follows the right
    /// arm alone and uses the directional angle.
    ///
    /// The curl range assumes the forearm turns clockwise from the upper arm
    /// as seen on screen (image coordinates, y down) while the elbow bends.
    /// Mirrored, the angle reads 200°-330°, clamps to 0% and no rep is
    /// counted; supply a custom config with the reflected range for that setup.
    pub fn config(&self) -> ExerciseConfig {
        match self {
            ExerciseKind::PushUp => ExerciseConfig {
                limbs: vec![
                    limb(Side::Left, LEFT_ARM, AngleConvention::Magnitude, PUSH_UP_RANGE),
                    limb(Side::Right, RIGHT_ARM, AngleConvention::Magnitude, PUSH_UP_RANGE),
                ],
                policy: TransitionPolicy::AllLimbs,
                visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            },
            ExerciseKind::Curl => ExerciseConfig {
                limbs: vec![limb(Side::Right, RIGHT_ARM, AngleConvention::Directional, CURL_RANGE)],
                policy: TransitionPolicy::SingleLimb,
                visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            },
            ExerciseKind::Squat => ExerciseConfig {
                limbs: vec![
                    limb(Side::Left, LEFT_LEG, AngleConvention::Magnitude, SQUAT_RANGE),
                    limb(Side::Right, RIGHT_LEG, AngleConvention::Magnitude, SQUAT_RANGE),
                ],
                policy: TransitionPolicy::AllLimbs,
                visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            },
        }
    }
}

fn limb(side: Side, joints: JointTriplet, convention: AngleConvention, angle_range: (f32, f32)) -> LimbConfig {
    LimbConfig {
        side,
        joints,
        convention,
        angle_range,
        percent_range: (100.0, 0.0),
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseKind {
    type Err = RepCountError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_lowercase().as_str() {
            "push-up" | "pushup" | "push_up" => Ok(ExerciseKind::PushUp),
            "curl" | "bicep-curl" | "bicep_curl" => Ok(ExerciseKind::Curl),
            "squat" => Ok(ExerciseKind::Squat),
            _ => Err(RepCountError::UnknownExercise { tag: tag.to_string() }),
        }
    }
}
