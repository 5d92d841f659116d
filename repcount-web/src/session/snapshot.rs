//! Read model handed to the UI every frame, and the end-of-session summary

use serde::{Deserialize, Serialize};

use crate::counter::{ExerciseConfig, ExerciseKind, RepState, Side, Stage};

/// Uniform per-frame view of a session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepSnapshot {
    /// Completed repetitions, floor(count)
    pub rep_count: u32,
    pub stage: Stage,
    /// Single limb's percentage, or the rounded mean of all tracked limbs
    pub percentage: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_percentage: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_percentage: Option<u8>,
}

impl RepSnapshot {
    pub fn from_state(state: &RepState, config: &ExerciseConfig) -> Self {
        let percentages = state.percentages();
        let dual = percentages.len() > 1;

        let side = |side: Side| {
            config
                .limb_index(side)
                .filter(|_| dual)
                .and_then(|index| percentages.get(index).copied())
        };

        Self {
            rep_count: state.full_reps(),
            stage: state.stage(),
            percentage: composite(percentages),
            left_percentage: side(Side::Left),
            right_percentage: side(Side::Right),
        }
    }
}

fn composite(percentages: &[u8]) -> u8 {
    if percentages.is_empty() {
        return 0;
    }
    let sum: u32 = percentages.iter().map(|&p| u32::from(p)).sum();
    (sum as f32 / percentages.len() as f32).round() as u8
}

/// What the session hands to external persistence when it ends
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSummary {
    pub exercise: ExerciseKind,
    pub rep_count: u32,
    /// Milliseconds since the Unix epoch, supplied by the caller
    pub timestamp_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_rounds_mean() {
        assert_eq!(composite(&[100, 0]), 50);
        assert_eq!(composite(&[33, 34]), 34);
        assert_eq!(composite(&[77]), 77);
        assert_eq!(composite(&[]), 0);
    }

    #[test]
    fn test_single_limb_has_no_sides() {
        let config = ExerciseKind::Curl.config();
        let snapshot = RepSnapshot::from_state(&RepState::new(1), &config);
        assert_eq!(snapshot.left_percentage, None);
        assert_eq!(snapshot.right_percentage, None);
    }

    #[test]
    fn test_dual_limb_reports_sides() {
        let config = ExerciseKind::PushUp.config();
        let snapshot = RepSnapshot::from_state(&RepState::new(2), &config);
        assert_eq!(snapshot.left_percentage, Some(0));
        assert_eq!(snapshot.right_percentage, Some(0));
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = RepSnapshot {
            rep_count: 3,
            stage: Stage::Down,
            percentage: 88,
            left_percentage: None,
            right_percentage: None,
        };
        assert_eq!(
            serde_json::to_string(&snapshot).unwrap(),
            r#"{"repCount":3,"stage":"down","percentage":88}"#
        );
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = WorkoutSummary {
            exercise: ExerciseKind::Squat,
            rep_count: 12,
            timestamp_ms: 1_700_000_000_000.0,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["exercise"], "squat");
        assert_eq!(json["repCount"], 12);
    }
}
