//! Generic repetition state machine
//!
//! One machine covers every exercise: the config supplies which joints to
//! measure, the calibration, and whether one limb or all limbs gate a stage
//! change. `update` is pure: it returns a new state and never mutates its
//! input.
//!
//! Transition rule, with `stage` taken before the frame:
//! - all gated limbs at 100 while `up`   → `down`, +0.5
//! - all gated limbs at 0   while `down` → `up`,   +0.5
//! - anything else refreshes percentages only

use super::config::{ExerciseConfig, LimbConfig, TransitionPolicy};
use super::gate::VisibilityGate;
use super::stage::RepState;
use crate::error::Result;
use crate::geometry::to_percentage;
use crate::pose::Landmark;

pub struct RepMachine {
    config: ExerciseConfig,
    gate: VisibilityGate,
}

impl RepMachine {
    /// Build a machine from a custom calibration
    pub fn new(config: ExerciseConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    /// Build from a config already known to be valid (built-in presets)
    pub(crate) fn from_valid(config: ExerciseConfig) -> Self {
        let gate = VisibilityGate::new(config.required_landmarks(), config.visibility_threshold);
        Self { config, gate }
    }

    pub fn config(&self) -> &ExerciseConfig {
        &self.config
    }

    /// Zero state: no reps, stage `up`
    pub fn init(&self) -> RepState {
        RepState::new(self.config.limbs.len())
    }

    /// Advance `state` by one frame
    ///
    /// `None`, short, or low-visibility frames return `state` unchanged.
    pub fn update(&self, frame: Option<&[Landmark]>, state: &RepState) -> RepState {
        let Some(frame) = frame else {
            return state.clone();
        };

        if state.limbs() != self.config.limbs.len() {
            log::warn!(
                "State tracks {} limbs but machine expects {}; frame ignored",
                state.limbs(),
                self.config.limbs.len()
            );
            return state.clone();
        }

        if !self.gate.admits(frame) {
            log::trace!("Frame gated (len {}, threshold {})", frame.len(), self.gate.threshold());
            return state.clone();
        }

        let mut next = state.clone();
        for (index, limb) in self.config.limbs.iter().enumerate() {
            let angle = measure_limb(limb, frame);
            let percentage = to_percentage(angle, limb.angle_range, limb.percent_range);
            next.record_limb(index, angle, percentage);
        }

        let boundary = state.stage().exit_boundary();
        let gated = match self.config.policy {
            TransitionPolicy::SingleLimb => &next.percentages()[..1],
            TransitionPolicy::AllLimbs => next.percentages(),
        };
        let crossed = gated.iter().all(|&p| p == boundary);

        if crossed {
            next.advance();
            log::debug!(
                "Stage {} -> {} at {}%, count {}",
                state.stage().as_str(),
                next.stage().as_str(),
                boundary,
                next.count()
            );
        }

        next
    }
}

/// Joint angle for one limb; the gate has already checked the indices
fn measure_limb(limb: &LimbConfig, frame: &[Landmark]) -> f32 {
    let joints = &limb.joints;
    limb.convention.measure(
        frame[joints.first].point(),
        frame[joints.vertex].point(),
        frame[joints.last].point(),
    )
}
