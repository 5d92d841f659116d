//! Repetition stage and per-session counter state

use serde::{Deserialize, Serialize};

/// Most limbs a single exercise tracks (left + right)
pub const MAX_LIMBS: usize = 2;

/// Percentage that marks the bottom / fully extended end of a motion
pub const BOUNDARY_FULL: u8 = 100;
/// Percentage that marks the top / start of a motion
pub const BOUNDARY_EMPTY: u8 = 0;

/// Phase of the repetition cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[default]
    Up,
    Down,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Up => "up",
            Stage::Down => "down",
        }
    }

    /// Binary direction flag used by curl clients: 0 = up, 1 = down
    pub fn direction_flag(&self) -> u8 {
        match self {
            Stage::Up => 0,
            Stage::Down => 1,
        }
    }

    /// Percentage every gated limb must hit to leave this stage
    pub fn exit_boundary(&self) -> u8 {
        match self {
            Stage::Up => BOUNDARY_FULL,
            Stage::Down => BOUNDARY_EMPTY,
        }
    }

    pub fn flipped(&self) -> Stage {
        match self {
            Stage::Up => Stage::Down,
            Stage::Down => Stage::Up,
        }
    }
}

/// Counter state owned by one session
///
/// The count is stored in half repetitions so it can only move in 0.5 steps.
#[derive(Clone, Debug, PartialEq)]
pub struct RepState {
    half_reps: u32,
    stage: Stage,
    limbs: usize,
    percentages: [u8; MAX_LIMBS],
    /// Last computed joint angle per limb (diagnostic only)
    angles: [f32; MAX_LIMBS],
}

impl RepState {
    /// Zeroed state in the `up` stage
    pub fn new(limbs: usize) -> Self {
        Self {
            half_reps: 0,
            stage: Stage::Up,
            limbs: limbs.min(MAX_LIMBS),
            percentages: [0; MAX_LIMBS],
            angles: [0.0; MAX_LIMBS],
        }
    }

    /// Count as a half-integer (0.5 per boundary crossing)
    pub fn count(&self) -> f32 {
        self.half_reps as f32 / 2.0
    }

    pub fn half_reps(&self) -> u32 {
        self.half_reps
    }

    /// Completed cycles, i.e. floor(count)
    pub fn full_reps(&self) -> u32 {
        self.half_reps / 2
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Number of tracked limbs
    pub fn limbs(&self) -> usize {
        self.limbs
    }

    pub fn percentages(&self) -> &[u8] {
        &self.percentages[..self.limbs]
    }

    pub fn angles(&self) -> &[f32] {
        &self.angles[..self.limbs]
    }

    pub(crate) fn record_limb(&mut self, limb: usize, angle: f32, percentage: u8) {
        self.angles[limb] = angle;
        self.percentages[limb] = percentage;
    }

    pub(crate) fn advance(&mut self) {
        self.stage = self.stage.flipped();
        self.half_reps += 1;
    }
}
