//! Session facade - owns one exercise's machine and state
//!
//! Callers feed one frame per `update` and read back a `RepSnapshot`.
//! Switching exercise starts over from zero; nothing carries across.

use super::snapshot::{RepSnapshot, WorkoutSummary};
use crate::counter::{ExerciseConfig, ExerciseKind, RepMachine, RepState};
use crate::error::Result;
use crate::pose::Landmark;

pub struct Session {
    kind: ExerciseKind,
    machine: RepMachine,
    state: RepState,
}

impl Session {
    /// New session with the built-in calibration for `kind`
    pub fn new(kind: ExerciseKind) -> Self {
        let machine = RepMachine::from_valid(kind.config());
        log::info!("Session started: {}", kind);
        Self::with_machine(kind, machine)
    }

    /// New session from a string tag; unknown tags fail here, once
    pub fn from_tag(tag: &str) -> Result<Self> {
        Ok(Self::new(tag.parse()?))
    }

    /// New session with custom calibration
    pub fn with_config(kind: ExerciseKind, config: ExerciseConfig) -> Result<Self> {
        let machine = RepMachine::new(config)?;
        log::info!("Session started: {} (custom calibration)", kind);
        Ok(Self::with_machine(kind, machine))
    }

    fn with_machine(kind: ExerciseKind, machine: RepMachine) -> Self {
        let state = machine.init();
        Self { kind, machine, state }
    }

    /// Process one frame (`None` when no pose was detected)
    pub fn update(&mut self, frame: Option<&[Landmark]>) -> RepSnapshot {
        self.state = self.machine.update(frame, &self.state);
        self.snapshot()
    }

    pub fn snapshot(&self) -> RepSnapshot {
        RepSnapshot::from_state(&self.state, self.machine.config())
    }

    /// Back to zero reps, stage `up`; calibration is kept
    pub fn reset(&mut self) {
        self.state = self.machine.init();
        log::debug!("Session reset: {}", self.kind);
    }

    /// Equivalent to dropping this session and starting a new one
    pub fn switch_exercise(&mut self, kind: ExerciseKind) {
        log::info!("Switching exercise {} -> {}", self.kind, kind);
        *self = Session::new(kind);
    }

    /// Final result for external persistence
    pub fn finish(&self, timestamp_ms: f64) -> WorkoutSummary {
        let summary = WorkoutSummary {
            exercise: self.kind,
            rep_count: self.state.full_reps(),
            timestamp_ms,
        };
        log::info!("Session finished: {} x{}", summary.exercise, summary.rep_count);
        summary
    }

    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    pub fn state(&self) -> &RepState {
        &self.state
    }

    pub fn config(&self) -> &ExerciseConfig {
        self.machine.config()
    }

    /// Multi-line text for a debug overlay
    pub fn debug_text(&self) -> String {
        let mut text = format!(
            "{} | Reps: {} ({:.1}) | Stage: {}",
            self.kind,
            self.state.full_reps(),
            self.state.count(),
            self.state.stage().as_str(),
        );

        let limbs = self.machine.config().limbs.iter();
        for ((limb, percentage), angle) in limbs.zip(self.state.percentages()).zip(self.state.angles()) {
            text.push_str(&format!("\n{:?}: {}% {:.0}°", limb.side, percentage, angle));
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::testing::posed_frame;
    use crate::counter::{JointTriplet, Stage};
    use crate::error::RepCountError;

    const LEFT_LEG: JointTriplet = JointTriplet::new(23, 25, 27);
    const RIGHT_LEG: JointTriplet = JointTriplet::new(24, 26, 28);

    fn legs(angle: f32) -> Vec<Landmark> {
        posed_frame(&[(LEFT_LEG, angle), (RIGHT_LEG, angle)])
    }

    #[test]
    fn test_unknown_tag_fails_at_construction() {
        assert!(matches!(
            Session::from_tag("jumping-jack"),
            Err(RepCountError::UnknownExercise { .. })
        ));
    }

    #[test]
    fn test_squat_full_rep() {
        let mut session = Session::new(ExerciseKind::Squat);
        session.update(Some(&legs(85.0)));
        let snapshot = session.update(Some(&legs(175.0)));
        assert_eq!(snapshot.rep_count, 1);
        assert_eq!(snapshot.stage, Stage::Up);
        assert_eq!(snapshot.percentage, 0);
        assert_eq!(snapshot.left_percentage, Some(0));
    }

    #[test]
    fn test_reset_zeroes_state() {
        let mut session = Session::new(ExerciseKind::Squat);
        session.update(Some(&legs(85.0)));
        session.reset();
        assert_eq!(session.state(), &RepState::new(2));
        assert_eq!(session.kind(), ExerciseKind::Squat);
    }

    #[test]
    fn test_switch_exercise_starts_fresh() {
        let mut session = Session::new(ExerciseKind::Squat);
        session.update(Some(&legs(85.0)));
        session.update(Some(&legs(175.0)));
        session.switch_exercise(ExerciseKind::Curl);
        assert_eq!(session.kind(), ExerciseKind::Curl);
        assert_eq!(session.state(), &RepState::new(1));
        assert_eq!(session.snapshot().rep_count, 0);
    }

    #[test]
    fn test_finish_reports_whole_reps() {
        let mut session = Session::new(ExerciseKind::Squat);
        session.update(Some(&legs(85.0)));
        session.update(Some(&legs(175.0)));
        session.update(Some(&legs(85.0)));
        let summary = session.finish(1_000.0);
        assert_eq!(summary.rep_count, 1);
        assert_eq!(summary.exercise, ExerciseKind::Squat);
        assert_eq!(summary.timestamp_ms, 1_000.0);
    }

    #[test]
    fn test_debug_text_lists_limbs() {
        let mut session = Session::new(ExerciseKind::PushUp);
        session.update(None);
        let text = session.debug_text();
        assert!(text.starts_with("push-up | Reps: 0"));
        assert!(text.contains("Left: 0%"));
        assert!(text.contains("Right: 0%"));
    }
}
