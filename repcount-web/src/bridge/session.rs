//! `RepSession` - the counter as a JS class
//!
//! One instance per workout. JS calls `update` once per MediaPipe result and
//! renders the returned snapshot object.

use wasm_bindgen::prelude::*;

use super::landmarks::decode_frame;
use crate::counter::{ExerciseConfig, ExerciseKind};
use crate::session::Session;

#[wasm_bindgen]
pub struct RepSession {
    inner: Session,
}

#[wasm_bindgen]
impl RepSession {
    /// Start a session for "push-up", "curl" or "squat"
    #[wasm_bindgen(constructor)]
    pub fn new(exercise: &str) -> Result<RepSession, JsValue> {
        Ok(Self {
            inner: Session::from_tag(exercise)?,
        })
    }

    /// Start a session with custom calibration JSON
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(exercise: &str, config_json: &str) -> Result<RepSession, JsValue> {
        let kind: ExerciseKind = exercise.parse()?;
        let config = ExerciseConfig::from_json(config_json)?;
        Ok(Self {
            inner: Session::with_config(kind, config)?,
        })
    }

    /// Feed one frame; `undefined` / empty means no pose detected
    ///
    /// Returns `{repCount, stage, percentage, leftPercentage?, rightPercentage?}`.
    pub fn update(&mut self, data: Option<Vec<f32>>) -> JsValue {
        let frame = data.as_deref().and_then(decode_frame);
        let snapshot = self.inner.update(frame.as_deref());
        serde_wasm_bindgen::to_value(&snapshot).unwrap_or(JsValue::NULL)
    }

    /// Current read model without processing a frame
    pub fn snapshot(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.snapshot()).unwrap_or(JsValue::NULL)
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Drop all progress and count a different exercise
    #[wasm_bindgen(js_name = switchExercise)]
    pub fn switch_exercise(&mut self, exercise: &str) -> Result<(), JsValue> {
        let kind: ExerciseKind = exercise.parse()?;
        self.inner.switch_exercise(kind);
        Ok(())
    }

    /// End-of-session summary `{exercise, repCount, timestampMs}` for the
    /// app to persist
    pub fn finish(&self) -> JsValue {
        let summary = self.inner.finish(js_sys::Date::now());
        serde_wasm_bindgen::to_value(&summary).unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen(getter)]
    pub fn exercise(&self) -> String {
        self.inner.kind().to_string()
    }

    #[wasm_bindgen(js_name = repCount)]
    pub fn rep_count(&self) -> u32 {
        self.inner.state().full_reps()
    }

    /// Curl clients read the stage as a 0/1 direction flag
    #[wasm_bindgen(js_name = directionFlag)]
    pub fn direction_flag(&self) -> u8 {
        self.inner.state().stage().direction_flag()
    }

    #[wasm_bindgen(js_name = debugText)]
    pub fn debug_text(&self) -> String {
        self.inner.debug_text()
    }

    /// Active calibration as JSON
    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> Result<String, JsValue> {
        Ok(self.inner.config().to_json()?)
    }
}
