//! Error types for the rep counting engine.
//!
//! Only session construction can fail. The per-frame path never returns an
//! error: bad frames leave the counter untouched instead.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// A specialized `Result` type for rep counting operations.
pub type Result<T> = std::result::Result<T, RepCountError>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RepCountError {
    /// Exercise tag outside the supported set
    #[error("Unknown exercise type '{tag}' (expected push-up, curl or squat)")]
    UnknownExercise {
        /// The rejected tag
        tag: String,
    },

    /// Custom calibration failed validation
    #[error("Invalid exercise config: {message}")]
    InvalidConfig {
        /// What was wrong with the config
        message: String,
    },

    /// Calibration JSON could not be parsed
    #[error("Config JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RepCountError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

impl From<RepCountError> for JsValue {
    fn from(err: RepCountError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_exercise_message() {
        let err = RepCountError::UnknownExercise {
            tag: "burpee".to_string(),
        };
        assert!(err.to_string().contains("'burpee'"));
    }

    #[test]
    fn test_json_error_converts() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: RepCountError = parse.unwrap_err().into();
        assert!(matches!(err, RepCountError::Json(_)));
    }
}
