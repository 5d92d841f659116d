//! Repcount Web - real-time exercise repetition counting
//!
//! Turns per-frame MediaPipe pose landmarks into rep counts for push-ups,
//! bicep curls and squats. Entry point for the WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! The counting core (`geometry`, `counter`, `session`) is plain Rust and
//! can be used natively; `bridge` wraps it for JavaScript.

pub mod bridge;
pub mod counter;
pub mod error;
pub mod geometry;
pub mod pose;
pub mod session;

use wasm_bindgen::prelude::*;

pub use bridge::RepSession;
pub use counter::{ExerciseConfig, ExerciseKind, RepMachine, RepState, Stage};
pub use error::{RepCountError, Result};
pub use pose::Landmark;
pub use session::{RepSnapshot, Session, WorkoutSummary};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Route `log` output to the browser console
///
/// Level: "trace", "debug", "info", "warn" or "error" (default "info").
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) {
    let log_level = match level.to_lowercase().as_str() {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "warn" => log::Level::Warn,
        "error" => log::Level::Error,
        _ => log::Level::Info,
    };

    wasm_logger::init(wasm_logger::Config::new(log_level));
    log::info!("Rep counter initialized with log level: {}", level);
}

/// Library version
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
