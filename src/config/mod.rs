//! Command-line parsing and validation helpers.

mod defaults;
#[cfg(test)]
mod tests;
mod validation;

use clap::Parser;
use std::path::PathBuf;

use crate::input::{DEFAULT_DEADZONE, DEFAULT_DEBOUNCE_MS, DEFAULT_POLL_MS, DEFAULT_THROTTLE_MS};
pub use defaults::{
    DEFAULT_LEFT_HORIZONTAL_GAIN, DEFAULT_LEFT_VERTICAL_GAIN, DEFAULT_RIGHT_HORIZONTAL_GAIN,
    DEFAULT_RIGHT_VERTICAL_GAIN,
};

/// CLI options for the hemikey terminal host. Validated before the engine starts.
#[derive(Debug, Parser, Clone)]
#[command(about = "Hemikey hemispherical text entry", author, version)]
pub struct AppConfig {
    /// YAML catalog file (`rows: ["ABCDE", ...]`); defaults to the built-in 8x5 layout
    #[arg(long, env = "HEMIKEY_CATALOG", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Print the catalog rows and exit
    #[arg(long = "print-catalog", default_value_t = false)]
    pub print_catalog: bool,

    /// Analog stick deadzone (axis magnitude)
    #[arg(long, default_value_t = DEFAULT_DEADZONE)]
    pub deadzone: f32,

    /// Left stick vertical gain (degrees per processed frame at full tilt)
    #[arg(long = "left-vertical-gain", default_value_t = DEFAULT_LEFT_VERTICAL_GAIN)]
    pub left_vertical_gain: f32,

    /// Left stick horizontal gain (degrees per processed frame at full tilt)
    #[arg(long = "left-horizontal-gain", default_value_t = DEFAULT_LEFT_HORIZONTAL_GAIN)]
    pub left_horizontal_gain: f32,

    /// Right stick vertical gain (fine adjustment)
    #[arg(long = "right-vertical-gain", default_value_t = DEFAULT_RIGHT_VERTICAL_GAIN)]
    pub right_vertical_gain: f32,

    /// Right stick horizontal gain (fine adjustment)
    #[arg(long = "right-horizontal-gain", default_value_t = DEFAULT_RIGHT_HORIZONTAL_GAIN)]
    pub right_horizontal_gain: f32,

    /// Controller poll tick (milliseconds)
    #[arg(long = "poll-ms", default_value_t = DEFAULT_POLL_MS)]
    pub poll_ms: u64,

    /// Minimum interval between processed controller frames (milliseconds)
    #[arg(long = "throttle-ms", default_value_t = DEFAULT_THROTTLE_MS)]
    pub throttle_ms: u64,

    /// Commit cooldown per input source (milliseconds)
    #[arg(long = "debounce-ms", default_value_t = DEFAULT_DEBOUNCE_MS)]
    pub debounce_ms: u64,

    /// Replay controller frames from a JSON-lines script instead of a detached controller
    #[arg(long = "controller-script", value_name = "PATH")]
    pub controller_script: Option<PathBuf>,

    /// Enable file logging (debug)
    #[arg(long = "logs", env = "HEMIKEY_LOGS", default_value_t = false)]
    pub logs: bool,

    /// Disable all file logging (overrides --logs and log env vars)
    #[arg(long = "no-logs", env = "HEMIKEY_NO_LOGS", default_value_t = false)]
    pub no_logs: bool,

    /// Allow logging typed text (debug log only)
    #[arg(
        long = "log-content",
        env = "HEMIKEY_LOG_CONTENT",
        default_value_t = false
    )]
    pub log_content: bool,
}
