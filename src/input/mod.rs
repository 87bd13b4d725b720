//! Adapters that turn raw host input into engine [`Action`](crate::engine::Action)s.
//!
//! - `keyboard`: discrete, one call per key press
//! - `controller`: continuous, one call per poll tick, throttled before decoding
//!
//! Each adapter owns its own commit debounce so the two sources never share
//! a cooldown.

mod controller;
mod keyboard;

use std::time::Duration;

pub use controller::{ControllerAdapter, ControllerFrame, GamepadButton, StickAxes};
pub use keyboard::{
    KeyboardAdapter, KEY_ARROW_DOWN, KEY_ARROW_LEFT, KEY_ARROW_RIGHT, KEY_ARROW_UP, KEY_BACKSPACE,
    KEY_DELETE, KEY_ENTER,
};

pub const DEFAULT_DEADZONE: f32 = 0.1;
pub const DEFAULT_POLL_MS: u64 = 16;
pub const DEFAULT_THROTTLE_MS: u64 = 100;
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;
pub const DEFAULT_LEFT_GAIN: StickGain = StickGain {
    vertical: 2.0,
    horizontal: 5.0,
};
pub const DEFAULT_RIGHT_GAIN: StickGain = StickGain {
    vertical: 1.0,
    horizontal: 2.0,
};

/// Degrees of rotation per unit of stick deflection, per processed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickGain {
    pub vertical: f32,
    pub horizontal: f32,
}

/// Tunable timing and analog parameters shared by both adapters.
#[derive(Debug, Clone, PartialEq)]
pub struct InputTuning {
    pub deadzone: f32,
    pub left_gain: StickGain,
    /// Fine adjustment; smaller than the left stick.
    pub right_gain: StickGain,
    pub poll_interval: Duration,
    pub throttle_interval: Duration,
    pub debounce_cooldown: Duration,
}

impl Default for InputTuning {
    fn default() -> Self {
        Self {
            deadzone: DEFAULT_DEADZONE,
            left_gain: DEFAULT_LEFT_GAIN,
            right_gain: DEFAULT_RIGHT_GAIN,
            poll_interval: Duration::from_millis(DEFAULT_POLL_MS),
            throttle_interval: Duration::from_millis(DEFAULT_THROTTLE_MS),
            debounce_cooldown: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}
