use crate::input::{DEFAULT_LEFT_GAIN, DEFAULT_RIGHT_GAIN};

pub const DEFAULT_LEFT_VERTICAL_GAIN: f32 = DEFAULT_LEFT_GAIN.vertical;
pub const DEFAULT_LEFT_HORIZONTAL_GAIN: f32 = DEFAULT_LEFT_GAIN.horizontal;
pub const DEFAULT_RIGHT_VERTICAL_GAIN: f32 = DEFAULT_RIGHT_GAIN.vertical;
pub const DEFAULT_RIGHT_HORIZONTAL_GAIN: f32 = DEFAULT_RIGHT_GAIN.horizontal;

pub(super) const MAX_DEADZONE: f32 = 0.9;
// A single processed frame should never be able to swing more than the vertical range.
pub(super) const MAX_STICK_GAIN: f32 = 45.0;
pub(super) const MAX_POLL_MS: u64 = 1_000;
pub(super) const MAX_THROTTLE_MS: u64 = 5_000;
pub(super) const MAX_DEBOUNCE_MS: u64 = 5_000;
pub(super) const MAX_CATALOG_BYTES: u64 = 64 * 1024;
