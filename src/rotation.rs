//! Hemisphere orientation: a clamped pitch and a wrapping yaw.

/// Lowest/highest vertical tilt in degrees.
pub const VERTICAL_LIMIT_DEG: f32 = 45.0;
/// One full horizontal turn in degrees.
pub const FULL_TURN_DEG: f32 = 360.0;

/// Current rotation of the virtual hemisphere.
///
/// `vertical` stays within `[-45, 45]` and `horizontal` within `[0, 360)`.
/// Both are only mutated together through [`RotationState::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    vertical: f32,
    horizontal: f32,
}

impl RotationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertical(&self) -> f32 {
        self.vertical
    }

    pub fn horizontal(&self) -> f32 {
        self.horizontal
    }

    /// Apply a rotation step. Out-of-range deltas are clamped or wrapped, never rejected.
    pub fn apply(&mut self, delta_vertical: f32, delta_horizontal: f32) {
        let vertical = clamp_vertical(self.vertical + finite_or_zero(delta_vertical));
        let horizontal = wrap_horizontal(self.horizontal + finite_or_zero(delta_horizontal));
        *self = Self {
            vertical,
            horizontal,
        };
    }
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn clamp_vertical(value: f32) -> f32 {
    value.clamp(-VERTICAL_LIMIT_DEG, VERTICAL_LIMIT_DEG)
}

/// Normalize any angle into `[0, 360)`, including deltas larger than a full turn.
pub(crate) fn wrap_horizontal(value: f32) -> f32 {
    let wrapped = value.rem_euclid(FULL_TURN_DEG);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= FULL_TURN_DEG {
        0.0
    } else {
        wrapped
    }
}
