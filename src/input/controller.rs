use std::time::Instant;

use crate::engine::Action;
use crate::rate_limit::{DebounceGuard, Throttle};
use crate::selection::CharDirection;

use super::{InputTuning, StickGain};

/// Standard-gamepad button slots the adapter listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamepadButton {
    /// A / Cross: commit.
    Primary,
    /// B / Circle: delete last character.
    Secondary,
    /// Y / Triangle: clear output.
    Tertiary,
    DpadLeft,
    DpadRight,
}

impl GamepadButton {
    pub fn index(self) -> usize {
        match self {
            GamepadButton::Primary => 0,
            GamepadButton::Secondary => 1,
            GamepadButton::Tertiary => 3,
            GamepadButton::DpadLeft => 12,
            GamepadButton::DpadRight => 13,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StickAxes {
    pub x: f32,
    pub y: f32,
}

impl StickAxes {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn sanitized(self) -> Self {
        Self {
            x: sanitize_axis(self.x),
            y: sanitize_axis(self.y),
        }
    }

    fn outside_deadzone(self, deadzone: f32) -> bool {
        self.x.abs() > deadzone || self.y.abs() > deadzone
    }
}

fn sanitize_axis(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// One polled snapshot of the controller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerFrame {
    pub connected: bool,
    pub left: StickAxes,
    pub right: StickAxes,
    /// Pressed state per button slot; slots past the end read as released.
    pub buttons: Vec<bool>,
}

impl ControllerFrame {
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn pressed(&self, button: GamepadButton) -> bool {
        self.buttons.get(button.index()).copied().unwrap_or(false)
    }
}

/// Decodes polled frames into actions at a throttled cadence.
///
/// The connection flag is refreshed on every tick; stick and button decoding
/// only runs when the throttle lets a frame through.
#[derive(Debug, Clone)]
pub struct ControllerAdapter {
    deadzone: f32,
    left_gain: StickGain,
    right_gain: StickGain,
    throttle: Throttle<ControllerFrame>,
    commit_guard: DebounceGuard,
    connected: bool,
}

impl ControllerAdapter {
    pub fn new(tuning: &InputTuning) -> Self {
        Self {
            deadzone: tuning.deadzone,
            left_gain: tuning.left_gain,
            right_gain: tuning.right_gain,
            throttle: Throttle::new(tuning.throttle_interval),
            commit_guard: DebounceGuard::new(tuning.debounce_cooldown),
            connected: false,
        }
    }

    pub fn connected(&self) -> bool {
        self.connected
    }

    /// Host connect/disconnect notification. Returns whether the flag changed.
    pub fn set_connected(&mut self, connected: bool) -> bool {
        if self.connected == connected {
            return false;
        }
        self.connected = connected;
        if !connected {
            // A parked frame from a device that is gone must not fire later.
            self.throttle.reset();
        }
        tracing::info!(connected, "controller connection changed");
        true
    }

    /// Feed one poll tick.
    pub fn tick(&mut self, now: Instant, frame: ControllerFrame) -> Vec<Action> {
        self.set_connected(frame.connected);
        if !frame.connected {
            return Vec::new();
        }
        match self.throttle.call(now, frame) {
            Some(frame) => self.decode(now, &frame),
            None => Vec::new(),
        }
    }

    /// Release the trailing-edge frame once its window has elapsed.
    pub fn flush(&mut self, now: Instant) -> Vec<Action> {
        match self.throttle.poll(now) {
            Some(frame) => self.decode(now, &frame),
            None => Vec::new(),
        }
    }

    /// When [`ControllerAdapter::flush`] next has work, if ever.
    pub fn flush_deadline(&self) -> Option<Instant> {
        self.throttle.deadline()
    }

    fn decode(&mut self, now: Instant, frame: &ControllerFrame) -> Vec<Action> {
        let mut actions = Vec::new();
        actions.extend(self.stick_rotation(frame.left, self.left_gain));
        if frame.pressed(GamepadButton::Primary) && self.commit_guard.try_fire(now) {
            actions.push(Action::Commit);
        }
        if frame.pressed(GamepadButton::Secondary) {
            actions.push(Action::Delete);
        }
        if frame.pressed(GamepadButton::Tertiary) {
            actions.push(Action::Clear);
        }
        actions.extend(self.stick_rotation(frame.right, self.right_gain));
        if frame.pressed(GamepadButton::DpadLeft) {
            actions.push(Action::NavigateChar(CharDirection::Left));
        }
        if frame.pressed(GamepadButton::DpadRight) {
            actions.push(Action::NavigateChar(CharDirection::Right));
        }
        actions
    }

    fn stick_rotation(&self, stick: StickAxes, gain: StickGain) -> Option<Action> {
        let stick = stick.sanitized();
        stick
            .outside_deadzone(self.deadzone)
            .then(|| Action::Rotate {
                vertical: stick.y * gain.vertical,
                horizontal: stick.x * gain.horizontal,
            })
    }
}

impl Default for ControllerAdapter {
    fn default() -> Self {
        Self::new(&InputTuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn frame_with(buttons: &[GamepadButton]) -> ControllerFrame {
        let mut pressed = vec![false; 16];
        for button in buttons {
            pressed[button.index()] = true;
        }
        ControllerFrame {
            connected: true,
            buttons: pressed,
            ..ControllerFrame::default()
        }
    }

    fn sticks(left: (f32, f32), right: (f32, f32)) -> ControllerFrame {
        ControllerFrame {
            connected: true,
            left: StickAxes::new(left.0, left.1),
            right: StickAxes::new(right.0, right.1),
            buttons: Vec::new(),
        }
    }

    #[test]
    fn deadzone_filters_small_deflection() {
        let mut adapter = ControllerAdapter::default();
        let actions = adapter.tick(Instant::now(), sticks((0.1, -0.05), (0.0, 0.09)));
        assert!(actions.is_empty());
    }

    #[test]
    fn left_and_right_sticks_use_their_gains() {
        let mut adapter = ControllerAdapter::default();
        let actions = adapter.tick(Instant::now(), sticks((0.5, -0.5), (1.0, 0.5)));
        assert_eq!(
            actions,
            vec![
                Action::Rotate {
                    vertical: -1.0,
                    horizontal: 2.5
                },
                Action::Rotate {
                    vertical: 0.5,
                    horizontal: 2.0
                },
            ]
        );
    }

    #[test]
    fn one_axis_past_deadzone_is_enough() {
        let mut adapter = ControllerAdapter::default();
        let actions = adapter.tick(Instant::now(), sticks((0.0, 0.2), (0.0, 0.0)));
        assert_eq!(
            actions,
            vec![Action::Rotate {
                vertical: 0.4,
                horizontal: 0.0
            }]
        );
    }

    #[test]
    fn out_of_range_axes_are_clamped() {
        let mut adapter = ControllerAdapter::default();
        let actions = adapter.tick(Instant::now(), sticks((3.0, f32::NAN), (0.0, 0.0)));
        assert_eq!(
            actions,
            vec![Action::Rotate {
                vertical: 0.0,
                horizontal: 5.0
            }]
        );
    }

    #[test]
    fn buttons_decode_in_frame_order() {
        let mut adapter = ControllerAdapter::default();
        let mut frame = frame_with(&[
            GamepadButton::DpadRight,
            GamepadButton::Primary,
            GamepadButton::Tertiary,
            GamepadButton::Secondary,
            GamepadButton::DpadLeft,
        ]);
        frame.left = StickAxes::new(1.0, 0.0);
        let actions = adapter.tick(Instant::now(), frame);
        assert_eq!(
            actions,
            vec![
                Action::Rotate {
                    vertical: 0.0,
                    horizontal: 5.0
                },
                Action::Commit,
                Action::Delete,
                Action::Clear,
                Action::NavigateChar(CharDirection::Left),
                Action::NavigateChar(CharDirection::Right),
            ]
        );
    }

    #[test]
    fn short_button_list_reads_as_released() {
        let mut adapter = ControllerAdapter::default();
        let frame = ControllerFrame {
            connected: true,
            buttons: vec![false, true],
            ..ControllerFrame::default()
        };
        assert_eq!(adapter.tick(Instant::now(), frame), vec![Action::Delete]);
    }

    #[test]
    fn ten_ticks_in_one_window_process_at_most_two_frames() {
        let start = Instant::now();
        let mut adapter = ControllerAdapter::default();
        let mut decisions = 0;
        for step in 0..10u64 {
            let now = start + ms(step * 10);
            if !adapter.tick(now, sticks((1.0, 0.0), (0.0, 0.0))).is_empty() {
                decisions += 1;
            }
        }
        assert_eq!(adapter.flush_deadline(), Some(start + ms(100)));
        if !adapter.flush(start + ms(100)).is_empty() {
            decisions += 1;
        }
        assert_eq!(decisions, 2);
    }

    #[test]
    fn held_primary_commits_once_per_cooldown() {
        let start = Instant::now();
        let mut adapter = ControllerAdapter::default();
        let held = frame_with(&[GamepadButton::Primary]);
        let mut commits = 0;
        for step in 0..12u64 {
            let now = start + ms(step * 16);
            commits += adapter
                .tick(now, held.clone())
                .iter()
                .filter(|action| **action == Action::Commit)
                .count();
        }
        // Ticks span 0..=176ms: inside a single 200ms cooldown.
        assert_eq!(commits, 1);
    }

    #[test]
    fn connection_flag_updates_every_tick() {
        let start = Instant::now();
        let mut adapter = ControllerAdapter::default();
        assert!(!adapter.connected());
        adapter.tick(start, sticks((0.0, 0.0), (0.0, 0.0)));
        assert!(adapter.connected());
        // Within the throttle window, still refreshed.
        adapter.tick(start + ms(16), ControllerFrame::disconnected());
        assert!(!adapter.connected());
    }

    #[test]
    fn disconnect_drops_parked_frame() {
        let start = Instant::now();
        let mut adapter = ControllerAdapter::default();
        adapter.tick(start, sticks((1.0, 0.0), (0.0, 0.0)));
        adapter.tick(start + ms(16), sticks((1.0, 0.0), (0.0, 0.0)));
        assert!(adapter.flush_deadline().is_some());
        assert!(adapter.set_connected(false));
        assert!(adapter.flush(start + ms(200)).is_empty());
    }

    #[test]
    fn disconnected_frames_yield_nothing() {
        let mut adapter = ControllerAdapter::default();
        let mut frame = frame_with(&[GamepadButton::Primary]);
        frame.connected = false;
        assert!(adapter.tick(Instant::now(), frame).is_empty());
    }
}
