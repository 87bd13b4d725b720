use std::time::Instant;

use crate::engine::Action;
use crate::rate_limit::DebounceGuard;
use crate::selection::{CharDirection, RowDirection};

use super::InputTuning;

pub const KEY_ARROW_UP: &str = "ArrowUp";
pub const KEY_ARROW_DOWN: &str = "ArrowDown";
pub const KEY_ARROW_LEFT: &str = "ArrowLeft";
pub const KEY_ARROW_RIGHT: &str = "ArrowRight";
pub const KEY_ENTER: &str = "Enter";
pub const KEY_BACKSPACE: &str = "Backspace";
pub const KEY_DELETE: &str = "Delete";

/// Maps one key press to at most one action. `Enter` is debounced.
#[derive(Debug, Clone)]
pub struct KeyboardAdapter {
    commit_guard: DebounceGuard,
}

impl KeyboardAdapter {
    pub fn new(tuning: &InputTuning) -> Self {
        Self {
            commit_guard: DebounceGuard::new(tuning.debounce_cooldown),
        }
    }

    pub fn handle_key(&mut self, key: &str, now: Instant) -> Option<Action> {
        match key {
            KEY_ARROW_UP => Some(Action::NavigateRow(RowDirection::Previous)),
            KEY_ARROW_DOWN => Some(Action::NavigateRow(RowDirection::Next)),
            KEY_ARROW_LEFT => Some(Action::NavigateChar(CharDirection::Left)),
            KEY_ARROW_RIGHT => Some(Action::NavigateChar(CharDirection::Right)),
            KEY_ENTER => self.commit_guard.try_fire(now).then_some(Action::Commit),
            KEY_BACKSPACE => Some(Action::Delete),
            KEY_DELETE => Some(Action::Clear),
            _ => None,
        }
    }
}

impl Default for KeyboardAdapter {
    fn default() -> Self {
        Self::new(&InputTuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn arrows_map_to_navigation() {
        let mut keyboard = KeyboardAdapter::default();
        let now = Instant::now();
        assert_eq!(
            keyboard.handle_key("ArrowUp", now),
            Some(Action::NavigateRow(RowDirection::Previous))
        );
        assert_eq!(
            keyboard.handle_key("ArrowDown", now),
            Some(Action::NavigateRow(RowDirection::Next))
        );
        assert_eq!(
            keyboard.handle_key("ArrowLeft", now),
            Some(Action::NavigateChar(CharDirection::Left))
        );
        assert_eq!(
            keyboard.handle_key("ArrowRight", now),
            Some(Action::NavigateChar(CharDirection::Right))
        );
    }

    #[test]
    fn enter_is_debounced() {
        let mut keyboard = KeyboardAdapter::default();
        let start = Instant::now();
        assert_eq!(keyboard.handle_key("Enter", start), Some(Action::Commit));
        assert_eq!(
            keyboard.handle_key("Enter", start + Duration::from_millis(50)),
            None
        );
        assert_eq!(
            keyboard.handle_key("Enter", start + Duration::from_millis(250)),
            Some(Action::Commit)
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut keyboard = KeyboardAdapter::default();
        assert_eq!(keyboard.handle_key("q", Instant::now()), None);
        assert_eq!(keyboard.handle_key("", Instant::now()), None);
    }

    #[test]
    fn editing_keys_map_to_delete_and_clear() {
        let mut keyboard = KeyboardAdapter::default();
        let now = Instant::now();
        assert_eq!(keyboard.handle_key("Backspace", now), Some(Action::Delete));
        assert_eq!(keyboard.handle_key("Delete", now), Some(Action::Clear));
    }
}
