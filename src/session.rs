//! `Session`: the facade a host drives.
//!
//! It owns the engine plus one adapter per input source, funnels both
//! sources into [`Engine::dispatch`], and hands out read-only [`SessionView`]
//! snapshots for presentation.

use std::time::Instant;

use crate::catalog::SelectionCatalog;
use crate::engine::{Action, Engine, Outcome};
use crate::input::{ControllerAdapter, ControllerFrame, InputTuning, KeyboardAdapter};

/// Everything presentation may read. Owned copy; mutating it changes nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub output: String,
    pub vertical_deg: f32,
    pub horizontal_deg: f32,
    pub controller_connected: bool,
    pub highlighted: Option<char>,
    pub active_sector: Option<Vec<char>>,
    pub active_row: Option<usize>,
    pub column: usize,
}

pub struct Session {
    engine: Engine,
    keyboard: KeyboardAdapter,
    controller: ControllerAdapter,
}

impl Session {
    pub fn new(catalog: SelectionCatalog, tuning: &InputTuning) -> Self {
        Self {
            engine: Engine::new(catalog),
            keyboard: KeyboardAdapter::new(tuning),
            controller: ControllerAdapter::new(tuning),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// One key press. Returns whether engine state changed.
    pub fn handle_key(&mut self, key: &str, now: Instant) -> bool {
        match self.keyboard.handle_key(key, now) {
            Some(action) => self.apply(action),
            None => false,
        }
    }

    /// One controller poll tick. Returns whether anything observable changed.
    pub fn controller_tick(&mut self, now: Instant, frame: ControllerFrame) -> bool {
        let was_connected = self.controller.connected();
        let actions = self.controller.tick(now, frame);
        let changed = self.apply_all(actions);
        changed || was_connected != self.controller.connected()
    }

    /// Trailing-edge controller processing; call once the flush deadline passes.
    pub fn controller_flush(&mut self, now: Instant) -> bool {
        let actions = self.controller.flush(now);
        self.apply_all(actions)
    }

    pub fn controller_flush_deadline(&self) -> Option<Instant> {
        self.controller.flush_deadline()
    }

    /// Host connect/disconnect notification.
    pub fn controller_notification(&mut self, connected: bool) -> bool {
        self.controller.set_connected(connected)
    }

    pub fn view(&self) -> SessionView {
        let rotation = self.engine.rotation();
        let selection = self.engine.selection();
        SessionView {
            output: self.engine.output().text(),
            vertical_deg: rotation.vertical(),
            horizontal_deg: rotation.horizontal(),
            controller_connected: self.controller.connected(),
            highlighted: selection.highlighted(),
            active_sector: selection.active_sector().map(<[char]>::to_vec),
            active_row: selection.active_row(),
            column: selection.cursor().column,
        }
    }

    fn apply_all(&mut self, actions: Vec<Action>) -> bool {
        actions
            .into_iter()
            .fold(false, |changed, action| self.apply(action) || changed)
    }

    fn apply(&mut self, action: Action) -> bool {
        self.engine.dispatch(action) == Outcome::Changed
    }
}
