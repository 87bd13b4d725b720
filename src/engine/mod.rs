//! Single reducer that owns rotation, selection and output state.
//!
//! Every input source speaks the same [`Action`] vocabulary and every state
//! change goes through [`Engine::dispatch`]. The engine does not know which
//! adapter produced an action.


use crate::catalog::SelectionCatalog;
use crate::output::OutputBuffer;
use crate::rotation::RotationState;
use crate::selection::{CharDirection, RowDirection, SelectionCursor, SelectionHierarchy};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Rotate the hemisphere; the active row is re-derived from the new yaw.
    Rotate { vertical: f32, horizontal: f32 },
    NavigateRow(RowDirection),
    NavigateChar(CharDirection),
    /// Append the highlighted character to the output.
    Commit,
    /// Remove the last output character.
    Delete,
    /// Empty the output.
    Clear,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Rotate { .. } => "rotate",
            Action::NavigateRow(_) => "navigate-row",
            Action::NavigateChar(_) => "navigate-char",
            Action::Commit => "commit",
            Action::Delete => "delete",
            Action::Clear => "clear",
        }
    }
}

/// Result of a dispatch. There is no failure case; a no-op is the worst outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    NoOp,
}

impl Outcome {
    fn from_changed(changed: bool) -> Self {
        if changed {
            Outcome::Changed
        } else {
            Outcome::NoOp
        }
    }
}

#[derive(Debug, Clone)]
pub struct Engine {
    rotation: RotationState,
    selection: SelectionHierarchy,
    output: OutputBuffer,
}

impl Engine {
    pub fn new(catalog: SelectionCatalog) -> Self {
        Self {
            rotation: RotationState::new(),
            selection: SelectionHierarchy::new(catalog),
            output: OutputBuffer::new(),
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let outcome = match action {
            Action::Rotate {
                vertical,
                horizontal,
            } => {
                let before = self.rotation;
                self.rotation.apply(vertical, horizontal);
                // Derive from the angle this very update produced.
                let row_changed = self.selection.select_sector(self.rotation.horizontal());
                Outcome::from_changed(row_changed || before != self.rotation)
            }
            Action::NavigateRow(direction) => {
                self.selection.navigate_row(direction);
                Outcome::Changed
            }
            Action::NavigateChar(direction) => {
                Outcome::from_changed(self.selection.navigate_char(direction))
            }
            Action::Commit => match self.selection.commit() {
                Some(ch) => {
                    self.output.append(ch);
                    Outcome::Changed
                }
                None => Outcome::NoOp,
            },
            Action::Delete => Outcome::from_changed(self.output.delete_last().is_some()),
            Action::Clear => Outcome::from_changed(self.output.clear()),
        };
        match outcome {
            Outcome::Changed => tracing::debug!(
                action = action.label(),
                row = ?self.selection.active_row(),
                column = self.selection.cursor().column,
                highlighted = ?self.selection.highlighted(),
                "engine action applied"
            ),
            Outcome::NoOp => tracing::trace!(action = action.label(), "engine action ignored"),
        }
        outcome
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    pub fn selection(&self) -> &SelectionHierarchy {
        &self.selection
    }

    pub fn cursor(&self) -> SelectionCursor {
        self.selection.cursor()
    }

    pub fn output(&self) -> &OutputBuffer {
        &self.output
    }

    pub fn highlighted(&self) -> Option<char> {
        self.selection.highlighted()
    }

    pub fn active_sector(&self) -> Option<&[char]> {
        self.selection.active_sector()
    }
}
