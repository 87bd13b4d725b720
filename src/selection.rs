//! Two-level selection: which row (sector) is active, and which character in it.
//!
//! The active row is chosen either by explicit navigation or by deriving a
//! sector from the horizontal angle. Whichever path ran last wins; both land
//! in the same cursor field.

use crate::catalog::SelectionCatalog;
use crate::rotation::FULL_TURN_DEG;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDirection {
    Previous,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharDirection {
    Left,
    Right,
}

/// Map a horizontal angle to a sector index in `[0, row_count)`.
pub fn sector_index(horizontal_deg: f32, row_count: usize) -> usize {
    if row_count == 0 {
        return 0;
    }
    let scaled = (horizontal_deg / FULL_TURN_DEG) * row_count as f32;
    if !scaled.is_finite() || scaled <= 0.0 {
        return 0;
    }
    (scaled.floor() as usize).min(row_count - 1)
}

/// Cursor position. `row` is remembered even while no row is active so
/// the next explicit navigation steps from where the user left off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionCursor {
    pub row: usize,
    pub column: usize,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct SelectionHierarchy {
    catalog: SelectionCatalog,
    cursor: SelectionCursor,
}

impl SelectionHierarchy {
    /// Start with row 0 active and its first character highlighted.
    pub fn new(catalog: SelectionCatalog) -> Self {
        Self {
            catalog,
            cursor: SelectionCursor {
                row: 0,
                column: 0,
                active: true,
            },
        }
    }

    pub fn catalog(&self) -> &SelectionCatalog {
        &self.catalog
    }

    pub fn cursor(&self) -> SelectionCursor {
        self.cursor
    }

    pub fn active_row(&self) -> Option<usize> {
        self.cursor.active.then_some(self.cursor.row)
    }

    /// Characters of the active sector, for the zoomed view.
    pub fn active_sector(&self) -> Option<&[char]> {
        self.active_row().and_then(|row| self.catalog.row(row))
    }

    /// Derived from the current cursor on every call; never cached.
    pub fn highlighted(&self) -> Option<char> {
        let row = self.active_row()?;
        self.catalog.get(row, self.cursor.column)
    }

    /// Explicit row navigation, wrapping at both ends. Always activates a row.
    pub fn navigate_row(&mut self, direction: RowDirection) {
        let count = self.catalog.row_count();
        let row = match direction {
            RowDirection::Previous => (self.cursor.row + count - 1) % count,
            RowDirection::Next => (self.cursor.row + 1) % count,
        };
        self.activate_row(row);
    }

    /// Activate the sector under `horizontal_deg`. Returns whether the active row changed.
    ///
    /// Callers must pass the angle produced by the same rotation update.
    pub fn select_sector(&mut self, horizontal_deg: f32) -> bool {
        let sector = sector_index(horizontal_deg, self.catalog.row_count());
        if self.active_row() == Some(sector) {
            return false;
        }
        self.activate_row(sector);
        true
    }

    /// Move within the active row. Returns `false` when no row is active.
    pub fn navigate_char(&mut self, direction: CharDirection) -> bool {
        if !self.cursor.active {
            return false;
        }
        let len = self.catalog.row_len();
        self.cursor.column = match direction {
            CharDirection::Left => (self.cursor.column + len - 1) % len,
            CharDirection::Right => (self.cursor.column + 1) % len,
        };
        true
    }

    /// Take the highlighted character and return to "no row selected".
    pub fn commit(&mut self) -> Option<char> {
        let ch = self.highlighted()?;
        self.cursor.active = false;
        self.cursor.column = 0;
        Some(ch)
    }

    fn activate_row(&mut self, row: usize) {
        self.cursor = SelectionCursor {
            row,
            column: 0,
            active: true,
        };
    }
}
