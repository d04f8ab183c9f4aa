//! Cursor and selection values.

use crate::text::position::{Position, Range};

/// Cursor position in the buffer.
///
/// A cursor is a bare coordinate pair and does no validation of its own;
/// whoever applies it to a buffer clamps it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    /// Line number (0-indexed).
    pub row: usize,
    /// Rune offset within the line (0-indexed).
    pub col: usize,
}

impl Cursor {
    /// Create a new cursor at position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Create a cursor at the beginning.
    #[must_use]
    pub const fn start() -> Self {
        Self { row: 0, col: 0 }
    }

    /// A cursor at `(row, col)`.
    #[must_use]
    pub const fn move_to(self, row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// A cursor offset by the given deltas, saturating at zero.
    #[must_use]
    pub const fn move_by(self, d_row: isize, d_col: isize) -> Self {
        Self {
            row: self.row.saturating_add_signed(d_row),
            col: self.col.saturating_add_signed(d_col),
        }
    }

    /// The cursor as a [`Position`].
    #[must_use]
    pub const fn position(self) -> Position {
        Position::new(self.row, self.col)
    }
}

impl From<Position> for Cursor {
    fn from(pos: Position) -> Self {
        Self::new(pos.row, pos.col)
    }
}

impl From<Cursor> for Position {
    fn from(cursor: Cursor) -> Self {
        cursor.position()
    }
}

/// An anchored selection.
///
/// The anchor stays put while the cursor end follows the caret, so the
/// cursor may sit before the anchor (a backward selection).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub anchor: Position,
    pub cursor: Position,
}

impl Selection {
    /// Create a new selection.
    #[must_use]
    pub const fn new(anchor: Position, cursor: Position) -> Self {
        Self { anchor, cursor }
    }

    /// A collapsed selection anchored at `pos`.
    #[must_use]
    pub const fn at(pos: Position) -> Self {
        Self {
            anchor: pos,
            cursor: pos,
        }
    }

    /// The same anchor with the cursor end moved to `pos`.
    #[must_use]
    pub const fn extend_to(self, pos: Position) -> Self {
        Self {
            anchor: self.anchor,
            cursor: pos,
        }
    }

    /// Get normalized (start <= end) range.
    #[must_use]
    pub fn range(&self) -> Range {
        Range::new(self.anchor, self.cursor)
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchor == self.cursor
    }
}
