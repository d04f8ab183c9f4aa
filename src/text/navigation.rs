//! Cursor motion.
//!
//! Every motion goes through the same protocol:
//!
//! 1. compute the target position;
//! 2. if a [`MovementValidator`](super::MovementValidator) is registered, ask
//!    it about `(from, to)`;
//! 3. on a veto, report the *attempted* position to the boundary observer
//!    and return the area unchanged;
//! 4. otherwise apply the cursor and notify the cursor-moved observer.
//!
//! A motion with nowhere to go (up from the first line, down from the last,
//! left or back a word from the buffer start, right or forward a word from
//! the buffer end) never moves the cursor, but the validator is still asked
//! about the theoretical target. A veto is reported as `"already at top"` for
//! the start edges and `"already at bottom"` for the end edges. Without a
//! validator, or when it allows the attempt, the motion is a silent no-op.

use crate::event::{LogLevel, emit_log};
use crate::text::hooks::{REASON_AT_BOTTOM, REASON_AT_TOP, REASON_BLOCKED, REASON_NO_VALID_POSITION};
use crate::text::position::Position;
use crate::text::textarea::TextArea;

/// Punctuation that separates words, in addition to space and tab.
const WORD_PUNCTUATION: &str = ".,;:!?'\"()[]{}<>/\\|-_=+*&^%$#@~`";

/// Whether `ch` separates words for word motion and word kills.
#[must_use]
pub fn is_word_boundary(ch: char) -> bool {
    ch == ' ' || ch == '\t' || WORD_PUNCTUATION.contains(ch)
}

/// Stateless cursor-motion operations on a [`TextArea`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NavigationService;

impl NavigationService {
    /// One rune left, wrapping to the end of the previous line.
    #[must_use]
    pub fn move_left(area: &TextArea) -> TextArea {
        let Position { row, col } = area.cursor_position();
        let to = if col > 0 {
            Position::new(row, col - 1)
        } else if row > 0 {
            Position::new(row - 1, area.buffer().line_len(row - 1))
        } else {
            return Self::hit_edge(area, Position::origin(), REASON_AT_TOP);
        };
        Self::move_cursor(area, to)
    }

    /// One rune right, wrapping to the start of the next line.
    #[must_use]
    pub fn move_right(area: &TextArea) -> TextArea {
        let Position { row, col } = area.cursor_position();
        let to = if col < area.buffer().line_len(row) {
            Position::new(row, col + 1)
        } else if row + 1 < area.line_count() {
            Position::new(row + 1, 0)
        } else {
            return Self::hit_edge(area, Position::new(row, col + 1), REASON_AT_BOTTOM);
        };
        Self::move_cursor(area, to)
    }

    /// One line up, keeping the column where the target line allows.
    #[must_use]
    pub fn move_up(area: &TextArea) -> TextArea {
        let Position { row, col } = area.cursor_position();
        if row == 0 {
            // Row -1 is not representable; the attempt keeps the row.
            return Self::hit_edge(area, Position::new(row, col), REASON_AT_TOP);
        }
        let to = Position::new(row - 1, col.min(area.buffer().line_len(row - 1)));
        Self::move_cursor(area, to)
    }

    /// One line down, keeping the column where the target line allows.
    #[must_use]
    pub fn move_down(area: &TextArea) -> TextArea {
        let Position { row, col } = area.cursor_position();
        if row + 1 >= area.line_count() {
            return Self::hit_edge(area, Position::new(row + 1, col), REASON_AT_BOTTOM);
        }
        let to = Position::new(row + 1, col.min(area.buffer().line_len(row + 1)));
        Self::move_cursor(area, to)
    }

    /// Column 0, or the first column the validator accepts.
    ///
    /// When column 0 is vetoed the columns `1..=line_len` are tried in order.
    /// This lets a host keep the caret after a protected prompt.
    #[must_use]
    pub fn move_to_line_start(area: &TextArea) -> TextArea {
        let from = area.cursor_position();
        let hooks = area.hooks();
        if !hooks.has_validator() {
            return Self::move_cursor(area, Position::new(from.row, 0));
        }

        let line_len = area.buffer().line_len(from.row);
        let allowed = (0..=line_len)
            .map(|col| Position::new(from.row, col))
            .find(|&to| hooks.allows(from, to));

        match allowed {
            Some(to) => {
                let next = area.place_cursor(to);
                hooks.notify_moved(from, to);
                next
            }
            None => {
                emit_log(
                    LogLevel::Debug,
                    &format!("navigation: no column on row {} accepted", from.row),
                );
                hooks.notify_boundary(Position::new(from.row, 0), REASON_NO_VALID_POSITION);
                area.clone()
            }
        }
    }

    /// Past the last rune of the current line.
    #[must_use]
    pub fn move_to_line_end(area: &TextArea) -> TextArea {
        let row = area.cursor_position().row;
        Self::move_cursor(area, Position::new(row, area.buffer().line_len(row)))
    }

    /// `(0, 0)`.
    #[must_use]
    pub fn move_to_buffer_start(area: &TextArea) -> TextArea {
        Self::move_cursor(area, Position::origin())
    }

    /// Past the last rune of the last line.
    #[must_use]
    pub fn move_to_buffer_end(area: &TextArea) -> TextArea {
        Self::move_cursor(area, area.buffer().end_position())
    }

    /// Skip the rest of the current word, then any boundary runes after it.
    ///
    /// At the end of a line the cursor moves to the start of the next one.
    #[must_use]
    pub fn forward_word(area: &TextArea) -> TextArea {
        let Position { row, col } = area.cursor_position();
        let chars: Vec<char> = area.buffer().line(row).chars().collect();
        if col >= chars.len() {
            if row + 1 < area.line_count() {
                return Self::move_cursor(area, Position::new(row + 1, 0));
            }
            return Self::hit_edge(area, Position::new(row, col + 1), REASON_AT_BOTTOM);
        }

        let mut end = col;
        while end < chars.len() && !is_word_boundary(chars[end]) {
            end += 1;
        }
        while end < chars.len() && is_word_boundary(chars[end]) {
            end += 1;
        }
        Self::move_cursor(area, Position::new(row, end))
    }

    /// Skip boundary runes before the cursor, then the word before them.
    ///
    /// At the start of a line the cursor moves to the end of the previous one.
    #[must_use]
    pub fn backward_word(area: &TextArea) -> TextArea {
        let Position { row, col } = area.cursor_position();
        if col == 0 {
            if row > 0 {
                let to = Position::new(row - 1, area.buffer().line_len(row - 1));
                return Self::move_cursor(area, to);
            }
            return Self::hit_edge(area, Position::origin(), REASON_AT_TOP);
        }

        let chars: Vec<char> = area.buffer().line(row).chars().collect();
        let mut start = col.min(chars.len());
        while start > 0 && is_word_boundary(chars[start - 1]) {
            start -= 1;
        }
        while start > 0 && !is_word_boundary(chars[start - 1]) {
            start -= 1;
        }
        Self::move_cursor(area, Position::new(row, start))
    }

    /// Apply `to` through the validator/observer protocol.
    pub(crate) fn move_cursor(area: &TextArea, to: Position) -> TextArea {
        let from = area.cursor_position();
        let hooks = area.hooks();
        if !hooks.allows(from, to) {
            emit_log(
                LogLevel::Debug,
                &format!("navigation: move {from} -> {to} vetoed"),
            );
            hooks.notify_boundary(to, REASON_BLOCKED);
            return area.clone();
        }
        let next = area.place_cursor(to);
        hooks.notify_moved(from, to);
        next
    }

    /// Offer an edge motion to the validator; report a veto with `reason`.
    ///
    /// The cursor never moves.
    fn hit_edge(area: &TextArea, attempted: Position, reason: &str) -> TextArea {
        let hooks = area.hooks();
        let from = area.cursor_position();
        if !hooks.allows(from, attempted) {
            emit_log(
                LogLevel::Debug,
                &format!("navigation: edge move {from} -> {attempted} vetoed"),
            );
            hooks.notify_boundary(attempted, reason);
        }
        area.clone()
    }
}
