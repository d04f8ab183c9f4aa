//! Content mutation: insertion, deletion, kill and yank.
//!
//! All operations are no-ops on a read-only area. Capacity limits
//! (`max_lines`, `max_chars`) silently refuse the edit. Killed text goes to
//! the area's [`KillRing`](super::KillRing).
//!
//! Backspace at the start of a line would move the cursor onto the previous
//! line, so it is checked against the movement validator first. Forward
//! delete at the end of a line leaves the cursor where it is and does not
//! consult the validator.

use crate::text::hooks::REASON_BLOCKED;
use crate::text::navigation::is_word_boundary;
use crate::text::position::{Position, Range};
use crate::text::textarea::TextArea;

/// Stateless content-editing operations on a [`TextArea`].
#[derive(Clone, Copy, Debug, Default)]
pub struct EditingService;

impl EditingService {
    /// Insert `ch` at the cursor and advance past it.
    ///
    /// A `'\n'` is treated as [`insert_newline`](Self::insert_newline).
    #[must_use]
    pub fn insert_char(area: &TextArea, ch: char) -> TextArea {
        if area.is_read_only() {
            return area.refuse("insert", "read-only");
        }
        if ch == '\n' {
            return Self::insert_newline(area);
        }
        let max_chars = area.max_chars();
        if max_chars > 0 && area.buffer().char_count() >= max_chars {
            return area.refuse("insert", "max_chars reached");
        }
        let Position { row, col } = area.cursor_position();
        let buffer = area.buffer().insert_char(row, col, ch);
        area.replace_content(buffer, Position::new(row, col + 1))
    }

    /// Insert `text` rune by rune, honouring the capacity limits.
    ///
    /// Stops at the first line break the area refuses, so later lines are
    /// never merged into the current one.
    #[must_use]
    pub fn insert_str(area: &TextArea, text: &str) -> TextArea {
        if area.is_read_only() {
            return area.refuse("insert", "read-only");
        }
        let mut next = area.clone();
        for ch in text.chars() {
            let inserted = Self::insert_char(&next, ch);
            // A refused line break ends the paste.
            if ch == '\n' && inserted.line_count() == next.line_count() {
                break;
            }
            next = inserted;
        }
        next
    }

    /// Split the line at the cursor; the cursor moves to the new line.
    #[must_use]
    pub fn insert_newline(area: &TextArea) -> TextArea {
        if area.is_read_only() {
            return area.refuse("newline", "read-only");
        }
        let max_lines = area.max_lines();
        if max_lines > 0 && area.line_count() >= max_lines {
            return area.refuse("newline", "max_lines reached");
        }
        let Position { row, col } = area.cursor_position();
        let buffer = area.buffer().insert_newline(row, col);
        area.replace_content(buffer, Position::new(row + 1, 0))
    }

    /// Delete the rune before the cursor, joining lines at column 0.
    #[must_use]
    pub fn delete_char_backward(area: &TextArea) -> TextArea {
        if area.is_read_only() {
            return area.refuse("backspace", "read-only");
        }
        let from = area.cursor_position();
        let Position { row, col } = from;
        if col > 0 {
            let buffer = area.buffer().delete_char(row, col - 1);
            return area.replace_content(buffer, Position::new(row, col - 1));
        }
        if row == 0 {
            return area.clone();
        }

        let to = Position::new(row - 1, area.buffer().line_len(row - 1));
        let hooks = area.hooks();
        if !hooks.allows(from, to) {
            hooks.notify_boundary(to, REASON_BLOCKED);
            return area.refuse("backspace", "line join vetoed");
        }
        let buffer = area.buffer().join_with_next_line(row - 1);
        area.replace_content(buffer, to)
    }

    /// Delete the rune under the cursor, joining the next line at line end.
    #[must_use]
    pub fn delete_char_forward(area: &TextArea) -> TextArea {
        if area.is_read_only() {
            return area.refuse("delete", "read-only");
        }
        let pos = area.cursor_position();
        let buffer = if pos.col >= area.buffer().line_len(pos.row) {
            if pos.row + 1 >= area.line_count() {
                return area.clone();
            }
            area.buffer().join_with_next_line(pos.row)
        } else {
            area.buffer().delete_char(pos.row, pos.col)
        };
        area.replace_content(buffer, pos)
    }

    /// Kill from the cursor to the end of the line.
    ///
    /// At the end of a line the line break itself is killed, which joins the
    /// next line and records `"\n"`.
    #[must_use]
    pub fn kill_line(area: &TextArea) -> TextArea {
        if area.is_read_only() {
            return area.refuse("kill-line", "read-only");
        }
        let pos = area.cursor_position();
        if pos.col >= area.buffer().line_len(pos.row) {
            if pos.row + 1 >= area.line_count() {
                return area.clone();
            }
            let buffer = area.buffer().join_with_next_line(pos.row);
            return area.replace_content_killing(buffer, pos, "\n");
        }
        let (buffer, killed) = area.buffer().delete_to_line_end(pos.row, pos.col);
        area.replace_content_killing(buffer, pos, &killed)
    }

    /// Kill from the cursor up to the next word boundary on this line.
    ///
    /// No-op when the rune under the cursor is already a boundary.
    #[must_use]
    pub fn kill_word(area: &TextArea) -> TextArea {
        if area.is_read_only() {
            return area.refuse("kill-word", "read-only");
        }
        let pos = area.cursor_position();
        let end = area
            .current_line()
            .chars()
            .skip(pos.col)
            .take_while(|&ch| !is_word_boundary(ch))
            .count();
        if end == 0 {
            return area.clone();
        }
        Self::kill_span(area, pos, Position::new(pos.row, pos.col + end), pos)
    }

    /// Kill from the previous word boundary on this line up to the cursor.
    ///
    /// No-op when the rune before the cursor is already a boundary.
    #[must_use]
    pub fn kill_word_backward(area: &TextArea) -> TextArea {
        if area.is_read_only() {
            return area.refuse("kill-word-backward", "read-only");
        }
        let pos = area.cursor_position();
        let chars: Vec<char> = area.current_line().chars().take(pos.col).collect();
        let len = chars
            .iter()
            .rev()
            .take_while(|&&ch| !is_word_boundary(ch))
            .count();
        if len == 0 {
            return area.clone();
        }
        let start = Position::new(pos.row, pos.col - len);
        Self::kill_span(area, start, pos, start)
    }

    /// Kill the selected text; the cursor moves to the selection start.
    ///
    /// No-op without a selection or with an empty one.
    #[must_use]
    pub fn kill_selection(area: &TextArea) -> TextArea {
        if area.is_read_only() {
            return area.refuse("kill-region", "read-only");
        }
        match area.selection() {
            Some(selection) if !selection.is_empty() => {
                let range = selection.range();
                Self::kill_span(area, range.start(), range.end(), range.start())
            }
            _ => area.clone(),
        }
    }

    /// Insert the current kill-ring entry at the cursor.
    ///
    /// Line breaks in the entry split lines, so multi-line kills come back
    /// intact. The cursor ends just after the inserted text.
    #[must_use]
    pub fn yank(area: &TextArea) -> TextArea {
        if area.is_read_only() {
            return area.refuse("yank", "read-only");
        }
        let text = area.kill_ring().yank();
        if text.is_empty() {
            return area.clone();
        }
        let Position { row, col } = area.cursor_position();
        let (buffer, end) = area.buffer().insert_text(row, col, text);
        area.replace_content(buffer, end)
    }

    fn kill_span(area: &TextArea, start: Position, end: Position, cursor: Position) -> TextArea {
        let range = Range::new(start, end);
        let killed = area.buffer().text_in_range(range);
        let buffer = area.buffer().delete_range(range);
        area.replace_content_killing(buffer, cursor, &killed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::cursor::{Cursor, Selection};
    use crate::text::kill_ring::KillRing;
    use std::sync::{Arc, Mutex};

    fn at(text: &str, row: usize, col: usize) -> TextArea {
        TextArea::new().with_value(text).with_cursor(Cursor::new(row, col))
    }

    #[test]
    fn test_insert_char_advances() {
        let area = "hello"
            .chars()
            .fold(TextArea::new(), |area, ch| EditingService::insert_char(&area, ch));
        assert_eq!(area.value(), "hello");
        assert_eq!(area.cursor_position(), Position::new(0, 5));
    }

    #[test]
    fn test_read_only_refuses_everything() {
        let area = at("abc\ndef", 1, 1)
            .with_kill_ring(KillRing::new(2).kill("zz"))
            .with_read_only(true);
        let ops: [fn(&TextArea) -> TextArea; 9] = [
            |a| EditingService::insert_char(a, 'x'),
            |a| EditingService::insert_str(a, "xy"),
            EditingService::insert_newline,
            EditingService::delete_char_backward,
            EditingService::delete_char_forward,
            EditingService::kill_line,
            EditingService::kill_word,
            EditingService::kill_word_backward,
            EditingService::yank,
        ];
        for op in ops {
            assert_eq!(op(&area), area);
        }
    }

    #[test]
    fn test_max_chars_refuses_insert() {
        let area = TextArea::new().with_max_chars(3);
        let area = EditingService::insert_str(&area, "abcdef");
        assert_eq!(area.value(), "abc");
    }

    #[test]
    fn test_insert_str_stops_at_refused_newline() {
        let area = TextArea::new().with_max_lines(2);
        let area = EditingService::insert_str(&area, "a\nb\nc");
        assert_eq!(area.value(), "a\nb");
        assert_eq!(area.cursor_position(), Position::new(1, 1));
    }

    #[test]
    fn test_newline_respects_max_lines() {
        let area = at("one", 0, 3).with_max_lines(2);
        let area = EditingService::insert_newline(&area);
        assert_eq!(area.line_count(), 2);
        assert_eq!(area.cursor_position(), Position::new(1, 0));
        let same = EditingService::insert_newline(&area);
        assert_eq!(same, area);
    }

    #[test]
    fn test_backspace_within_line_and_across() {
        let area = at("ab\ncd", 1, 1);
        let area = EditingService::delete_char_backward(&area);
        assert_eq!(area.value(), "ab\nd");
        assert_eq!(area.cursor_position(), Position::new(1, 0));
        let area = EditingService::delete_char_backward(&area);
        assert_eq!(area.value(), "abd");
        assert_eq!(area.cursor_position(), Position::new(0, 2));

        let origin = at("abd", 0, 0);
        assert_eq!(EditingService::delete_char_backward(&origin), origin);
    }

    #[test]
    fn test_backspace_join_is_vetoable() {
        let hits: Arc<Mutex<Vec<(Position, String)>>> = Arc::default();
        let sink = Arc::clone(&hits);
        let area = at("> \nrest", 1, 0)
            .with_movement_validator(|_: Position, to: Position| to.row > 0)
            .with_boundary_observer(move |pos: Position, reason: &str| {
                sink.lock().unwrap().push((pos, reason.to_string()));
            });
        let same = EditingService::delete_char_backward(&area);
        assert_eq!(same.value(), "> \nrest");
        assert_eq!(same.cursor_position(), Position::new(1, 0));
        assert_eq!(
            *hits.lock().unwrap(),
            [(Position::new(0, 2), REASON_BLOCKED.to_string())]
        );
    }

    #[test]
    fn test_forward_delete_join_ignores_validator() {
        let area = at("ab\ncd", 0, 2).with_movement_validator(|_: Position, _: Position| false);
        let area = EditingService::delete_char_forward(&area);
        assert_eq!(area.value(), "abcd");
        assert_eq!(area.cursor_position(), Position::new(0, 2));
        let area = EditingService::delete_char_forward(&area);
        assert_eq!(area.value(), "abd");
        let end = EditingService::delete_char_forward(&area.with_value("x").with_cursor(Cursor::new(0, 1)));
        assert_eq!(end.value(), "x");
    }

    #[test]
    fn test_kill_line_and_line_break() {
        let area = at("hello world\nnext", 0, 6);
        let area = EditingService::kill_line(&area);
        assert_eq!(area.value(), "hello \nnext");
        assert_eq!(area.kill_ring().yank(), "world");

        let area = EditingService::kill_line(&area);
        assert_eq!(area.value(), "hello next");
        assert_eq!(area.kill_ring().yank(), "\n");
        assert_eq!(area.kill_ring().len(), 2);

        let end = at("abc", 0, 3);
        assert_eq!(EditingService::kill_line(&end), end);
    }

    #[test]
    fn test_kill_word_forward() {
        let area = at("foo bar", 0, 0);
        let area = EditingService::kill_word(&area);
        assert_eq!(area.value(), " bar");
        assert_eq!(area.cursor_position(), Position::origin());
        assert_eq!(area.kill_ring().yank(), "foo");

        let same = EditingService::kill_word(&area);
        assert_eq!(same, area);
    }

    #[test]
    fn test_kill_word_backward() {
        let area = at("foo.bar baz", 0, 7);
        let area = EditingService::kill_word_backward(&area);
        assert_eq!(area.value(), "foo. baz");
        assert_eq!(area.cursor_position(), Position::new(0, 4));
        assert_eq!(area.kill_ring().yank(), "bar");

        let same = EditingService::kill_word_backward(&area);
        assert_eq!(same, area);
    }

    #[test]
    fn test_kill_selection() {
        let area = at("hello\nworld", 0, 0)
            .with_selection(Selection::new(Position::new(1, 2), Position::new(0, 3)));
        let area = EditingService::kill_selection(&area);
        assert_eq!(area.value(), "helrld");
        assert_eq!(area.cursor_position(), Position::new(0, 3));
        assert_eq!(area.kill_ring().yank(), "lo\nwo");
        assert!(area.selection().is_none());
    }

    #[test]
    fn test_yank_multiline() {
        let area = at("x", 0, 0).with_kill_ring(KillRing::default().kill("a\nb"));
        let area = EditingService::yank(&area);
        assert_eq!(area.value(), "a\nbx");
        assert_eq!(area.cursor_position(), Position::new(1, 1));

        let empty = at("x", 0, 0);
        assert_eq!(EditingService::yank(&empty), empty);
    }

    #[test]
    fn test_kill_then_yank_restores() {
        let area = at("one two", 0, 4);
        let killed = EditingService::kill_line(&area);
        let restored = EditingService::yank(&killed);
        assert_eq!(restored.value(), "one two");
        assert_eq!(restored.cursor_position(), Position::new(0, 7));
    }
}
