//! Line-oriented text storage.
//!
//! This module provides [`Buffer`], an ordered list of lines. A buffer always
//! holds at least one line; an empty buffer is a single empty line. Columns
//! are rune offsets, so every operation converts to byte offsets internally
//! and never splits a UTF-8 sequence.
//!
//! Buffers are values. Every mutator borrows `self` and returns a new buffer
//! with its own copy of the line list, so an old handle never observes a
//! later edit.
//!
//! Out-of-range rows and columns are never errors: columns are clamped to the
//! line length and operations on a row that does not exist return an
//! unchanged copy.

use crate::text::position::{Position, Range};
use std::fmt;

/// Byte index of rune `col` in `line`, or `line.len()` past the end.
fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(idx, _)| idx)
}

/// Runes `[from, to)` of `line`, clamped to the line.
pub(crate) fn rune_slice(line: &str, from: usize, to: usize) -> &str {
    let start = byte_index(line, from);
    let end = byte_index(line, to).max(start);
    &line[start..end]
}

/// Ordered sequence of text lines.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Buffer {
    lines: Vec<String>,
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    /// Create a buffer holding a single empty line.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Create a buffer by splitting `text` on `'\n'`.
    ///
    /// Only `'\n'` separates lines. A `"\r\n"` sequence leaves the `'\r'` at
    /// the end of the preceding line.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    /// Create a buffer from pre-split lines. No lines yields one empty line.
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            Self::new()
        } else {
            Self { lines }
        }
    }

    /// All lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines (always at least 1).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text of line `row`, or `""` if the row does not exist.
    #[must_use]
    pub fn line(&self, row: usize) -> &str {
        self.lines.get(row).map_or("", String::as_str)
    }

    /// Length of line `row` in runes.
    #[must_use]
    pub fn line_len(&self, row: usize) -> usize {
        self.line(row).chars().count()
    }

    /// Total rune count, not counting line separators.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.lines.iter().map(|line| line.chars().count()).sum()
    }

    /// True when the buffer is a single empty line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Position just past the last rune of the last line.
    #[must_use]
    pub fn end_position(&self) -> Position {
        let row = self.lines.len() - 1;
        Position::new(row, self.line_len(row))
    }

    /// Insert `ch` at `(row, col)`. `col` is clamped to the line length.
    #[must_use]
    pub fn insert_char(&self, row: usize, col: usize, ch: char) -> Self {
        let mut lines = self.lines.clone();
        if let Some(line) = lines.get_mut(row) {
            let at = byte_index(line, col);
            line.insert(at, ch);
        }
        Self { lines }
    }

    /// Delete the rune at `(row, col)`. No-op if `col` is at or past the end.
    #[must_use]
    pub fn delete_char(&self, row: usize, col: usize) -> Self {
        let mut lines = self.lines.clone();
        if let Some(line) = lines.get_mut(row) {
            if let Some((at, _)) = line.char_indices().nth(col) {
                line.remove(at);
            }
        }
        Self { lines }
    }

    /// Split line `row` at `col` (clamped) into two lines.
    #[must_use]
    pub fn insert_newline(&self, row: usize, col: usize) -> Self {
        let mut lines = self.lines.clone();
        if let Some(line) = lines.get_mut(row) {
            let at = byte_index(line, col);
            let tail = line.split_off(at);
            lines.insert(row + 1, tail);
        }
        Self { lines }
    }

    /// Remove line `row`. The last remaining line is cleared instead.
    #[must_use]
    pub fn delete_line(&self, row: usize) -> Self {
        let mut lines = self.lines.clone();
        if row < lines.len() {
            if lines.len() == 1 {
                lines[0].clear();
            } else {
                lines.remove(row);
            }
        }
        Self { lines }
    }

    /// Cut line `row` at `col`, returning the new buffer and the removed suffix.
    #[must_use]
    pub fn delete_to_line_end(&self, row: usize, col: usize) -> (Self, String) {
        let mut lines = self.lines.clone();
        let killed = match lines.get_mut(row) {
            Some(line) => {
                let at = byte_index(line, col);
                line.split_off(at)
            }
            None => String::new(),
        };
        (Self { lines }, killed)
    }

    /// Replace the text of line `row`.
    ///
    /// `text` is stored verbatim and should not contain `'\n'`.
    #[must_use]
    pub fn set_line(&self, row: usize, text: &str) -> Self {
        let mut lines = self.lines.clone();
        if let Some(line) = lines.get_mut(row) {
            text.clone_into(line);
        }
        Self { lines }
    }

    /// Append line `row + 1` onto line `row`. No-op on the last line.
    #[must_use]
    pub fn join_with_next_line(&self, row: usize) -> Self {
        if row + 1 >= self.lines.len() {
            return self.clone();
        }
        let mut lines = self.lines.clone();
        let next = lines.remove(row + 1);
        lines[row].push_str(&next);
        Self { lines }
    }

    /// Insert `text` at `(row, col)`, splitting lines on `'\n'`.
    ///
    /// Returns the new buffer and the position just past the inserted text.
    /// An invalid row leaves the buffer unchanged and returns `(row, col)`.
    #[must_use]
    pub fn insert_text(&self, row: usize, col: usize, text: &str) -> (Self, Position) {
        let Some(line) = self.lines.get(row) else {
            return (self.clone(), Position::new(row, col));
        };
        let at = byte_index(line, col);
        let (head, tail) = line.split_at(at);

        let mut pieces = text.split('\n');
        let mut inserted: Vec<String> = Vec::new();
        let first = pieces.next().unwrap_or_default();
        inserted.push(format!("{head}{first}"));
        inserted.extend(pieces.map(str::to_string));

        let last = inserted.len() - 1;
        let end = if last == 0 {
            Position::new(row, head.chars().count() + first.chars().count())
        } else {
            Position::new(row + last, inserted[last].chars().count())
        };
        inserted[last].push_str(tail);

        let mut lines = Vec::with_capacity(self.lines.len() + last);
        lines.extend_from_slice(&self.lines[..row]);
        lines.extend(inserted);
        lines.extend_from_slice(&self.lines[row + 1..]);
        (Self { lines }, end)
    }

    /// Remove the text covered by `range`, joining lines it spans.
    #[must_use]
    pub fn delete_range(&self, range: Range) -> Self {
        let start = self.clamp(range.start());
        let end = self.clamp(range.end());
        if start >= end {
            return self.clone();
        }

        let head = rune_slice(&self.lines[start.row], 0, start.col);
        let tail = rune_slice(&self.lines[end.row], end.col, usize::MAX);
        let joined = format!("{head}{tail}");

        let mut lines = Vec::with_capacity(self.lines.len() - (end.row - start.row));
        lines.extend_from_slice(&self.lines[..start.row]);
        lines.push(joined);
        lines.extend_from_slice(&self.lines[end.row + 1..]);
        Self { lines }
    }

    /// Text covered by `range`, with spanned lines joined by `"\n"`.
    #[must_use]
    pub fn text_in_range(&self, range: Range) -> String {
        let start = self.clamp(range.start());
        let end = self.clamp(range.end());
        if start >= end {
            return String::new();
        }
        if start.row == end.row {
            return rune_slice(&self.lines[start.row], start.col, end.col).to_string();
        }

        let mut out = String::new();
        out.push_str(rune_slice(&self.lines[start.row], start.col, usize::MAX));
        for line in &self.lines[start.row + 1..end.row] {
            out.push('\n');
            out.push_str(line);
        }
        out.push('\n');
        out.push_str(rune_slice(&self.lines[end.row], 0, end.col));
        out
    }

    /// Clamp `pos` to the nearest position that exists in this buffer.
    #[must_use]
    pub fn clamp(&self, pos: Position) -> Position {
        let row = pos.row.min(self.lines.len() - 1);
        Position::new(row, pos.col.min(self.line_len(row)))
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_new_buffer_has_one_empty_line() {
        let buf = Buffer::new();
        assert_eq!(buf.line_count(), 1);
        assert!(buf.is_empty());
        assert_eq!(buf.to_string(), "");
        assert_eq!(Buffer::from_lines(Vec::<String>::new()), buf);
    }

    #[test]
    fn test_line_out_of_range_is_empty() {
        let buf = Buffer::from_text("one\ntwo");
        assert_eq!(buf.line(1), "two");
        assert_eq!(buf.line(9), "");
        assert_eq!(buf.line_len(9), 0);
    }

    #[test]
    fn test_crlf_keeps_carriage_return() {
        let buf = Buffer::from_text("a\r\nb");
        assert_eq!(buf.line(0), "a\r");
        assert_eq!(buf.line(1), "b");
        assert_eq!(buf.to_string(), "a\r\nb");
    }

    #[test]
    fn test_insert_char_clamps_column() {
        let buf = Buffer::from_text("ab");
        assert_eq!(buf.insert_char(0, 99, 'c').line(0), "abc");
        assert_eq!(buf.insert_char(0, 1, 'x').line(0), "axb");
        assert_eq!(buf.insert_char(5, 0, 'x'), buf);
    }

    #[test]
    fn test_mutators_do_not_alias() {
        let buf = Buffer::from_text("hello");
        let edited = buf.insert_char(0, 0, '>');
        assert_eq!(buf.line(0), "hello");
        assert_eq!(edited.line(0), ">hello");
    }

    #[test]
    fn test_multibyte_columns_are_runes() {
        let buf = Buffer::from_text("héllo");
        assert_eq!(buf.line_len(0), 5);
        assert_eq!(buf.delete_char(0, 1).line(0), "hllo");
        assert_eq!(buf.insert_char(0, 2, '_').line(0), "hé_llo");
    }

    #[test]
    fn test_delete_char_past_end_is_noop() {
        let buf = Buffer::from_text("abc");
        assert_eq!(buf.delete_char(0, 3), buf);
        assert_eq!(buf.delete_char(0, 2).line(0), "ab");
    }

    #[test]
    fn test_insert_newline_splits() {
        let buf = Buffer::from_text("hello world").insert_newline(0, 5);
        assert_eq!(buf.lines(), ["hello", " world"]);
        let buf = Buffer::from_text("abc").insert_newline(0, 100);
        assert_eq!(buf.lines(), ["abc", ""]);
    }

    #[test]
    fn test_delete_line_never_empties() {
        let buf = Buffer::from_text("only");
        let buf = buf.delete_line(0);
        assert_eq!(buf.line_count(), 1);
        assert!(buf.is_empty());

        let buf = Buffer::from_text("a\nb\nc").delete_line(1);
        assert_eq!(buf.lines(), ["a", "c"]);
    }

    #[test]
    fn test_delete_to_line_end() {
        let (buf, killed) = Buffer::from_text("hello world").delete_to_line_end(0, 6);
        assert_eq!(buf.line(0), "hello ");
        assert_eq!(killed, "world");

        let (buf, killed) = Buffer::from_text("abc").delete_to_line_end(0, 3);
        assert_eq!(buf.line(0), "abc");
        assert_eq!(killed, "");
    }

    #[test]
    fn test_set_line() {
        let buf = Buffer::from_text("a\nb").set_line(1, "bee");
        assert_eq!(buf.to_string(), "a\nbee");
        assert_eq!(buf.set_line(7, "x"), buf);
    }

    #[test]
    fn test_join_with_next_line() {
        let buf = Buffer::from_text("foo\nbar\nbaz");
        assert_eq!(buf.join_with_next_line(0).lines(), ["foobar", "baz"]);
        assert_eq!(buf.join_with_next_line(2), buf);
    }

    #[test]
    fn test_insert_text_multiline() {
        let (buf, end) = Buffer::from_text("x").insert_text(0, 0, "a\nb");
        assert_eq!(buf.to_string(), "a\nbx");
        assert_eq!(end, pos(1, 1));

        let (buf, end) = Buffer::from_text("hello").insert_text(0, 2, "XY");
        assert_eq!(buf.to_string(), "heXYllo");
        assert_eq!(end, pos(0, 4));

        let (buf, end) = Buffer::from_text("ab\ncd").insert_text(1, 1, "\n");
        assert_eq!(buf.lines(), ["ab", "c", "d"]);
        assert_eq!(end, pos(2, 0));
    }

    #[test]
    fn test_text_in_range() {
        let buf = Buffer::from_text("hello\nbig\nworld");
        let single = Range::new(pos(0, 1), pos(0, 4));
        assert_eq!(buf.text_in_range(single), "ell");

        let multi = Range::new(pos(2, 3), pos(0, 3));
        assert_eq!(buf.text_in_range(multi), "lo\nbig\nwor");

        let clamped = Range::new(pos(1, 0), pos(9, 9));
        assert_eq!(buf.text_in_range(clamped), "big\nworld");
    }

    #[test]
    fn test_delete_range_joins_lines() {
        let buf = Buffer::from_text("hello\nbig\nworld");
        let buf = buf.delete_range(Range::new(pos(0, 3), pos(2, 3)));
        assert_eq!(buf.to_string(), "helld");
    }

    #[test]
    fn test_end_position_and_clamp() {
        let buf = Buffer::from_text("ab\ncde");
        assert_eq!(buf.end_position(), pos(1, 3));
        assert_eq!(buf.clamp(pos(5, 5)), pos(1, 3));
        assert_eq!(buf.clamp(pos(0, 9)), pos(0, 2));
        assert_eq!(buf.char_count(), 5);
    }
}
