//! The `TextArea` aggregate.
//!
//! [`TextArea`] bundles a [`Buffer`], cursor, optional selection, kill ring,
//! display configuration and host hooks into one immutable value. Every
//! operation returns a new `TextArea`; hooks are shared between the old and
//! new values, everything else is independent.
//!
//! # Examples
//!
//! ```
//! use opentui_textarea::{Position, TextArea};
//!
//! let area = "hello".chars().fold(TextArea::new(), |area, ch| area.insert_char(ch));
//! assert_eq!(area.value(), "hello");
//! assert_eq!(area.cursor_position(), Position::new(0, 5));
//!
//! let area = area.with_value("hello\nworld").move_cursor_to_end();
//! assert_eq!(area.cursor_position(), Position::new(1, 5));
//! ```
//!
//! # Scrolling
//!
//! The area keeps a viewport of `width` × `height` cells. Whenever the cursor
//! or content changes, the scroll offsets follow the cursor so it stays
//! visible. Renderers should draw [`TextArea::visible_lines`] and place the
//! caret at [`TextArea::visible_cursor`], which is already translated into
//! viewport coordinates.

use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use crate::text::buffer::{Buffer, rune_slice};
use crate::text::cursor::{Cursor, Selection};
use crate::text::editing::EditingService;
use crate::text::hooks::{BoundaryObserver, CursorObserver, Hooks, MovementValidator};
use crate::text::kill_ring::KillRing;
use crate::text::navigation::NavigationService;
use crate::text::position::Position;
use std::sync::Arc;

/// Default viewport width in cells.
pub const DEFAULT_WIDTH: usize = 80;
/// Default viewport height in rows.
pub const DEFAULT_HEIGHT: usize = 24;

/// Display and capacity configuration for a [`TextArea`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextAreaConfig {
    /// Viewport width in columns.
    pub width: usize,
    /// Viewport height in rows.
    pub height: usize,
    /// Maximum number of lines; `0` means unlimited.
    pub max_lines: usize,
    /// Maximum number of runes, not counting line breaks; `0` means unlimited.
    pub max_chars: usize,
    /// Text shown by the renderer while the area is empty.
    pub placeholder: String,
    /// Soft-wrap long lines instead of scrolling horizontally.
    pub wrap: bool,
    /// Reject every content mutation.
    pub read_only: bool,
    /// Draw a line-number gutter.
    pub show_line_numbers: bool,
    /// Draw the caret.
    pub show_cursor: bool,
}

impl Default for TextAreaConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_lines: 0,
            max_chars: 0,
            placeholder: String::new(),
            wrap: false,
            read_only: false,
            show_line_numbers: false,
            show_cursor: true,
        }
    }
}

impl TextAreaConfig {
    /// Check that the viewport has a usable size.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Immutable multiline text input.
///
/// Holds the following invariants for every reachable value:
///
/// - `cursor.row < buffer.line_count()`
/// - `cursor.col <= buffer.line_len(cursor.row)`
/// - `scroll_y <= cursor.row < scroll_y + height`
#[derive(Clone, Debug)]
pub struct TextArea {
    buffer: Buffer,
    cursor: Cursor,
    selection: Option<Selection>,
    kill_ring: KillRing,
    config: TextAreaConfig,
    scroll_x: usize,
    scroll_y: usize,
    hooks: Hooks,
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for TextArea {
    fn eq(&self, other: &Self) -> bool {
        self.buffer == other.buffer
            && self.cursor == other.cursor
            && self.selection == other.selection
            && self.kill_ring == other.kill_ring
            && self.config == other.config
            && self.scroll_x == other.scroll_x
            && self.scroll_y == other.scroll_y
            && self.hooks.same_as(&other.hooks)
    }
}

impl TextArea {
    /// Create an empty 80×24 editable area with no limits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: Buffer::new(),
            cursor: Cursor::start(),
            selection: None,
            kill_ring: KillRing::default(),
            config: TextAreaConfig::default(),
            scroll_x: 0,
            scroll_y: 0,
            hooks: Hooks::default(),
        }
    }

    /// Create an empty area with the given configuration.
    pub fn with_config(config: TextAreaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Get the underlying buffer.
    #[must_use]
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Get the current cursor.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Get the cursor as a position.
    #[must_use]
    pub fn cursor_position(&self) -> Position {
        self.cursor.position()
    }

    /// Get the active selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Get the kill ring.
    #[must_use]
    pub fn kill_ring(&self) -> &KillRing {
        &self.kill_ring
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &TextAreaConfig {
        &self.config
    }

    /// Get the registered hooks.
    #[must_use]
    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    /// Full text content, lines joined with `'\n'`.
    #[must_use]
    pub fn value(&self) -> String {
        self.buffer.to_string()
    }

    /// Number of lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    /// Text of the line under the cursor.
    #[must_use]
    pub fn current_line(&self) -> &str {
        self.buffer.line(self.cursor.row)
    }

    /// True when the content is a single empty line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Viewport width in columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.config.width
    }

    /// Viewport height in rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.config.height
    }

    /// Line limit; `0` means unlimited.
    #[must_use]
    pub fn max_lines(&self) -> usize {
        self.config.max_lines
    }

    /// Rune limit, not counting line breaks; `0` means unlimited.
    #[must_use]
    pub fn max_chars(&self) -> usize {
        self.config.max_chars
    }

    /// Text shown while the area is empty.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.config.placeholder
    }

    /// Whether long lines soft-wrap.
    #[must_use]
    pub fn wrap(&self) -> bool {
        self.config.wrap
    }

    /// Whether content mutations are refused.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.config.read_only
    }

    /// Whether the renderer draws a line-number gutter.
    #[must_use]
    pub fn show_line_numbers(&self) -> bool {
        self.config.show_line_numbers
    }

    /// Whether the renderer draws the caret.
    #[must_use]
    pub fn show_cursor(&self) -> bool {
        self.config.show_cursor
    }

    /// Horizontal and vertical scroll offsets as `(x, y)`.
    #[must_use]
    pub fn scroll_offset(&self) -> (usize, usize) {
        (self.scroll_x, self.scroll_y)
    }

    // ------------------------------------------------------------------
    // Renderer boundary
    // ------------------------------------------------------------------

    /// Lines inside the viewport.
    ///
    /// Rows start at the vertical scroll offset. Without wrapping, each line
    /// is also cut to the `[scroll_x, scroll_x + width)` rune window.
    #[must_use]
    pub fn visible_lines(&self) -> Vec<&str> {
        let end = self
            .scroll_y
            .saturating_add(self.config.height)
            .min(self.buffer.line_count());
        self.buffer.lines()[self.scroll_y..end]
            .iter()
            .map(|line| {
                if self.config.wrap {
                    line.as_str()
                } else {
                    rune_slice(line, self.scroll_x, self.scroll_x.saturating_add(self.config.width))
                }
            })
            .collect()
    }

    /// The cursor relative to the viewport's top-left corner.
    ///
    /// Returns `None` when the cursor lies outside the viewport. With
    /// wrapping enabled the column is the logical rune column; mapping it onto
    /// wrapped display rows is left to the renderer.
    #[must_use]
    pub fn visible_cursor(&self) -> Option<Position> {
        let row = self.cursor.row.checked_sub(self.scroll_y)?;
        let col = self.cursor.col.checked_sub(self.scroll_x)?;
        if row >= self.config.height || (!self.config.wrap && col >= self.config.width) {
            return None;
        }
        Some(Position::new(row, col))
    }

    // ------------------------------------------------------------------
    // Content, cursor and selection setters
    // ------------------------------------------------------------------

    /// Replace the buffer. The cursor moves to `(0, 0)` and the selection
    /// is cleared.
    #[must_use]
    pub fn with_buffer(&self, buffer: Buffer) -> Self {
        Self {
            buffer,
            cursor: Cursor::start(),
            selection: None,
            ..self.clone()
        }
        .scroll_to_cursor()
    }

    /// Replace the content with `text`, split on `'\n'`.
    ///
    /// Same side effects as [`with_buffer`](Self::with_buffer).
    #[must_use]
    pub fn with_value(&self, text: &str) -> Self {
        self.with_buffer(Buffer::from_text(text))
    }

    /// Place the cursor, clamped to the buffer. Hooks are not consulted.
    #[must_use]
    pub fn with_cursor(&self, cursor: Cursor) -> Self {
        let pos = self.buffer.clamp(cursor.position());
        Self {
            cursor: Cursor::from(pos),
            ..self.clone()
        }
        .scroll_to_cursor()
    }

    /// Set the selection. Both ends are clamped to the buffer.
    #[must_use]
    pub fn with_selection(&self, selection: Selection) -> Self {
        let selection = Selection::new(
            self.buffer.clamp(selection.anchor),
            self.buffer.clamp(selection.cursor),
        );
        Self {
            selection: Some(selection),
            ..self.clone()
        }
    }

    /// Start a selection anchored at the cursor.
    #[must_use]
    pub fn start_selection(&self) -> Self {
        self.with_selection(Selection::at(self.cursor_position()))
    }

    /// Move the selection's cursor end to the current cursor.
    ///
    /// Without an active selection this is a no-op.
    #[must_use]
    pub fn extend_selection(&self) -> Self {
        match self.selection {
            Some(selection) => self.with_selection(selection.extend_to(self.cursor_position())),
            None => self.clone(),
        }
    }

    /// Drop the selection.
    #[must_use]
    pub fn clear_selection(&self) -> Self {
        Self {
            selection: None,
            ..self.clone()
        }
    }

    /// Text covered by the selection, or `""` without one.
    #[must_use]
    pub fn selected_text(&self) -> String {
        self.selection
            .map(|sel| self.buffer.text_in_range(sel.range()))
            .unwrap_or_default()
    }

    /// Replace the kill ring.
    #[must_use]
    pub fn with_kill_ring(&self, kill_ring: KillRing) -> Self {
        Self {
            kill_ring,
            ..self.clone()
        }
    }

    /// Rotate the kill ring to the next-older entry.
    #[must_use]
    pub fn rotate_kill_ring(&self) -> Self {
        self.with_kill_ring(self.kill_ring.yank_pop())
    }

    // ------------------------------------------------------------------
    // Configuration setters
    // ------------------------------------------------------------------

    /// Resize the viewport. Zero dimensions are raised to 1.
    #[must_use]
    pub fn with_size(&self, width: usize, height: usize) -> Self {
        self.map_config(|config| {
            config.width = width.max(1);
            config.height = height.max(1);
        })
    }

    /// Limit the number of lines; `0` removes the limit.
    #[must_use]
    pub fn with_max_lines(&self, max_lines: usize) -> Self {
        self.map_config(|config| config.max_lines = max_lines)
    }

    /// Limit the number of runes; `0` removes the limit.
    #[must_use]
    pub fn with_max_chars(&self, max_chars: usize) -> Self {
        self.map_config(|config| config.max_chars = max_chars)
    }

    /// Set the placeholder text.
    #[must_use]
    pub fn with_placeholder(&self, placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        self.map_config(|config| config.placeholder = placeholder)
    }

    /// Enable or disable soft wrapping.
    #[must_use]
    pub fn with_wrap(&self, wrap: bool) -> Self {
        self.map_config(|config| config.wrap = wrap)
    }

    /// Make the area read-only or editable.
    #[must_use]
    pub fn with_read_only(&self, read_only: bool) -> Self {
        self.map_config(|config| config.read_only = read_only)
    }

    /// Show or hide the line-number gutter.
    #[must_use]
    pub fn with_show_line_numbers(&self, show: bool) -> Self {
        self.map_config(|config| config.show_line_numbers = show)
    }

    /// Show or hide the caret.
    #[must_use]
    pub fn with_show_cursor(&self, show: bool) -> Self {
        self.map_config(|config| config.show_cursor = show)
    }

    fn map_config(&self, f: impl FnOnce(&mut TextAreaConfig)) -> Self {
        let mut config = self.config.clone();
        f(&mut config);
        Self {
            config,
            ..self.clone()
        }
        .scroll_to_cursor()
    }

    // ------------------------------------------------------------------
    // Hooks
    // ------------------------------------------------------------------

    /// Register the movement validator, replacing any previous one.
    #[must_use]
    pub fn with_movement_validator(&self, validator: impl MovementValidator + 'static) -> Self {
        let mut hooks = self.hooks.clone();
        hooks.validator = Some(Arc::new(validator));
        Self {
            hooks,
            ..self.clone()
        }
    }

    /// Register the cursor-moved observer, replacing any previous one.
    #[must_use]
    pub fn with_cursor_observer(&self, observer: impl CursorObserver + 'static) -> Self {
        let mut hooks = self.hooks.clone();
        hooks.moved = Some(Arc::new(observer));
        Self {
            hooks,
            ..self.clone()
        }
    }

    /// Register the boundary-hit observer, replacing any previous one.
    #[must_use]
    pub fn with_boundary_observer(&self, observer: impl BoundaryObserver + 'static) -> Self {
        let mut hooks = self.hooks.clone();
        hooks.boundary = Some(Arc::new(observer));
        Self {
            hooks,
            ..self.clone()
        }
    }

    /// Remove every hook.
    #[must_use]
    pub fn without_hooks(&self) -> Self {
        Self {
            hooks: Hooks::default(),
            ..self.clone()
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// One rune left. See [`NavigationService::move_left`].
    #[must_use]
    pub fn move_left(&self) -> Self {
        NavigationService::move_left(self)
    }

    /// One rune right. See [`NavigationService::move_right`].
    #[must_use]
    pub fn move_right(&self) -> Self {
        NavigationService::move_right(self)
    }

    /// One line up.
    #[must_use]
    pub fn move_up(&self) -> Self {
        NavigationService::move_up(self)
    }

    /// One line down.
    #[must_use]
    pub fn move_down(&self) -> Self {
        NavigationService::move_down(self)
    }

    /// Column 0, or the first column the validator accepts.
    #[must_use]
    pub fn move_to_line_start(&self) -> Self {
        NavigationService::move_to_line_start(self)
    }

    /// Past the last rune of the current line.
    #[must_use]
    pub fn move_to_line_end(&self) -> Self {
        NavigationService::move_to_line_end(self)
    }

    /// Jump to `(0, 0)`.
    #[must_use]
    pub fn move_cursor_to_start(&self) -> Self {
        NavigationService::move_to_buffer_start(self)
    }

    /// Jump past the last rune of the last line.
    #[must_use]
    pub fn move_cursor_to_end(&self) -> Self {
        NavigationService::move_to_buffer_end(self)
    }

    /// Skip to the start of the next word.
    #[must_use]
    pub fn forward_word(&self) -> Self {
        NavigationService::forward_word(self)
    }

    /// Skip to the start of the previous word.
    #[must_use]
    pub fn backward_word(&self) -> Self {
        NavigationService::backward_word(self)
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    /// Insert a rune at the cursor.
    #[must_use]
    pub fn insert_char(&self, ch: char) -> Self {
        EditingService::insert_char(self, ch)
    }

    /// Insert text rune by rune, stopping at the first refused line break.
    #[must_use]
    pub fn insert_str(&self, text: &str) -> Self {
        EditingService::insert_str(self, text)
    }

    /// Split the line at the cursor.
    #[must_use]
    pub fn insert_newline(&self) -> Self {
        EditingService::insert_newline(self)
    }

    /// Backspace.
    #[must_use]
    pub fn delete_char_backward(&self) -> Self {
        EditingService::delete_char_backward(self)
    }

    /// Delete the rune under the cursor.
    #[must_use]
    pub fn delete_char_forward(&self) -> Self {
        EditingService::delete_char_forward(self)
    }

    /// Kill to the end of the line.
    #[must_use]
    pub fn kill_line(&self) -> Self {
        EditingService::kill_line(self)
    }

    /// Kill to the next word boundary.
    #[must_use]
    pub fn kill_word(&self) -> Self {
        EditingService::kill_word(self)
    }

    /// Kill back to the previous word boundary.
    #[must_use]
    pub fn kill_word_backward(&self) -> Self {
        EditingService::kill_word_backward(self)
    }

    /// Kill the selected text.
    #[must_use]
    pub fn kill_selection(&self) -> Self {
        EditingService::kill_selection(self)
    }

    /// Insert the current kill-ring entry.
    #[must_use]
    pub fn yank(&self) -> Self {
        EditingService::yank(self)
    }

    // ------------------------------------------------------------------
    // Service plumbing
    // ------------------------------------------------------------------

    /// Apply a cursor the services already computed, without hooks.
    pub(crate) fn place_cursor(&self, pos: Position) -> Self {
        self.with_cursor(Cursor::from(pos))
    }

    /// Swap in edited content and a new cursor, dropping the selection.
    pub(crate) fn replace_content(&self, buffer: Buffer, pos: Position) -> Self {
        let cursor = Cursor::from(buffer.clamp(pos));
        Self {
            buffer,
            cursor,
            selection: None,
            ..self.clone()
        }
        .scroll_to_cursor()
    }

    /// Like [`replace_content`](Self::replace_content), also recording `killed`.
    pub(crate) fn replace_content_killing(
        &self,
        buffer: Buffer,
        pos: Position,
        killed: &str,
    ) -> Self {
        let next = self.replace_content(buffer, pos);
        Self {
            kill_ring: next.kill_ring.kill(killed),
            ..next
        }
    }

    /// Log why a mutation was refused.
    pub(crate) fn refuse(&self, what: &str, why: &str) -> Self {
        emit_log(LogLevel::Debug, &format!("textarea: {what} refused: {why}"));
        self.clone()
    }

    /// Adjust scroll offsets so the cursor lies inside the viewport.
    fn scroll_to_cursor(self) -> Self {
        let height = self.config.height.max(1);
        let width = self.config.width.max(1);
        let Position { row, col } = self.cursor.position();

        let mut scroll_y = self.scroll_y.min(self.buffer.line_count() - 1);
        if row < scroll_y {
            scroll_y = row;
        } else if row >= scroll_y.saturating_add(height) {
            scroll_y = row + 1 - height;
        }

        let mut scroll_x = if self.config.wrap { 0 } else { self.scroll_x };
        if !self.config.wrap {
            if col < scroll_x {
                scroll_x = col;
            } else if col >= scroll_x.saturating_add(width) {
                scroll_x = col + 1 - width;
            }
        }

        Self {
            scroll_x,
            scroll_y,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let area = TextArea::new();
        assert_eq!(area.width(), 80);
        assert_eq!(area.height(), 24);
        assert_eq!(area.max_lines(), 0);
        assert_eq!(area.max_chars(), 0);
        assert!(!area.is_read_only());
        assert!(area.show_cursor());
        assert!(!area.show_line_numbers());
        assert!(area.is_empty());
        assert_eq!(area.cursor_position(), Position::origin());
        assert!(area.selection().is_none());
    }

    #[test]
    fn test_with_config_rejects_zero_size() {
        let config = TextAreaConfig {
            width: 0,
            ..TextAreaConfig::default()
        };
        assert_eq!(
            TextArea::with_config(config).unwrap_err(),
            Error::InvalidDimensions {
                width: 0,
                height: 24
            }
        );
        let area = TextArea::with_config(TextAreaConfig {
            placeholder: "type here".into(),
            ..TextAreaConfig::default()
        })
        .unwrap();
        assert_eq!(area.placeholder(), "type here");
    }

    #[test]
    fn test_with_buffer_resets_cursor_and_selection() {
        let area = TextArea::new()
            .with_value("abc\ndef")
            .with_cursor(Cursor::new(1, 2))
            .start_selection();
        assert!(area.selection().is_some());

        let area = area.with_value("xyz");
        assert_eq!(area.cursor_position(), Position::origin());
        assert!(area.selection().is_none());
    }

    #[test]
    fn test_with_cursor_clamps() {
        let area = TextArea::new().with_value("ab\ncdef").with_cursor(Cursor::new(9, 9));
        assert_eq!(area.cursor_position(), Position::new(1, 4));
        let area = area.with_cursor(Cursor::new(0, 9));
        assert_eq!(area.cursor_position(), Position::new(0, 2));
    }

    #[test]
    fn test_config_changes_do_not_touch_original() {
        let area = TextArea::new();
        let narrow = area.with_size(10, 3).with_read_only(true);
        assert_eq!(area.width(), 80);
        assert!(!area.is_read_only());
        assert_eq!((narrow.width(), narrow.height()), (10, 3));
        assert!(narrow.is_read_only());
        assert_eq!(TextArea::new().with_size(0, 0).width(), 1);
    }

    #[test]
    fn test_hooks_survive_copies() {
        let area = TextArea::new().with_movement_validator(|_: Position, _: Position| true);
        let copy = area.with_value("text").with_size(5, 5).insert_char('x');
        assert!(copy.hooks().has_validator());
        assert!(copy.hooks().same_as(area.hooks()));
        assert!(!area.without_hooks().hooks().has_validator());
    }

    #[test]
    fn test_selected_text() {
        let area = TextArea::new()
            .with_value("hello\nworld")
            .with_selection(Selection::new(Position::new(1, 3), Position::new(0, 2)));
        assert_eq!(area.selected_text(), "llo\nwor");
        assert_eq!(area.clear_selection().selected_text(), "");
    }

    #[test]
    fn test_extend_selection_follows_cursor() {
        let area = TextArea::new().with_value("abcdef").start_selection();
        let area = area.move_right().move_right().extend_selection();
        assert_eq!(area.selected_text(), "ab");
        assert_eq!(TextArea::new().extend_selection().selection(), None);
    }

    #[test]
    fn test_vertical_scroll_follows_cursor() {
        let text = (0..10).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let area = TextArea::new().with_size(20, 3).with_value(&text);
        assert_eq!(area.scroll_offset(), (0, 0));

        let area = area.move_cursor_to_end();
        assert_eq!(area.scroll_offset().1, 7);
        assert_eq!(area.visible_lines(), ["line 7", "line 8", "line 9"]);
        assert_eq!(area.visible_cursor(), Some(Position::new(2, 6)));

        let area = area.move_cursor_to_start();
        assert_eq!(area.scroll_offset(), (0, 0));
        assert_eq!(area.visible_cursor(), Some(Position::origin()));
    }

    #[test]
    fn test_horizontal_scroll_without_wrap() {
        let area = TextArea::new()
            .with_size(4, 2)
            .with_value("abcdefghij")
            .move_to_line_end();
        assert_eq!(area.scroll_offset(), (7, 0));
        assert_eq!(area.visible_lines(), ["hij"]);
        assert_eq!(area.visible_cursor(), Some(Position::new(0, 3)));

        let wrapped = area.with_wrap(true);
        assert_eq!(wrapped.scroll_offset(), (0, 0));
        assert_eq!(wrapped.visible_lines(), ["abcdefghij"]);
        assert_eq!(wrapped.visible_cursor(), Some(Position::new(0, 10)));
    }

    #[test]
    fn test_unbounded_size_after_scroll() {
        let area = TextArea::new()
            .with_size(4, 2)
            .with_value("abcdefghij")
            .move_to_line_end();
        assert_eq!(area.scroll_offset(), (7, 0));

        let wide = area.with_size(usize::MAX, 2);
        assert_eq!(wide.scroll_offset(), (7, 0));
        assert_eq!(wide.visible_lines(), ["hij"]);
        assert_eq!(wide.visible_cursor(), Some(Position::new(0, 3)));

        let text = (0..10).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let tall = TextArea::new()
            .with_size(5, 3)
            .with_value(&text)
            .move_cursor_to_end()
            .with_size(usize::MAX, usize::MAX);
        assert_eq!(tall.scroll_offset(), (0, 7));
        assert_eq!(tall.visible_lines(), ["7", "8", "9"]);
        assert_eq!(tall.move_cursor_to_start().scroll_offset(), (0, 0));
    }

    #[test]
    fn test_equal_values_compare_equal() {
        let a = TextArea::new().with_value("same");
        let b = TextArea::new().with_value("same");
        assert_eq!(a, b);
        assert_ne!(a, b.insert_char('!'));
    }

    #[test]
    fn test_rotate_kill_ring() {
        let area = TextArea::new().with_kill_ring(KillRing::new(3).kill("a").kill("b"));
        assert_eq!(area.kill_ring().yank(), "b");
        assert_eq!(area.rotate_kill_ring().kill_ring().yank(), "a");
    }
}
