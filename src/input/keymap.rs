//! Key-to-command dispatch.
//!
//! A [`Keymap`] is a precomputed table from `(Chord, KeyCode)` to a
//! [`Command`]. Dispatch picks exactly one chord per event, with Ctrl taking
//! priority over Alt and Alt over no modifier, so `Ctrl+Alt+F` is looked up as
//! a Ctrl chord and never falls through to the Alt table. Letters are folded
//! to lowercase before lookup. An unmodified printable character that has no
//! binding of its own is inserted. Anything else is passed through unchanged.
//!
//! # Examples
//!
//! ```
//! use opentui_textarea::{Command, KeyCode, KeyEvent, Keymap, TextArea};
//!
//! let keymap = Keymap::emacs();
//! let area = TextArea::new().with_value("hello world");
//!
//! let (area, cmd) = keymap.dispatch(KeyEvent::with_ctrl(KeyCode::Char('e')), &area);
//! assert_eq!(cmd, Some(Command::MoveToLineEnd));
//!
//! let (area, cmd) = keymap.dispatch(KeyEvent::with_alt(KeyCode::Backspace), &area);
//! assert_eq!(cmd, Some(Command::KillWordBackward));
//! assert_eq!(area.value(), "hello ");
//! ```

use crate::input::keyboard::{KeyCode, KeyEvent, KeyModifiers};
use crate::text::TextArea;
use std::collections::HashMap;

/// The modifier class an event is dispatched under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Chord {
    Ctrl,
    Alt,
    Plain,
}

impl Chord {
    /// Classify modifiers, Ctrl first, then Alt. Shift is ignored.
    #[must_use]
    pub fn of(modifiers: KeyModifiers) -> Self {
        if modifiers.contains(KeyModifiers::CTRL) {
            Self::Ctrl
        } else if modifiers.contains(KeyModifiers::ALT) {
            Self::Alt
        } else {
            Self::Plain
        }
    }
}

/// An engine operation a key can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveToLineStart,
    MoveToLineEnd,
    MoveToBufferStart,
    MoveToBufferEnd,
    ForwardWord,
    BackwardWord,
    InsertChar(char),
    InsertNewline,
    DeleteBackward,
    DeleteForward,
    KillLine,
    /// Move to the line start, then kill to the line end.
    KillWholeLine,
    KillWord,
    KillWordBackward,
    Yank,
}

impl Command {
    /// Run the command against `area`.
    #[must_use]
    pub fn apply(self, area: &TextArea) -> TextArea {
        match self {
            Self::MoveLeft => area.move_left(),
            Self::MoveRight => area.move_right(),
            Self::MoveUp => area.move_up(),
            Self::MoveDown => area.move_down(),
            Self::MoveToLineStart => area.move_to_line_start(),
            Self::MoveToLineEnd => area.move_to_line_end(),
            Self::MoveToBufferStart => area.move_cursor_to_start(),
            Self::MoveToBufferEnd => area.move_cursor_to_end(),
            Self::ForwardWord => area.forward_word(),
            Self::BackwardWord => area.backward_word(),
            Self::InsertChar(ch) => area.insert_char(ch),
            Self::InsertNewline => area.insert_newline(),
            Self::DeleteBackward => area.delete_char_backward(),
            Self::DeleteForward => area.delete_char_forward(),
            Self::KillLine => area.kill_line(),
            Self::KillWholeLine => area.move_to_line_start().kill_line(),
            Self::KillWord => area.kill_word(),
            Self::KillWordBackward => area.kill_word_backward(),
            Self::Yank => area.yank(),
        }
    }
}

/// Table-driven key dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keymap {
    bindings: HashMap<(Chord, KeyCode), Command>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::emacs()
    }
}

impl Keymap {
    /// A keymap with no bindings. Printable characters still insert.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// The Emacs profile.
    #[must_use]
    pub fn emacs() -> Self {
        use Chord::{Alt, Ctrl, Plain};
        use Command as C;

        let table = [
            (Ctrl, KeyCode::Char('a'), C::MoveToLineStart),
            (Ctrl, KeyCode::Char('e'), C::MoveToLineEnd),
            (Ctrl, KeyCode::Char('p'), C::MoveUp),
            (Ctrl, KeyCode::Char('n'), C::MoveDown),
            (Ctrl, KeyCode::Char('f'), C::MoveRight),
            (Ctrl, KeyCode::Char('b'), C::MoveLeft),
            (Ctrl, KeyCode::Char('k'), C::KillLine),
            (Ctrl, KeyCode::Char('u'), C::KillWholeLine),
            (Ctrl, KeyCode::Char('w'), C::KillWordBackward),
            (Ctrl, KeyCode::Char('y'), C::Yank),
            (Ctrl, KeyCode::Char('d'), C::DeleteForward),
            (Ctrl, KeyCode::Char('h'), C::DeleteBackward),
            (Ctrl, KeyCode::Char('m'), C::InsertNewline),
            (Alt, KeyCode::Char('f'), C::ForwardWord),
            (Alt, KeyCode::Char('b'), C::BackwardWord),
            (Alt, KeyCode::Char('<'), C::MoveToBufferStart),
            (Alt, KeyCode::Char('>'), C::MoveToBufferEnd),
            (Alt, KeyCode::Char('d'), C::KillWord),
            (Alt, KeyCode::Backspace, C::KillWordBackward),
            (Plain, KeyCode::Left, C::MoveLeft),
            (Plain, KeyCode::Right, C::MoveRight),
            (Plain, KeyCode::Up, C::MoveUp),
            (Plain, KeyCode::Down, C::MoveDown),
            (Plain, KeyCode::Home, C::MoveToLineStart),
            (Plain, KeyCode::End, C::MoveToLineEnd),
            (Plain, KeyCode::Backspace, C::DeleteBackward),
            (Plain, KeyCode::Delete, C::DeleteForward),
            (Plain, KeyCode::Enter, C::InsertNewline),
            (Plain, KeyCode::Space, C::InsertChar(' ')),
        ];

        Self {
            bindings: table
                .into_iter()
                .map(|(chord, key, cmd)| ((chord, key), cmd))
                .collect(),
        }
    }

    /// Add or replace a binding.
    #[must_use]
    pub fn bind(mut self, chord: Chord, key: KeyCode, command: Command) -> Self {
        self.bindings.insert((chord, key.folded()), command);
        self
    }

    /// Remove a binding.
    #[must_use]
    pub fn unbind(mut self, chord: Chord, key: KeyCode) -> Self {
        self.bindings.remove(&(chord, key.folded()));
        self
    }

    /// The command bound to `event`, if any.
    ///
    /// Includes the implicit insert for unmodified printable characters.
    #[must_use]
    pub fn lookup(&self, event: KeyEvent) -> Option<Command> {
        let chord = Chord::of(event.modifiers);
        if let Some(command) = self.bindings.get(&(chord, event.code.folded())) {
            return Some(*command);
        }
        match (chord, event.code) {
            (Chord::Plain, KeyCode::Char(ch)) if !ch.is_control() => Some(Command::InsertChar(ch)),
            _ => None,
        }
    }

    /// Apply the command bound to `event`.
    ///
    /// Returns the new area and the command that ran, or an unchanged copy
    /// and `None` when nothing is bound.
    #[must_use]
    pub fn dispatch(&self, event: KeyEvent, area: &TextArea) -> (TextArea, Option<Command>) {
        match self.lookup(event) {
            Some(command) => (command.apply(area), Some(command)),
            None => (area.clone(), None),
        }
    }

    /// Number of explicit bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
