//! Fuzz target for key dispatch.
//!
//! Feeds arbitrary key sequences through the Emacs keymap and checks that
//! the cursor stays inside the buffer and the limits hold.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use opentui_textarea::{KeyCode, KeyEvent, KeyModifiers, Keymap, Position, TextArea};

/// Structured input for dispatch fuzzing.
#[derive(Arbitrary, Debug)]
struct Session {
    initial: String,
    max_lines: u8,
    max_chars: u8,
    width: u8,
    height: u8,
    /// Column before which the validator vetoes moves on row 0.
    guard: u8,
    keys: Vec<Key>,
}

#[derive(Arbitrary, Debug)]
struct Key {
    code: Code,
    ctrl: bool,
    alt: bool,
    shift: bool,
}

#[derive(Arbitrary, Debug)]
enum Code {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Backspace,
    Delete,
    Enter,
    Space,
    Char(char),
    Other,
}

impl Key {
    fn to_event(&self) -> KeyEvent {
        let code = match self.code {
            Code::Left => KeyCode::Left,
            Code::Right => KeyCode::Right,
            Code::Up => KeyCode::Up,
            Code::Down => KeyCode::Down,
            Code::Home => KeyCode::Home,
            Code::End => KeyCode::End,
            Code::Backspace => KeyCode::Backspace,
            Code::Delete => KeyCode::Delete,
            Code::Enter => KeyCode::Enter,
            Code::Space => KeyCode::Space,
            Code::Char(c) => KeyCode::Char(c),
            Code::Other => KeyCode::Other,
        };
        let mut modifiers = KeyModifiers::empty();
        modifiers.set(KeyModifiers::CTRL, self.ctrl);
        modifiers.set(KeyModifiers::ALT, self.alt);
        modifiers.set(KeyModifiers::SHIFT, self.shift);
        KeyEvent::new(code, modifiers)
    }
}

fuzz_target!(|session: Session| {
    let guard = usize::from(session.guard % 8);
    let max_lines = usize::from(session.max_lines % 6);
    let max_chars = usize::from(session.max_chars);

    let mut area = TextArea::new()
        .with_size(usize::from(session.width), usize::from(session.height))
        .with_value(&session.initial)
        .with_max_lines(max_lines)
        .with_max_chars(max_chars)
        .with_movement_validator(move |_: Position, to: Position| to.row > 0 || to.col >= guard);
    let keymap = Keymap::emacs();

    for key in session.keys.iter().take(500) {
        let lines_before = area.line_count();
        let chars_before = area.buffer().char_count();
        let (next, command) = keymap.dispatch(key.to_event(), &area);

        let Position { row, col } = next.cursor_position();
        assert!(row < next.line_count());
        assert!(col <= next.buffer().line_len(row));
        assert!(next.visible_cursor().is_some());

        if command != Some(opentui_textarea::Command::Yank) {
            if max_lines > 0 && next.line_count() > lines_before {
                assert!(next.line_count() <= max_lines);
            }
            if max_chars > 0 && next.buffer().char_count() > chars_before {
                assert!(next.buffer().char_count() <= max_chars);
            }
        }
        area = next;
    }
});
