//! Keyboard event types.
//!
//! These are the normalized events the key decoder hands to the engine. Raw
//! escape-sequence parsing happens upstream; by the time a [`KeyEvent`]
//! reaches the [`Keymap`](super::Keymap) it is a logical key plus modifiers.

use crate::error::{Error, Result};
use bitflags::bitflags;
use std::str::FromStr;

bitflags! {
    /// Keyboard modifier flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Alt/Option/Meta key.
        const ALT = 0b0000_0010;
        /// Control key.
        const CTRL = 0b0000_0100;
    }
}

/// A logical key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Enter/Return key.
    Enter,
    /// Space bar, when the decoder reports it as its own key.
    Space,
    /// A printable character.
    Char(char),
    /// Any key the engine has no use for.
    Other,
}

impl KeyCode {
    /// Check if this is a character key.
    #[must_use]
    pub fn is_char(&self) -> bool {
        matches!(self, Self::Char(_))
    }

    /// Check if this is a navigation key (arrows, home, end).
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::Left | Self::Right | Self::Up | Self::Down | Self::Home | Self::End
        )
    }

    /// Get the character if this is a character key.
    #[must_use]
    pub fn char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// The key with ASCII letters folded to lowercase.
    ///
    /// Bindings match letters case-insensitively; the modifier carries the
    /// meaning, not the case.
    #[must_use]
    pub fn folded(self) -> Self {
        match self {
            Self::Char(c) => Self::Char(c.to_ascii_lowercase()),
            other => other,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(if c == ' ' { Self::Space } else { Self::Char(c) });
        }
        let code = match name.to_ascii_lowercase().as_str() {
            "left" => Self::Left,
            "right" => Self::Right,
            "up" => Self::Up,
            "down" => Self::Down,
            "home" => Self::Home,
            "end" => Self::End,
            "backspace" | "bs" => Self::Backspace,
            "delete" | "del" => Self::Delete,
            "enter" | "return" | "ret" => Self::Enter,
            "space" | "spc" => Self::Space,
            _ => return None,
        };
        Some(code)
    }
}

/// A keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key code.
    pub code: KeyCode,
    /// Modifier keys held.
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// Create a new key event.
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key event with no modifiers.
    #[must_use]
    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    /// Create a character key event.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    /// Create a Ctrl+key event.
    #[must_use]
    pub fn with_ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CTRL)
    }

    /// Create an Alt+key event.
    #[must_use]
    pub fn with_alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT)
    }

    /// Check if Shift is held.
    #[must_use]
    pub fn shift(&self) -> bool {
        self.modifiers.contains(KeyModifiers::SHIFT)
    }

    /// Check if Ctrl is held.
    #[must_use]
    pub fn ctrl(&self) -> bool {
        self.modifiers.contains(KeyModifiers::CTRL)
    }

    /// Check if Alt is held.
    #[must_use]
    pub fn alt(&self) -> bool {
        self.modifiers.contains(KeyModifiers::ALT)
    }
}

impl From<char> for KeyEvent {
    fn from(c: char) -> Self {
        Self::char(c)
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::key(code)
    }
}

/// Parses chord descriptions such as `"ctrl+a"`, `"alt+<"`,
/// `"alt+backspace"`, `"ctrl++"` or `"space"`.
///
/// Modifier names are case-insensitive. A single-character key keeps its
/// case.
impl FromStr for KeyEvent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidKeySpec(s.to_string());
        let spec = s.trim();
        if spec.is_empty() {
            return Err(invalid());
        }

        let (mods, key) = if spec == "+" {
            ("", "+")
        } else if let Some(mods) = spec.strip_suffix("++") {
            (mods, "+")
        } else {
            spec.rsplit_once('+').unwrap_or(("", spec))
        };

        let mut modifiers = KeyModifiers::empty();
        if !mods.is_empty() {
            for name in mods.split('+') {
                modifiers |= match name.trim().to_ascii_lowercase().as_str() {
                    "ctrl" | "control" | "c" => KeyModifiers::CTRL,
                    "alt" | "meta" | "m" => KeyModifiers::ALT,
                    "shift" | "s" => KeyModifiers::SHIFT,
                    _ => return Err(invalid()),
                };
            }
        }

        let code = KeyCode::from_name(key).ok_or_else(invalid)?;
        Ok(Self::new(code, modifiers))
    }
}
