//! Keyboard input: normalized key events and the keymap that turns them
//! into engine commands.
//!
//! Escape-sequence decoding is left to the host's terminal layer; this
//! module starts at the logical key.

mod keyboard;
mod keymap;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use keymap::{Chord, Command, Keymap};
