//! `opentui_textarea` - Emacs-style multiline text input for terminal UIs
//!
//! An immutable text-editing engine meant to be embedded in shells, REPLs
//! and forms. The host owns a [`TextArea`] value, feeds key events through a
//! [`Keymap`], and hands the resulting value to its renderer. Movement can be
//! vetoed or observed through host hooks, e.g. to keep the caret out of a
//! prompt prefix.
//!
//! Rendering, display-width computation, styling and raw escape-sequence
//! decoding are left to the host.
//!
//! ```
//! use opentui_textarea::{KeyCode, KeyEvent, Keymap, TextArea};
//!
//! let keymap = Keymap::emacs();
//! let mut area = TextArea::new();
//! for event in "hi there".chars().map(KeyEvent::char) {
//!     area = keymap.dispatch(event, &area).0;
//! }
//! let (area, _) = keymap.dispatch(KeyEvent::with_ctrl(KeyCode::Char('w')), &area);
//! assert_eq!(area.value(), "hi ");
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow text::TextArea etc
#![allow(clippy::struct_excessive_bools)] // Display config needs multiple flags
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::must_use_candidate)] // Accessors are self-explanatory

pub mod error;
pub mod event;
pub mod input;
pub mod text;

pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};

// Re-export input types
pub use input::{Chord, Command, KeyCode, KeyEvent, KeyModifiers, Keymap};

// Re-export the engine
pub use text::{
    BoundaryObserver, Buffer, Cursor, CursorObserver, EditingService, Hooks, KillRing,
    MovementValidator, NavigationService, Position, Range, Selection, TextArea, TextAreaConfig,
};
