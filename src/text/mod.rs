//! The text-editing engine.
//!
//! Everything in this module is an immutable value: operations borrow their
//! input and return a new value, so a host can keep old states around (for a
//! history view, or to compare before/after) without copying defensively.
//!
//! Key types:
//!
//! - [`Buffer`]: line storage, always at least one line
//! - [`Cursor`], [`Selection`], [`Position`], [`Range`]: coordinates
//! - [`KillRing`]: Emacs-style cut history
//! - [`TextArea`]: the aggregate a host holds on to
//! - [`NavigationService`] / [`EditingService`]: the operations, also
//!   exposed as methods on `TextArea`
//! - [`MovementValidator`], [`CursorObserver`], [`BoundaryObserver`]: host hooks
//!
//! # Examples
//!
//! ## Editing and the kill ring
//!
//! ```
//! use opentui_textarea::{Cursor, Position, TextArea};
//!
//! let area = TextArea::new()
//!     .with_value("hello world")
//!     .with_cursor(Cursor::new(0, 6))
//!     .kill_line();
//! assert_eq!(area.value(), "hello ");
//! assert_eq!(area.kill_ring().yank(), "world");
//!
//! let area = area.move_cursor_to_start().yank();
//! assert_eq!(area.value(), "worldhello ");
//! assert_eq!(area.cursor_position(), Position::new(0, 5));
//! ```
//!
//! ## Observing blocked movement
//!
//! ```
//! use opentui_textarea::{Cursor, Position, TextArea};
//! use std::sync::{Arc, Mutex};
//!
//! let hits = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&hits);
//! let area = TextArea::new()
//!     .with_value("$ ls")
//!     .with_cursor(Cursor::new(0, 2))
//!     .with_movement_validator(|_from: Position, to: Position| to.col >= 2)
//!     .with_boundary_observer(move |pos: Position, reason: &str| {
//!         sink.lock().unwrap().push((pos, reason.to_string()));
//!     });
//!
//! let area = area.move_left();
//! assert_eq!(area.cursor_position(), Position::new(0, 2));
//! assert_eq!(
//!     hits.lock().unwrap()[0],
//!     (Position::new(0, 1), "movement blocked by validator".to_string())
//! );
//! ```

mod buffer;
mod cursor;
mod editing;
mod hooks;
mod kill_ring;
mod navigation;
mod position;
mod textarea;

pub use buffer::Buffer;
pub use cursor::{Cursor, Selection};
pub use editing::EditingService;
pub use hooks::{
    BoundaryObserver, CursorObserver, Hooks, MovementValidator, REASON_AT_BOTTOM, REASON_AT_TOP,
    REASON_BLOCKED, REASON_NO_VALID_POSITION,
};
pub use kill_ring::{DEFAULT_KILL_RING_SIZE, KillRing};
pub use navigation::{NavigationService, is_word_boundary};
pub use position::{Position, Range};
pub use textarea::{DEFAULT_HEIGHT, DEFAULT_WIDTH, TextArea, TextAreaConfig};
