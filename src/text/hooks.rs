//! Host extension points for cursor movement.
//!
//! A host can register up to three hooks on a [`TextArea`](super::TextArea):
//!
//! - [`MovementValidator`]: consulted before a cursor move is applied; returning
//!   `false` vetoes the move.
//! - [`CursorObserver`]: told about every applied move.
//! - [`BoundaryObserver`]: told about every vetoed move, with the position that
//!   was attempted and a reason string.
//!
//! Hooks run inline on the caller's thread before the engine call returns.
//! They are shared by reference across every `TextArea` derived from the one
//! they were set on.
//!
//! Plain closures implement the traits:
//!
//! ```
//! use opentui_textarea::{Position, TextArea};
//!
//! // Keep the cursor out of a two-column prompt on the first line.
//! let area = TextArea::new()
//!     .with_value("> ls")
//!     .with_movement_validator(|_from: Position, to: Position| to.row > 0 || to.col >= 2)
//!     .move_cursor_to_end();
//! let area = area.move_to_line_start();
//! assert_eq!(area.cursor_position(), Position::new(0, 2));
//! ```

use crate::text::position::Position;
use std::fmt;
use std::sync::Arc;

/// Reason reported when the validator vetoes a move.
pub const REASON_BLOCKED: &str = "movement blocked by validator";
/// Reason reported when the validator vetoes a motion past the start of the
/// buffer (up from the first line, left or back a word from `(0, 0)`).
pub const REASON_AT_TOP: &str = "already at top";
/// Reason reported when the validator vetoes a motion past the end of the
/// buffer (down from the last line, right or forward a word from the end).
pub const REASON_AT_BOTTOM: &str = "already at bottom";
/// Reason reported when no column of a line is acceptable to the validator.
pub const REASON_NO_VALID_POSITION: &str = "no valid position found in line";

/// Decides whether the cursor may move from one position to another.
pub trait MovementValidator: Send + Sync {
    fn allow_move(&self, from: Position, to: Position) -> bool;
}

/// Observes cursor moves after they are applied.
pub trait CursorObserver: Send + Sync {
    fn cursor_moved(&self, from: Position, to: Position);
}

/// Observes moves that hit a boundary or were vetoed.
pub trait BoundaryObserver: Send + Sync {
    fn boundary_hit(&self, attempted: Position, reason: &str);
}

impl<F> MovementValidator for F
where
    F: Fn(Position, Position) -> bool + Send + Sync,
{
    fn allow_move(&self, from: Position, to: Position) -> bool {
        self(from, to)
    }
}

impl<F> CursorObserver for F
where
    F: Fn(Position, Position) + Send + Sync,
{
    fn cursor_moved(&self, from: Position, to: Position) {
        self(from, to);
    }
}

impl<F> BoundaryObserver for F
where
    F: Fn(Position, &str) + Send + Sync,
{
    fn boundary_hit(&self, attempted: Position, reason: &str) {
        self(attempted, reason);
    }
}

/// The set of hooks carried by a `TextArea`.
///
/// Cloning shares the underlying hook objects.
#[derive(Clone, Default)]
pub struct Hooks {
    pub(crate) validator: Option<Arc<dyn MovementValidator>>,
    pub(crate) moved: Option<Arc<dyn CursorObserver>>,
    pub(crate) boundary: Option<Arc<dyn BoundaryObserver>>,
}

fn same_hook<T: ?Sized>(a: Option<&Arc<T>>, b: Option<&Arc<T>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::as_ptr(a).cast::<()>() == Arc::as_ptr(b).cast::<()>(),
        _ => false,
    }
}

impl Hooks {
    /// Whether both hook sets share the same hook objects.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        same_hook(self.validator.as_ref(), other.validator.as_ref())
            && same_hook(self.moved.as_ref(), other.moved.as_ref())
            && same_hook(self.boundary.as_ref(), other.boundary.as_ref())
    }

    /// Whether a movement validator is registered.
    #[must_use]
    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }

    /// Ask the validator; an absent validator allows everything.
    pub(crate) fn allows(&self, from: Position, to: Position) -> bool {
        self.validator
            .as_ref()
            .is_none_or(|validator| validator.allow_move(from, to))
    }

    pub(crate) fn notify_moved(&self, from: Position, to: Position) {
        if let Some(observer) = &self.moved {
            observer.cursor_moved(from, to);
        }
    }

    pub(crate) fn notify_boundary(&self, attempted: Position, reason: &str) {
        if let Some(observer) = &self.boundary {
            observer.boundary_hit(attempted, reason);
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("validator", &self.validator.is_some())
            .field("moved", &self.moved.is_some())
            .field("boundary", &self.boundary.is_some())
            .finish()
    }
}
