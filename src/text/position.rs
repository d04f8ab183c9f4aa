//! Row/column positions and normalized ranges.

use std::fmt;

/// A location in a [`Buffer`](crate::text::Buffer).
///
/// `row` is a 0-based line index and `col` a 0-based rune (`char`) offset
/// within that line, not a display column. Positions order row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The origin, `(0, 0)`.
    #[must_use]
    pub const fn origin() -> Self {
        Self { row: 0, col: 0 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// A span between two positions, always stored with `start <= end`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Range {
    start: Position,
    end: Position,
}

impl Range {
    /// Create a range from two positions in either order.
    #[must_use]
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// The earlier endpoint.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// The later endpoint.
    #[must_use]
    pub const fn end(&self) -> Position {
        self.end
    }

    /// Whether `pos` lies within `[start, end)`.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether both endpoints are on the same row.
    #[must_use]
    pub const fn is_single_line(&self) -> bool {
        self.start.row == self.end.row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering_is_row_major() {
        assert!(Position::new(0, 10) < Position::new(1, 0));
        assert!(Position::new(2, 3) < Position::new(2, 4));
        assert_eq!(Position::new(1, 1), Position::from((1, 1)));
    }

    #[test]
    fn test_range_normalizes() {
        let r = Range::new(Position::new(3, 1), Position::new(1, 7));
        assert_eq!(r.start(), Position::new(1, 7));
        assert_eq!(r.end(), Position::new(3, 1));
        assert!(!r.is_single_line());
    }

    #[test]
    fn test_range_contains_is_half_open() {
        let r = Range::new(Position::new(0, 2), Position::new(0, 5));
        assert!(!r.contains(Position::new(0, 1)));
        assert!(r.contains(Position::new(0, 2)));
        assert!(r.contains(Position::new(0, 4)));
        assert!(!r.contains(Position::new(0, 5)));
        assert!(r.is_single_line());
    }

    #[test]
    fn test_empty_range() {
        let p = Position::new(4, 4);
        let r = Range::new(p, p);
        assert!(r.is_empty());
        assert!(!r.contains(p));
    }
}
