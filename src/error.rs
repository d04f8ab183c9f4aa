//! Error types for the text-input engine.
//!
//! Editing and navigation never fail: out-of-range positions are clamped,
//! capacity limits and read-only mode turn mutators into no-ops, and vetoed
//! moves are reported through the boundary hook. The variants here only cover
//! construction surfaces that take untrusted input.

use std::fmt;

/// Result type alias for engine construction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for engine construction operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Viewport dimension error (zero width or height).
    InvalidDimensions { width: usize, height: usize },
    /// A key chord description that could not be parsed (e.g. `"ctrl+"`).
    InvalidKeySpec(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions: {width}x{height}")
            }
            Self::InvalidKeySpec(spec) => write!(f, "invalid key spec: {spec:?}"),
        }
    }
}

impl std::error::Error for Error {}
