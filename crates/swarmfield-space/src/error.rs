//! Error types for grid construction and field access.

use swarmfield_core::GridPos;
use std::fmt;

/// Errors arising from grid construction or field operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero rows or columns.
    EmptySpace,
    /// A dimension exceeds the supported maximum.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested size.
        value: usize,
        /// The largest accepted size.
        max: usize,
    },
    /// Two fields (or a field and a buffer) do not share a grid shape.
    ShapeMismatch {
        /// Shape that was expected, as `(rows, cols)`.
        expected: (usize, usize),
        /// Shape that was supplied (or `(len, 1)` for flat buffers).
        got: (usize, usize),
    },
    /// A coordinate lies outside the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: GridPos,
        /// Grid shape as `(rows, cols)`.
        bounds: (usize, usize),
    },
    /// An edge-behavior name was not recognised.
    UnknownEdgeBehavior {
        /// The rejected name.
        name: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "grid must have at least one row and one column"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::ShapeMismatch { expected, got } => write!(
                f,
                "shape mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
            Self::CoordOutOfBounds { coord, bounds } => write!(
                f,
                "coordinate {coord} out of bounds: [0, {}) x [0, {})",
                bounds.0, bounds.1
            ),
            Self::UnknownEdgeBehavior { name } => write!(
                f,
                "unknown edge behavior '{name}' (expected 'periodic' or 'clamped')"
            ),
        }
    }
}

impl std::error::Error for SpaceError {}
