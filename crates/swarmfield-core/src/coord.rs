//! Integer grid coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell coordinate `(row, col)` on a 2D grid.
///
/// Ordering is row-major (`row` first, then `col`), which is also the
/// tie-break order used by nearest-target search.
///
/// # Examples
///
/// ```
/// use swarmfield_core::GridPos;
///
/// let a = GridPos::new(2, 3);
/// let b = GridPos::new(5, 7);
/// assert_eq!(a.distance_sq(b), 9 + 16);
/// assert_eq!(a.chebyshev(b), 4);
/// assert!(GridPos::new(0, 9) < GridPos::new(1, 0));
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridPos {
    /// Row index, `0 <= row < rows`.
    pub row: usize,
    /// Column index, `0 <= col < cols`.
    pub col: usize,
}

impl GridPos {
    /// Create a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// No diagonal weighting and no wrap-around: target search measures
    /// straight-line distance inside the grid even on periodic grids.
    pub fn distance_sq(self, other: GridPos) -> u64 {
        let dr = self.row.abs_diff(other.row) as u64;
        let dc = self.col.abs_diff(other.col) as u64;
        dr * dr + dc * dc
    }

    /// Chebyshev (king-move) distance to `other`.
    pub fn chebyshev(self, other: GridPos) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Per-axis unit direction from `self` toward `target`, each in `{-1, 0, 1}`.
    pub fn direction_to(self, target: GridPos) -> (i32, i32) {
        (
            sign(target.row as i64 - self.row as i64),
            sign(target.col as i64 - self.col as i64),
        )
    }
}

fn sign(d: i64) -> i32 {
    match d {
        d if d > 0 => 1,
        d if d < 0 => -1,
        _ => 0,
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for GridPos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}
