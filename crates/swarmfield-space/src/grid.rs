//! 2D square grid with a 4-connected (von Neumann) neighbourhood.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use serde::Serialize;
use smallvec::SmallVec;
use swarmfield_core::GridPos;

/// North, south, west, east offsets as `(d_row, d_col)`.
pub(crate) const VON_NEUMANN: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A two-dimensional grid of `rows * cols` cells.
///
/// Each cell has coordinate `(row, col)` with `0 <= row < rows` and
/// `0 <= col < cols`. Cells are stored row-major, so the flat index of
/// `(r, c)` is `r * cols + c`.
///
/// # Examples
///
/// ```
/// use swarmfield_core::GridPos;
/// use swarmfield_space::{EdgeBehavior, Grid};
///
/// let grid = Grid::new(4, 6, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(grid.cell_count(), 24);
/// assert_eq!(grid.index(GridPos::new(1, 2)), 8);
///
/// // Wrap: the north neighbour of row 0 is the last row.
/// let n = grid.neighbours(GridPos::new(0, 0));
/// assert_eq!(n[0], GridPos::new(3, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    edge: EdgeBehavior,
}

impl Grid {
    /// Maximum size per axis; offsets are computed in `i64` and cell
    /// counts must fit comfortably in memory.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Create a grid with the given dimensions and edge behavior.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds [`Self::MAX_DIM`].
    pub fn new(rows: usize, cols: usize, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if rows > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { rows, cols, edge })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Edge behavior used by stencils on this grid.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether `pos` lies inside the grid.
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Check that `pos` lies inside the grid.
    pub fn check(&self, pos: GridPos) -> Result<GridPos, SpaceError> {
        if self.contains(pos) {
            Ok(pos)
        } else {
            Err(SpaceError::CoordOutOfBounds {
                coord: pos,
                bounds: self.shape(),
            })
        }
    }

    /// Row-major flat index of `pos`. `pos` must be in bounds.
    pub fn index(&self, pos: GridPos) -> usize {
        debug_assert!(self.contains(pos), "{pos} outside {}x{}", self.rows, self.cols);
        pos.row * self.cols + pos.col
    }

    /// Inverse of [`index`](Self::index).
    pub fn pos(&self, index: usize) -> GridPos {
        GridPos::new(index / self.cols, index % self.cols)
    }

    /// Resolve `pos + (dr, dc)` under this grid's edge behavior.
    pub fn offset(&self, pos: GridPos, dr: i64, dc: i64) -> GridPos {
        GridPos::new(
            self.edge.resolve(pos.row as i64 + dr, self.rows),
            self.edge.resolve(pos.col as i64 + dc, self.cols),
        )
    }

    /// Apply `(dr, dc)` to `pos` and clamp the result into the grid.
    ///
    /// Used for agent movement, which never wraps even on periodic grids.
    pub fn clamped_offset(&self, pos: GridPos, dr: i64, dc: i64) -> GridPos {
        GridPos::new(
            EdgeBehavior::Clamp.resolve(pos.row as i64 + dr, self.rows),
            EdgeBehavior::Clamp.resolve(pos.col as i64 + dc, self.cols),
        )
    }

    /// Clamp an arbitrary coordinate into the grid.
    pub fn clamp(&self, pos: GridPos) -> GridPos {
        GridPos::new(pos.row.min(self.rows - 1), pos.col.min(self.cols - 1))
    }

    /// The four stencil neighbours of `pos` in N, S, W, E order.
    ///
    /// Under [`EdgeBehavior::Clamp`] an edge cell lists itself in place of
    /// the missing neighbour, so the result always has four entries.
    pub fn neighbours(&self, pos: GridPos) -> SmallVec<[GridPos; 4]> {
        VON_NEUMANN
            .iter()
            .map(|&(dr, dc)| self.offset(pos, dr, dc))
            .collect()
    }

    /// All cells in row-major canonical order.
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| GridPos::new(r, c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(r: usize, c: usize) -> GridPos {
        GridPos::new(r, c)
    }

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(Grid::new(0, 5, EdgeBehavior::Wrap), Err(SpaceError::EmptySpace));
        assert_eq!(Grid::new(5, 0, EdgeBehavior::Clamp), Err(SpaceError::EmptySpace));
    }

    #[test]
    fn oversized_dimension_rejected() {
        match Grid::new(Grid::MAX_DIM + 1, 1, EdgeBehavior::Clamp) {
            Err(SpaceError::DimensionTooLarge { name: "rows", .. }) => {}
            other => panic!("expected DimensionTooLarge(rows), got {other:?}"),
        }
    }

    #[test]
    fn neighbours_interior() {
        let g = Grid::new(5, 5, EdgeBehavior::Clamp).unwrap();
        let n = g.neighbours(p(2, 2));
        assert_eq!(n.as_slice(), &[p(1, 2), p(3, 2), p(2, 1), p(2, 3)]);
    }

    #[test]
    fn neighbours_corner_clamp_self_loops() {
        let g = Grid::new(5, 5, EdgeBehavior::Clamp).unwrap();
        let n = g.neighbours(p(0, 0));
        assert_eq!(n.as_slice(), &[p(0, 0), p(1, 0), p(0, 0), p(0, 1)]);
    }

    #[test]
    fn neighbours_corner_wrap() {
        let g = Grid::new(3, 4, EdgeBehavior::Wrap).unwrap();
        let n = g.neighbours(p(0, 0));
        assert_eq!(n.as_slice(), &[p(2, 0), p(1, 0), p(0, 3), p(0, 1)]);
    }

    #[test]
    fn clamped_offset_ignores_wrap() {
        let g = Grid::new(4, 4, EdgeBehavior::Wrap).unwrap();
        assert_eq!(g.clamped_offset(p(0, 3), -1, 1), p(0, 3));
        assert_eq!(g.offset(p(0, 3), -1, 1), p(3, 0));
    }

    #[test]
    fn check_reports_bounds() {
        let g = Grid::new(2, 3, EdgeBehavior::Clamp).unwrap();
        assert_eq!(g.check(p(1, 2)), Ok(p(1, 2)));
        assert_eq!(
            g.check(p(2, 0)),
            Err(SpaceError::CoordOutOfBounds {
                coord: p(2, 0),
                bounds: (2, 3)
            })
        );
    }

    #[test]
    fn positions_row_major() {
        let g = Grid::new(2, 2, EdgeBehavior::Clamp).unwrap();
        let all: Vec<_> = g.positions().collect();
        assert_eq!(all, vec![p(0, 0), p(0, 1), p(1, 0), p(1, 1)]);
    }

    proptest! {
        #[test]
        fn index_pos_roundtrip(rows in 1usize..40, cols in 1usize..40, seed in 0usize..1600) {
            let g = Grid::new(rows, cols, EdgeBehavior::Clamp).unwrap();
            let i = seed % g.cell_count();
            prop_assert_eq!(g.index(g.pos(i)), i);
        }

        #[test]
        fn clamped_offset_stays_in_bounds(
            rows in 1usize..30, cols in 1usize..30,
            r in 0usize..30, c in 0usize..30,
            dr in -3i64..=3, dc in -3i64..=3,
        ) {
            let g = Grid::new(rows, cols, EdgeBehavior::Wrap).unwrap();
            let start = g.clamp(GridPos::new(r, c));
            prop_assert!(g.contains(g.clamped_offset(start, dr, dc)));
        }
    }
}
