//! Dense scalar field storage.

use crate::error::SpaceError;
use crate::grid::Grid;
use serde::Serialize;
use std::ops::{Index, IndexMut};
use swarmfield_core::GridPos;

/// A dense 2D array of `f64`, one value per grid cell.
///
/// Every cell always has a value. The field carries its [`Grid`], so
/// stencils know the shape and edge behavior without extra arguments.
/// Fields are never resized; `clone()` is a deep copy.
///
/// Categorical fields (intact/cracked, empty/material/assembled, ...)
/// store small exact integers such as `0.0`, `1.0`, `2.0`; comparing
/// them with `==` is exact.
///
/// # Examples
///
/// ```
/// use swarmfield_core::GridPos;
/// use swarmfield_space::{EdgeBehavior, Field, Grid};
///
/// let grid = Grid::new(3, 3, EdgeBehavior::Clamp).unwrap();
/// let mut f = Field::filled(grid, 1.0);
/// f[GridPos::new(1, 1)] = 0.0;
/// assert_eq!(f.positions_where(|v| v == 0.0), vec![GridPos::new(1, 1)]);
/// assert_eq!(f.sum(), 8.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Field {
    grid: Grid,
    data: Vec<f64>,
}

impl Field {
    /// A field with every cell set to `value`.
    pub fn filled(grid: Grid, value: f64) -> Self {
        Self {
            grid,
            data: vec![value; grid.cell_count()],
        }
    }

    /// A field initialised cell by cell in row-major order.
    pub fn from_fn(grid: Grid, mut f: impl FnMut(GridPos) -> f64) -> Self {
        let data = grid.positions().map(&mut f).collect();
        Self { grid, data }
    }

    /// Wrap an existing row-major buffer.
    ///
    /// Returns `Err(SpaceError::ShapeMismatch)` if `data.len()` differs
    /// from the grid's cell count.
    pub fn from_vec(grid: Grid, data: Vec<f64>) -> Result<Self, SpaceError> {
        if data.len() != grid.cell_count() {
            return Err(SpaceError::ShapeMismatch {
                expected: grid.shape(),
                got: (data.len(), 1),
            });
        }
        Ok(Self { grid, data })
    }

    /// Wrap a buffer already known to match the grid.
    pub(crate) fn from_raw(grid: Grid, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), grid.cell_count());
        Self { grid, data }
    }

    /// The grid this field lives on.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Value at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn get(&self, pos: GridPos) -> f64 {
        self.data[self.grid.index(pos)]
    }

    /// Value at `pos`, or `None` if out of bounds.
    pub fn try_get(&self, pos: GridPos) -> Option<f64> {
        self.grid
            .contains(pos)
            .then(|| self.data[self.grid.index(pos)])
    }

    /// Set the value at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn set(&mut self, pos: GridPos, value: f64) {
        let i = self.grid.index(pos);
        self.data[i] = value;
    }

    /// Row-major view of all values.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable row-major view of all values.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Iterate `(position, value)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (GridPos, f64)> + '_ {
        self.grid.positions().zip(self.data.iter().copied())
    }

    /// All positions whose value satisfies `pred`, in row-major order.
    pub fn positions_where(&self, mut pred: impl FnMut(f64) -> bool) -> Vec<GridPos> {
        self.cells()
            .filter_map(|(pos, v)| pred(v).then_some(pos))
            .collect()
    }

    /// Number of cells whose value satisfies `pred`.
    pub fn count_where(&self, mut pred: impl FnMut(f64) -> bool) -> usize {
        self.data.iter().filter(|&&v| pred(v)).count()
    }

    /// Sum of all values.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Smallest value.
    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest value.
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Clamp every cell into `[lo, hi]`.
    pub fn clamp_in_place(&mut self, lo: f64, hi: f64) {
        for v in &mut self.data {
            *v = v.clamp(lo, hi);
        }
    }

    /// Apply `f` to every cell.
    pub fn map_in_place(&mut self, mut f: impl FnMut(f64) -> f64) {
        for v in &mut self.data {
            *v = f(*v);
        }
    }

    /// `self[i] += scale * other[i]` for every cell.
    pub fn add_scaled(&mut self, other: &Field, scale: f64) -> Result<(), SpaceError> {
        self.ensure_same_shape(other)?;
        for (v, &o) in self.data.iter_mut().zip(&other.data) {
            *v += scale * o;
        }
        Ok(())
    }

    /// Check that `other` has the same shape as `self`.
    pub fn ensure_same_shape(&self, other: &Field) -> Result<(), SpaceError> {
        if self.grid.shape() != other.grid.shape() {
            return Err(SpaceError::ShapeMismatch {
                expected: self.grid.shape(),
                got: other.grid.shape(),
            });
        }
        Ok(())
    }

    /// First cell (row-major) holding a NaN or infinity, if any.
    ///
    /// The simulation loop never calls this; it is a diagnostic for
    /// callers who want to detect an unstable parameter choice.
    pub fn first_non_finite(&self) -> Option<GridPos> {
        self.data
            .iter()
            .position(|v| !v.is_finite())
            .map(|i| self.grid.pos(i))
    }
}

impl Index<GridPos> for Field {
    type Output = f64;

    fn index(&self, pos: GridPos) -> &f64 {
        &self.data[self.grid.index(pos)]
    }
}

impl IndexMut<GridPos> for Field {
    fn index_mut(&mut self, pos: GridPos) -> &mut f64 {
        let i = self.grid.index(pos);
        &mut self.data[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::EdgeBehavior;

    fn grid(rows: usize, cols: usize) -> Grid {
        Grid::new(rows, cols, EdgeBehavior::Clamp).unwrap()
    }

    #[test]
    fn from_vec_checks_length() {
        let g = grid(2, 3);
        assert!(Field::from_vec(g, vec![0.0; 6]).is_ok());
        assert_eq!(
            Field::from_vec(g, vec![0.0; 5]),
            Err(SpaceError::ShapeMismatch {
                expected: (2, 3),
                got: (5, 1)
            })
        );
    }

    #[test]
    fn from_fn_is_row_major() {
        let f = Field::from_fn(grid(2, 3), |p| (p.row * 10 + p.col) as f64);
        assert_eq!(f.as_slice(), &[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
    }

    #[test]
    fn try_get_out_of_bounds_is_none() {
        let f = Field::filled(grid(2, 2), 3.0);
        assert_eq!(f.try_get(GridPos::new(1, 1)), Some(3.0));
        assert_eq!(f.try_get(GridPos::new(2, 0)), None);
    }

    #[test]
    fn clone_is_deep() {
        let mut f = Field::filled(grid(2, 2), 1.0);
        let copy = f.clone();
        f.set(GridPos::new(0, 0), 9.0);
        assert_eq!(copy.get(GridPos::new(0, 0)), 1.0);
    }

    #[test]
    fn add_scaled_rejects_other_shape() {
        let mut a = Field::filled(grid(2, 2), 1.0);
        let b = Field::filled(grid(2, 3), 1.0);
        assert!(matches!(
            a.add_scaled(&b, 1.0),
            Err(SpaceError::ShapeMismatch { .. })
        ));
        let c = Field::filled(grid(2, 2), 2.0);
        a.add_scaled(&c, 0.5).unwrap();
        assert!(a.as_slice().iter().all(|&v| v == 2.0));
    }

    #[test]
    fn clamp_and_extrema() {
        let mut f = Field::from_vec(grid(1, 4), vec![-1.0, 0.5, 2.0, 0.0]).unwrap();
        assert_eq!(f.min(), -1.0);
        assert_eq!(f.max(), 2.0);
        f.clamp_in_place(0.0, 1.0);
        assert_eq!(f.as_slice(), &[0.0, 0.5, 1.0, 0.0]);
    }

    #[test]
    fn first_non_finite_finds_nan() {
        let mut f = Field::filled(grid(3, 3), 0.0);
        assert_eq!(f.first_non_finite(), None);
        f[GridPos::new(2, 1)] = f64::NAN;
        f[GridPos::new(2, 2)] = f64::INFINITY;
        assert_eq!(f.first_non_finite(), Some(GridPos::new(2, 1)));
    }
}
