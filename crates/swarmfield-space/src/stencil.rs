//! Pure 4-neighbour finite-difference operators.
//!
//! All operators read a [`Field`] and return a new field of the same
//! shape; inputs are never mutated. Neighbour indices are resolved with
//! the field's [`EdgeBehavior`](crate::EdgeBehavior):
//!
//! - **Wrap**: indices modulo `(rows, cols)` (periodic).
//! - **Clamp**: indices clamped to `[0, rows-1] x [0, cols-1]`, so an
//!   edge cell reads itself in place of the missing neighbour
//!   (zero-flux for the Laplacian, one-sided half difference for the
//!   gradient).
//!
//! The Laplacian is summed as `Σ (neighbour − centre)` instead of
//! `n + s + w + e − 4c`. Both agree up to the last bits of rounding; the
//! summed form is exactly zero on a uniform field at any magnitude, and
//! both [`laplacian`] and [`laplacian_at`] use it so they match bit for
//! bit.

use crate::field::Field;
use swarmfield_core::GridPos;

/// Grid axis for directional differences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Along rows (the `row` index, "y").
    Row,
    /// Along columns (the `col` index, "x").
    Col,
}

/// Five-point Laplacian at a single cell:
/// `f[r-1][c] + f[r+1][c] + f[r][c-1] + f[r][c+1] - 4 f[r][c]`.
///
/// Evaluated as a sum of neighbour-minus-centre differences, which is the
/// same quantity but exactly zero on a uniform field.
pub fn laplacian_at(field: &Field, pos: GridPos) -> f64 {
    let grid = field.grid();
    let center = field.get(pos);
    let north = field.get(grid.offset(pos, -1, 0));
    let south = field.get(grid.offset(pos, 1, 0));
    let west = field.get(grid.offset(pos, 0, -1));
    let east = field.get(grid.offset(pos, 0, 1));
    (north - center) + (south - center) + (west - center) + (east - center)
}

/// Five-point Laplacian of the whole field.
///
/// # Examples
///
/// ```
/// use swarmfield_core::GridPos;
/// use swarmfield_space::{laplacian, EdgeBehavior, Field, Grid};
///
/// let grid = Grid::new(3, 3, EdgeBehavior::Wrap).unwrap();
/// let mut f = Field::filled(grid, 0.0);
/// f[GridPos::new(1, 1)] = 1.0;
/// let lap = laplacian(&f);
/// assert_eq!(lap[GridPos::new(1, 1)], -4.0);
/// assert_eq!(lap[GridPos::new(0, 1)], 1.0);
/// assert_eq!(lap[GridPos::new(0, 0)], 0.0);
/// ```
pub fn laplacian(field: &Field) -> Field {
    let rows = field.rows();
    let cols = field.cols();
    let edge = field.grid().edge_behavior();
    let src = field.as_slice();

    // Row-major fast path: resolve each neighbouring row/column once per
    // line instead of once per cell.
    let mut out = vec![0.0f64; src.len()];
    for r in 0..rows {
        let rn = edge.resolve(r as i64 - 1, rows) * cols;
        let rs = edge.resolve(r as i64 + 1, rows) * cols;
        let rc = r * cols;
        for c in 0..cols {
            let cw = edge.resolve(c as i64 - 1, cols);
            let ce = edge.resolve(c as i64 + 1, cols);
            let center = src[rc + c];
            out[rc + c] = (src[rn + c] - center)
                + (src[rs + c] - center)
                + (src[rc + cw] - center)
                + (src[rc + ce] - center);
        }
    }
    Field::from_raw(*field.grid(), out)
}

/// Central difference `(f[+1] - f[-1]) / 2` along `axis`.
pub fn central_difference(field: &Field, axis: Axis) -> Field {
    let grid = *field.grid();
    let (dr, dc) = match axis {
        Axis::Row => (1, 0),
        Axis::Col => (0, 1),
    };
    Field::from_fn(grid, |pos| {
        let ahead = field.get(grid.offset(pos, dr, dc));
        let behind = field.get(grid.offset(pos, -dr, -dc));
        (ahead - behind) / 2.0
    })
}

/// Central-difference gradient as `(d/d_row, d/d_col)`.
pub fn gradient(field: &Field) -> (Field, Field) {
    (
        central_difference(field, Axis::Row),
        central_difference(field, Axis::Col),
    )
}
