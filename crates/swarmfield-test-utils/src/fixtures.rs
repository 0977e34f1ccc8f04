//! Reusable grids and initial fields.

use rand::Rng;
use swarmfield_core::{seeded_rng, GridPos};
use swarmfield_space::{EdgeBehavior, Field, Grid};

/// A periodic `rows x cols` grid.
pub fn wrap_grid(rows: usize, cols: usize) -> Grid {
    Grid::new(rows, cols, EdgeBehavior::Wrap).expect("fixture grid dimensions are non-zero")
}

/// A clamped `rows x cols` grid.
pub fn clamp_grid(rows: usize, cols: usize) -> Grid {
    Grid::new(rows, cols, EdgeBehavior::Clamp).expect("fixture grid dimensions are non-zero")
}

/// A zero field with a single `1.0` at `at`.
pub fn spike(grid: Grid, at: GridPos) -> Field {
    let mut f = Field::filled(grid, 0.0);
    f[at] = 1.0;
    f
}

/// The classic Gray-Scott starting state on a periodic `size x size` grid:
/// `U = 1, V = 0` everywhere except a centred disc of radius `size / 8`
/// holding `U = 0.5, V = 0.25`, plus `[0, 0.05)` uniform noise on both.
///
/// Every value lies in `[0, 1]`.
pub fn gray_scott_spill(size: usize, seed: u64) -> (Field, Field) {
    let grid = wrap_grid(size, size);
    let centre = (size / 2) as f64;
    let radius = (size / 8) as f64;
    let in_disc = |p: GridPos| {
        let dr = p.row as f64 - centre;
        let dc = p.col as f64 - centre;
        dr * dr + dc * dc < radius * radius
    };
    let mut u = Field::from_fn(grid, |p| if in_disc(p) { 0.5 } else { 1.0 });
    let mut v = Field::from_fn(grid, |p| if in_disc(p) { 0.25 } else { 0.0 });

    let mut rng = seeded_rng(seed);
    for x in u.as_mut_slice() {
        *x = (*x + 0.05 * rng.random::<f64>()).min(1.0);
    }
    for x in v.as_mut_slice() {
        *x += 0.05 * rng.random::<f64>();
    }
    (u, v)
}
