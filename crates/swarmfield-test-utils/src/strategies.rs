//! Proptest strategies.

use proptest::prelude::*;
use swarmfield_core::GridPos;
use swarmfield_space::{EdgeBehavior, Grid};

/// Either edge behavior.
pub fn arb_edge() -> impl Strategy<Value = EdgeBehavior> {
    prop_oneof![Just(EdgeBehavior::Wrap), Just(EdgeBehavior::Clamp)]
}

/// A grid with each side in `1..=max_side`.
pub fn arb_grid(max_side: usize) -> impl Strategy<Value = Grid> {
    (1..=max_side, 1..=max_side, arb_edge()).prop_map(|(rows, cols, edge)| {
        Grid::new(rows, cols, edge).expect("strategy sides are non-zero")
    })
}

/// A position inside a `rows x cols` grid.
pub fn arb_pos(rows: usize, cols: usize) -> impl Strategy<Value = GridPos> {
    (0..rows, 0..cols).prop_map(|(r, c)| GridPos::new(r, c))
}

/// Up to `max_len` positions inside a `rows x cols` grid, possibly empty.
pub fn arb_positions(
    rows: usize,
    cols: usize,
    max_len: usize,
) -> impl Strategy<Value = Vec<GridPos>> {
    proptest::collection::vec(arb_pos(rows, cols), 0..=max_len)
}
