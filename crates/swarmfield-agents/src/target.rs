//! Nearest-target search.
//!
//! Distance is squared Euclidean over grid coordinates, measured inside
//! the grid (no wrap-around). Ties go to the lowest row, then the lowest
//! column, independent of candidate order.

use std::collections::BTreeSet;
use swarmfield_core::GridPos;
use swarmfield_space::Field;

/// The candidate closest to `from`, or `None` if there are no candidates.
///
/// ```
/// use swarmfield_agents::nearest;
/// use swarmfield_core::GridPos;
///
/// let from = GridPos::new(2, 2);
/// // (1, 2) and (2, 3) are both at distance 1; the lower row wins.
/// let cands = [GridPos::new(2, 3), GridPos::new(1, 2), GridPos::new(9, 9)];
/// assert_eq!(nearest(from, cands), Some(GridPos::new(1, 2)));
/// assert_eq!(nearest(from, []), None);
/// ```
pub fn nearest(from: GridPos, candidates: impl IntoIterator<Item = GridPos>) -> Option<GridPos> {
    candidates
        .into_iter()
        .min_by_key(|&c| (from.distance_sq(c), c))
}

/// An ordered set of target cells.
///
/// Built from a predicate over a field at the start of a tick, then
/// maintained incrementally: actuation rules [`remove`](Self::remove) a
/// cell as soon as it is satisfied, so later agents in the same tick
/// retarget.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetSet {
    cells: BTreeSet<GridPos>,
}

impl TargetSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every cell of `field` whose value satisfies `pred`.
    pub fn from_field(field: &Field, pred: impl FnMut(f64) -> bool) -> Self {
        Self {
            cells: field.positions_where(pred).into_iter().collect(),
        }
    }

    /// Replace the contents with the cells of `field` satisfying `pred`.
    pub fn recompute(&mut self, field: &Field, pred: impl FnMut(f64) -> bool) {
        self.cells.clear();
        self.cells.extend(field.positions_where(pred));
    }

    /// Add a cell. Returns `false` if it was already present.
    pub fn insert(&mut self, pos: GridPos) -> bool {
        self.cells.insert(pos)
    }

    /// Retract a cell. Returns `false` if it was not present.
    pub fn remove(&mut self, pos: GridPos) -> bool {
        self.cells.remove(&pos)
    }

    /// Whether `pos` is a target.
    pub fn contains(&self, pos: GridPos) -> bool {
        self.cells.contains(&pos)
    }

    /// Number of targets.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no targets remain.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Targets in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.cells.iter().copied()
    }

    /// The target closest to `from`.
    pub fn nearest(&self, from: GridPos) -> Option<GridPos> {
        nearest(from, self.iter())
    }

    /// The target closest to `from` among those within Chebyshev distance
    /// `radius`.
    pub fn nearest_within(&self, from: GridPos, radius: usize) -> Option<GridPos> {
        let rows = from.row.saturating_sub(radius)..=from.row.saturating_add(radius);
        nearest(
            from,
            self.cells
                .range(GridPos::new(*rows.start(), 0)..=GridPos::new(*rows.end(), usize::MAX))
                .copied()
                .filter(|&c| from.chebyshev(c) <= radius),
        )
    }
}

impl FromIterator<GridPos> for TargetSet {
    fn from_iter<I: IntoIterator<Item = GridPos>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
