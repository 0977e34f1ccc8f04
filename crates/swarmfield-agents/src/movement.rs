//! Movement policies for discrete agents.
//!
//! Every policy returns a position inside the grid. Moves always clamp at
//! the grid edge, including on periodic grids: agents do not wrap.

use rand::Rng;
use swarmfield_core::{GridPos, SimRng};
use swarmfield_space::Grid;

/// How an agent chose to move this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    /// Stay put.
    Hold,
    /// One greedy step toward a target.
    Toward(GridPos),
    /// One random-walk step.
    Wander,
}

impl Movement {
    /// Resolve the move from `pos`. Only [`Movement::Wander`] draws from
    /// `rng`.
    pub fn apply(self, grid: &Grid, pos: GridPos, rng: &mut SimRng) -> GridPos {
        match self {
            Self::Hold => grid.clamp(pos),
            Self::Toward(target) => greedy_step(grid, pos, target),
            Self::Wander => random_walk(grid, pos, rng),
        }
    }
}

/// Move at most one cell along each axis toward `target`.
///
/// Each axis moves by the sign of `target - pos`, so diagonal progress is
/// one cell per tick on both axes. Reaching the target takes exactly
/// `pos.chebyshev(target)` steps.
pub fn greedy_step(grid: &Grid, pos: GridPos, target: GridPos) -> GridPos {
    let (dr, dc) = pos.direction_to(target);
    grid.clamped_offset(pos, i64::from(dr), i64::from(dc))
}

/// Displace by a uniform offset in `{-1, 0, 1}` on each axis.
///
/// Draws the row offset, then the column offset.
pub fn random_walk(grid: &Grid, pos: GridPos, rng: &mut SimRng) -> GridPos {
    let dr: i64 = rng.random_range(-1..=1);
    let dc: i64 = rng.random_range(-1..=1);
    grid.clamped_offset(pos, dr, dc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use swarmfield_core::seeded_rng;
    use swarmfield_test_utils::strategies::arb_pos;
    use swarmfield_test_utils::{clamp_grid, wrap_grid};

    #[test]
    fn greedy_moves_diagonally() {
        let g = clamp_grid(10, 10);
        assert_eq!(
            greedy_step(&g, GridPos::new(5, 5), GridPos::new(1, 9)),
            GridPos::new(4, 6)
        );
        assert_eq!(
            greedy_step(&g, GridPos::new(5, 5), GridPos::new(5, 0)),
            GridPos::new(5, 4)
        );
    }

    #[test]
    fn greedy_at_target_holds() {
        let g = clamp_grid(10, 10);
        let p = GridPos::new(3, 3);
        assert_eq!(greedy_step(&g, p, p), p);
    }

    #[test]
    fn random_walk_never_wraps() {
        let g = wrap_grid(3, 3);
        let mut rng = seeded_rng(11);
        let mut pos = GridPos::new(0, 0);
        for _ in 0..500 {
            let next = random_walk(&g, pos, &mut rng);
            assert!(next.chebyshev(pos) <= 1);
            pos = next;
        }
    }

    #[test]
    fn random_walk_explores_every_offset() {
        let g = clamp_grid(9, 9);
        let mut rng = seeded_rng(1);
        let centre = GridPos::new(4, 4);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..1000 {
            seen.insert(random_walk(&g, centre, &mut rng));
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn hold_consumes_no_randomness() {
        let g = clamp_grid(5, 5);
        let mut a = seeded_rng(4);
        let mut b = seeded_rng(4);
        Movement::Hold.apply(&g, GridPos::new(2, 2), &mut a);
        Movement::Toward(GridPos::new(0, 0)).apply(&g, GridPos::new(2, 2), &mut a);
        let start = GridPos::new(2, 2);
        assert_eq!(random_walk(&g, start, &mut a), random_walk(&g, start, &mut b));
    }

    proptest! {
        #[test]
        fn greedy_reaches_target_in_chebyshev_steps(
            start in arb_pos(30, 30),
            target in arb_pos(30, 30),
        ) {
            let g = clamp_grid(30, 30);
            let mut pos = start;
            for _ in 0..start.chebyshev(target) {
                let next = greedy_step(&g, pos, target);
                prop_assert_eq!(next.chebyshev(target) + 1, pos.chebyshev(target));
                pos = next;
            }
            prop_assert_eq!(pos, target);
        }
    }
}
