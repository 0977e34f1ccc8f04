//! The scenario contract and the five bundled scenarios.
//!
//! A scenario owns its fields and agents and knows how to advance them.
//! The [`SimulationLoop`](crate::SimulationLoop) owns the scenario, the
//! RNG and the tick counter, and calls the two phases in order.

pub mod healing;
pub mod manufacturing;
pub mod oncology;
pub mod remediation;
pub mod repair;

pub use healing::HealingScenario;
pub use manufacturing::ManufacturingScenario;
pub use oncology::OncologyScenario;
pub use remediation::RemediationScenario;
pub use repair::RepairScenario;

use crate::config::ConfigError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use swarmfield_agents::PopulationSnapshot;
use swarmfield_core::{GridPos, SimRng};
use swarmfield_space::{Field, Grid, SpaceError};

/// Configuration for one scenario type.
pub trait ScenarioConfig: Clone + fmt::Debug + Default + Serialize + DeserializeOwned {
    /// The scenario this config builds.
    type Scenario: Scenario<Config = Self>;

    /// Seed for the run's RNG.
    fn seed(&self) -> u64;

    /// Total number of ticks in a run.
    fn ticks(&self) -> u64;

    /// Check all structural invariants.
    fn validate(&self) -> Result<(), ConfigError>;
}

/// A simulation variant: initial state plus the two per-tick phases.
pub trait Scenario: Sized {
    /// Construction parameters.
    type Config: ScenarioConfig;

    /// Short identifier used in logs and snapshots.
    const NAME: &'static str;

    /// Build the initial state. `config` has already been validated; every
    /// random draw goes through `rng`.
    fn init(config: &Self::Config, rng: &mut SimRng) -> Result<Self, ConfigError>;

    /// Field phase: stencil and reaction updates.
    fn advance_field(&mut self, rng: &mut SimRng) -> Result<(), SpaceError>;

    /// Agent phase: every agent searches, moves and acts on the
    /// post-field-update state.
    fn advance_agents(&mut self, rng: &mut SimRng) -> Result<(), SpaceError>;

    /// Named field layers, in a fixed order.
    fn layers(&self) -> Vec<(&'static str, &Field)>;

    /// Deep copy of the agents.
    fn population(&self) -> PopulationSnapshot;
}

/// Cells with `|p - centre|² <= radius²`, clipped to the grid, row-major.
///
/// Radii beyond `rows + cols` cover the whole grid and are capped there.
pub(crate) fn disc(grid: &Grid, centre: GridPos, radius: usize) -> impl Iterator<Item = GridPos> {
    let radius = radius.min(grid.rows().saturating_add(grid.cols()));
    let r2 = (radius as u64).saturating_mul(radius as u64);
    let row_end = centre.row.saturating_add(radius).saturating_add(1).min(grid.rows());
    let col_end = centre.col.saturating_add(radius).saturating_add(1).min(grid.cols());
    let rows = centre.row.saturating_sub(radius)..row_end;
    let cols = centre.col.saturating_sub(radius)..col_end;
    rows.flat_map(move |r| cols.clone().map(move |c| GridPos::new(r, c)))
        .filter(move |&p| centre.distance_sq(p) <= r2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use swarmfield_test_utils::clamp_grid;

    #[test]
    fn disc_radius_zero_is_centre() {
        let g = clamp_grid(5, 5);
        let cells: Vec<_> = disc(&g, GridPos::new(2, 2), 0).collect();
        assert_eq!(cells, vec![GridPos::new(2, 2)]);
    }

    #[test]
    fn disc_radius_eight_cell_count() {
        // Lattice points with x² + y² <= 64.
        let g = clamp_grid(50, 50);
        assert_eq!(disc(&g, GridPos::new(25, 25), 8).count(), 197);
    }

    #[test]
    fn disc_with_huge_radius_covers_grid() {
        let g = clamp_grid(6, 9);
        assert_eq!(disc(&g, GridPos::new(0, 8), usize::MAX).count(), 54);
    }

    #[test]
    fn disc_clipped_at_corner() {
        let g = clamp_grid(10, 10);
        let cells: Vec<_> = disc(&g, GridPos::new(0, 0), 1).collect();
        assert_eq!(
            cells,
            vec![GridPos::new(0, 0), GridPos::new(0, 1), GridPos::new(1, 0)]
        );
    }
}
