//! Agents represented as a continuous density field.

use crate::error::AgentError;
use rand::Rng;
use swarmfield_core::{GridPos, SimRng};
use swarmfield_propagators::{ChemotacticAdvection, ScalarDiffusion};
use swarmfield_space::{Field, Grid, SpaceError};

/// A population stored as agents-per-cell rather than as individuals.
///
/// Each step advects the density along the signal gradient with
/// sensitivity `chi` (see [`ChemotacticAdvection`]), diffuses it with
/// coefficient `D`, and clamps it to be non-negative. Total mass is
/// conserved by advection and diffusion on periodic grids; the
/// non-negativity clamp can only add mass.
#[derive(Clone, Debug)]
pub struct DensityAgentField {
    density: Field,
    advection: ChemotacticAdvection,
    diffusion: ScalarDiffusion,
}

impl DensityAgentField {
    /// Wrap an existing density.
    pub fn new(
        density: Field,
        chemotactic_sensitivity: f64,
        diffusion_coefficient: f64,
        dt: f64,
    ) -> Result<Self, AgentError> {
        let advection = ChemotacticAdvection::new(chemotactic_sensitivity)?;
        let diffusion = ScalarDiffusion::builder()
            .coefficient(diffusion_coefficient)
            .dt(dt)
            .clamp_min(0.0)
            .build()?;
        Ok(Self {
            density,
            advection,
            diffusion,
        })
    }

    /// Drop `count` unit agents onto uniformly random cells (with
    /// replacement) and return the resulting per-cell counts.
    ///
    /// Each drop draws a row then a column.
    pub fn random_counts(grid: Grid, count: usize, rng: &mut SimRng) -> Field {
        let mut counts = Field::filled(grid, 0.0);
        for _ in 0..count {
            let pos = GridPos::new(
                rng.random_range(0..grid.rows()),
                rng.random_range(0..grid.cols()),
            );
            counts[pos] += 1.0;
        }
        counts
    }

    /// Current density.
    pub fn density(&self) -> &Field {
        &self.density
    }

    /// Total number of agents represented, `sum(density)`.
    pub fn total_mass(&self) -> f64 {
        self.density.sum()
    }

    /// Advance one step driven by `signal`.
    ///
    /// Returns `Err(SpaceError::ShapeMismatch)` if `signal` has a
    /// different shape; the density is unchanged in that case.
    pub fn step(&mut self, signal: &Field) -> Result<(), SpaceError> {
        self.advection.step(&mut self.density, signal)?;
        self.diffusion.step(&mut self.density);
        Ok(())
    }
}
