//! Chemotaxis-driven self-healing with agents as a density.

use super::repair::{CRACKED, INTACT};
use super::{Scenario, ScenarioConfig};
use crate::config::{ConfigError, HealingConfig};
use swarmfield_agents::actuation::{repair_where_dense, CellTransition};
use swarmfield_agents::{DensityAgentField, Population, PopulationSnapshot};
use swarmfield_core::SimRng;
use swarmfield_propagators::ScalarDiffusion;
use swarmfield_space::{Field, SpaceError};

/// Material with a crack, a repair signal emitted by cracked cells, and
/// an agent density that follows the signal.
///
/// Field phase: the signal diffuses, every still-cracked cell is reset to
/// 1, and the signal is clamped to `[0, 1]`. Agent phase: the density is
/// advected and diffused, then every cracked cell whose density exceeds
/// the threshold is repaired. A repaired cell stops emitting on the next
/// tick.
///
/// The signal gradient that drives advection uses central differences
/// under the grid's edge behavior, so on the default periodic grid it
/// wraps at the border like the diffusion does, with no one-sided edge
/// differences.
#[derive(Clone, Debug)]
pub struct HealingScenario {
    material: Field,
    signal: Field,
    bots: DensityAgentField,
    signal_diffusion: ScalarDiffusion,
    repair_threshold: f64,
}

const REPAIR: CellTransition = CellTransition::new(CRACKED, INTACT);

impl HealingScenario {
    /// Material state: [`CRACKED`] or [`INTACT`] per cell.
    pub fn material(&self) -> &Field {
        &self.material
    }

    /// Repair signal in `[0, 1]`.
    pub fn signal(&self) -> &Field {
        &self.signal
    }

    /// Agent density.
    pub fn bots(&self) -> &Field {
        self.bots.density()
    }

    /// Number of cells still cracked.
    pub fn cracked_cells(&self) -> usize {
        self.material.count_where(|v| v == CRACKED)
    }
}

impl ScenarioConfig for HealingConfig {
    type Scenario = HealingScenario;

    fn seed(&self) -> u64 {
        self.seed
    }

    fn ticks(&self) -> u64 {
        self.ticks
    }

    fn validate(&self) -> Result<(), ConfigError> {
        HealingConfig::validate(self)
    }
}

impl Scenario for HealingScenario {
    type Config = HealingConfig;

    const NAME: &'static str = "healing";

    fn init(config: &HealingConfig, rng: &mut SimRng) -> Result<Self, ConfigError> {
        let grid = config.grid()?;
        let crack = config.crack_region();

        let mut material = Field::filled(grid, INTACT);
        let mut signal = Field::filled(grid, 0.0);
        for pos in crack.cells() {
            material[pos] = CRACKED;
            signal[pos] = 1.0;
        }

        let counts = DensityAgentField::random_counts(grid, config.bots, rng);
        let bots = DensityAgentField::new(
            counts,
            config.chemotactic_sensitivity,
            config.bot_diffusion,
            config.dt,
        )?;
        let signal_diffusion = ScalarDiffusion::builder()
            .coefficient(config.signal_diffusion)
            .dt(config.dt)
            .clamp(0.0, 1.0)
            .build()?;

        Ok(Self {
            material,
            signal,
            bots,
            signal_diffusion,
            repair_threshold: config.repair_threshold,
        })
    }

    fn advance_field(&mut self, _rng: &mut SimRng) -> Result<(), SpaceError> {
        let sources = self.material.positions_where(|v| v == CRACKED);
        self.signal_diffusion
            .step_with_sources(&mut self.signal, sources);
        Ok(())
    }

    fn advance_agents(&mut self, rng: &mut SimRng) -> Result<(), SpaceError> {
        Population::step(&mut self.bots, &mut self.signal, rng)?;
        repair_where_dense(
            &mut self.material,
            self.bots.density(),
            self.repair_threshold,
            REPAIR,
        );
        Ok(())
    }

    fn layers(&self) -> Vec<(&'static str, &Field)> {
        vec![("material", &self.material), ("signal", &self.signal)]
    }

    fn population(&self) -> PopulationSnapshot {
        self.bots.capture()
    }
}
