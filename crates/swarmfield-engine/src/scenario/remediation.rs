//! Gray-Scott contaminant remediation: fields only, no agents.

use super::{disc, Scenario, ScenarioConfig};
use crate::config::{ConfigError, RemediationConfig};
use rand::Rng;
use swarmfield_agents::PopulationSnapshot;
use swarmfield_core::{GridPos, SimRng};
use swarmfield_propagators::GrayScott;
use swarmfield_space::{Field, SpaceError};

/// Two coupled species `U` (neutraliser) and `V` (contaminant) evolving
/// under Gray-Scott reaction-diffusion.
#[derive(Clone, Debug)]
pub struct RemediationScenario {
    u: Field,
    v: Field,
    reaction: GrayScott,
}

impl RemediationScenario {
    /// The `U` species.
    pub fn u(&self) -> &Field {
        &self.u
    }

    /// The `V` species.
    pub fn v(&self) -> &Field {
        &self.v
    }

    /// Total contaminant, `sum(V)`.
    pub fn contaminant_mass(&self) -> f64 {
        self.v.sum()
    }
}

impl ScenarioConfig for RemediationConfig {
    type Scenario = RemediationScenario;

    fn seed(&self) -> u64 {
        self.seed
    }

    fn ticks(&self) -> u64 {
        self.ticks
    }

    fn validate(&self) -> Result<(), ConfigError> {
        RemediationConfig::validate(self)
    }
}

impl Scenario for RemediationScenario {
    type Config = RemediationConfig;

    const NAME: &'static str = "remediation";

    fn init(config: &RemediationConfig, rng: &mut SimRng) -> Result<Self, ConfigError> {
        let grid = config.grid()?;
        let reaction = GrayScott::new(config.reaction)?;

        let mut u = Field::filled(grid, 1.0);
        let mut v = Field::filled(grid, 0.0);
        let centre = GridPos::new(grid.rows() / 2, grid.cols() / 2);
        for pos in disc(&grid, centre, config.resolved_spill_radius()) {
            u[pos] = config.spill_u;
            v[pos] = config.spill_v;
        }

        if config.noise_amplitude > 0.0 {
            for x in u.as_mut_slice().iter_mut().chain(v.as_mut_slice()) {
                *x += config.noise_amplitude * rng.random::<f64>();
            }
        }

        Ok(Self { u, v, reaction })
    }

    fn advance_field(&mut self, _rng: &mut SimRng) -> Result<(), SpaceError> {
        self.reaction.step(&mut self.u, &mut self.v)
    }

    fn advance_agents(&mut self, _rng: &mut SimRng) -> Result<(), SpaceError> {
        Ok(())
    }

    fn layers(&self) -> Vec<(&'static str, &Field)> {
        vec![("u", &self.u), ("v", &self.v)]
    }

    fn population(&self) -> PopulationSnapshot {
        PopulationSnapshot::None
    }
}
