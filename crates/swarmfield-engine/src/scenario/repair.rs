//! Crack repair by a discrete swarm.

use super::{Scenario, ScenarioConfig};
use crate::config::{ConfigError, RepairConfig};
use swarmfield_agents::actuation::{self, CellTransition};
use swarmfield_agents::movement::greedy_step;
use swarmfield_agents::{
    Agent, AgentBehavior, DiscreteAgentPool, Population, PopulationSnapshot, Swarm, TargetSet,
};
use swarmfield_core::SimRng;
use swarmfield_space::{Field, Grid, SpaceError};

/// Material value of a cracked cell.
pub const CRACKED: f64 = 0.0;
/// Material value of an intact cell.
pub const INTACT: f64 = 1.0;

const REPAIR: CellTransition = CellTransition::new(CRACKED, INTACT);

/// Greedy crack seeking: step toward the nearest cracked cell, repair it
/// once within reach.
#[derive(Clone, Debug)]
pub struct CrackSeeker {
    cracks: TargetSet,
    radius: usize,
}

impl CrackSeeker {
    /// Seeker with the given Chebyshev reach.
    pub fn new(radius: usize) -> Self {
        Self {
            cracks: TargetSet::new(),
            radius,
        }
    }

    /// Cracked cells still targeted this tick.
    pub fn targets(&self) -> &TargetSet {
        &self.cracks
    }
}

impl AgentBehavior for CrackSeeker {
    type Env = Field;

    fn begin_tick(&mut self, material: &Field) {
        self.cracks.recompute(material, |v| v == CRACKED);
    }

    fn act(&mut self, agent: &mut Agent, material: &mut Field, grid: &Grid, _rng: &mut SimRng) {
        let Some(target) = self.cracks.nearest(agent.pos) else {
            return;
        };
        agent.pos = greedy_step(grid, agent.pos, target);
        if actuation::in_reach(agent.pos, target, self.radius)
            && actuation::repair(material, target, REPAIR)
        {
            self.cracks.remove(target);
        }
    }
}

/// A material grid with a rectangular crack and a swarm that seals it.
#[derive(Clone, Debug)]
pub struct RepairScenario {
    material: Field,
    swarm: Swarm<CrackSeeker>,
}

impl RepairScenario {
    /// Material state: [`CRACKED`] or [`INTACT`] per cell.
    pub fn material(&self) -> &Field {
        &self.material
    }

    /// The agents.
    pub fn agents(&self) -> &DiscreteAgentPool {
        self.swarm.pool()
    }

    /// Number of cells still cracked.
    pub fn cracked_cells(&self) -> usize {
        self.material.count_where(|v| v == CRACKED)
    }
}

impl ScenarioConfig for RepairConfig {
    type Scenario = RepairScenario;

    fn seed(&self) -> u64 {
        self.seed
    }

    fn ticks(&self) -> u64 {
        self.ticks
    }

    fn validate(&self) -> Result<(), ConfigError> {
        RepairConfig::validate(self)
    }
}

impl Scenario for RepairScenario {
    type Config = RepairConfig;

    const NAME: &'static str = "repair";

    fn init(config: &RepairConfig, rng: &mut SimRng) -> Result<Self, ConfigError> {
        let grid = config.grid()?;
        let mut material = Field::filled(grid, INTACT);
        for pos in config.crack_region().cells() {
            material[pos] = CRACKED;
        }
        let pool = DiscreteAgentPool::random(grid, config.agents, None, rng)?;
        let radius = actuation::check_radius(config.interaction_radius)?;
        Ok(Self {
            material,
            swarm: Swarm::new(pool, CrackSeeker::new(radius)),
        })
    }

    fn advance_field(&mut self, _rng: &mut SimRng) -> Result<(), SpaceError> {
        Ok(())
    }

    fn advance_agents(&mut self, rng: &mut SimRng) -> Result<(), SpaceError> {
        self.swarm.step(&mut self.material, rng)
    }

    fn layers(&self) -> Vec<(&'static str, &Field)> {
        vec![("material", &self.material)]
    }

    fn population(&self) -> PopulationSnapshot {
        self.swarm.capture()
    }
}
