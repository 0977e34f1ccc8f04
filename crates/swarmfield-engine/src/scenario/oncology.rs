//! Tumor clearing by a discrete swarm.

use super::{disc, Scenario, ScenarioConfig};
use crate::config::{ConfigError, OncologyConfig};
use swarmfield_agents::actuation::{self, CellTransition};
use swarmfield_agents::movement::Movement;
use swarmfield_agents::{
    Agent, AgentBehavior, DiscreteAgentPool, Population, PopulationSnapshot, Swarm, TargetSet,
};
use swarmfield_core::{GridPos, SimRng};
use swarmfield_space::{Field, Grid, SpaceError};

/// Tissue value of a cleared (formerly tumor) cell. Terminal.
pub const CLEARED: f64 = 0.0;
/// Tissue value of a healthy cell.
pub const HEALTHY: f64 = 1.0;
/// Tissue value of a tumor cell.
pub const TUMOR: f64 = 2.0;

const ERADICATE: CellTransition = CellTransition::new(TUMOR, CLEARED);

/// Search-and-eradicate: move toward the nearest tumor cell in sensing
/// range (random walk if none), then clear the cell the agent stands on
/// if it is tumor.
#[derive(Clone, Debug)]
pub struct TumorHunter {
    tumor: TargetSet,
    sensing_radius: Option<usize>,
}

impl TumorHunter {
    /// Hunter with the given sensing range; `None` is unlimited.
    pub fn new(sensing_radius: Option<usize>) -> Self {
        Self {
            tumor: TargetSet::new(),
            sensing_radius,
        }
    }

    fn sense(&self, pos: GridPos) -> Option<GridPos> {
        match self.sensing_radius {
            None => self.tumor.nearest(pos),
            Some(r) => self.tumor.nearest_within(pos, r),
        }
    }
}

impl AgentBehavior for TumorHunter {
    type Env = Field;

    fn begin_tick(&mut self, tissue: &Field) {
        self.tumor.recompute(tissue, |v| v == TUMOR);
    }

    fn act(&mut self, agent: &mut Agent, tissue: &mut Field, grid: &Grid, rng: &mut SimRng) {
        let movement = match self.sense(agent.pos) {
            Some(target) => Movement::Toward(target),
            None => Movement::Wander,
        };
        agent.pos = movement.apply(grid, agent.pos, rng);
        if actuation::eradicate(tissue, agent.pos, ERADICATE) {
            self.tumor.remove(agent.pos);
        }
    }
}

/// Healthy tissue with a disc-shaped tumor and a swarm that clears it.
#[derive(Clone, Debug)]
pub struct OncologyScenario {
    tissue: Field,
    swarm: Swarm<TumorHunter>,
}

impl OncologyScenario {
    /// Tissue state: [`HEALTHY`], [`TUMOR`] or [`CLEARED`] per cell.
    pub fn tissue(&self) -> &Field {
        &self.tissue
    }

    /// The agents.
    pub fn agents(&self) -> &DiscreteAgentPool {
        self.swarm.pool()
    }

    /// Number of tumor cells remaining.
    pub fn tumor_cells(&self) -> usize {
        self.tissue.count_where(|v| v == TUMOR)
    }

    /// Number of cleared cells.
    pub fn cleared_cells(&self) -> usize {
        self.tissue.count_where(|v| v == CLEARED)
    }
}

impl ScenarioConfig for OncologyConfig {
    type Scenario = OncologyScenario;

    fn seed(&self) -> u64 {
        self.seed
    }

    fn ticks(&self) -> u64 {
        self.ticks
    }

    fn validate(&self) -> Result<(), ConfigError> {
        OncologyConfig::validate(self)
    }
}

impl Scenario for OncologyScenario {
    type Config = OncologyConfig;

    const NAME: &'static str = "oncology";

    fn init(config: &OncologyConfig, rng: &mut SimRng) -> Result<Self, ConfigError> {
        let grid = config.grid()?;
        let mut tissue = Field::filled(grid, HEALTHY);
        for pos in disc(&grid, config.resolved_tumor_centre(), config.tumor_radius) {
            tissue[pos] = TUMOR;
        }
        let pool = DiscreteAgentPool::random(grid, config.agents, None, rng)?;
        Ok(Self {
            tissue,
            swarm: Swarm::new(pool, TumorHunter::new(config.sensing_radius)),
        })
    }

    fn advance_field(&mut self, _rng: &mut SimRng) -> Result<(), SpaceError> {
        Ok(())
    }

    fn advance_agents(&mut self, rng: &mut SimRng) -> Result<(), SpaceError> {
        self.swarm.step(&mut self.tissue, rng)
    }

    fn layers(&self) -> Vec<(&'static str, &Field)> {
        vec![("tissue", &self.tissue)]
    }

    fn population(&self) -> PopulationSnapshot {
        self.swarm.capture()
    }
}
