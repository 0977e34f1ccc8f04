//! Material transport onto a target path.

use super::{Scenario, ScenarioConfig};
use crate::config::{ConfigError, ManufacturingConfig, Region};
use rand::seq::index;
use swarmfield_agents::actuation::{self, CellTransition};
use swarmfield_agents::movement::greedy_step;
use swarmfield_agents::{
    Agent, AgentBehavior, DiscreteAgentPool, Population, PopulationSnapshot, Swarm, TargetSet,
};
use swarmfield_core::{GridPos, SimRng};
use swarmfield_space::{Field, Grid, SpaceError};

/// Site value of an empty cell.
pub const EMPTY: f64 = 0.0;
/// Site value of a cell holding deposited (assembled) material.
pub const ASSEMBLED: f64 = 1.0;
/// Site value of a cell holding raw material.
pub const MATERIAL: f64 = 2.0;

const PICK_UP: CellTransition = CellTransition::new(MATERIAL, EMPTY);
const DEPOSIT: CellTransition = CellTransition::new(EMPTY, ASSEMBLED);

/// Fetch-and-place: empty-handed agents head for the nearest raw
/// material, loaded agents for the nearest empty path cell. An agent acts
/// only when standing on its target.
#[derive(Clone, Debug)]
pub struct Assembler {
    path: Region,
    material: TargetSet,
    open_path: TargetSet,
}

impl Assembler {
    /// Assembler building along `path`.
    pub fn new(path: Region) -> Self {
        Self {
            path,
            material: TargetSet::new(),
            open_path: TargetSet::new(),
        }
    }
}

impl AgentBehavior for Assembler {
    type Env = Field;

    fn begin_tick(&mut self, site: &Field) {
        self.material.recompute(site, |v| v == MATERIAL);
        self.open_path = self
            .path
            .cells()
            .filter(|&p| site.try_get(p) == Some(EMPTY))
            .collect();
    }

    fn act(&mut self, agent: &mut Agent, site: &mut Field, grid: &Grid, _rng: &mut SimRng) {
        let targets = if agent.is_carrying() {
            &self.open_path
        } else {
            &self.material
        };
        let Some(target) = targets.nearest(agent.pos) else {
            return;
        };
        agent.pos = greedy_step(grid, agent.pos, target);
        if agent.pos != target {
            return;
        }

        if agent.is_carrying() {
            if actuation::deposit(agent, site, DEPOSIT) {
                self.open_path.remove(target);
            }
        } else if actuation::pick_up(agent, site, PICK_UP) {
            self.material.remove(target);
            if self.path.contains(target) {
                self.open_path.insert(target);
            }
        }
    }
}

/// A site with scattered raw material and a swarm assembling it onto a
/// path.
#[derive(Clone, Debug)]
pub struct ManufacturingScenario {
    site: Field,
    path: Region,
    swarm: Swarm<Assembler>,
    on_path_reward: f64,
    off_path_reward: f64,
}

impl ManufacturingScenario {
    /// Site state: [`EMPTY`], [`ASSEMBLED`] or [`MATERIAL`] per cell.
    pub fn site(&self) -> &Field {
        &self.site
    }

    /// The target path.
    pub fn path(&self) -> Region {
        self.path
    }

    /// The agents.
    pub fn agents(&self) -> &DiscreteAgentPool {
        self.swarm.pool()
    }

    /// Reward for an agent at `pos`: the on-path reward on the path, the
    /// off-path reward elsewhere.
    pub fn reward(&self, pos: GridPos) -> f64 {
        if self.path.contains(pos) {
            self.on_path_reward
        } else {
            self.off_path_reward
        }
    }

    /// Reward for every agent, in pool order.
    pub fn rewards(&self) -> Vec<f64> {
        self.swarm.pool().iter().map(|a| self.reward(a.pos)).collect()
    }

    /// Fraction of path cells holding assembled material.
    pub fn assembled_fraction(&self) -> f64 {
        let total = self.path.cell_count();
        if total == 0 {
            return 1.0;
        }
        let done = self
            .path
            .cells()
            .filter(|&p| self.site[p] == ASSEMBLED)
            .count();
        done as f64 / total as f64
    }

    /// Raw material plus material in transit plus assembled material.
    pub fn material_count(&self) -> usize {
        self.site.count_where(|v| v == MATERIAL || v == ASSEMBLED)
            + self.swarm.pool().carrying_count()
    }
}

impl ScenarioConfig for ManufacturingConfig {
    type Scenario = ManufacturingScenario;

    fn seed(&self) -> u64 {
        self.seed
    }

    fn ticks(&self) -> u64 {
        self.ticks
    }

    fn validate(&self) -> Result<(), ConfigError> {
        ManufacturingConfig::validate(self)
    }
}

impl Scenario for ManufacturingScenario {
    type Config = ManufacturingConfig;

    const NAME: &'static str = "manufacturing";

    fn init(config: &ManufacturingConfig, rng: &mut SimRng) -> Result<Self, ConfigError> {
        let grid = config.grid()?;
        let path = config.path_region();

        let mut site = Field::filled(grid, EMPTY);
        for i in index::sample(rng, grid.cell_count(), config.particles) {
            site[grid.pos(i)] = MATERIAL;
        }
        let pool = DiscreteAgentPool::random(grid, config.agents, Some(false), rng)?;

        Ok(Self {
            site,
            path,
            swarm: Swarm::new(pool, Assembler::new(path)),
            on_path_reward: config.on_path_reward,
            off_path_reward: config.off_path_reward,
        })
    }

    fn advance_field(&mut self, _rng: &mut SimRng) -> Result<(), SpaceError> {
        Ok(())
    }

    fn advance_agents(&mut self, rng: &mut SimRng) -> Result<(), SpaceError> {
        self.swarm.step(&mut self.site, rng)
    }

    fn layers(&self) -> Vec<(&'static str, &Field)> {
        vec![("site", &self.site)]
    }

    fn population(&self) -> PopulationSnapshot {
        self.swarm.capture()
    }
}
