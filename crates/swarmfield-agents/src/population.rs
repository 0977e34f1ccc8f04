//! The stepping contract shared by both population representations.

use crate::agent::Agent;
use crate::density::DensityAgentField;
use crate::pool::DiscreteAgentPool;
use serde::Serialize;
use swarmfield_core::SimRng;
use swarmfield_space::{Field, Grid, SpaceError};

/// One agent phase per tick, plus a deep-copy view for snapshots.
///
/// The simulation loop calls [`step`](Self::step) exactly once per tick,
/// after the field phase, with the post-field-update environment.
pub trait Population {
    /// What the population senses and acts on.
    type Env;

    /// Run the agent phase of one tick.
    fn step(&mut self, env: &mut Self::Env, rng: &mut SimRng) -> Result<(), SpaceError>;

    /// A deep copy of the population's current state.
    fn capture(&self) -> PopulationSnapshot;
}

/// Deep copy of a population, as stored in snapshots.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "state", rename_all = "snake_case")]
pub enum PopulationSnapshot {
    /// The variant has no agents.
    None,
    /// Individual agents.
    Discrete(DiscreteAgentPool),
    /// Agents as a per-cell density.
    Density(Field),
}

impl PopulationSnapshot {
    /// The discrete pool, if this is one.
    pub fn as_discrete(&self) -> Option<&DiscreteAgentPool> {
        match self {
            Self::Discrete(pool) => Some(pool),
            _ => None,
        }
    }

    /// The density field, if this is one.
    pub fn as_density(&self) -> Option<&Field> {
        match self {
            Self::Density(field) => Some(field),
            _ => None,
        }
    }
}

/// Per-agent logic for a discrete swarm: search, move, act.
pub trait AgentBehavior {
    /// What the agents sense and act on.
    type Env;

    /// Called once per tick before any agent acts, typically to
    /// recompute target sets from the environment.
    fn begin_tick(&mut self, env: &Self::Env);

    /// One agent's turn. Must leave `agent.pos` inside `grid`.
    fn act(&mut self, agent: &mut Agent, env: &mut Self::Env, grid: &Grid, rng: &mut SimRng);
}

/// A discrete pool driven by a behavior.
///
/// Agents act strictly in pool index order, and each one sees every
/// change made by the agents before it in the same tick.
#[derive(Clone, Debug)]
pub struct Swarm<B> {
    pool: DiscreteAgentPool,
    behavior: B,
}

impl<B: AgentBehavior> Swarm<B> {
    /// Pair a pool with its behavior.
    pub fn new(pool: DiscreteAgentPool, behavior: B) -> Self {
        Self { pool, behavior }
    }

    /// The agents.
    pub fn pool(&self) -> &DiscreteAgentPool {
        &self.pool
    }

    /// The behavior and whatever per-tick state it keeps.
    pub fn behavior(&self) -> &B {
        &self.behavior
    }
}

impl<B: AgentBehavior> Population for Swarm<B> {
    type Env = B::Env;

    fn step(&mut self, env: &mut B::Env, rng: &mut SimRng) -> Result<(), SpaceError> {
        self.behavior.begin_tick(env);
        let grid = *self.pool.grid();
        for agent in self.pool.iter_mut() {
            self.behavior.act(agent, env, &grid, rng);
            debug_assert!(grid.contains(agent.pos), "agent {} left the grid", agent.id);
        }
        Ok(())
    }

    fn capture(&self) -> PopulationSnapshot {
        PopulationSnapshot::Discrete(self.pool.clone())
    }
}

impl Population for DensityAgentField {
    /// The signal the density follows.
    type Env = Field;

    fn step(&mut self, signal: &mut Field, _rng: &mut SimRng) -> Result<(), SpaceError> {
        DensityAgentField::step(self, signal)
    }

    fn capture(&self) -> PopulationSnapshot {
        PopulationSnapshot::Density(self.density().clone())
    }
}
