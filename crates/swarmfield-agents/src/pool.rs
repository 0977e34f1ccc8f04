//! Fixed-size pool of discrete agents.

use crate::agent::Agent;
use crate::error::AgentError;
use rand::Rng;
use serde::Serialize;
use swarmfield_core::{AgentId, GridPos, SimRng};
use swarmfield_space::Grid;

/// A fixed-size, index-ordered collection of agents on one grid.
///
/// The pool never grows or shrinks after construction. Iteration order
/// is index order, which is also the order agents act in each tick.
///
/// # Examples
///
/// ```
/// use swarmfield_agents::DiscreteAgentPool;
/// use swarmfield_core::seeded_rng;
/// use swarmfield_space::{EdgeBehavior, Grid};
///
/// let grid = Grid::new(10, 10, EdgeBehavior::Clamp).unwrap();
/// let mut rng = seeded_rng(7);
/// let pool = DiscreteAgentPool::random(grid, 5, None, &mut rng).unwrap();
/// assert_eq!(pool.len(), 5);
/// assert!(pool.iter().all(|a| grid.contains(a.pos)));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DiscreteAgentPool {
    grid: Grid,
    agents: Vec<Agent>,
}

impl DiscreteAgentPool {
    /// Largest pool accepted on `grid`: one agent per cell, capped by the
    /// range of [`AgentId`].
    pub fn capacity(grid: &Grid) -> usize {
        grid.cell_count().min(u32::MAX as usize)
    }

    /// Check `count` against [`capacity`](Self::capacity).
    pub fn check_count(grid: &Grid, count: usize) -> Result<(), AgentError> {
        let capacity = Self::capacity(grid);
        if count > capacity {
            return Err(AgentError::TooManyAgents {
                requested: count,
                capacity,
            });
        }
        Ok(())
    }

    /// Place `count` agents on uniformly random cells.
    ///
    /// Placement draws a row then a column per agent, in index order, with
    /// no exclusion between agents.
    pub fn random(
        grid: Grid,
        count: usize,
        carrying: Option<bool>,
        rng: &mut SimRng,
    ) -> Result<Self, AgentError> {
        Self::check_count(&grid, count)?;
        let agents = (0..count)
            .map(|i| {
                let pos = GridPos::new(
                    rng.random_range(0..grid.rows()),
                    rng.random_range(0..grid.cols()),
                );
                Agent::new(AgentId(i as u32), pos, carrying)
            })
            .collect();
        Ok(Self { grid, agents })
    }

    /// Place one agent at each of `positions`, in order.
    ///
    /// Fails with `AgentError::Space(CoordOutOfBounds)` if any position is
    /// outside the grid.
    pub fn from_positions(
        grid: Grid,
        positions: impl IntoIterator<Item = GridPos>,
        carrying: Option<bool>,
    ) -> Result<Self, AgentError> {
        let agents = positions
            .into_iter()
            .enumerate()
            .map(|(i, pos)| Ok(Agent::new(AgentId(i as u32), grid.check(pos)?, carrying)))
            .collect::<Result<Vec<_>, AgentError>>()?;
        Self::check_count(&grid, agents.len())?;
        Ok(Self { grid, agents })
    }

    /// The grid agents live on.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the pool has no agents.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Agents in index order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// The agent with `id`, if any.
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.0 as usize)
    }

    /// Iterate agents in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    /// Iterate agents mutably in index order.
    ///
    /// Callers that move agents must keep positions inside the grid; the
    /// [`movement`](crate::movement) helpers do.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Agent> {
        self.agents.iter_mut()
    }

    /// Current positions in index order.
    pub fn positions(&self) -> Vec<GridPos> {
        self.agents.iter().map(|a| a.pos).collect()
    }

    /// Number of agents holding a payload.
    pub fn carrying_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_carrying()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swarmfield_core::seeded_rng;
    use swarmfield_space::{EdgeBehavior, SpaceError};

    fn grid() -> Grid {
        Grid::new(4, 5, EdgeBehavior::Clamp).unwrap()
    }

    #[test]
    fn random_placement_is_seeded() {
        let a = DiscreteAgentPool::random(grid(), 8, Some(false), &mut seeded_rng(3)).unwrap();
        let b = DiscreteAgentPool::random(grid(), 8, Some(false), &mut seeded_rng(3)).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|ag| ag.carrying == Some(false)));
    }

    #[test]
    fn ids_follow_index_order() {
        let pool = DiscreteAgentPool::random(grid(), 6, None, &mut seeded_rng(0)).unwrap();
        for (i, agent) in pool.iter().enumerate() {
            assert_eq!(agent.id, AgentId(i as u32));
        }
        assert_eq!(pool.get(AgentId(5)).map(|a| a.id), Some(AgentId(5)));
        assert!(pool.get(AgentId(6)).is_none());
    }

    #[test]
    fn too_many_agents_rejected() {
        match DiscreteAgentPool::random(grid(), 21, None, &mut seeded_rng(0)) {
            Err(AgentError::TooManyAgents {
                requested: 21,
                capacity: 20,
            }) => {}
            other => panic!("expected TooManyAgents, got {other:?}"),
        }
        assert!(DiscreteAgentPool::random(grid(), 20, None, &mut seeded_rng(0)).is_ok());
    }

    #[test]
    fn from_positions_checks_bounds() {
        let err = DiscreteAgentPool::from_positions(
            grid(),
            [GridPos::new(0, 0), GridPos::new(4, 0)],
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AgentError::Space(SpaceError::CoordOutOfBounds { .. })
        ));
    }

    #[test]
    fn empty_pool_is_valid() {
        let pool = DiscreteAgentPool::random(grid(), 0, None, &mut seeded_rng(0)).unwrap();
        assert!(pool.is_empty());
        assert_eq!(pool.carrying_count(), 0);
    }
}
