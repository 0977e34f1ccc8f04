//! A single discrete agent.

use serde::{Deserialize, Serialize};
use swarmfield_core::{AgentId, GridPos};

/// One mobile agent.
///
/// `carrying` is `None` for agents that never hold a payload and
/// `Some(flag)` for transport agents. Several agents may share a cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Stable identity, equal to the agent's index in its pool.
    pub id: AgentId,
    /// Current cell; always inside the pool's grid.
    pub pos: GridPos,
    /// Payload flag, if this kind of agent carries anything.
    pub carrying: Option<bool>,
}

impl Agent {
    /// Create an agent.
    pub fn new(id: AgentId, pos: GridPos, carrying: Option<bool>) -> Self {
        Self { id, pos, carrying }
    }

    /// Whether the agent currently holds a payload.
    pub fn is_carrying(&self) -> bool {
        self.carrying == Some(true)
    }
}
