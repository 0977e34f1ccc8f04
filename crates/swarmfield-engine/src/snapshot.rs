//! Deep-copy snapshots of a running simulation.

use indexmap::IndexMap;
use serde::Serialize;
use swarmfield_agents::PopulationSnapshot;
use swarmfield_core::TickId;
use swarmfield_space::Field;

/// Owned copy of a scenario's state at a tick boundary.
///
/// Nothing in a snapshot aliases live simulation state; stepping the
/// loop afterwards never changes it. Layers keep the scenario's order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    /// Scenario name.
    pub scenario: &'static str,
    /// Ticks completed when the snapshot was taken (`0` = initial state).
    pub tick: TickId,
    /// Named field layers.
    pub layers: IndexMap<String, Field>,
    /// The agents, if the scenario has any.
    pub agents: PopulationSnapshot,
}

impl Snapshot {
    /// The layer called `name`.
    pub fn layer(&self, name: &str) -> Option<&Field> {
        self.layers.get(name)
    }

    /// Layer names in scenario order.
    pub fn layer_names(&self) -> impl Iterator<Item = &str> {
        self.layers.keys().map(String::as_str)
    }
}
