//! Idempotent cell transitions performed by agents.
//!
//! Each rule re-checks its precondition against the live field at the
//! moment it runs. An agent earlier in the same tick may already have
//! changed the cell, in which case the rule does nothing and returns
//! `false`.

use crate::agent::Agent;
use crate::error::AgentError;
use swarmfield_core::GridPos;
use swarmfield_space::Field;

/// Largest supported interaction radius (Chebyshev).
pub const MAX_INTERACTION_RADIUS: usize = 1;

/// Check an interaction radius against [`MAX_INTERACTION_RADIUS`].
pub fn check_radius(radius: usize) -> Result<usize, AgentError> {
    if radius > MAX_INTERACTION_RADIUS {
        return Err(AgentError::InvalidRadius {
            radius,
            max: MAX_INTERACTION_RADIUS,
        });
    }
    Ok(radius)
}

/// Whether `target` is within Chebyshev `radius` of `pos`.
pub fn in_reach(pos: GridPos, target: GridPos, radius: usize) -> bool {
    pos.chebyshev(target) <= radius
}

/// A categorical cell change `from -> to`.
///
/// Applying a transition to a cell that does not hold `from` is a no-op,
/// so applying it twice is the same as applying it once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellTransition {
    /// Required current value.
    pub from: f64,
    /// Value written on success.
    pub to: f64,
}

impl CellTransition {
    /// Create a transition.
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Apply at `pos`. Returns whether the cell changed.
    pub fn apply(self, field: &mut Field, pos: GridPos) -> bool {
        if field.try_get(pos) != Some(self.from) {
            return false;
        }
        field[pos] = self.to;
        true
    }
}

/// Restore a damaged cell: `damaged -> intact`.
pub fn repair(field: &mut Field, pos: GridPos, rule: CellTransition) -> bool {
    let changed = rule.apply(field, pos);
    if changed {
        tracing::trace!(%pos, "repaired");
    }
    changed
}

/// Clear a hazard cell: `hazard -> cleared`. `cleared` should be a value
/// no target predicate selects, so the cell never re-enters a target set.
pub fn eradicate(field: &mut Field, pos: GridPos, rule: CellTransition) -> bool {
    let changed = rule.apply(field, pos);
    if changed {
        tracing::trace!(%pos, "eradicated");
    }
    changed
}

/// Repair every cell where `density > threshold`. Returns the number of
/// cells changed.
pub fn repair_where_dense(
    material: &mut Field,
    density: &Field,
    threshold: f64,
    rule: CellTransition,
) -> usize {
    let mut repaired = 0;
    for (pos, d) in density.cells() {
        if d > threshold && rule.apply(material, pos) {
            repaired += 1;
        }
    }
    if repaired > 0 {
        tracing::trace!(repaired, "density repair");
    }
    repaired
}

/// Take material from the agent's cell.
///
/// Succeeds only if the agent is a non-carrying transport agent and the
/// cell holds `rule.from`; the cell becomes `rule.to` and the agent
/// starts carrying.
pub fn pick_up(agent: &mut Agent, field: &mut Field, rule: CellTransition) -> bool {
    if agent.carrying != Some(false) || !rule.apply(field, agent.pos) {
        return false;
    }
    agent.carrying = Some(true);
    tracing::trace!(agent = %agent.id, pos = %agent.pos, "picked up");
    true
}

/// Deposit the agent's payload on its cell.
///
/// Succeeds only if the agent is carrying and the cell still holds
/// `rule.from` (the empty sentinel); never deposits onto an occupied
/// cell.
pub fn deposit(agent: &mut Agent, field: &mut Field, rule: CellTransition) -> bool {
    if !agent.is_carrying() || !rule.apply(field, agent.pos) {
        return false;
    }
    agent.carrying = Some(false);
    tracing::trace!(agent = %agent.id, pos = %agent.pos, "deposited");
    true
}
