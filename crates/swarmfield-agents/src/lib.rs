//! Agents for swarmfield simulations.
//!
//! Two population representations sit behind the [`Population`] stepping
//! contract:
//!
//! - [`DiscreteAgentPool`]: individual agents with a grid position and an
//!   optional payload flag, driven each tick by an [`AgentBehavior`]
//!   through a [`Swarm`].
//! - [`DensityAgentField`]: agents as a continuous density, advected up
//!   or down a signal gradient and diffused.
//!
//! The building blocks behaviors compose are here too: [`TargetSet`] and
//! [`nearest`] for target search, [`movement`] for greedy and random-walk
//! steps, and [`actuation`] for the idempotent cell transitions agents
//! perform.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod actuation;
pub mod agent;
pub mod density;
pub mod error;
pub mod movement;
pub mod pool;
pub mod population;
pub mod target;

pub use actuation::{CellTransition, MAX_INTERACTION_RADIUS};
pub use agent::Agent;
pub use density::DensityAgentField;
pub use error::AgentError;
pub use pool::DiscreteAgentPool;
pub use population::{AgentBehavior, Population, PopulationSnapshot, Swarm};
pub use target::{nearest, TargetSet};
