//! Core types for the swarmfield simulation workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate: tick and agent identifiers,
//! integer grid coordinates, the seeded simulation RNG, and the step-level
//! error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod id;
pub mod rng;

pub use coord::GridPos;
pub use error::StepError;
pub use id::{AgentId, TickId};
pub use rng::{seeded_rng, SimRng};
