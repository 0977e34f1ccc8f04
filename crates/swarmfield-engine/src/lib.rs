//! Simulation loop and scenarios for swarmfield.
//!
//! A [`SimulationLoop`] owns one [`Scenario`] (its fields and agents) and
//! the run's single [`SimRng`](swarmfield_core::SimRng). Each tick runs
//! the scenario's field phase, then its agent phase, in that order.
//!
//! Five scenarios ship with the engine, each with a `*Config` carrying
//! documented defaults:
//!
//! | Scenario | Config | Field phase | Agent phase |
//! |---|---|---|---|
//! | [`RemediationScenario`] | [`RemediationConfig`] | Gray-Scott | none |
//! | [`HealingScenario`] | [`HealingConfig`] | signal diffusion from cracks | density chemotaxis + repair |
//! | [`RepairScenario`] | [`RepairConfig`] | none | greedy crack repair |
//! | [`OncologyScenario`] | [`OncologyConfig`] | none | search + eradicate |
//! | [`ManufacturingScenario`] | [`ManufacturingConfig`] | none | pick up + deposit on a path |
//!
//! [`run`] and [`run_capturing`] drive a loop to completion and return
//! the final [`Snapshot`] plus any requested intermediate frames.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod run;
pub mod scenario;
pub mod sim;
pub mod snapshot;

pub use config::{
    ConfigError, HealingConfig, ManufacturingConfig, OncologyConfig, Region, RemediationConfig,
    RepairConfig,
};
pub use run::{run, run_capturing, FinalState, RunError};
pub use scenario::{
    HealingScenario, ManufacturingScenario, OncologyScenario, RemediationScenario, RepairScenario,
    Scenario, ScenarioConfig,
};
pub use sim::{RunState, SimulationLoop};
pub use snapshot::Snapshot;
