//! Swarmfield: grid simulations where reaction-diffusion fields and agent
//! swarms interact.
//!
//! This facade re-exports the public API of every swarmfield sub-crate.
//! Depending on `swarmfield` alone is enough for most uses.
//!
//! # Quick start
//!
//! ```rust
//! use swarmfield::prelude::*;
//!
//! let config = RepairConfig {
//!     rows: 20,
//!     cols: 30,
//!     agents: 10,
//!     ticks: 60,
//!     ..RepairConfig::default()
//! };
//! let mut sim = SimulationLoop::<RepairScenario>::new(config).unwrap();
//! let start = sim.scenario().cracked_cells();
//! sim.run_to_completion().unwrap();
//! assert!(sim.scenario().cracked_cells() < start);
//!
//! let snap = sim.snapshot();
//! assert_eq!(snap.tick, TickId(60));
//! assert!(snap.layer("material").is_some());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `swarmfield-core` | IDs, coordinates, RNG, step errors |
//! | [`space`] | `swarmfield-space` | Grids, edge behavior, fields, stencils |
//! | [`propagators`] | `swarmfield-propagators` | Diffusion, Gray-Scott, chemotaxis |
//! | [`agents`] | `swarmfield-agents` | Agent pools, movement, actuation, density agents |
//! | [`engine`] | `swarmfield-engine` | Simulation loop, scenarios, configs, snapshots |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Identifiers, coordinates and the seeded RNG (`swarmfield-core`).
pub use swarmfield_core as types;

/// Grids, edge behavior, dense fields and stencils (`swarmfield-space`).
///
/// [`space::laplacian`] and [`space::gradient`] are pure functions over a
/// [`space::Field`].
pub use swarmfield_space as space;

/// Field update rules (`swarmfield-propagators`).
///
/// Includes [`propagators::ScalarDiffusion`], [`propagators::GrayScott`]
/// and [`propagators::ChemotacticAdvection`].
pub use swarmfield_propagators as propagators;

/// Discrete and density agents (`swarmfield-agents`).
pub use swarmfield_agents as agents;

/// The simulation loop and the bundled scenarios (`swarmfield-engine`).
pub use swarmfield_engine as engine;

/// Common imports for typical swarmfield usage.
///
/// ```rust
/// use swarmfield::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use swarmfield_core::{AgentId, GridPos, SimRng, StepError, TickId};

    // Space
    pub use swarmfield_space::{EdgeBehavior, Field, Grid, SpaceError};

    // Propagators
    pub use swarmfield_propagators::{
        ChemotacticAdvection, GrayScott, GrayScottParams, ScalarDiffusion,
    };

    // Agents
    pub use swarmfield_agents::{
        Agent, AgentBehavior, DensityAgentField, DiscreteAgentPool, Population,
        PopulationSnapshot, Swarm, TargetSet,
    };

    // Engine
    pub use swarmfield_engine::{
        run, run_capturing, ConfigError, FinalState, HealingConfig, HealingScenario,
        ManufacturingConfig, ManufacturingScenario, OncologyConfig, OncologyScenario, Region,
        RemediationConfig, RemediationScenario, RepairConfig, RepairScenario, RunError, RunState,
        Scenario, ScenarioConfig, SimulationLoop, Snapshot,
    };
}
