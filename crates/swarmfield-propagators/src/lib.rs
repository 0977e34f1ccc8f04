//! Field operators for swarmfield simulations.
//!
//! Each operator advances one or more [`Field`](swarmfield_space::Field)s
//! by one explicit-Euler step using the 4-neighbour stencils from
//! `swarmfield-space`:
//!
//! - [`ScalarDiffusion`]: `f += D·dt·∇²f`, then fixed-value sources, then
//!   optional clamping.
//! - [`GrayScott`]: two-species reaction-diffusion.
//! - [`ChemotacticAdvection`]: advects a density field by the gradient of
//!   a signal field.
//!
//! All operators are conditionally stable. They do not detect blow-up;
//! [`ScalarDiffusion::max_stable_dt`] and [`GrayScott::is_stable`] report
//! the explicit-Euler bound so callers can check their parameters.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod chemotaxis;
pub mod diffusion;
pub mod error;
pub mod reaction;

pub use chemotaxis::ChemotacticAdvection;
pub use diffusion::ScalarDiffusion;
pub use error::ParamError;
pub use reaction::{GrayScott, GrayScottParams};

/// Explicit-Euler stability bound for the 4-neighbour Laplacian:
/// `D·dt` must not exceed this value.
pub const STENCIL_STABILITY_LIMIT: f64 = 0.25;
