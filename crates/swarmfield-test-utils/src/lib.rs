//! Test fixtures and proptest strategies for swarmfield development.
//!
//! - [`fixtures`]: small grids and canonical initial fields.
//! - [`strategies`]: proptest generators for grids, positions and
//!   position sets.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::{clamp_grid, gray_scott_spill, spike, wrap_grid};
