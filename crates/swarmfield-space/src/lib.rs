//! Spatial data structures for swarmfield simulations.
//!
//! - [`Grid`]: fixed `rows × cols` lattice with an [`EdgeBehavior`]
//!   (periodic wrap or clamp-to-edge).
//! - [`Field`]: dense scalar storage over a grid, one `f64` per cell.
//! - [`stencil`]: pure 4-neighbour finite-difference operators
//!   (Laplacian, central differences, gradient).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod field;
pub mod grid;
pub mod stencil;

pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use field::Field;
pub use grid::Grid;
pub use stencil::{central_difference, gradient, laplacian, laplacian_at, Axis};
