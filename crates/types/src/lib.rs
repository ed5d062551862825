//! Value types shared by every labelsheet crate.
//!
//! Nothing here performs I/O or holds state across calls; these are the
//! vocabulary the pipeline, its collaborators and its callers agree on.

pub mod grid;
pub mod shape;

pub use grid::{GridMetrics, ItemsPerPage, Orientation};
pub use shape::{PrintShape, UnknownShape};
