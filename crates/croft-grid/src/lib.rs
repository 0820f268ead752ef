//! Cell and grid storage for the Croft farm simulation.
//!
//! A [`FarmGrid`] is a fixed-size rectangular board of [`Cell`]s in
//! row-major order. Each cell optionally owns one entity together with a
//! denormalized status snapshot that is refreshed on every entity
//! mutation — rendering and serialization read the snapshot, never the
//! entity itself.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod grid;

pub use cell::Cell;
pub use error::GridError;
pub use grid::FarmGrid;
