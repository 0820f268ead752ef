//! Deterministic fixtures shared by the Croft test suites.
//!
//! Quality-source doubles and pre-built grids, so scenario and codec tests
//! never depend on entropy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fixtures;

pub use fixtures::{
    mixed_animal_grid, mixed_plant_grid, place_kind, FixedQuality, ScriptedQuality,
};
