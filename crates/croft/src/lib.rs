//! Croft: a grid-based farm simulation core.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Croft sub-crates. For most users, adding `croft` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use croft::prelude::*;
//!
//! // A 3x4 plant farm with the default uniform quality source.
//! let mut session = FarmSession::new(SessionConfig::new(FarmKind::Plant, 3, 4)).unwrap();
//!
//! // Place a berry seedling and grow it to its final stage.
//! session.place(0, 0, '.').unwrap();
//! session.end_day();
//! session.end_day();
//!
//! // Harvest yields jam; the plant drops back to its dormant stage.
//! let product = session.harvest(0, 0).unwrap();
//! assert_eq!(product.id, ProductId::Jam);
//! assert_eq!(
//!     session.export_status()[0].to_vec(),
//!     vec!["berry", ".", "Stage: 0"]
//! );
//!
//! // Persist and restore through the text snapshot codec.
//! let text = croft::snapshot::encode_snapshot(session.grid());
//! let restored = croft::snapshot::decode_snapshot(&text).unwrap();
//! assert_eq!(restored.export_status(), session.export_status());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `croft-core` | Catalog, lifecycle state machines, products, commands |
//! | [`grid`] | `croft-grid` | Cell and grid storage, rendering, status export |
//! | [`engine`] | `croft-engine` | The interaction session and quality sources |
//! | [`snapshot`] | `croft-snapshot` | The line-oriented text snapshot codec |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Catalog, lifecycle state machines, products, and commands (`croft-core`).
pub use croft_core as types;

/// Cell and grid storage (`croft-grid`).
pub use croft_grid as grid;

/// The interaction session and quality sources (`croft-engine`).
pub use croft_engine as engine;

/// The text snapshot codec (`croft-snapshot`).
pub use croft_snapshot as snapshot;

/// The most commonly used types, re-exported flat.
pub mod prelude {
    pub use croft_core::{
        Catalog, Command, CommandOutcome, Entity, EntityError, FarmKind, Product, ProductId,
        Quality, QualitySource,
    };
    pub use croft_engine::{CommandError, FarmSession, SessionConfig, UniformQuality};
    pub use croft_grid::{Cell, FarmGrid, GridError};
    pub use croft_snapshot::{SnapshotError, SnapshotReader, SnapshotWriter};
}
