//! The Croft interaction session: validated command execution.
//!
//! A [`FarmSession`] owns one [`FarmGrid`](croft_grid::FarmGrid) plus an
//! injected [`QualitySource`](croft_core::QualitySource) and executes the
//! five player commands — place, feed, harvest, remove, end-day — with
//! validate-then-apply semantics: a rejected command never leaves a cell
//! partially updated.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod quality;
pub mod session;

pub use config::SessionConfig;
pub use error::CommandError;
pub use quality::UniformQuality;
pub use session::FarmSession;
