//! Error types for the catalog and the entity lifecycle.

use std::error::Error;
use std::fmt;

/// Errors from entity lifecycle operations.
///
/// All variants are recoverable: they describe a precondition the caller
/// can report and retry after the state changes, never a process failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntityError {
    /// Harvest attempted before the plant reached its final growth stage.
    NotFullyGrown {
        /// The plant's current stage.
        stage: usize,
        /// The stage required for harvest.
        max_stage: usize,
    },
    /// Harvest attempted on an animal that has not been fed today.
    NotFed,
    /// Harvest attempted on an animal already collected today.
    AlreadyCollected,
    /// Feed attempted on something that cannot be fed (a plant).
    NotFeedable {
        /// Name of the kind that rejected the feed.
        name: String,
    },
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFullyGrown { stage, max_stage } => {
                write!(f, "not fully grown (stage {stage} of {max_stage})")
            }
            Self::NotFed => write!(f, "the animal has not been fed today"),
            Self::AlreadyCollected => {
                write!(f, "the animal has already produced today")
            }
            Self::NotFeedable { name } => write!(f, "a {name} cannot be fed"),
        }
    }
}

impl Error for EntityError {}

/// Errors detected while building a [`Catalog`](crate::catalog::Catalog).
///
/// These are configuration errors: a well-formed kind table can never
/// produce them at runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// Two kinds share a display symbol.
    DuplicateSymbol {
        /// The colliding symbol.
        symbol: char,
    },
    /// Two kinds share a name.
    DuplicateName {
        /// The colliding name.
        name: String,
    },
    /// A kind's growth table disagrees with its category.
    InvalidGrowthTable {
        /// Name of the offending kind.
        name: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSymbol { symbol } => {
                write!(f, "duplicate entity symbol '{symbol}'")
            }
            Self::DuplicateName { name } => write!(f, "duplicate entity name '{name}'"),
            Self::InvalidGrowthTable { name } => {
                write!(f, "growth table of '{name}' disagrees with its category")
            }
        }
    }
}

impl Error for CatalogError {}
