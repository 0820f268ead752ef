//! Error types for command validation and application.

use croft_core::{EntityError, FarmKind};
use croft_grid::GridError;
use std::error::Error;
use std::fmt;

/// Why a command was rejected.
///
/// Wraps the grid and lifecycle error families and adds the two failures
/// only the session can detect: unknown symbols and farm-kind mismatches.
/// Every variant is reportable to the caller; none is a process failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// Coordinate or occupancy failure from the grid.
    Grid(GridError),
    /// Precondition failure from the target entity's lifecycle.
    Lifecycle(EntityError),
    /// No catalog kind has the requested symbol.
    UnknownSymbol {
        /// The unrecognized symbol.
        symbol: char,
    },
    /// The kind's category does not match the grid's farm kind.
    TypeMismatch {
        /// Category of the kind the caller tried to place.
        placed: FarmKind,
        /// The grid's farm kind.
        farm: FarmKind,
    },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "{e}"),
            Self::Lifecycle(e) => write!(f, "{e}"),
            Self::UnknownSymbol { symbol } => {
                write!(f, "no entity kind has the symbol '{symbol}'")
            }
            Self::TypeMismatch { placed, farm } => {
                write!(f, "cannot put a {placed} on a {farm} farm")
            }
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Lifecycle(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for CommandError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<EntityError> for CommandError {
    fn from(e: EntityError) -> Self {
        Self::Lifecycle(e)
    }
}
