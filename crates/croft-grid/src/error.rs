//! Error types for grid construction and cell access.

use std::error::Error;
use std::fmt;

/// Errors from grid construction and coordinate-addressed cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Grid dimensions must both be positive.
    InvalidDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        columns: usize,
    },
    /// A coordinate fell outside the grid.
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        columns: usize,
    },
    /// Placement targeted a cell that already holds an entity.
    Occupied {
        /// Target row.
        row: usize,
        /// Target column.
        col: usize,
    },
    /// An operation that needs an entity targeted an empty cell.
    Empty {
        /// Target row.
        row: usize,
        /// Target column.
        col: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, columns } => {
                write!(f, "grid dimensions must be positive, got {rows}x{columns}")
            }
            Self::OutOfBounds {
                row,
                col,
                rows,
                columns,
            } => write!(
                f,
                "({row}, {col}) is outside the {rows}x{columns} grid"
            ),
            Self::Occupied { row, col } => {
                write!(f, "({row}, {col}) already holds an entity")
            }
            Self::Empty { row, col } => write!(f, "({row}, {col}) is empty ground"),
        }
    }
}

impl Error for GridError {}
