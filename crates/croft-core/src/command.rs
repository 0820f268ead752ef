//! The player command vocabulary and its application outcomes.

use crate::product::Product;

/// A command against the farm grid.
///
/// Coordinates are zero-based `(row, col)`. Each command is atomic:
/// it is validated completely before any state changes, and a rejected
/// command leaves the grid untouched.
///
/// # Examples
///
/// ```
/// use croft_core::Command;
///
/// let place = Command::Place { row: 0, col: 2, symbol: '.' };
/// assert!(matches!(place, Command::Place { symbol: '.', .. }));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Place a fresh entity of the kind identified by `symbol`.
    Place {
        /// Target row.
        row: usize,
        /// Target column.
        col: usize,
        /// Catalog symbol of the kind to place.
        symbol: char,
    },
    /// Feed the animal at the target cell.
    Feed {
        /// Target row.
        row: usize,
        /// Target column.
        col: usize,
    },
    /// Harvest the entity at the target cell, yielding a product.
    Harvest {
        /// Target row.
        row: usize,
        /// Target column.
        col: usize,
    },
    /// Clear the target cell. Tolerant of an already-empty target.
    Remove {
        /// Target row.
        row: usize,
        /// Target column.
        col: usize,
    },
    /// Advance every occupied cell by one day.
    EndDay,
}

/// What a successfully applied [`Command`] produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A fresh entity now occupies the target cell.
    Placed,
    /// The animal at the target cell is fed for the day.
    Fed,
    /// The harvest yielded this product.
    Harvested(Product),
    /// The target cell is now ground.
    Removed,
    /// Every occupied cell advanced one day.
    DayEnded,
}
