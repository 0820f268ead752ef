//! The farm grid: fixed-size row-major cell storage and bulk operations.

use crate::cell::Cell;
use crate::error::GridError;
use croft_core::{ground_status, FarmKind, StatusFields};

/// A fixed `rows x columns` board of [`Cell`]s, row-major.
///
/// Dimensions and farm kind are set once at construction and never change.
/// Every bulk operation — rendering, status export, day ticks, snapshot
/// encoding — walks the cells in the same row-major order, which is what
/// makes serialization round-trips exact.
///
/// # Examples
///
/// ```
/// use croft_core::{Catalog, Entity, FarmKind};
/// use croft_grid::FarmGrid;
///
/// let mut grid = FarmGrid::new(FarmKind::Plant, 2, 3).unwrap();
/// let berry = Catalog::builtin().kind_by_symbol('.').unwrap();
/// grid.cell_mut(0, 0).unwrap().place(Entity::new(berry)).unwrap();
/// assert_eq!(grid.export_status()[0].to_vec(), vec!["berry", ".", "Stage: 1"]);
/// assert_eq!(grid.export_status()[1].to_vec(), vec!["ground", " "]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FarmGrid {
    farm: FarmKind,
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl FarmGrid {
    /// Create an all-ground grid of the given farm kind and dimensions.
    pub fn new(farm: FarmKind, rows: usize, columns: usize) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::InvalidDimensions { rows, columns });
        }
        Ok(Self {
            farm,
            rows,
            columns,
            cells: vec![Cell::new(); rows * columns],
        })
    }

    /// The farm kind this grid is restricted to.
    pub fn farm_kind(&self) -> FarmKind {
        self.farm
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Check bounds and return the flat row-major index.
    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.rows || col >= self.columns {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(row * self.columns + col)
    }

    /// The cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, GridError> {
        let index = self.index(row, col)?;
        Ok(&self.cells[index])
    }

    /// Mutable access to the cell at `(row, col)`.
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, GridError> {
        let index = self.index(row, col)?;
        Ok(&mut self.cells[index])
    }

    /// Visit every cell in row-major order.
    pub fn for_each_cell(&self, mut f: impl FnMut(usize, usize, &Cell)) {
        for row in 0..self.rows {
            for col in 0..self.columns {
                f(row, col, &self.cells[row * self.columns + col]);
            }
        }
    }

    /// Visit every cell mutably in row-major order.
    ///
    /// The day tick uses this: the fixed iteration guarantees each cell is
    /// visited exactly once, in a stable order.
    pub fn for_each_cell_mut(&mut self, mut f: impl FnMut(usize, usize, &mut Cell)) {
        for row in 0..self.rows {
            for col in 0..self.columns {
                f(row, col, &mut self.cells[row * self.columns + col]);
            }
        }
    }

    /// Render the board as fenced text.
    ///
    /// A dash fence of `columns * 2 + 3` characters frames the board top
    /// and bottom; each row is framed by `"| "` and `"|"`, with one display
    /// character plus a trailing space per cell. Ground renders a space.
    pub fn render(&self) -> String {
        let fence = "-".repeat(self.columns * 2 + 3);
        let mut out = String::with_capacity((self.rows + 2) * (self.columns * 2 + 4));
        out.push_str(&fence);
        out.push('\n');
        for row in 0..self.rows {
            out.push_str("| ");
            for col in 0..self.columns {
                let cell = &self.cells[row * self.columns + col];
                let symbol = cell.entity().map_or(' ', |e| e.display_symbol());
                out.push(symbol);
                out.push(' ');
            }
            out.push('|');
            out.push('\n');
        }
        out.push_str(&fence);
        out.push('\n');
        out
    }

    /// Export every cell's status fields in row-major order.
    ///
    /// Ground cells export as `["ground", " "]`. The order matches
    /// [`FarmGrid::for_each_cell`] exactly, so an export can be zipped back
    /// onto the grid.
    pub fn export_status(&self) -> Vec<StatusFields> {
        let mut out = Vec::with_capacity(self.cells.len());
        self.for_each_cell(|_, _, cell| {
            out.push(cell.status().unwrap_or_else(ground_status));
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use croft_core::{Catalog, Entity};
    use proptest::prelude::*;

    fn plant_grid(rows: usize, columns: usize) -> FarmGrid {
        FarmGrid::new(FarmKind::Plant, rows, columns).unwrap()
    }

    fn entity(symbol: char) -> Entity {
        Entity::new(Catalog::builtin().kind_by_symbol(symbol).unwrap())
    }

    #[test]
    fn zero_dimensions_rejected() {
        for (rows, columns) in [(0, 3), (3, 0), (0, 0)] {
            assert_eq!(
                FarmGrid::new(FarmKind::Plant, rows, columns).unwrap_err(),
                GridError::InvalidDimensions { rows, columns }
            );
        }
    }

    #[test]
    fn out_of_bounds_carries_context() {
        let grid = plant_grid(2, 3);
        assert_eq!(
            grid.cell(2, 0).unwrap_err(),
            GridError::OutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                columns: 3
            }
        );
        assert!(grid.cell(1, 2).is_ok());
        assert!(grid.cell(0, 3).is_err());
    }

    #[test]
    fn render_frames_the_board() {
        let mut grid = plant_grid(2, 2);
        grid.cell_mut(0, 0).unwrap().place(entity('.')).unwrap();
        let expected = "\
-------
| .   |
|     |
-------
";
        assert_eq!(grid.render(), expected);
    }

    #[test]
    fn render_shows_growth_symbols() {
        let mut grid = plant_grid(1, 2);
        grid.cell_mut(0, 1).unwrap().place(entity('.')).unwrap();
        grid.cell_mut(0, 1).unwrap().update(|e| e.advance_day()).unwrap();
        assert_eq!(grid.render(), "-------\n|   o |\n-------\n");
    }

    #[test]
    fn export_is_row_major_with_ground_markers() {
        let mut grid = plant_grid(2, 2);
        grid.cell_mut(1, 0).unwrap().place(entity(':')).unwrap();
        let status = grid.export_status();
        assert_eq!(status.len(), 4);
        assert_eq!(status[0].to_vec(), vec!["ground", " "]);
        assert_eq!(status[2].to_vec(), vec!["coffee", ":", "Stage: 1"]);
    }

    proptest! {
        /// `for_each_cell` always yields `rows * columns` cells in
        /// strictly increasing row-major order.
        #[test]
        fn iteration_order_is_row_major(rows in 1usize..6, columns in 1usize..6) {
            let grid = plant_grid(rows, columns);
            let mut seen = Vec::new();
            grid.for_each_cell(|r, c, _| seen.push((r, c)));
            let mut expected = Vec::new();
            for r in 0..rows {
                for c in 0..columns {
                    expected.push((r, c));
                }
            }
            prop_assert_eq!(seen, expected);
        }

        /// The fence is always `columns * 2 + 3` dashes and the rendered
        /// text has `rows + 2` lines.
        #[test]
        fn render_dimensions(rows in 1usize..6, columns in 1usize..6) {
            let grid = plant_grid(rows, columns);
            let rendered = grid.render();
            let lines: Vec<&str> = rendered.lines().collect();
            prop_assert_eq!(lines.len(), rows + 2);
            prop_assert_eq!(lines[0].len(), columns * 2 + 3);
            prop_assert!(lines[0].chars().all(|c| c == '-'));
        }
    }
}
