//! The interaction session: command validation and application.

use crate::config::SessionConfig;
use crate::error::CommandError;
use croft_core::{
    Catalog, Command, CommandOutcome, Entity, Product, QualitySource, StatusFields,
};
use croft_grid::{FarmGrid, GridError};

/// A single simulation session over one exclusively-owned grid.
///
/// All five commands run synchronously and atomically: validation runs to
/// completion before any mutation, so a rejected command leaves every cell
/// exactly as it was. The session is not designed for concurrent callers;
/// callers behind a service boundary must serialize access themselves.
///
/// # Examples
///
/// ```
/// use croft_core::FarmKind;
/// use croft_engine::{FarmSession, SessionConfig};
///
/// let mut session = FarmSession::new(SessionConfig::new(FarmKind::Plant, 3, 4)).unwrap();
/// session.place(0, 0, '.').unwrap();
/// assert!(session.harvest(0, 0).is_err()); // still a seedling
/// session.end_day();
/// session.end_day();
/// let product = session.harvest(0, 0).unwrap();
/// assert_eq!(product.id, croft_core::ProductId::Jam);
/// ```
pub struct FarmSession {
    grid: FarmGrid,
    quality: Box<dyn QualitySource>,
}

impl FarmSession {
    /// Create a session with an all-ground grid.
    pub fn new(config: SessionConfig) -> Result<Self, GridError> {
        let grid = FarmGrid::new(config.farm, config.rows, config.columns)?;
        Ok(Self {
            grid,
            quality: config.quality,
        })
    }

    /// Resume a session over an existing grid, e.g. one loaded from a
    /// snapshot.
    pub fn from_grid(grid: FarmGrid, quality: Box<dyn QualitySource>) -> Self {
        Self { grid, quality }
    }

    /// The underlying grid.
    pub fn grid(&self) -> &FarmGrid {
        &self.grid
    }

    /// Place a fresh entity of the kind identified by `symbol`.
    ///
    /// Rejects unknown symbols, kinds whose category does not match the
    /// farm, out-of-bounds coordinates, and occupied cells — in that
    /// order, without mutating anything.
    pub fn place(&mut self, row: usize, col: usize, symbol: char) -> Result<(), CommandError> {
        let kind = Catalog::builtin()
            .kind_by_symbol(symbol)
            .ok_or(CommandError::UnknownSymbol { symbol })?;
        if kind.category != self.grid.farm_kind() {
            return Err(CommandError::TypeMismatch {
                placed: kind.category,
                farm: self.grid.farm_kind(),
            });
        }
        let cell = self.grid.cell_mut(row, col)?;
        if cell.place(Entity::new(kind)).is_err() {
            return Err(GridError::Occupied { row, col }.into());
        }
        Ok(())
    }

    /// Harvest the entity at `(row, col)`, returning its product.
    ///
    /// The quality is drawn from the injected source only after every
    /// validation has passed, so a rejected harvest consumes nothing.
    pub fn harvest(&mut self, row: usize, col: usize) -> Result<Product, CommandError> {
        let cell = self.grid.cell_mut(row, col)?;
        let entity = cell.entity().ok_or(GridError::Empty { row, col })?;
        entity.check_harvest_ready()?;
        let id = entity.kind().product;

        let quality = self.quality.draw();
        cell.update(|entity| entity.harvest())
            .ok_or(GridError::Empty { row, col })?;
        Ok(Product { id, quality })
    }

    /// Feed the animal at `(row, col)`.
    ///
    /// Plants reject the feed; feeding an already-fed animal is a no-op.
    pub fn feed(&mut self, row: usize, col: usize) -> Result<(), CommandError> {
        let cell = self.grid.cell_mut(row, col)?;
        let fed: Result<StatusFields, _> = cell
            .update(|entity| entity.feed())
            .ok_or(GridError::Empty { row, col })?;
        fed?;
        Ok(())
    }

    /// Clear the cell at `(row, col)`.
    ///
    /// Removing ground is a successful no-op; only the coordinates are
    /// validated.
    pub fn remove(&mut self, row: usize, col: usize) -> Result<(), CommandError> {
        self.grid.cell_mut(row, col)?.remove();
        Ok(())
    }

    /// Advance every occupied cell by one day, in row-major order.
    ///
    /// Each cell is visited exactly once: plants grow a stage (holding at
    /// their final stage), animals reset to unfed and uncollected.
    pub fn end_day(&mut self) {
        self.grid.for_each_cell_mut(|_, _, cell| {
            let _ = cell.update(|entity| entity.advance_day());
        });
    }

    /// Apply one command, dispatching to the typed operations above.
    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome, CommandError> {
        match command {
            Command::Place { row, col, symbol } => {
                self.place(row, col, symbol)?;
                Ok(CommandOutcome::Placed)
            }
            Command::Feed { row, col } => {
                self.feed(row, col)?;
                Ok(CommandOutcome::Fed)
            }
            Command::Harvest { row, col } => {
                Ok(CommandOutcome::Harvested(self.harvest(row, col)?))
            }
            Command::Remove { row, col } => {
                self.remove(row, col)?;
                Ok(CommandOutcome::Removed)
            }
            Command::EndDay => {
                self.end_day();
                Ok(CommandOutcome::DayEnded)
            }
        }
    }

    /// Render the board as fenced text.
    pub fn render(&self) -> String {
        self.grid.render()
    }

    /// Export every cell's status fields in row-major order.
    pub fn export_status(&self) -> Vec<StatusFields> {
        self.grid.export_status()
    }
}
