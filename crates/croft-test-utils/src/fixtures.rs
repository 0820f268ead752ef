//! Reusable deterministic test fixtures.
//!
//! Two [`QualitySource`] doubles for harvest tests:
//!
//! - [`FixedQuality`] — always returns the same tier.
//! - [`ScriptedQuality`] — cycles a programmed sequence and counts draws.
//!
//! Plus small pre-built grids with entities in known mixed states.

use croft_core::{Catalog, Entity, Quality, QualitySource};
use croft_grid::FarmGrid;

/// Always draws the same quality.
#[derive(Clone, Copy, Debug)]
pub struct FixedQuality(pub Quality);

impl QualitySource for FixedQuality {
    fn draw(&mut self) -> Quality {
        self.0
    }
}

/// Cycles through a programmed quality sequence, counting draws.
///
/// Useful for asserting that a rejected harvest consumes no draw.
#[derive(Clone, Debug)]
pub struct ScriptedQuality {
    script: Vec<Quality>,
    draws: usize,
}

impl ScriptedQuality {
    /// A source cycling through `script`. Must not be empty.
    pub fn new(script: Vec<Quality>) -> Self {
        assert!(!script.is_empty(), "quality script must not be empty");
        Self { script, draws: 0 }
    }

    /// How many qualities have been drawn so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl QualitySource for ScriptedQuality {
    fn draw(&mut self) -> Quality {
        let quality = self.script[self.draws % self.script.len()];
        self.draws += 1;
        quality
    }
}

/// Place a fresh entity of the builtin kind with `symbol` at `(row, col)`.
///
/// # Panics
///
/// Panics on unknown symbols, bad coordinates, or occupied cells — fixture
/// misuse, not behavior under test.
pub fn place_kind(grid: &mut FarmGrid, row: usize, col: usize, symbol: char) {
    let kind = Catalog::builtin()
        .kind_by_symbol(symbol)
        .expect("fixture uses builtin symbols");
    grid.cell_mut(row, col)
        .expect("fixture coordinates in bounds")
        .place(Entity::new(kind))
        .expect("fixture cell is empty");
}

/// A 2x3 plant grid with berries, wheat, and coffee at assorted stages.
///
/// Layout: berry stage 2 at (0,0), wheat stage 0 at (0,2), coffee at its
/// final stage at (1,1); everything else ground.
pub fn mixed_plant_grid() -> FarmGrid {
    let catalog = Catalog::builtin();
    let mut grid = FarmGrid::new(croft_core::FarmKind::Plant, 2, 3).expect("valid dimensions");

    let berry = catalog.kind_by_name("berry").expect("builtin kind");
    let wheat = catalog.kind_by_name("wheat").expect("builtin kind");
    let coffee = catalog.kind_by_name("coffee").expect("builtin kind");

    let cells = [
        (0, 0, Entity::restore_plant(berry, 2).expect("stage in range")),
        (0, 2, Entity::restore_plant(wheat, 0).expect("stage in range")),
        (
            1,
            1,
            Entity::restore_plant(coffee, coffee.max_stage()).expect("stage in range"),
        ),
    ];
    for (row, col, entity) in cells {
        grid.cell_mut(row, col)
            .expect("fixture coordinates in bounds")
            .place(entity)
            .expect("fixture cell is empty");
    }
    grid
}

/// A 2x2 animal grid with a fed cow, a collected chicken, and an unfed
/// sheep.
pub fn mixed_animal_grid() -> FarmGrid {
    let catalog = Catalog::builtin();
    let mut grid = FarmGrid::new(croft_core::FarmKind::Animal, 2, 2).expect("valid dimensions");

    let cow = catalog.kind_by_name("cow").expect("builtin kind");
    let chicken = catalog.kind_by_name("chicken").expect("builtin kind");
    let sheep = catalog.kind_by_name("sheep").expect("builtin kind");

    let cells = [
        (0, 0, Entity::restore_animal(cow, true, false).expect("animal kind")),
        (0, 1, Entity::restore_animal(chicken, true, true).expect("animal kind")),
        (1, 1, Entity::restore_animal(sheep, false, false).expect("animal kind")),
    ];
    for (row, col, entity) in cells {
        grid.cell_mut(row, col)
            .expect("fixture coordinates in bounds")
            .place(entity)
            .expect("fixture cell is empty");
    }
    grid
}
