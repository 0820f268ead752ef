//! A single grid slot and its denormalized status snapshot.

use croft_core::{Entity, StatusFields};

/// An occupied slot: the entity plus the cached status snapshot.
///
/// The snapshot exists so display and serialization can read cell state
/// without recomputation; [`Cell::update`] refreshes it after every entity
/// mutation, so it can never drift from the entity's canonical state.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Occupant {
    entity: Entity,
    status: StatusFields,
}

/// One slot of the farm grid: ground, or exactly one owned entity.
///
/// The status snapshot is present iff the entity is — the pairing is
/// structural, not an invariant callers must maintain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    slot: Option<Occupant>,
}

impl Cell {
    /// An empty (ground) cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this cell is ground.
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Store an entity, computing its initial status snapshot.
    ///
    /// An occupied cell rejects the placement and hands the entity back
    /// unchanged — the incumbent is never touched.
    pub fn place(&mut self, entity: Entity) -> Result<(), Entity> {
        if self.slot.is_some() {
            return Err(entity);
        }
        let status = entity.status_fields();
        self.slot = Some(Occupant { entity, status });
        Ok(())
    }

    /// Clear the cell unconditionally. A no-op on ground.
    pub fn remove(&mut self) {
        self.slot = None;
    }

    /// The resident entity, if any.
    pub fn entity(&self) -> Option<&Entity> {
        self.slot.as_ref().map(|o| &o.entity)
    }

    /// The cached status snapshot, cloned defensively.
    ///
    /// Callers never observe later mutations through a returned snapshot.
    pub fn status(&self) -> Option<StatusFields> {
        self.slot.as_ref().map(|o| o.status.clone())
    }

    /// Mutate the resident entity and refresh the status snapshot.
    ///
    /// Returns `None` on ground without running `f`. Routing all entity
    /// mutation through here is what keeps the snapshot in sync.
    pub fn update<T>(&mut self, f: impl FnOnce(&mut Entity) -> T) -> Option<T> {
        let occupant = self.slot.as_mut()?;
        let out = f(&mut occupant.entity);
        occupant.status = occupant.entity.status_fields();
        Some(out)
    }
}
