//! Entity lifecycle state machines for plants and animals.
//!
//! An [`Entity`] pairs an immutable [`EntityKind`] with mutable lifecycle
//! state. The two variants share one operation surface — readiness check,
//! harvest, feed, day tick — dispatched per variant, with no inheritance
//! and no trait objects.

use crate::catalog::{EntityKind, FarmKind};
use crate::error::EntityError;
use smallvec::{smallvec, SmallVec};

/// Ordered string snapshot of an entity's displayable state.
///
/// Name, display symbol, then one field for plants (`Stage: N`) or two for
/// animals (`Fed: …`, `Collected: …`). Four inline slots cover the longest
/// case without heap allocation of the outer list.
pub type StatusFields = SmallVec<[String; 4]>;

/// Status fields for an empty grid cell.
pub fn ground_status() -> StatusFields {
    smallvec!["ground".to_string(), " ".to_string()]
}

/// Growth progress of a placed plant.
///
/// `stage` counts from 0 (just harvested) through `max_stage` (ready to
/// harvest). Freshly placed plants start at stage 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlantState {
    stage: usize,
}

impl PlantState {
    /// Current growth stage.
    pub fn stage(&self) -> usize {
        self.stage
    }
}

/// Daily feed/collect cycle of a placed animal.
///
/// Both flags start false and are reset to false by the end-of-day tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimalState {
    fed: bool,
    collected: bool,
}

impl AnimalState {
    /// Whether the animal has been fed today.
    pub fn fed(&self) -> bool {
        self.fed
    }

    /// Whether the animal's product has been collected today.
    pub fn collected(&self) -> bool {
        self.collected
    }
}

/// The per-category lifecycle state of an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Growth-stage cycle.
    Plant(PlantState),
    /// Feed/collect cycle.
    Animal(AnimalState),
}

/// A living thing occupying one grid cell.
///
/// Created only by placement (or snapshot restore) and exclusively owned by
/// its cell. Every mutating operation returns the refreshed
/// [`StatusFields`] so the cell can keep its denormalized copy in sync.
///
/// # Examples
///
/// ```
/// use croft_core::{Catalog, Entity, EntityError};
///
/// let berry = Catalog::builtin().kind_by_symbol('.').unwrap();
/// let mut entity = Entity::new(berry);
/// assert_eq!(
///     entity.check_harvest_ready(),
///     Err(EntityError::NotFullyGrown { stage: 1, max_stage: 3 })
/// );
/// entity.advance_day();
/// entity.advance_day();
/// assert!(entity.check_harvest_ready().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    kind: EntityKind,
    lifecycle: Lifecycle,
}

impl Entity {
    /// Create a freshly placed entity in its initial lifecycle state:
    /// plants at stage 1, animals unfed and uncollected.
    pub fn new(kind: &EntityKind) -> Self {
        let lifecycle = match kind.category {
            FarmKind::Plant => Lifecycle::Plant(PlantState { stage: 1 }),
            FarmKind::Animal => Lifecycle::Animal(AnimalState {
                fed: false,
                collected: false,
            }),
        };
        Self {
            kind: kind.clone(),
            lifecycle,
        }
    }

    /// Rebuild a plant at a recorded growth stage.
    ///
    /// Returns `None` if the kind is not a plant or the stage exceeds the
    /// kind's final stage.
    pub fn restore_plant(kind: &EntityKind, stage: usize) -> Option<Self> {
        if kind.category != FarmKind::Plant || stage > kind.max_stage() {
            return None;
        }
        Some(Self {
            kind: kind.clone(),
            lifecycle: Lifecycle::Plant(PlantState { stage }),
        })
    }

    /// Rebuild an animal with recorded feed/collect flags.
    ///
    /// Returns `None` if the kind is not an animal.
    pub fn restore_animal(kind: &EntityKind, fed: bool, collected: bool) -> Option<Self> {
        if kind.category != FarmKind::Animal {
            return None;
        }
        Some(Self {
            kind: kind.clone(),
            lifecycle: Lifecycle::Animal(AnimalState { fed, collected }),
        })
    }

    /// The immutable kind this entity was placed as.
    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    /// The current lifecycle state.
    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// The character this entity currently shows on the board.
    ///
    /// Animals always show their kind symbol. A plant at stage `n > 0`
    /// shows `growth[n - 1]`; stage 0 (just harvested) reuses the stage-1
    /// symbol, so a dormant plant looks like a seedling.
    pub fn display_symbol(&self) -> char {
        match &self.lifecycle {
            Lifecycle::Plant(state) => self.kind.growth[state.stage.saturating_sub(1)],
            Lifecycle::Animal(_) => self.kind.symbol,
        }
    }

    /// Check whether a harvest would succeed right now.
    ///
    /// Plants are ready exactly at their final growth stage; animals must
    /// have been fed and not yet collected today.
    pub fn check_harvest_ready(&self) -> Result<(), EntityError> {
        match &self.lifecycle {
            Lifecycle::Plant(state) => {
                if state.stage < self.kind.max_stage() {
                    return Err(EntityError::NotFullyGrown {
                        stage: state.stage,
                        max_stage: self.kind.max_stage(),
                    });
                }
                Ok(())
            }
            Lifecycle::Animal(state) => {
                if !state.fed {
                    return Err(EntityError::NotFed);
                }
                if state.collected {
                    return Err(EntityError::AlreadyCollected);
                }
                Ok(())
            }
        }
    }

    /// Apply a harvest: plants drop back to stage 0, animals are marked
    /// collected for the day.
    ///
    /// Callers are expected to gate on [`Entity::check_harvest_ready`]
    /// first; the product itself (and its quality draw) is the caller's
    /// concern.
    pub fn harvest(&mut self) -> StatusFields {
        match &mut self.lifecycle {
            Lifecycle::Plant(state) => state.stage = 0,
            Lifecycle::Animal(state) => state.collected = true,
        }
        self.status_fields()
    }

    /// Feed the entity.
    ///
    /// Feeding an already-fed animal is a no-op; feeding a plant fails with
    /// [`EntityError::NotFeedable`].
    pub fn feed(&mut self) -> Result<StatusFields, EntityError> {
        match &mut self.lifecycle {
            Lifecycle::Plant(_) => Err(EntityError::NotFeedable {
                name: self.kind.name.clone(),
            }),
            Lifecycle::Animal(state) => {
                state.fed = true;
                Ok(self.status_fields())
            }
        }
    }

    /// Apply the end-of-day tick.
    ///
    /// Plants grow one stage unless already fully grown (they then hold at
    /// the final stage until harvested); animals reset to unfed and
    /// uncollected regardless of state.
    pub fn advance_day(&mut self) -> StatusFields {
        match &mut self.lifecycle {
            Lifecycle::Plant(state) => {
                if state.stage < self.kind.max_stage() {
                    state.stage += 1;
                }
            }
            Lifecycle::Animal(state) => {
                state.fed = false;
                state.collected = false;
            }
        }
        self.status_fields()
    }

    /// Compute the ordered status snapshot for the current state.
    pub fn status_fields(&self) -> StatusFields {
        match &self.lifecycle {
            Lifecycle::Plant(state) => smallvec![
                self.kind.name.clone(),
                self.display_symbol().to_string(),
                format!("Stage: {}", state.stage),
            ],
            Lifecycle::Animal(state) => smallvec![
                self.kind.name.clone(),
                self.display_symbol().to_string(),
                format!("Fed: {}", state.fed),
                format!("Collected: {}", state.collected),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use proptest::prelude::*;

    fn kind(name: &str) -> &'static EntityKind {
        Catalog::builtin()
            .kind_by_name(name)
            .expect("builtin kind")
    }

    #[test]
    fn new_plant_starts_at_stage_one() {
        let entity = Entity::new(kind("berry"));
        assert_eq!(
            entity.status_fields().to_vec(),
            vec!["berry", ".", "Stage: 1"]
        );
    }

    #[test]
    fn plant_holds_at_final_stage() {
        let mut entity = Entity::new(kind("wheat"));
        entity.advance_day();
        assert!(entity.check_harvest_ready().is_ok());
        // Extra ticks must not grow past the final stage.
        entity.advance_day();
        entity.advance_day();
        assert_eq!(
            entity.status_fields().to_vec(),
            vec!["wheat", "#", "Stage: 2"]
        );
    }

    #[test]
    fn harvested_plant_shows_seedling_symbol() {
        let mut entity = Entity::new(kind("berry"));
        entity.advance_day();
        entity.advance_day();
        assert_eq!(entity.display_symbol(), '@');
        entity.harvest();
        assert_eq!(entity.display_symbol(), '.');
        assert_eq!(
            entity.status_fields().to_vec(),
            vec!["berry", ".", "Stage: 0"]
        );
    }

    #[test]
    fn plant_cannot_be_fed() {
        let mut entity = Entity::new(kind("coffee"));
        assert_eq!(
            entity.feed(),
            Err(EntityError::NotFeedable {
                name: "coffee".into()
            })
        );
    }

    #[test]
    fn animal_cycle_feed_collect_reset() {
        let mut entity = Entity::new(kind("cow"));
        assert_eq!(entity.check_harvest_ready(), Err(EntityError::NotFed));

        entity.feed().unwrap();
        assert!(entity.check_harvest_ready().is_ok());

        entity.harvest();
        assert_eq!(
            entity.check_harvest_ready(),
            Err(EntityError::AlreadyCollected)
        );
        assert_eq!(
            entity.status_fields().to_vec(),
            vec!["cow", "४", "Fed: true", "Collected: true"]
        );

        entity.advance_day();
        assert_eq!(
            entity.status_fields().to_vec(),
            vec!["cow", "४", "Fed: false", "Collected: false"]
        );
    }

    #[test]
    fn feeding_twice_is_a_no_op() {
        let mut entity = Entity::new(kind("sheep"));
        let first = entity.feed().unwrap();
        let second = entity.feed().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn restore_rejects_category_and_range_violations() {
        assert!(Entity::restore_plant(kind("cow"), 1).is_none());
        assert!(Entity::restore_plant(kind("berry"), 4).is_none());
        assert!(Entity::restore_animal(kind("berry"), false, false).is_none());
        let restored = Entity::restore_plant(kind("berry"), 0).unwrap();
        assert_eq!(restored.display_symbol(), '.');
    }

    proptest! {
        /// A harvested plant needs exactly `max_stage` ticks to be ready
        /// again, and is not ready at any tick before that.
        #[test]
        fn harvest_then_exactly_max_stage_ticks(name in prop_oneof![
            Just("berry"), Just("coffee"), Just("wheat")
        ]) {
            let kind = kind(name);
            let mut entity = Entity::new(kind);
            for _ in 0..kind.max_stage() {
                entity.advance_day();
            }
            entity.harvest();

            prop_assert_eq!(
                entity.check_harvest_ready(),
                Err(EntityError::NotFullyGrown { stage: 0, max_stage: kind.max_stage() })
            );
            for tick in 0..kind.max_stage() {
                prop_assert!(entity.check_harvest_ready().is_err(), "ready after {} ticks", tick);
                entity.advance_day();
            }
            prop_assert!(entity.check_harvest_ready().is_ok());
        }

        /// The day tick fully resets an animal from any state.
        #[test]
        fn animal_tick_resets_any_state(fed in any::<bool>(), collected in any::<bool>()) {
            let mut entity = Entity::restore_animal(kind("chicken"), fed, collected).unwrap();
            entity.advance_day();
            match entity.lifecycle() {
                Lifecycle::Animal(state) => {
                    prop_assert!(!state.fed());
                    prop_assert!(!state.collected());
                }
                Lifecycle::Plant(_) => prop_assert!(false, "chicken restored as plant"),
            }
        }

        /// Display symbol is a function of stage alone, with stage 0 and
        /// stage 1 sharing the seedling symbol.
        #[test]
        fn plant_symbol_tracks_stage(stage in 0usize..=4) {
            let kind = kind("coffee");
            let entity = Entity::restore_plant(kind, stage).unwrap();
            let expected = kind.growth[stage.saturating_sub(1)];
            prop_assert_eq!(entity.display_symbol(), expected);
        }
    }
}
