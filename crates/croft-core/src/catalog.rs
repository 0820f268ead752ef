//! The entity catalog: fixed configuration mapping symbols to entity kinds.

use crate::error::CatalogError;
use crate::product::ProductId;
use indexmap::IndexMap;
use smallvec::{smallvec, SmallVec};
use std::fmt;
use std::sync::OnceLock;

/// The category an entity kind belongs to, and equally the type of a farm.
///
/// A grid is fixed to one farm kind at construction and only accepts entity
/// kinds of the matching category; one plant/animal vocabulary covers both
/// roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FarmKind {
    /// Crops: placed, grown over day ticks, harvested.
    Plant,
    /// Livestock: fed and collected once per day.
    Animal,
}

impl FarmKind {
    /// Parse a farm kind from its snapshot-header name.
    ///
    /// Returns `None` for anything other than `"plant"` or `"animal"`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "plant" => Some(Self::Plant),
            "animal" => Some(Self::Animal),
            _ => None,
        }
    }
}

impl fmt::Display for FarmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plant => write!(f, "plant"),
            Self::Animal => write!(f, "animal"),
        }
    }
}

/// Immutable description of one placeable entity kind.
///
/// Kinds are configuration data: the catalog owns them, entities clone them
/// at placement, and nothing mutates them afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityKind {
    /// Display symbol, unique across the catalog.
    pub symbol: char,
    /// Name, unique across the catalog. Used in status fields and snapshots.
    pub name: String,
    /// Whether this kind is a plant or an animal.
    pub category: FarmKind,
    /// The product a harvest of this kind yields.
    pub product: ProductId,
    /// Growth-stage display symbols, one per stage, first to last.
    ///
    /// Non-empty exactly for plants. `growth[0]` doubles as the symbol for
    /// a just-harvested (stage 0) plant, so dormant and seedling look the
    /// same on the board.
    pub growth: SmallVec<[char; 4]>,
}

impl EntityKind {
    /// Number of growth stages a plant of this kind passes through.
    ///
    /// Zero for animals.
    pub fn max_stage(&self) -> usize {
        self.growth.len()
    }
}

/// The six builtin entity kinds.
fn builtin_kinds() -> Vec<EntityKind> {
    vec![
        EntityKind {
            symbol: '.',
            name: "berry".into(),
            category: FarmKind::Plant,
            product: ProductId::Jam,
            growth: smallvec!['.', 'o', '@'],
        },
        EntityKind {
            symbol: ':',
            name: "coffee".into(),
            category: FarmKind::Plant,
            product: ProductId::Coffee,
            growth: smallvec![':', ';', '*', '%'],
        },
        EntityKind {
            symbol: 'ἴ',
            name: "wheat".into(),
            category: FarmKind::Plant,
            product: ProductId::Bread,
            growth: smallvec!['ἴ', '#'],
        },
        EntityKind {
            symbol: '৬',
            name: "chicken".into(),
            category: FarmKind::Animal,
            product: ProductId::Egg,
            growth: smallvec![],
        },
        EntityKind {
            symbol: '४',
            name: "cow".into(),
            category: FarmKind::Animal,
            product: ProductId::Milk,
            growth: smallvec![],
        },
        EntityKind {
            symbol: 'ඔ',
            name: "sheep".into(),
            category: FarmKind::Animal,
            product: ProductId::Wool,
            growth: smallvec![],
        },
    ]
}

/// Validated registry of entity kinds with symbol and name indexes.
///
/// Lookups are total and side-effect-free; there is no mutation path after
/// construction. Most callers want the process-wide [`Catalog::builtin`]
/// table rather than building their own.
///
/// # Examples
///
/// ```
/// use croft_core::catalog::{Catalog, FarmKind};
///
/// let catalog = Catalog::builtin();
/// let berry = catalog.kind_by_symbol('.').unwrap();
/// assert_eq!(berry.name, "berry");
/// assert_eq!(berry.category, FarmKind::Plant);
/// assert_eq!(berry.max_stage(), 3);
/// assert!(catalog.kind_by_name("dragon").is_none());
/// ```
#[derive(Debug)]
pub struct Catalog {
    kinds: Vec<EntityKind>,
    by_symbol: IndexMap<char, usize>,
    by_name: IndexMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from the given kinds, validating configuration.
    ///
    /// Duplicate symbols or names are configuration errors, as is a growth
    /// table that disagrees with the kind's category (plants need at least
    /// one stage symbol, animals must have none).
    pub fn new(kinds: Vec<EntityKind>) -> Result<Self, CatalogError> {
        let mut by_symbol = IndexMap::with_capacity(kinds.len());
        let mut by_name = IndexMap::with_capacity(kinds.len());

        for (index, kind) in kinds.iter().enumerate() {
            let growth_fits_category = match kind.category {
                FarmKind::Plant => !kind.growth.is_empty(),
                FarmKind::Animal => kind.growth.is_empty(),
            };
            if !growth_fits_category {
                return Err(CatalogError::InvalidGrowthTable {
                    name: kind.name.clone(),
                });
            }
            if by_symbol.insert(kind.symbol, index).is_some() {
                return Err(CatalogError::DuplicateSymbol {
                    symbol: kind.symbol,
                });
            }
            if by_name.insert(kind.name.clone(), index).is_some() {
                return Err(CatalogError::DuplicateName {
                    name: kind.name.clone(),
                });
            }
        }

        Ok(Self {
            kinds,
            by_symbol,
            by_name,
        })
    }

    /// The process-wide builtin catalog, initialized on first use.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Catalog::new(builtin_kinds()).expect("builtin kinds are duplicate-free")
        })
    }

    /// Look up a kind by its display symbol.
    pub fn kind_by_symbol(&self, symbol: char) -> Option<&EntityKind> {
        self.by_symbol.get(&symbol).map(|&i| &self.kinds[i])
    }

    /// Look up a kind by its name.
    pub fn kind_by_name(&self, name: &str) -> Option<&EntityKind> {
        self.by_name.get(name).map(|&i| &self.kinds[i])
    }

    /// All kinds, in registration order.
    pub fn kinds(&self) -> &[EntityKind] {
        &self.kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_six_kinds() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.kinds().len(), 6);
        assert_eq!(
            catalog
                .kinds()
                .iter()
                .filter(|k| k.category == FarmKind::Plant)
                .count(),
            3
        );
    }

    #[test]
    fn builtin_lookups_agree() {
        let catalog = Catalog::builtin();
        for kind in catalog.kinds() {
            let by_symbol = catalog.kind_by_symbol(kind.symbol).unwrap();
            let by_name = catalog.kind_by_name(&kind.name).unwrap();
            assert_eq!(by_symbol, by_name);
        }
    }

    #[test]
    fn duplicate_symbol_rejected() {
        let mut kinds = builtin_kinds();
        kinds[1].symbol = '.'; // collides with berry
        let err = Catalog::new(kinds).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateSymbol { symbol: '.' });
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut kinds = builtin_kinds();
        kinds[2].name = "berry".into();
        let err = Catalog::new(kinds).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateName {
                name: "berry".into()
            }
        );
    }

    #[test]
    fn plant_without_growth_table_rejected() {
        let mut kinds = builtin_kinds();
        kinds[0].growth.clear();
        let err = Catalog::new(kinds).unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidGrowthTable {
                name: "berry".into()
            }
        );
    }

    #[test]
    fn farm_kind_names_round_trip() {
        for kind in [FarmKind::Plant, FarmKind::Animal] {
            assert_eq!(FarmKind::from_name(&kind.to_string()), Some(kind));
        }
        assert_eq!(FarmKind::from_name("orchard"), None);
    }
}
