//! Session construction input.

use crate::quality::UniformQuality;
use croft_core::{FarmKind, QualitySource};

/// Builder input for a [`FarmSession`](crate::session::FarmSession).
///
/// Dimensions are validated when the session is constructed; the quality
/// source defaults to an entropy-seeded [`UniformQuality`] and can be
/// swapped for a deterministic one in tests or replays.
pub struct SessionConfig {
    /// The farm kind the grid is restricted to.
    pub farm: FarmKind,
    /// Grid row count. Must be positive.
    pub rows: usize,
    /// Grid column count. Must be positive.
    pub columns: usize,
    /// Source of one quality per successful harvest.
    pub quality: Box<dyn QualitySource>,
}

impl SessionConfig {
    /// A config with the default uniform quality source.
    pub fn new(farm: FarmKind, rows: usize, columns: usize) -> Self {
        Self {
            farm,
            rows,
            columns,
            quality: Box::new(UniformQuality::from_entropy()),
        }
    }

    /// Replace the quality source.
    pub fn with_quality(mut self, quality: Box<dyn QualitySource>) -> Self {
        self.quality = quality;
        self
    }
}
