//! The default uniform quality source.

use croft_core::{Quality, QualitySource};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Draws harvest qualities uniformly from [`Quality::ALL`].
///
/// Backed by a `ChaCha8Rng` so runs can be reproduced by seeding.
///
/// # Examples
///
/// ```
/// use croft_core::QualitySource;
/// use croft_engine::UniformQuality;
///
/// let mut a = UniformQuality::seeded(7);
/// let mut b = UniformQuality::seeded(7);
/// assert_eq!(a.draw(), b.draw());
/// ```
#[derive(Clone, Debug)]
pub struct UniformQuality {
    rng: ChaCha8Rng,
}

impl UniformQuality {
    /// A source with a fixed seed, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// A source seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
        }
    }
}

impl Default for UniformQuality {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl QualitySource for UniformQuality {
    fn draw(&mut self) -> Quality {
        Quality::ALL[self.rng.random_range(0..Quality::ALL.len())]
    }
}
