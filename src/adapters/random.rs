//! `rand`-backed random source.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::traits::RandomSource;

/// Random source backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct StdRandomSource {
    rng: StdRng,
}

impl StdRandomSource {
    /// A source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A reproducible source.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is given, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl Default for StdRandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for StdRandomSource {
    fn int_in(&mut self, range: Range<u32>) -> u32 {
        self.rng.gen_range(range)
    }

    fn float_in(&mut self, range: Range<f64>) -> f64 {
        self.rng.gen_range(range)
    }
}
