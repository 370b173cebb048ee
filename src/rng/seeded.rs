use ::rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use super::RandomSource;

/// Reproducible source: the same seed yields the same sequence.
///
/// Uses the same 32-bit modulo reduction as the secure path of
/// [`Rand`](super::Rand).
pub struct Seeded(ChaCha20Rng);

impl Seeded {
    pub fn new(seed: u64) -> Self {
        Self(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl RandomSource for Seeded {
    fn next_int(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "next_int bound must be non-zero");
        self.0.next_u32() as usize % bound
    }
}
