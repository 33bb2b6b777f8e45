//! Seedable word selection randomness
//!
//! The game picks its secret word through a [`WordRng`] instead of a global
//! generator. The binary seeds it from OS entropy; tests seed it with a fixed
//! value and get the same words every run.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Clone, Debug)]
pub struct WordRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl WordRng {
    /// Create a deterministic RNG from a seed
    pub fn new(seed: u64) -> Self {
        WordRng {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().r#gen())
    }

    /// Seed this RNG was created with (logged so a game can be replayed)
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`
    ///
    /// Returns `None` for an empty range.
    pub fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.inner.gen_range(0..len))
        }
    }
}
