//! Injectable randomness for the simulation.
//!
//! Every stochastic stage draws from a [`RandomSource`] passed in by the
//! caller, never from ambient global state. Two sources seeded identically
//! produce identical draw sequences, which makes whole ticks reproducible.

use rand::distributions::{Distribution, WeightedIndex};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Capability object supplying all randomness used by the simulation
pub trait RandomSource {
    /// Uniform draw in [0, 1)
    fn uniform(&mut self) -> f32;

    /// Uniform draw in [lo, hi)
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.uniform()
    }

    /// Index choice weighted by `weights`.
    ///
    /// Returns `None` for an empty slice. A row whose weights sum to zero
    /// degrades to a uniform choice over all indices, so selection stays
    /// total for fully silent neurons.
    fn weighted_choice(&mut self, weights: &[f32]) -> Option<usize>;

    /// `min(amount, len)` distinct indices drawn from `0..len`
    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize>;
}

/// Seeded production source backed by ChaCha8
pub struct ChaChaSource {
    rng: ChaCha8Rng,
    seed: u64,
}

impl ChaChaSource {
    /// Create a source with a specific seed for reproducibility
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a source seeded from system entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this source was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for ChaChaSource {
    fn uniform(&mut self) -> f32 {
        self.rng.gen()
    }

    fn weighted_choice(&mut self, weights: &[f32]) -> Option<usize> {
        if weights.is_empty() {
            return None;
        }
        match WeightedIndex::new(weights) {
            Ok(dist) => Some(dist.sample(&mut self.rng)),
            // All-zero rows degrade to a uniform draw
            Err(_) => Some(self.rng.gen_range(0..weights.len())),
        }
    }

    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(len);
        rand::seq::index::sample(&mut self.rng, len, amount).into_vec()
    }
}
