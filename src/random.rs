// src/random.rs
use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Entropy source injected into the generator.
///
/// Abstracting the source keeps the generator a pure function: production
/// code hands it a thread-local RNG, tests hand it a seeded or scripted one
/// and get reproducible output.
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`. `bound` must be at least 1.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Production source backed by the thread-local RNG.
pub struct SystemRandom {
    rng: ThreadRng,
}

impl SystemRandom {
    pub fn new() -> Self {
        Self { rng: rand::thread_rng() }
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Deterministic source seeded from a `u64`, for reproducible output.
/// Not a security feature; anyone with the seed can recreate the password.
#[derive(Debug)]
pub struct SeededRandom {
    rng: ChaCha20Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha20Rng::seed_from_u64(seed) }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}
