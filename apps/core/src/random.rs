//! Injectable randomness for exercise and fallback selection.
//!
//! Random picks are the only non-deterministic step in the pipeline, so they
//! all go through [`RandomSource`]. Production code uses [`ThreadRandom`];
//! tests use [`SeededRandom`] to get reproducible draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Source of uniform indices. Implementations must be safe to share between
/// concurrent pipeline invocations.
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..len`. `len` is always greater than zero.
    fn next_index(&self, len: usize) -> usize;
}

/// Picks one element uniformly from `items`, or `None` if it is empty.
pub fn choose<'a, T>(rng: &dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.next_index(items.len()))
}

/// Thread-local OS-seeded generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic generator for tests and reproducible runs.
pub struct SeededRandom {
    inner: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&self, len: usize) -> usize {
        // Poisoning leaves the generator state intact.
        let mut rng = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.gen_range(0..len)
    }
}
