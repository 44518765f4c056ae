//! Random key sets for building trees.
//!
//! Builders expect distinct keys and never deduplicate themselves, so every sequence produced
//! here holds each value at most once. A seeded [`KeyGenerator`] makes runs reproducible.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generator for sequences of distinct random keys.
pub struct KeyGenerator {
    rng: StdRng,
}

impl KeyGenerator {
    /// A generator that produces the same sequences for the same `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Returns `count` distinct keys drawn uniformly from `min..=max`, in the order they were
    /// drawn.
    ///
    /// When the range holds fewer than `count` values, every value of the range is returned
    /// (in random order). An empty range gives an empty sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::generator::KeyGenerator;
    ///
    /// let keys = KeyGenerator::with_seed(7).unique_keys(5, 1, 3);
    ///
    /// let mut sorted = keys.clone();
    /// sorted.sort();
    /// assert_eq!(sorted, vec![1, 2, 3]);
    /// ```
    pub fn unique_keys(&mut self, count: usize, min: i32, max: i32) -> Vec<i32> {
        if count == 0 || min > max {
            return Vec::new();
        }

        let available = (i64::from(max) - i64::from(min) + 1) as u64;
        let count = count.min(usize::try_from(available).unwrap_or(usize::MAX));

        let mut seen = HashSet::with_capacity(count);
        let mut keys = Vec::with_capacity(count);
        while keys.len() < count {
            let key = self.rng.random_range(min..=max);
            if seen.insert(key) {
                keys.push(key);
            }
        }

        tracing::trace!(count, min, max, "generated unique keys");
        keys
    }
}

/// Returns `count` distinct keys drawn from `min..=max` with an entropy-seeded generator.
pub fn generate_unique_numbers(count: usize, min: i32, max: i32) -> Vec<i32> {
    KeyGenerator::from_entropy().unique_keys(count, min, max)
}
