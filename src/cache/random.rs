//! Random Replacement Cache Module
//!
//! Evicts a uniformly chosen live key. The generator is injected so callers
//! (and tests) control determinism.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::cache::{CityKey, CACHE_CAPACITY};

// == Random Cache ==
#[derive(Debug)]
pub struct RandomCache {
    entries: HashMap<CityKey, String>,
    /// Live keys; candidates for eviction by index
    keys: Vec<CityKey>,
    rng: StdRng,
}

impl RandomCache {
    // == Constructors ==
    /// Creates a cache seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a cache driven by the given generator.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            entries: HashMap::new(),
            keys: Vec::new(),
            rng,
        }
    }

    /// Shorthand for a deterministic generator.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    // == Get ==
    pub fn get(&self, region_code: &str, name: &str) -> Option<String> {
        self.entries.get(&CityKey::new(region_code, name)).cloned()
    }

    // == Put ==
    /// Stores a value, evicting a random live key when full.
    pub fn put(&mut self, region_code: &str, name: &str, value: &str) -> Option<CityKey> {
        let key = CityKey::new(region_code, name);

        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = value.to_string();
            return None;
        }

        let evicted = if self.entries.len() >= CACHE_CAPACITY {
            let index = self.rng.gen_range(0..self.keys.len());
            let victim = self.keys.swap_remove(index);
            let removed = self.entries.remove(&victim);
            assert!(removed.is_some(), "random evicted untracked key {victim}");
            debug!(key = %victim, "Random eviction");
            Some(victim)
        } else {
            None
        };

        self.keys.push(key.clone());
        self.entries.insert(key, value.to_string());
        evicted
    }

    /// Live keys in internal slot order.
    pub fn keys(&self) -> Vec<CityKey> {
        self.keys.clone()
    }

    /// Stored value without touching eviction order.
    pub fn peek(&self, region_code: &str, name: &str) -> Option<&str> {
        self.entries
            .get(&CityKey::new(region_code, name))
            .map(String::as_str)
    }

    pub fn contains(&self, region_code: &str, name: &str) -> bool {
        self.entries.contains_key(&CityKey::new(region_code, name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RandomCache {
    fn default() -> Self {
        Self::new()
    }
}
