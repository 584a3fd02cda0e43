//! FIFO Cache Module
//!
//! First-In-First-Out eviction: reads never reorder anything.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::cache::{CityKey, CACHE_CAPACITY};

// == FIFO Cache ==
/// Evicts keys in the order they were first inserted.
///
/// Queue layout:
/// - Front = oldest inserted key still cached
/// - Back = newest inserted key
#[derive(Debug, Default)]
pub struct FifoCache {
    entries: HashMap<CityKey, String>,
    queue: VecDeque<CityKey>,
}

impl FifoCache {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Get ==
    pub fn get(&self, region_code: &str, name: &str) -> Option<String> {
        self.entries.get(&CityKey::new(region_code, name)).cloned()
    }

    // == Put ==
    /// Stores a value. Overwriting keeps the key's queue position.
    pub fn put(&mut self, region_code: &str, name: &str, value: &str) -> Option<CityKey> {
        let key = CityKey::new(region_code, name);

        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = value.to_string();
            return None;
        }

        let evicted = if self.entries.len() >= CACHE_CAPACITY {
            let victim = self
                .queue
                .pop_front()
                .expect("fifo queue tracks every cached key");
            let removed = self.entries.remove(&victim);
            assert!(removed.is_some(), "fifo evicted untracked key {victim}");
            debug!(key = %victim, "FIFO eviction");
            Some(victim)
        } else {
            None
        };

        self.queue.push_back(key.clone());
        self.entries.insert(key, value.to_string());
        evicted
    }

    /// Keys from oldest to newest.
    pub fn keys(&self) -> Vec<CityKey> {
        self.queue.iter().cloned().collect()
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
