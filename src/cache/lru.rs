//! LRU Cache Module
//!
//! Implements Least Recently Used tracking and eviction.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::cache::{CityKey, CACHE_CAPACITY};

// == LRU Cache ==
/// Evicts the key that has gone longest without a read or write.
///
/// Keys are stored in a VecDeque where:
/// - Front = Most recently used
/// - Back = Least recently used
#[derive(Debug, Default)]
pub struct LruCache {
    entries: HashMap<CityKey, String>,
    /// Order of keys by access time
    order: VecDeque<CityKey>,
}

impl LruCache {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Get ==
    /// Returns the value and marks the key as most recently used.
    pub fn get(&mut self, region_code: &str, name: &str) -> Option<String> {
        let key = CityKey::new(region_code, name);
        let value = self.entries.get(&key)?.clone();
        self.touch(key);
        Some(value)
    }

    // == Put ==
    /// Stores a value and marks the key as most recently used.
    ///
    /// If the cache is full and the key is new, the least recently used key is
    /// evicted first and returned.
    pub fn put(&mut self, region_code: &str, name: &str, value: &str) -> Option<CityKey> {
        let key = CityKey::new(region_code, name);

        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = value.to_string();
            self.touch(key);
            return None;
        }

        let evicted = if self.entries.len() >= CACHE_CAPACITY {
            let victim = self
                .order
                .pop_back()
                .expect("lru order tracks every cached key");
            let removed = self.entries.remove(&victim);
            assert!(removed.is_some(), "lru evicted untracked key {victim}");
            debug!(key = %victim, "LRU eviction");
            Some(victim)
        } else {
            None
        };

        self.order.push_front(key.clone());
        self.entries.insert(key, value.to_string());
        evicted
    }

    // == Touch ==
    /// Moves a cached key to the front.
    fn touch(&mut self, key: CityKey) {
        if let Some(pos) = self.order.iter().position(|k| *k == key) {
            self.order.remove(pos);
        }
        self.order.push_front(key);
    }

    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&CityKey> {
        self.order.back()
    }

    /// Keys from least to most recently used.
    pub fn keys(&self) -> Vec<CityKey> {
        self.order.iter().rev().cloned().collect()
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
