//! LFU Cache Module
//!
//! Least Frequently Used eviction with per-frequency buckets.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::cache::{CityKey, CACHE_CAPACITY};

#[derive(Debug)]
struct LfuEntry {
    value: String,
    freq: u64,
}

// == LFU Cache ==
/// Evicts the least frequently used key, oldest-touched first among ties.
///
/// Every frequency count owns a bucket where:
/// - Front = most recently touched at that frequency
/// - Back = least recently touched at that frequency
///
/// `min_freq` always names the lowest non-empty bucket while the cache is
/// non-empty.
#[derive(Debug, Default)]
pub struct LfuCache {
    entries: HashMap<CityKey, LfuEntry>,
    buckets: HashMap<u64, VecDeque<CityKey>>,
    min_freq: u64,
}

impl LfuCache {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Get ==
    /// Returns the value and bumps the key into the next frequency bucket.
    pub fn get(&mut self, region_code: &str, name: &str) -> Option<String> {
        let key = CityKey::new(region_code, name);
        self.touch(&key)
    }

    // == Put ==
    /// Stores a value, evicting the coldest key when full.
    ///
    /// An existing key counts as an access: its frequency goes up before the
    /// value is replaced. Returns the evicted key, if any.
    pub fn put(&mut self, region_code: &str, name: &str, value: &str) -> Option<CityKey> {
        let key = CityKey::new(region_code, name);

        if self.touch(&key).is_some() {
            if let Some(entry) = self.entries.get_mut(&key) {
                entry.value = value.to_string();
            }
            return None;
        }

        let evicted = if self.entries.len() >= CACHE_CAPACITY {
            Some(self.evict())
        } else {
            None
        };

        self.min_freq = 1;
        self.buckets.entry(1).or_default().push_front(key.clone());
        self.entries.insert(
            key,
            LfuEntry {
                value: value.to_string(),
                freq: 1,
            },
        );

        evicted
    }

    // == Touch ==
    /// Moves a present key from bucket `f` to the front of bucket `f + 1`.
    fn touch(&mut self, key: &CityKey) -> Option<String> {
        let entry = self.entries.get_mut(key)?;
        let freq = entry.freq;
        entry.freq += 1;
        let value = entry.value.clone();

        if let Some(bucket) = self.buckets.get_mut(&freq) {
            if let Some(pos) = bucket.iter().position(|k| k == key) {
                bucket.remove(pos);
            }
            if bucket.is_empty() {
                self.buckets.remove(&freq);
                if self.min_freq == freq {
                    self.min_freq += 1;
                }
            }
        }

        self.buckets
            .entry(freq + 1)
            .or_default()
            .push_front(key.clone());

        Some(value)
    }

    // == Evict ==
    /// Removes the back of the minimum-frequency bucket.
    fn evict(&mut self) -> CityKey {
        let bucket = self
            .buckets
            .get_mut(&self.min_freq)
            .expect("lfu min_freq must name a non-empty bucket when full");
        let victim = bucket
            .pop_back()
            .expect("lfu buckets are removed as soon as they empty");
        if bucket.is_empty() {
            self.buckets.remove(&self.min_freq);
        }

        let removed = self.entries.remove(&victim);
        assert!(removed.is_some(), "lfu evicted untracked key {victim}");
        debug!(key = %victim, freq = self.min_freq, "LFU eviction");
        victim
    }

    /// Current access count of a key, if cached.
    pub fn frequency(&self, region_code: &str, name: &str) -> Option<u64> {
        self.entries
            .get(&CityKey::new(region_code, name))
            .map(|e| e.freq)
    }

    /// Keys ordered from first to last eviction candidate.
    pub fn keys(&self) -> Vec<CityKey> {
        let mut freqs: Vec<u64> = self.buckets.keys().copied().collect();
        freqs.sort_unstable();
        freqs
            .into_iter()
            .flat_map(|f| self.buckets[&f].iter().rev().cloned())
            .collect()
    }

    /// Stored value without counting an access.
    pub fn peek(&self, region_code: &str, name: &str) -> Option<&str> {
        self.entries
            .get(&CityKey::new(region_code, name))
            .map(|e| e.value.as_str())
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
