//! Cache Strategy Module
//!
//! Closed set of eviction policies behind one dispatch type, plus the
//! identifier parser used by configuration and the API.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::cache::{CityKey, FifoCache, LfuCache, LruCache, RandomCache, CACHE_CAPACITY};
use crate::error::LookupError;

// == Strategy Kind ==
/// Identifier of an eviction policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Lfu,
    Fifo,
    Lru,
    Random,
}

impl StrategyKind {
    /// Every policy, in reporting order.
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Lfu,
        StrategyKind::Fifo,
        StrategyKind::Lru,
        StrategyKind::Random,
    ];

    /// Display name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Lfu => "LFU",
            StrategyKind::Fifo => "FIFO",
            StrategyKind::Lru => "LRU",
            StrategyKind::Random => "Random",
        }
    }
}

impl FromStr for StrategyKind {
    type Err = LookupError;

    /// Parses `lfu`, `fifo`, `lru` or `random`, ignoring case and surrounding
    /// whitespace. There is no fallback for anything else.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lfu" => Ok(StrategyKind::Lfu),
            "fifo" => Ok(StrategyKind::Fifo),
            "lru" => Ok(StrategyKind::Lru),
            "random" => Ok(StrategyKind::Random),
            _ => Err(LookupError::UnknownStrategy(s.trim().to_string())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// == Cache Strategy ==
/// A fixed-capacity cache running one of the four eviction policies.
#[derive(Debug)]
pub enum CacheStrategy {
    Lfu(LfuCache),
    Fifo(FifoCache),
    Lru(LruCache),
    Random(RandomCache),
}

impl CacheStrategy {
    // == Constructors ==
    /// Creates an empty cache for the given policy.
    ///
    /// Random replacement is seeded from OS entropy; use
    /// [`CacheStrategy::random_with_rng`] for a reproducible one.
    pub fn new(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Lfu => CacheStrategy::Lfu(LfuCache::new()),
            StrategyKind::Fifo => CacheStrategy::Fifo(FifoCache::new()),
            StrategyKind::Lru => CacheStrategy::Lru(LruCache::new()),
            StrategyKind::Random => CacheStrategy::Random(RandomCache::new()),
        }
    }

    /// Creates a random-replacement cache driven by `rng`.
    pub fn random_with_rng(rng: StdRng) -> Self {
        CacheStrategy::Random(RandomCache::with_rng(rng))
    }

    /// Same as [`CacheStrategy::new`] except that Random is seeded with `seed`.
    pub fn seeded(kind: StrategyKind, seed: u64) -> Self {
        match kind {
            StrategyKind::Random => CacheStrategy::Random(RandomCache::with_seed(seed)),
            other => Self::new(other),
        }
    }

    // == Get ==
    /// Looks a key up. A miss never changes the cache.
    pub fn get(&mut self, region_code: &str, name: &str) -> Option<String> {
        match self {
            CacheStrategy::Lfu(c) => c.get(region_code, name),
            CacheStrategy::Fifo(c) => c.get(region_code, name),
            CacheStrategy::Lru(c) => c.get(region_code, name),
            CacheStrategy::Random(c) => c.get(region_code, name),
        }
    }

    // == Put ==
    /// Inserts or updates a key. Returns the key evicted to make room, if any.
    pub fn put(&mut self, region_code: &str, name: &str, value: &str) -> Option<CityKey> {
        let evicted = match self {
            CacheStrategy::Lfu(c) => c.put(region_code, name, value),
            CacheStrategy::Fifo(c) => c.put(region_code, name, value),
            CacheStrategy::Lru(c) => c.put(region_code, name, value),
            CacheStrategy::Random(c) => c.put(region_code, name, value),
        };
        assert!(
            self.len() <= CACHE_CAPACITY,
            "{} cache grew past capacity",
            self.name()
        );
        evicted
    }

    /// Stable policy name, for reporting.
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            CacheStrategy::Lfu(_) => StrategyKind::Lfu,
            CacheStrategy::Fifo(_) => StrategyKind::Fifo,
            CacheStrategy::Lru(_) => StrategyKind::Lru,
            CacheStrategy::Random(_) => StrategyKind::Random,
        }
    }

    /// Cached keys, first eviction candidate first (slot order for Random).
    pub fn keys(&self) -> Vec<CityKey> {
        match self {
            CacheStrategy::Lfu(c) => c.keys(),
            CacheStrategy::Fifo(c) => c.keys(),
            CacheStrategy::Lru(c) => c.keys(),
            CacheStrategy::Random(c) => c.keys(),
        }
    }

    /// Checks presence without touching recency or frequency.
    pub fn contains(&self, region_code: &str, name: &str) -> bool {
        match self {
            CacheStrategy::Lfu(c) => c.contains(region_code, name),
            CacheStrategy::Fifo(c) => c.contains(region_code, name),
            CacheStrategy::Lru(c) => c.contains(region_code, name),
            CacheStrategy::Random(c) => c.contains(region_code, name),
        }
    }

    /// Reads a cached value without touching recency or frequency.
    pub fn peek(&self, region_code: &str, name: &str) -> Option<&str> {
        match self {
            CacheStrategy::Lfu(c) => c.peek(region_code, name),
            CacheStrategy::Fifo(c) => c.peek(region_code, name),
            CacheStrategy::Lru(c) => c.peek(region_code, name),
            CacheStrategy::Random(c) => c.peek(region_code, name),
        }
    }

    /// Access count of a cached key. Only LFU tracks one.
    pub fn frequency(&self, region_code: &str, name: &str) -> Option<u64> {
        match self {
            CacheStrategy::Lfu(c) => c.frequency(region_code, name),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CacheStrategy::Lfu(c) => c.len(),
            CacheStrategy::Fifo(c) => c.len(),
            CacheStrategy::Lru(c) => c.len(),
            CacheStrategy::Random(c) => c.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        CACHE_CAPACITY
    }
}
