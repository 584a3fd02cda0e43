//! Lookup Facade
//!
//! Composes the cache and the index: cache first, index on a miss, and the
//! index answer is written back into the cache. Neither component knows about
//! the other.

use tracing::{debug, info};

use crate::cache::{CacheStats, CacheStrategy, StrategyKind};
use crate::index::CityTrie;

// == Lookup Outcome ==
/// Where a lookup was answered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Served by the cache
    Cached(String),
    /// Cache miss, served by the index and now cached
    Indexed(String),
    /// Neither the cache nor the index knows this key
    NotFound,
}

impl LookupOutcome {
    pub fn value(&self) -> Option<&str> {
        match self {
            LookupOutcome::Cached(v) | LookupOutcome::Indexed(v) => Some(v.as_str()),
            LookupOutcome::NotFound => None,
        }
    }

    pub fn is_cache_hit(&self) -> bool {
        matches!(self, LookupOutcome::Cached(_))
    }
}

/// Runs one lookup through `cache` in front of `index`, updating `stats`.
pub fn lookup_through(
    index: &CityTrie,
    cache: &mut CacheStrategy,
    stats: &mut CacheStats,
    region_code: &str,
    name: &str,
) -> LookupOutcome {
    if let Some(value) = cache.get(region_code, name) {
        stats.record_hit();
        return LookupOutcome::Cached(value);
    }

    match index.search(region_code, name) {
        Some(value) => {
            stats.record_miss();
            if let Some(evicted) = cache.put(region_code, name, value) {
                stats.record_eviction();
                debug!(strategy = cache.name(), evicted = %evicted, "Evicted to make room");
            }
            LookupOutcome::Indexed(value.to_string())
        }
        None => {
            stats.record_not_found();
            LookupOutcome::NotFound
        }
    }
}

// == City Lookup ==
/// Owns the index and the active cache.
#[derive(Debug)]
pub struct CityLookup {
    index: CityTrie,
    cache: CacheStrategy,
    stats: CacheStats,
}

impl CityLookup {
    pub fn new(index: CityTrie, kind: StrategyKind) -> Self {
        Self::with_cache(index, CacheStrategy::new(kind))
    }

    /// Uses a caller-built cache, e.g. a seeded random one.
    pub fn with_cache(index: CityTrie, cache: CacheStrategy) -> Self {
        Self {
            index,
            cache,
            stats: CacheStats::new(),
        }
    }

    // == Lookup ==
    pub fn lookup(&mut self, region_code: &str, name: &str) -> LookupOutcome {
        lookup_through(
            &self.index,
            &mut self.cache,
            &mut self.stats,
            region_code,
            name,
        )
    }

    // == Strategy Swap ==
    /// Replaces the cache with an empty one of `kind`. Cached values and
    /// statistics are discarded.
    pub fn set_strategy(&mut self, kind: StrategyKind) {
        self.set_cache(CacheStrategy::new(kind));
    }

    pub fn set_cache(&mut self, cache: CacheStrategy) {
        info!(
            from = self.cache.name(),
            to = cache.name(),
            dropped = self.cache.len(),
            "Swapping cache strategy"
        );
        self.cache = cache;
        self.stats = CacheStats::new();
    }

    pub fn strategy_name(&self) -> &'static str {
        self.cache.name()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn cache(&self) -> &CacheStrategy {
        &self.cache
    }

    pub fn index(&self) -> &CityTrie {
        &self.index
    }

    /// Every indexed `(region code, name)` pair.
    pub fn all_cities(&self) -> Vec<(String, String)> {
        self.index.enumerate_all()
    }
}
