//! Cache Module
//!
//! Fixed-capacity caches with interchangeable eviction policies, all keyed by
//! [`CityKey`].

mod fifo;
mod key;
mod lfu;
mod lru;
mod random;
mod stats;
mod strategy;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use fifo::FifoCache;
pub use key::CityKey;
pub use lfu::LfuCache;
pub use lru::LruCache;
pub use random::RandomCache;
pub use stats::CacheStats;
pub use strategy::{CacheStrategy, StrategyKind};

// == Public Constants ==
/// Maximum number of live entries in any cache instance
pub const CACHE_CAPACITY: usize = 10;
