//! City Lookup - trie-indexed records behind a swappable cache
//!
//! Builds a prefix-tree index of (region, city) -> value records and fronts it
//! with a fixed-capacity cache running LFU, FIFO, LRU or random replacement.

pub mod api;
pub mod bench;
pub mod cache;
pub mod config;
pub mod error;
pub mod index;
pub mod ingest;
pub mod lookup;
pub mod models;
pub mod repl;

pub use api::AppState;
pub use cache::{CacheStrategy, CityKey, StrategyKind, CACHE_CAPACITY};
pub use config::Config;
pub use error::{LookupError, Result};
pub use index::CityTrie;
pub use lookup::{CityLookup, LookupOutcome};
