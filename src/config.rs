//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::cache::StrategyKind;
use crate::error::Result;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV dataset loaded into the index at startup
    pub data_file: PathBuf,
    /// Eviction policy of the startup cache
    pub cache_strategy: StrategyKind,
    /// HTTP server port
    pub server_port: u16,
    /// Number of queries a benchmark run generates
    pub bench_queries: usize,
    /// Share of benchmark queries drawn from the hot set
    pub bench_hot_fraction: f64,
    /// Seed for query generation and random eviction during benchmarks
    pub bench_seed: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATA_FILE` - CSV dataset path (default: world_cities.csv)
    /// - `CACHE_STRATEGY` - lfu, fifo, lru or random (default: lru)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `BENCH_QUERIES` - Benchmark query count (default: 10000)
    /// - `BENCH_HOT_FRACTION` - Hot-set share of queries (default: 0.8)
    /// - `BENCH_SEED` - Benchmark seed (default: 42)
    ///
    /// Unparseable numbers fall back to their defaults. An unknown strategy is
    /// an error: the caller asked for something specific.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let cache_strategy = match env::var("CACHE_STRATEGY") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.cache_strategy,
        };

        Ok(Self {
            data_file: env::var("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            cache_strategy,
            server_port: env_or("SERVER_PORT", defaults.server_port),
            bench_queries: env_or("BENCH_QUERIES", defaults.bench_queries),
            bench_hot_fraction: env_or("BENCH_HOT_FRACTION", defaults.bench_hot_fraction),
            bench_seed: env_or("BENCH_SEED", defaults.bench_seed),
        })
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("world_cities.csv"),
            cache_strategy: StrategyKind::Lru,
            server_port: 3000,
            bench_queries: 10_000,
            bench_hot_fraction: 0.8,
            bench_seed: 42,
        }
    }
}
