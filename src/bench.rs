//! Benchmark Harness
//!
//! Generates a skewed query workload from the index, replays it against each
//! eviction policy with a fresh cache, and writes the comparison as JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cache::{CacheStats, CacheStrategy, StrategyKind, CACHE_CAPACITY};
use crate::error::{LookupError, Result};
use crate::index::CityTrie;
use crate::lookup::lookup_through;

/// Size of the hot set queries are skewed towards.
pub const HOT_SET_SIZE: usize = CACHE_CAPACITY * 2;

// == Query ==
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub region_code: String,
    pub name: String,
}

/// Draws `count` queries from the indexed cities.
///
/// With probability `hot_fraction` a query is drawn from the first
/// [`HOT_SET_SIZE`] enumerated cities, otherwise from all of them. An empty
/// index yields no queries.
pub fn generate_queries<G: Rng>(
    index: &CityTrie,
    count: usize,
    hot_fraction: f64,
    rng: &mut G,
) -> Vec<Query> {
    let cities = index.enumerate_all();
    if cities.is_empty() {
        return Vec::new();
    }

    let hot_fraction = if hot_fraction.is_nan() {
        0.0
    } else {
        hot_fraction.clamp(0.0, 1.0)
    };
    let hot_len = cities.len().min(HOT_SET_SIZE);

    (0..count)
        .map(|_| {
            let pool = if rng.gen_bool(hot_fraction) {
                hot_len
            } else {
                cities.len()
            };
            let (region_code, name) = &cities[rng.gen_range(0..pool)];
            Query {
                region_code: region_code.clone(),
                name: name.clone(),
            }
        })
        .collect()
}

// == Report ==
/// Outcome of replaying the workload through one policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyResult {
    pub strategy: String,
    pub hits: u64,
    pub misses: u64,
    pub not_found: u64,
    pub evictions: u64,
    pub hit_rate: f64,
    pub elapsed_micros: u64,
}

impl StrategyResult {
    fn from_stats(strategy: &str, stats: &CacheStats, elapsed_micros: u64) -> Self {
        Self {
            strategy: strategy.to_string(),
            hits: stats.hits,
            misses: stats.misses,
            not_found: stats.not_found,
            evictions: stats.evictions,
            hit_rate: stats.hit_rate(),
            elapsed_micros,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// RFC 3339 timestamp of the run
    pub generated_at: String,
    pub query_count: usize,
    pub cache_capacity: usize,
    pub results: Vec<StrategyResult>,
}

impl BenchmarkReport {
    /// Result with the highest hit rate, if any policy ran.
    pub fn best(&self) -> Option<&StrategyResult> {
        self.results
            .iter()
            .max_by(|a, b| a.hit_rate.total_cmp(&b.hit_rate))
    }
}

/// Replays `queries` against a fresh cache of each kind.
///
/// Random replacement is seeded with `seed` so runs are reproducible.
pub fn run_benchmark(
    index: &CityTrie,
    queries: &[Query],
    kinds: &[StrategyKind],
    seed: u64,
) -> BenchmarkReport {
    let results = kinds
        .iter()
        .map(|&kind| {
            let mut cache = CacheStrategy::seeded(kind, seed);
            let mut stats = CacheStats::new();

            let start = Instant::now();
            for query in queries {
                lookup_through(index, &mut cache, &mut stats, &query.region_code, &query.name);
            }
            let elapsed = start.elapsed().as_micros() as u64;

            info!(
                strategy = cache.name(),
                hits = stats.hits,
                misses = stats.misses,
                elapsed_us = elapsed,
                "Benchmark run complete"
            );
            StrategyResult::from_stats(cache.name(), &stats, elapsed)
        })
        .collect();

    BenchmarkReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        query_count: queries.len(),
        cache_capacity: CACHE_CAPACITY,
        results,
    }
}

/// Writes the report as pretty-printed JSON.
pub fn write_report(path: impl AsRef<Path>, report: &BenchmarkReport) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| LookupError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)
        .map_err(|e| LookupError::io(path, e.into()))?;
    writer.flush().map_err(|e| LookupError::io(path, e))?;

    info!("Benchmark report written to {}", path.display());
    Ok(())
}
