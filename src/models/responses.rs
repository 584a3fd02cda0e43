//! Response DTOs for the lookup API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Which layer answered a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupSource {
    Cache,
    Index,
}

/// Response body for GET /lookup/:region/:city
#[derive(Debug, Clone, Serialize)]
pub struct LookupResponse {
    pub region: String,
    pub city: String,
    /// Stored attribute value, verbatim
    pub value: String,
    pub source: LookupSource,
}

impl LookupResponse {
    pub fn new(
        region: impl Into<String>,
        city: impl Into<String>,
        value: impl Into<String>,
        source: LookupSource,
    ) -> Self {
        Self {
            region: region.into(),
            city: city.into(),
            value: value.into(),
            source,
        }
    }
}

/// Response body for PUT /strategy
#[derive(Debug, Clone, Serialize)]
pub struct StrategyResponse {
    /// Active policy name after the swap
    pub strategy: String,
    pub message: String,
}

impl StrategyResponse {
    pub fn new(strategy: impl Into<String>) -> Self {
        let strategy = strategy.into();
        Self {
            message: format!("Switched to {} cache; previous entries discarded", strategy),
            strategy,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub strategy: String,
    pub hits: u64,
    pub misses: u64,
    pub not_found: u64,
    pub evictions: u64,
    /// Entries currently cached
    pub total_entries: usize,
    pub capacity: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn new(
        strategy: impl Into<String>,
        stats: &CacheStats,
        total_entries: usize,
        capacity: usize,
    ) -> Self {
        Self {
            strategy: strategy.into(),
            hits: stats.hits,
            misses: stats.misses,
            not_found: stats.not_found,
            evictions: stats.evictions,
            total_entries,
            capacity,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Records held by the index
    pub records: usize,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(records: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            records,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_response_serialize() {
        let resp = LookupResponse::new("PE", "Lima", "10719000", LookupSource::Index);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["city"], "Lima");
        assert_eq!(json["value"], "10719000");
        assert_eq!(json["source"], "index");
    }

    #[test]
    fn test_strategy_response_serialize() {
        let resp = StrategyResponse::new("FIFO");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("FIFO"));
        assert!(json.contains("discarded"));
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            not_found: 5,
            evictions: 3,
        };
        let resp = StatsResponse::new("LRU", &stats, 10, 10);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.not_found, 5);
    }

    #[test]
    fn test_stats_response_zero_requests() {
        let resp = StatsResponse::new("LFU", &CacheStats::default(), 0, 10);
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy(42);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
        assert!(json.contains("42"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("Something went wrong"));
    }
}
