//! API Handlers
//!
//! HTTP request handlers for each lookup service endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::error::{LookupError, Result};
use crate::lookup::{CityLookup, LookupOutcome};
use crate::models::{
    HealthResponse, LookupResponse, LookupSource, StatsResponse, StrategyRequest,
    StrategyResponse,
};

/// Application state shared across all handlers.
///
/// The lookup facade is single-caller, so every request that can touch the
/// cache takes the write lock.
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<RwLock<CityLookup>>,
}

impl AppState {
    pub fn new(lookup: CityLookup) -> Self {
        Self {
            lookup: Arc::new(RwLock::new(lookup)),
        }
    }
}

/// Handler for GET /lookup/:region/:city
///
/// Answers from the cache when possible, otherwise from the index (and caches
/// the answer).
pub async fn lookup_handler(
    State(state): State<AppState>,
    Path((region, city)): Path<(String, String)>,
) -> Result<Json<LookupResponse>> {
    if region.trim().is_empty() || city.trim().is_empty() {
        return Err(LookupError::InvalidRequest(
            "Region and city must not be blank".to_string(),
        ));
    }

    // Write lock: a hit still updates recency or frequency
    let mut lookup = state.lookup.write().await;

    match lookup.lookup(&region, &city) {
        LookupOutcome::Cached(value) => Ok(Json(LookupResponse::new(
            region,
            city,
            value,
            LookupSource::Cache,
        ))),
        LookupOutcome::Indexed(value) => Ok(Json(LookupResponse::new(
            region,
            city,
            value,
            LookupSource::Index,
        ))),
        LookupOutcome::NotFound => Err(LookupError::NotFound(format!("{city} ({region})"))),
    }
}

/// Handler for PUT /strategy
///
/// Swaps the eviction policy. The old cache and its statistics are dropped.
pub async fn strategy_handler(
    State(state): State<AppState>,
    Json(req): Json<StrategyRequest>,
) -> Result<Json<StrategyResponse>> {
    let kind = req.kind()?;

    let mut lookup = state.lookup.write().await;
    lookup.set_strategy(kind);
    info!("Cache strategy set to {}", kind);

    Ok(Json(StrategyResponse::new(lookup.strategy_name())))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let lookup = state.lookup.read().await;
    let cache = lookup.cache();

    Json(StatsResponse::new(
        cache.name(),
        &lookup.stats(),
        cache.len(),
        cache.capacity(),
    ))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let lookup = state.lookup.read().await;
    Json(HealthResponse::healthy(lookup.index().len()))
}
