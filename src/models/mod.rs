//! Request and Response models for the lookup API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::StrategyRequest;
pub use responses::{
    ErrorResponse, HealthResponse, LookupResponse, LookupSource, StatsResponse, StrategyResponse,
};
