//! Error types for the city lookup service
//!
//! Provides unified error handling using thiserror. Cache and index misses are
//! not errors: they surface as `Option::None` and only become `NotFound` at the
//! HTTP boundary.

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Lookup Error Enum ==
/// Unified error type for the lookup service.
#[derive(Error, Debug)]
pub enum LookupError {
    /// City not present in the index for the requested region
    #[error("City not found: {0}")]
    NotFound(String),

    /// Strategy identifier that matches none of lfu, fifo, lru, random
    #[error("Unknown cache strategy: '{0}' (expected one of lfu, fifo, lru, random)")]
    UnknownStrategy(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Reading the dataset or writing a report failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LookupError {
    /// Wraps an I/O error together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let status = match &self {
            LookupError::NotFound(_) => StatusCode::NOT_FOUND,
            LookupError::UnknownStrategy(_) | LookupError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            LookupError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the lookup service.
pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_strategy_message_names_input() {
        let err = LookupError::UnknownStrategy("mru".to_string());
        assert!(err.to_string().contains("'mru'"));
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (LookupError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (LookupError::UnknownStrategy("x".into()), StatusCode::BAD_REQUEST),
            (LookupError::InvalidRequest("x".into()), StatusCode::BAD_REQUEST),
            (
                LookupError::io("data.csv", std::io::Error::other("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
