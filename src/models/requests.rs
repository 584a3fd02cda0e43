//! Request DTOs for the lookup API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::cache::StrategyKind;
use crate::error::Result;

/// Request body for switching the cache policy (PUT /strategy)
///
/// The identifier is kept as a raw string so an unknown policy surfaces as a
/// 400 with a descriptive message rather than a generic JSON rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct StrategyRequest {
    /// One of lfu, fifo, lru, random (any case)
    pub strategy: String,
}

impl StrategyRequest {
    /// Resolves the requested policy.
    pub fn kind(&self) -> Result<StrategyKind> {
        self.strategy.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;

    #[test]
    fn test_strategy_request_deserialize() {
        let json = r#"{"strategy": "LFU"}"#;
        let req: StrategyRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.kind().unwrap(), StrategyKind::Lfu);
    }

    #[test]
    fn test_strategy_request_unknown() {
        let req = StrategyRequest {
            strategy: "arc".to_string(),
        };
        assert!(matches!(req.kind(), Err(LookupError::UnknownStrategy(_))));
    }

    #[test]
    fn test_strategy_request_missing_field() {
        assert!(serde_json::from_str::<StrategyRequest>("{}").is_err());
    }
}
