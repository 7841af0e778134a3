//! Strategy error types

use thiserror::Error;

/// Failure inside a single duplicate-detection heuristic
///
/// Hosts never see this as a batch failure: the composite evaluator and the
/// benchmark harness log it and count the pair as "not a duplicate".
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Strategy '{strategy}' failed: {message}")]
pub struct StrategyError {
    /// Name of the strategy that failed
    pub strategy: String,

    /// Description of the failure
    pub message: String,
}

impl StrategyError {
    /// Create a new strategy error
    pub fn new(strategy: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            strategy: strategy.into(),
            message: message.into(),
        }
    }
}
