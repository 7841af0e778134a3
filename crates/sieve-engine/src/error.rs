//! Engine error types

use thiserror::Error;

/// Errors that can occur while configuring or running the engine
#[derive(Error, Debug)]
pub enum DedupError {
    /// A similarity threshold outside [0.0, 1.0]
    #[error("Invalid {name}: {value} (must be within [0.0, 1.0])")]
    InvalidThreshold {
        /// Name of the offending setting
        name: &'static str,
        /// Value that was supplied
        value: f64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, DedupError>;

/// Reject thresholds that are NaN or outside [0.0, 1.0]
pub(crate) fn check_threshold(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(DedupError::InvalidThreshold { name, value })
    }
}
