//! Configuration for the deduplicator

use crate::error::{check_threshold, DedupError, Result};
use crate::strategies::{BuiltinStrategy, SimilarUrlStrategy, StrategyKind, TitleSimilarityStrategy};
use serde::{Deserialize, Serialize};

/// Construction-time settings for a [`Deduplicator`](crate::Deduplicator)
///
/// # Examples
///
/// ```
/// use sieve_engine::DedupConfig;
///
/// let config = DedupConfig::default();
/// assert_eq!(config.similarity_threshold, 0.8);
/// assert!(config.preserve_newest);
///
/// // Fewer false positives
/// assert_eq!(DedupConfig::strict().similarity_threshold, 0.9);
///
/// // Catch more rewrites
/// assert_eq!(DedupConfig::lenient().similarity_threshold, 0.7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DedupConfig {
    /// Minimum title similarity for the Title Similarity strategy
    /// Default: 0.8
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    /// Minimum path similarity for the Similar URL strategy
    /// Default: 0.9
    #[serde(default = "default_path_similarity_threshold")]
    pub path_similarity_threshold: f64,

    /// Process newest articles first so the newest copy of a story is kept
    /// Default: true
    #[serde(default = "default_true")]
    pub preserve_newest: bool,

    /// Built-in strategies to enable (order is irrelevant, priority decides)
    /// Default: all five
    #[serde(default = "default_strategies")]
    pub strategies: Vec<StrategyKind>,
}

fn default_similarity_threshold() -> f64 {
    TitleSimilarityStrategy::DEFAULT_THRESHOLD
}

fn default_path_similarity_threshold() -> f64 {
    SimilarUrlStrategy::DEFAULT_THRESHOLD
}

fn default_true() -> bool {
    true
}

fn default_strategies() -> Vec<StrategyKind> {
    StrategyKind::ALL.to_vec()
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            path_similarity_threshold: default_path_similarity_threshold(),
            preserve_newest: true,
            strategies: default_strategies(),
        }
    }
}

impl DedupConfig {
    /// Strict preset: only very close titles and paths count as duplicates
    pub fn strict() -> Self {
        Self {
            similarity_threshold: 0.9,
            path_similarity_threshold: 0.95,
            ..Self::default()
        }
    }

    /// Lenient preset: catches heavier copy-editing at the cost of precision
    pub fn lenient() -> Self {
        Self {
            similarity_threshold: 0.7,
            path_similarity_threshold: 0.85,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        check_threshold("similarity_threshold", self.similarity_threshold)?;
        check_threshold("path_similarity_threshold", self.path_similarity_threshold)?;
        if self.strategies.is_empty() {
            return Err(DedupError::Config(
                "at least one strategy must be enabled".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the enabled strategies with this configuration's thresholds
    ///
    /// Duplicate entries in `strategies` are built once.
    pub fn build_strategies(&self) -> Result<Vec<BuiltinStrategy>> {
        self.validate()?;

        let mut kinds: Vec<StrategyKind> = Vec::with_capacity(self.strategies.len());
        for kind in &self.strategies {
            if !kinds.contains(kind) {
                kinds.push(*kind);
            }
        }

        kinds
            .into_iter()
            .map(|kind| {
                BuiltinStrategy::from_kind(
                    kind,
                    self.similarity_threshold,
                    self.path_similarity_threshold,
                )
            })
            .collect()
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| DedupError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| DedupError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
