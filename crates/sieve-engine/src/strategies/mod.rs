//! Built-in duplicate detection strategies
//!
//! | Priority | Strategy | Rule |
//! |----------|----------|------|
//! | 0 | Exact URL | canonical links equal |
//! | 5 | Content Hash | SHA-256 of `title\|link\|source` equal |
//! | 10 | Similar URL | same host, path similarity ≥ 0.9 |
//! | 15 | Exact Title | normalized titles equal |
//! | 20 | Title Similarity | combined title score ≥ threshold |

mod content_hash;
mod exact_title;
mod exact_url;
mod similar_url;
mod title_similarity;

pub use content_hash::ContentHashStrategy;
pub use exact_title::ExactTitleStrategy;
pub use exact_url::ExactUrlStrategy;
pub use similar_url::SimilarUrlStrategy;
pub use title_similarity::{calculate_similarity, TitleSimilarityStrategy};

use serde::{Deserialize, Serialize};
use sieve_domain::{Article, DuplicateStrategy, StrategyError};
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::str::FromStr;

/// Identifier of a built-in strategy, as used in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// [`ExactUrlStrategy`]
    ExactUrl,
    /// [`ContentHashStrategy`]
    ContentHash,
    /// [`SimilarUrlStrategy`]
    SimilarUrl,
    /// [`ExactTitleStrategy`]
    ExactTitle,
    /// [`TitleSimilarityStrategy`]
    TitleSimilarity,
}

impl StrategyKind {
    /// All built-in strategies, in priority order
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::ExactUrl,
        StrategyKind::ContentHash,
        StrategyKind::SimilarUrl,
        StrategyKind::ExactTitle,
        StrategyKind::TitleSimilarity,
    ];

    /// Configuration key (snake_case)
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::ExactUrl => "exact_url",
            StrategyKind::ContentHash => "content_hash",
            StrategyKind::SimilarUrl => "similar_url",
            StrategyKind::ExactTitle => "exact_title",
            StrategyKind::TitleSimilarity => "title_similarity",
        }
    }

    /// Statistics key of the strategy this kind builds
    pub fn display_name(&self) -> &'static str {
        match self {
            StrategyKind::ExactUrl => ExactUrlStrategy::NAME,
            StrategyKind::ContentHash => ContentHashStrategy::NAME,
            StrategyKind::SimilarUrl => SimilarUrlStrategy::NAME,
            StrategyKind::ExactTitle => ExactTitleStrategy::NAME,
            StrategyKind::TitleSimilarity => TitleSimilarityStrategy::NAME,
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == key)
            .ok_or_else(|| format!("Unknown strategy: {}", s))
    }
}

/// The closed set of strategies shipped with the engine
#[derive(Debug, Clone, Copy)]
pub enum BuiltinStrategy {
    /// Canonical link equality
    ExactUrl(ExactUrlStrategy),
    /// Raw record hash equality
    ContentHash(ContentHashStrategy),
    /// Same host, near-identical path
    SimilarUrl(SimilarUrlStrategy),
    /// Normalized headline equality
    ExactTitle(ExactTitleStrategy),
    /// Fuzzy headline match
    TitleSimilarity(TitleSimilarityStrategy),
}

impl BuiltinStrategy {
    /// Build the strategy for `kind` with the given thresholds
    pub fn from_kind(
        kind: StrategyKind,
        similarity_threshold: f64,
        path_similarity_threshold: f64,
    ) -> crate::Result<Self> {
        Ok(match kind {
            StrategyKind::ExactUrl => BuiltinStrategy::ExactUrl(ExactUrlStrategy),
            StrategyKind::ContentHash => BuiltinStrategy::ContentHash(ContentHashStrategy),
            StrategyKind::SimilarUrl => {
                BuiltinStrategy::SimilarUrl(SimilarUrlStrategy::new(path_similarity_threshold)?)
            }
            StrategyKind::ExactTitle => BuiltinStrategy::ExactTitle(ExactTitleStrategy),
            StrategyKind::TitleSimilarity => {
                BuiltinStrategy::TitleSimilarity(TitleSimilarityStrategy::new(similarity_threshold)?)
            }
        })
    }

    /// The five built-in strategies with default thresholds
    pub fn defaults() -> Vec<BuiltinStrategy> {
        vec![
            BuiltinStrategy::ExactUrl(ExactUrlStrategy),
            BuiltinStrategy::ContentHash(ContentHashStrategy),
            BuiltinStrategy::SimilarUrl(SimilarUrlStrategy::default()),
            BuiltinStrategy::ExactTitle(ExactTitleStrategy),
            BuiltinStrategy::TitleSimilarity(TitleSimilarityStrategy::default()),
        ]
    }

    /// Which built-in this is
    pub fn kind(&self) -> StrategyKind {
        match self {
            BuiltinStrategy::ExactUrl(_) => StrategyKind::ExactUrl,
            BuiltinStrategy::ContentHash(_) => StrategyKind::ContentHash,
            BuiltinStrategy::SimilarUrl(_) => StrategyKind::SimilarUrl,
            BuiltinStrategy::ExactTitle(_) => StrategyKind::ExactTitle,
            BuiltinStrategy::TitleSimilarity(_) => StrategyKind::TitleSimilarity,
        }
    }

    fn inner(&self) -> &dyn DuplicateStrategy {
        match self {
            BuiltinStrategy::ExactUrl(s) => s,
            BuiltinStrategy::ContentHash(s) => s,
            BuiltinStrategy::SimilarUrl(s) => s,
            BuiltinStrategy::ExactTitle(s) => s,
            BuiltinStrategy::TitleSimilarity(s) => s,
        }
    }
}

impl DuplicateStrategy for BuiltinStrategy {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn priority(&self) -> i32 {
        self.inner().priority()
    }

    fn is_duplicate(&self, a: &Article, b: &Article) -> Result<bool, StrategyError> {
        self.inner().is_duplicate(a, b)
    }
}

/// Run one strategy on one pair, turning a panic into a [`StrategyError`]
///
/// Used at the composite and benchmark boundaries so a single broken
/// heuristic cannot abort a whole batch.
pub(crate) fn evaluate_guarded(
    strategy: &dyn DuplicateStrategy,
    a: &Article,
    b: &Article,
) -> Result<bool, StrategyError> {
    match panic::catch_unwind(AssertUnwindSafe(|| strategy.is_duplicate(a, b))) {
        Ok(outcome) => outcome,
        Err(payload) => Err(StrategyError::new(
            strategy.name(),
            format!("panicked: {}", panic_message(payload.as_ref())),
        )),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic payload"
    }
}
