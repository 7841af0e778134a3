//! Exact title strategy

use crate::normalize::normalize;
use sieve_domain::{Article, DuplicateStrategy, StrategyError};

/// Matches republished headlines that are identical after normalization
///
/// Case, punctuation and spacing differences are ignored, so
/// "Breaking: PM announces new policy" and "Breaking — PM announces new policy"
/// are the same headline.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactTitleStrategy;

impl ExactTitleStrategy {
    /// Statistics key for this strategy
    pub const NAME: &'static str = "Exact Title";

    /// Evaluated before fuzzy title matching
    pub const PRIORITY: i32 = 15;
}

impl DuplicateStrategy for ExactTitleStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn is_duplicate(&self, a: &Article, b: &Article) -> Result<bool, StrategyError> {
        let title_a = normalize(&a.title);
        let title_b = normalize(&b.title);
        Ok(!title_a.is_empty() && !title_b.is_empty() && title_a == title_b)
    }
}
