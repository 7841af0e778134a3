//! Exact URL strategy

use crate::url::normalize_url;
use sieve_domain::{Article, DuplicateStrategy, StrategyError};

/// Matches articles whose links share one canonical destination
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactUrlStrategy;

impl ExactUrlStrategy {
    /// Statistics key for this strategy
    pub const NAME: &'static str = "Exact URL";

    /// Highest precedence of the built-in strategies
    pub const PRIORITY: i32 = 0;

    /// Whether both links are non-empty and canonicalize identically
    pub fn links_match(a: &str, b: &str) -> bool {
        let a = normalize_url(a);
        let b = normalize_url(b);
        !a.is_empty() && !b.is_empty() && a == b
    }
}

impl DuplicateStrategy for ExactUrlStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn is_duplicate(&self, a: &Article, b: &Article) -> Result<bool, StrategyError> {
        Ok(Self::links_match(&a.link, &b.link))
    }
}
