//! Content hash strategy

use sha2::{Digest, Sha256};
use sieve_domain::{Article, DuplicateStrategy, StrategyError};

/// Matches byte-identical re-ingestion of the same record
///
/// Hashes the raw `title|link|source` string with SHA-256. No normalization is
/// applied, so empty fields still hash deterministically.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentHashStrategy;

impl ContentHashStrategy {
    /// Statistics key for this strategy
    pub const NAME: &'static str = "Content Hash";

    /// Evaluated right after the exact URL check
    pub const PRIORITY: i32 = 5;

    /// Hex-encoded SHA-256 of `title|link|source`
    pub fn content_hash(article: &Article) -> String {
        let mut hasher = Sha256::new();
        hasher.update(article.title.as_bytes());
        hasher.update(b"|");
        hasher.update(article.link.as_bytes());
        hasher.update(b"|");
        hasher.update(article.source.as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl DuplicateStrategy for ContentHashStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn is_duplicate(&self, a: &Article, b: &Article) -> Result<bool, StrategyError> {
        Ok(Self::content_hash(a) == Self::content_hash(b))
    }
}
