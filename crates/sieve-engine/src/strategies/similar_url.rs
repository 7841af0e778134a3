//! Similar URL strategy

use super::exact_url::ExactUrlStrategy;
use crate::error::{check_threshold, Result};
use crate::matcher::ratio;
use crate::url::{host_and_path, normalize_url};
use sieve_domain::{Article, DuplicateStrategy, StrategyError};

/// Matches the same article served under slightly different paths
///
/// Catches AMP variants, trailing slashes and pagination suffixes: both links
/// must be on the same host (and port) and their paths must be at least
/// `path_similarity_threshold` similar. Pairs whose links are exactly equal
/// after canonicalization are left to [`ExactUrlStrategy`].
#[derive(Debug, Clone, Copy)]
pub struct SimilarUrlStrategy {
    path_similarity_threshold: f64,
}

impl SimilarUrlStrategy {
    /// Statistics key for this strategy
    pub const NAME: &'static str = "Similar URL";

    /// Evaluated after both exact checks
    pub const PRIORITY: i32 = 10;

    /// Path similarity required by default
    pub const DEFAULT_THRESHOLD: f64 = 0.9;

    /// Create a strategy with a custom path similarity threshold
    pub fn new(path_similarity_threshold: f64) -> Result<Self> {
        check_threshold("path_similarity_threshold", path_similarity_threshold)?;
        Ok(Self {
            path_similarity_threshold,
        })
    }

    /// Path similarity threshold in use
    pub fn threshold(&self) -> f64 {
        self.path_similarity_threshold
    }

    /// Similarity of the two link paths, if both links share a host
    ///
    /// `None` when either link is empty or unparseable, or the hosts differ.
    pub fn path_similarity(a: &str, b: &str) -> Option<f64> {
        let a = normalize_url(a);
        let b = normalize_url(b);
        if a.is_empty() || b.is_empty() {
            return None;
        }

        let (host_a, port_a, path_a) = host_and_path(&a)?;
        let (host_b, port_b, path_b) = host_and_path(&b)?;
        if host_a != host_b || port_a != port_b {
            return None;
        }

        Some(ratio(&path_a, &path_b))
    }
}

impl Default for SimilarUrlStrategy {
    fn default() -> Self {
        Self {
            path_similarity_threshold: Self::DEFAULT_THRESHOLD,
        }
    }
}

impl DuplicateStrategy for SimilarUrlStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn is_duplicate(&self, a: &Article, b: &Article) -> std::result::Result<bool, StrategyError> {
        if ExactUrlStrategy::links_match(&a.link, &b.link) {
            return Ok(false);
        }

        Ok(Self::path_similarity(&a.link, &b.link)
            .is_some_and(|similarity| similarity >= self.path_similarity_threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(link: &str) -> Article {
        Article::new("Title", link, "A")
    }

    #[test]
    fn test_near_identical_paths_match() {
        let a = article("https://n.co/news/article-123");
        let b = article("https://n.co/news/article-124");
        assert!(SimilarUrlStrategy::default().is_duplicate(&a, &b).unwrap());
    }

    #[test]
    fn test_trailing_slash_matches() {
        let a = article("https://n.co/news/story");
        let b = article("https://n.co/news/story/");
        assert!(SimilarUrlStrategy::default().is_duplicate(&a, &b).unwrap());
    }

    #[test]
    fn test_different_hosts_never_match() {
        let a = article("https://n.co/news/article-123");
        let b = article("https://m.co/news/article-123");
        assert!(!SimilarUrlStrategy::default().is_duplicate(&a, &b).unwrap());
    }

    #[test]
    fn test_different_ports_never_match() {
        let a = article("http://n.co:8080/news/article-123");
        let b = article("http://n.co/news/article-124");
        assert_eq!(SimilarUrlStrategy::path_similarity(&a.link, &b.link), None);
    }

    #[test]
    fn test_unrelated_paths_do_not_match() {
        let a = article("https://n.co/news/politics/budget");
        let b = article("https://n.co/sport/9");
        assert!(!SimilarUrlStrategy::default().is_duplicate(&a, &b).unwrap());
    }

    #[test]
    fn test_exact_matches_are_deferred() {
        let a = article("https://n.co/x?utm_source=tw");
        let b = article("https://n.co/x");
        assert!(!SimilarUrlStrategy::default().is_duplicate(&a, &b).unwrap());
        assert!(!SimilarUrlStrategy::default().is_duplicate(&a, &a).unwrap());
    }

    #[test]
    fn test_non_ascii_paths_compare_by_character() {
        let a = article("https://www.ynet.co.il/חדשות/הממשלה-אישרה-תקציב");
        let b = article("https://www.ynet.co.il/חדשות/הממשלה-דחתה-תקציב");
        let similarity = SimilarUrlStrategy::path_similarity(&a.link, &b.link).unwrap();
        assert!(similarity < 0.9, "got {}", similarity);
        assert!(!SimilarUrlStrategy::default().is_duplicate(&a, &b).unwrap());

        // Raw and percent-encoded spellings of one path are the same path
        let raw = article("https://n.co/חדשות/1");
        let encoded = article("https://n.co/%D7%97%D7%93%D7%A9%D7%95%D7%AA/1/");
        assert!(SimilarUrlStrategy::default().is_duplicate(&raw, &encoded).unwrap());
    }

    #[test]
    fn test_empty_or_unparseable_links() {
        let empty = article("");
        let relative = article("/news/article-123");
        let absolute = article("https://n.co/news/article-123");
        let strategy = SimilarUrlStrategy::default();

        assert!(!strategy.is_duplicate(&empty, &absolute).unwrap());
        assert!(!strategy.is_duplicate(&relative, &absolute).unwrap());
    }

    #[test]
    fn test_custom_threshold() {
        let a = article("https://n.co/news/story");
        let b = article("https://n.co/amp/news/story");
        // 2 * 11 / 26 ~= 0.846
        assert!(!SimilarUrlStrategy::default().is_duplicate(&a, &b).unwrap());
        assert!(SimilarUrlStrategy::new(0.8).unwrap().is_duplicate(&a, &b).unwrap());
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        assert!(SimilarUrlStrategy::new(1.5).is_err());
        assert!(SimilarUrlStrategy::new(-0.5).is_err());
    }
}
