//! Title similarity strategy

use crate::error::{check_threshold, Result};
use crate::matcher::ratio;
use crate::normalize::{jaccard, keywords_of_normalized, normalize};
use sieve_domain::{Article, DuplicateStrategy, StrategyError};

/// Weight of character-level similarity in the combined score
const TEXT_WEIGHT: f64 = 0.6;

/// Weight of keyword overlap in the combined score
const KEYWORD_WEIGHT: f64 = 0.4;

/// Similarity of two headlines in [0.0, 1.0]
///
/// Empty titles score 0.0 and titles equal after normalization score 1.0.
/// Otherwise the score is `0.6 * text + 0.4 * keywords`, where `text` is the
/// Ratcliff–Obershelp ratio of the normalized titles and `keywords` is the
/// Jaccard index of their keyword sets.
///
/// # Examples
///
/// ```
/// use sieve_engine::strategies::calculate_similarity;
///
/// assert_eq!(calculate_similarity("Budget passes", "budget passes!"), 1.0);
/// assert_eq!(calculate_similarity("", "Budget passes"), 0.0);
/// assert!(calculate_similarity("Government approves budget", "Opposition rejects vote") < 0.5);
/// ```
pub fn calculate_similarity(title1: &str, title2: &str) -> f64 {
    if title1.is_empty() || title2.is_empty() {
        return 0.0;
    }

    normalized_similarity(&normalize(title1), &normalize(title2))
}

/// Combined score of two titles already passed through [`normalize`]
fn normalized_similarity(norm1: &str, norm2: &str) -> f64 {
    if norm1 == norm2 {
        return 1.0;
    }

    let text_similarity = ratio(norm1, norm2);
    let keyword_similarity = jaccard(
        &keywords_of_normalized(norm1),
        &keywords_of_normalized(norm2),
    );

    TEXT_WEIGHT * text_similarity + KEYWORD_WEIGHT * keyword_similarity
}

/// Matches paraphrased or copy-edited headlines of the same story
#[derive(Debug, Clone, Copy)]
pub struct TitleSimilarityStrategy {
    similarity_threshold: f64,
}

impl TitleSimilarityStrategy {
    /// Statistics key for this strategy
    pub const NAME: &'static str = "Title Similarity";

    /// Lowest precedence of the built-in strategies
    pub const PRIORITY: i32 = 20;

    /// Score required by default
    pub const DEFAULT_THRESHOLD: f64 = 0.8;

    /// Create a strategy with a custom similarity threshold
    pub fn new(similarity_threshold: f64) -> Result<Self> {
        check_threshold("similarity_threshold", similarity_threshold)?;
        Ok(Self {
            similarity_threshold,
        })
    }

    /// Similarity threshold in use
    pub fn threshold(&self) -> f64 {
        self.similarity_threshold
    }

    /// Score two titles and decide whether they are the same headline
    ///
    /// A title that normalizes to nothing carries no signal: the pair scores
    /// 0.0 and never matches, whatever the threshold.
    pub fn compare(&self, title1: &str, title2: &str) -> (f64, bool) {
        let norm1 = normalize(title1);
        let norm2 = normalize(title2);
        if norm1.is_empty() || norm2.is_empty() {
            return (0.0, false);
        }

        let score = normalized_similarity(&norm1, &norm2);
        (score, score >= self.similarity_threshold)
    }
}

impl Default for TitleSimilarityStrategy {
    fn default() -> Self {
        Self {
            similarity_threshold: Self::DEFAULT_THRESHOLD,
        }
    }
}

impl DuplicateStrategy for TitleSimilarityStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn is_duplicate(&self, a: &Article, b: &Article) -> std::result::Result<bool, StrategyError> {
        Ok(self.compare(&a.title, &b.title).1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_after_normalization() {
        assert_eq!(calculate_similarity("Budget: passes", "budget — passes"), 1.0);
    }

    #[test]
    fn test_empty_titles_score_zero() {
        assert_eq!(calculate_similarity("", ""), 0.0);
        assert_eq!(calculate_similarity("Budget", ""), 0.0);
    }

    #[test]
    fn test_combined_score() {
        // text: 2 * 26 / 56, keywords: 3 / 4
        let score = calculate_similarity(
            "Government approves budget",
            "Government approves new budget",
        );
        let expected = 0.6 * (52.0 / 56.0) + 0.4 * 0.75;
        assert!((score - expected).abs() < 1e-9, "got {}", score);
    }

    #[test]
    fn test_strategy_agrees_with_calculate_similarity() {
        let pairs = [
            ("Government approves budget", "Government approves new budget"),
            ("Storm hits the coast", "Storm hits the coast hard"),
            ("Government approves budget", "Opposition rejects vote"),
            ("Café opens downtown", "Cafe opens downtown"),
        ];
        let strategy = TitleSimilarityStrategy::default();
        for (t1, t2) in pairs {
            let a = Article::new(t1, "https://a.co/1", "A");
            let b = Article::new(t2, "https://b.co/2", "B");
            let expected = calculate_similarity(t1, t2) >= TitleSimilarityStrategy::DEFAULT_THRESHOLD;
            assert_eq!(strategy.is_duplicate(&a, &b).unwrap(), expected, "{} / {}", t1, t2);
        }
    }

    #[test]
    fn test_disjoint_keywords_cap_score() {
        // With no shared keywords the score cannot exceed the text weight
        let score = calculate_similarity("Government approves budget", "Opposition rejects vote");
        assert!(score <= TEXT_WEIGHT);
    }

    #[test]
    fn test_edited_headline_is_duplicate() {
        let a = Article::new("Government approves budget", "https://a.co/1", "A");
        let b = Article::new("Government approves new budget", "https://b.co/2", "B");
        assert!(TitleSimilarityStrategy::default().is_duplicate(&a, &b).unwrap());
    }

    #[test]
    fn test_unrelated_headline_is_not_duplicate() {
        let a = Article::new("Government approves budget", "https://a.co/1", "A");
        let b = Article::new("Opposition rejects vote", "https://b.co/2", "B");
        assert!(!TitleSimilarityStrategy::default().is_duplicate(&a, &b).unwrap());
    }

    #[test]
    fn test_threshold_controls_decision() {
        let a = Article::new("Government approves budget", "https://a.co/1", "A");
        let b = Article::new("Government approves new budget", "https://b.co/2", "B");
        let strict = TitleSimilarityStrategy::new(0.95).unwrap();
        assert!(!strict.is_duplicate(&a, &b).unwrap());
    }

    #[test]
    fn test_empty_title_never_matches_itself() {
        let a = Article::new("", "https://a.co/1", "A");
        assert!(!TitleSimilarityStrategy::default().is_duplicate(&a, &a).unwrap());
        // Even a zero threshold cannot make an empty title match
        let lax = TitleSimilarityStrategy::new(0.0).unwrap();
        assert!(!lax.is_duplicate(&a, &a).unwrap());
    }

    #[test]
    fn test_compare_punctuation_only_titles() {
        let strategy = TitleSimilarityStrategy::default();
        // Equal raw strings, but nothing left after normalization
        assert_eq!(strategy.compare("?!", "?!"), (0.0, false));
        assert_eq!(strategy.compare("Budget", "..."), (0.0, false));

        let (score, duplicate) = strategy.compare("Budget: passes", "budget passes");
        assert_eq!(score, 1.0);
        assert!(duplicate);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        assert!(TitleSimilarityStrategy::new(1.2).is_err());
        assert!(TitleSimilarityStrategy::new(f64::NAN).is_err());
    }
}
