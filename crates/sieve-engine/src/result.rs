//! Per-run deduplication report

use serde::Serialize;
use sieve_domain::Article;
use std::collections::HashMap;
use std::time::Duration;

/// One detected duplicate
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicatePair<'a> {
    /// Article already accepted when the duplicate was found
    pub kept: &'a Article,
    /// Candidate that was discarded
    pub dropped: &'a Article,
    /// Name of the strategy that matched
    pub strategy: String,
}

/// Outcome of one [`Deduplicator::deduplicate`](crate::Deduplicator::deduplicate) run
///
/// Borrows the caller's articles through [`DuplicatePair`]. Use
/// [`to_report`](Self::to_report) for an owned, serializable copy.
#[derive(Debug, Clone, Default)]
pub struct DeduplicationResult<'a> {
    /// Number of articles handed in
    pub original_count: usize,
    /// Number of articles accepted
    pub unique_count: usize,
    /// Number of articles discarded
    pub duplicates_found: usize,
    /// Duplicates caught per strategy name
    pub strategy_stats: HashMap<String, usize>,
    /// Wall-clock time of the run
    pub processing_time: Duration,
    /// Every duplicate, in detection order
    pub duplicate_pairs: Vec<DuplicatePair<'a>>,
}

impl<'a> DeduplicationResult<'a> {
    /// Create an empty result for a batch of `original_count` articles
    pub fn new(original_count: usize) -> Self {
        Self {
            original_count,
            ..Self::default()
        }
    }

    /// Fraction of the batch that was discarded, in [0.0, 1.0]
    pub fn duplicate_rate(&self) -> f64 {
        if self.original_count == 0 {
            0.0
        } else {
            self.duplicates_found as f64 / self.original_count as f64
        }
    }

    /// Record a duplicate caught by `strategy`
    pub fn record_duplicate(&mut self, kept: &'a Article, dropped: &'a Article, strategy: &str) {
        self.duplicates_found += 1;
        *self.strategy_stats.entry(strategy.to_string()).or_insert(0) += 1;
        self.duplicate_pairs.push(DuplicatePair {
            kept,
            dropped,
            strategy: strategy.to_string(),
        });
    }

    /// Per-strategy counts sorted by count (descending), then name
    pub fn sorted_stats(&self) -> Vec<(&str, usize)> {
        let mut stats: Vec<(&str, usize)> = self
            .strategy_stats
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        stats.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        stats
    }

    /// Generate a human-readable summary
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Deduplication Summary".to_string(),
            "=====================".to_string(),
            format!("Articles in: {}", self.original_count),
            format!("Unique: {}", self.unique_count),
            format!(
                "Duplicates: {} ({:.1}%)",
                self.duplicates_found,
                self.duplicate_rate() * 100.0
            ),
            format!("Processing time: {:.3}s", self.processing_time.as_secs_f64()),
        ];

        if !self.strategy_stats.is_empty() {
            lines.push(String::new());
            lines.push("Duplicates by strategy:".to_string());
            for (name, count) in self.sorted_stats() {
                lines.push(format!("  {}: {}", name, count));
            }
        }

        lines.join("\n")
    }

    /// Owned, serializable copy of this result
    pub fn to_report(&self) -> DedupReport {
        DedupReport {
            original_count: self.original_count,
            unique_count: self.unique_count,
            duplicates_found: self.duplicates_found,
            duplicate_rate: self.duplicate_rate(),
            strategy_stats: self
                .strategy_stats
                .iter()
                .map(|(name, count)| (name.clone(), *count))
                .collect(),
            processing_time: self.processing_time.as_secs_f64(),
            duplicate_pairs: self
                .duplicate_pairs
                .iter()
                .map(|pair| PairReport {
                    kept_title: pair.kept.title.clone(),
                    kept_link: pair.kept.link.clone(),
                    dropped_title: pair.dropped.title.clone(),
                    dropped_link: pair.dropped.link.clone(),
                    strategy: pair.strategy.clone(),
                })
                .collect(),
        }
    }
}

/// Serializable form of a [`DeduplicationResult`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DedupReport {
    /// Number of articles handed in
    pub original_count: usize,
    /// Number of articles accepted
    pub unique_count: usize,
    /// Number of articles discarded
    pub duplicates_found: usize,
    /// Fraction of the batch that was discarded
    pub duplicate_rate: f64,
    /// Duplicates caught per strategy name
    pub strategy_stats: std::collections::BTreeMap<String, usize>,
    /// Run time in seconds
    pub processing_time: f64,
    /// Duplicates identified by title and link
    pub duplicate_pairs: Vec<PairReport>,
}

/// Serializable form of a [`DuplicatePair`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairReport {
    /// Title of the kept article
    pub kept_title: String,
    /// Link of the kept article
    pub kept_link: String,
    /// Title of the dropped article
    pub dropped_title: String,
    /// Link of the dropped article
    pub dropped_link: String,
    /// Strategy that matched
    pub strategy: String,
}
