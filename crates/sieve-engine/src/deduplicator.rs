//! Batch deduplication

use crate::benchmark::{self, BenchmarkReport};
use crate::composite::{BoxedStrategy, CompositeStrategy};
use crate::config::DedupConfig;
use crate::error::{DedupError, Result};
use crate::normalize::normalize;
use crate::result::DeduplicationResult;
use crate::strategies::calculate_similarity;
use sieve_domain::Article;
use std::time::Instant;
use tracing::{debug, info};

/// Progress is logged every this many articles
const PROGRESS_INTERVAL: usize = 100;

/// Removes near-duplicate articles from a batch
///
/// Each candidate is compared against every article accepted so far, in
/// acceptance order, through a [`CompositeStrategy`]. The first match discards
/// the candidate. With `preserve_newest` the batch is walked newest first, so
/// the most recent copy of a story is the one that survives.
///
/// # Examples
///
/// ```
/// use sieve_domain::Article;
/// use sieve_engine::Deduplicator;
///
/// let dedup = Deduplicator::default();
/// let articles = vec![
///     Article::new("Budget passes", "https://n.co/a?utm_source=tw", "A"),
///     Article::new("Budget passes (update)", "https://n.co/a", "B"),
/// ];
///
/// let (unique, result) = dedup.deduplicate(&articles);
/// assert_eq!(unique.len(), 1);
/// assert_eq!(result.strategy_stats["Exact URL"], 1);
/// ```
#[derive(Debug)]
pub struct Deduplicator {
    composite: CompositeStrategy,
    preserve_newest: bool,
}

impl Deduplicator {
    /// Create a deduplicator from configuration
    ///
    /// Fails if a threshold is outside [0.0, 1.0] or no strategy is enabled.
    pub fn new(config: DedupConfig) -> Result<Self> {
        let strategies = config
            .build_strategies()?
            .into_iter()
            .map(|s| Box::new(s) as BoxedStrategy)
            .collect();

        Ok(Self {
            composite: CompositeStrategy::new(strategies),
            preserve_newest: config.preserve_newest,
        })
    }

    /// Create a deduplicator with a custom strategy list
    pub fn with_strategies(strategies: Vec<BoxedStrategy>, preserve_newest: bool) -> Result<Self> {
        if strategies.is_empty() {
            return Err(DedupError::Config(
                "at least one strategy must be provided".to_string(),
            ));
        }

        Ok(Self {
            composite: CompositeStrategy::new(strategies),
            preserve_newest,
        })
    }

    /// Whether the newest copy of a story is kept
    pub fn preserve_newest(&self) -> bool {
        self.preserve_newest
    }

    /// The strategy chain in use
    pub fn composite(&self) -> &CompositeStrategy {
        &self.composite
    }

    /// Remove duplicates from `articles`
    ///
    /// Returns references to the surviving articles, in processing order, and
    /// a report of what was dropped and why.
    pub fn deduplicate<'a>(
        &self,
        articles: &'a [Article],
    ) -> (Vec<&'a Article>, DeduplicationResult<'a>) {
        let start = Instant::now();
        let mut result = DeduplicationResult::new(articles.len());

        if articles.is_empty() {
            return (Vec::new(), result);
        }

        info!(
            "Deduplicating {} articles using {} strategies",
            articles.len(),
            self.composite.len()
        );

        let mut ordered: Vec<&'a Article> = articles.iter().collect();
        if self.preserve_newest {
            // Newest first; articles without a publish time sort as oldest
            ordered.sort_by(|a, b| b.published.cmp(&a.published));
        }

        let total = ordered.len();
        let mut unique: Vec<&'a Article> = Vec::new();

        for (index, candidate) in ordered.into_iter().enumerate() {
            let matched = unique.iter().find_map(|existing| {
                self.composite
                    .matching_strategy(candidate, existing)
                    .map(|name| (*existing, name))
            });

            match matched {
                Some((existing, strategy)) => {
                    debug!("Duplicate found by {}: {}", strategy, candidate.label());
                    result.record_duplicate(existing, candidate, strategy);
                }
                None => unique.push(candidate),
            }

            let processed = index + 1;
            if processed % PROGRESS_INTERVAL == 0 {
                debug!("Processed {}/{} articles", processed, total);
            }
        }

        result.unique_count = unique.len();
        result.processing_time = start.elapsed();

        info!(
            "Deduplication completed: {} -> {} ({:.1}% duplicates) in {:.2}s",
            result.original_count,
            result.unique_count,
            result.duplicate_rate() * 100.0,
            result.processing_time.as_secs_f64()
        );
        for (name, count) in result.sorted_stats() {
            info!("  {}: {} duplicates found", name, count);
        }

        (unique, result)
    }

    /// Remove duplicates, discarding the report
    pub fn deduplicate_simple<'a>(&self, articles: &'a [Article]) -> Vec<&'a Article> {
        self.deduplicate(articles).0
    }

    /// Run every strategy in isolation over all pairs of `articles`
    pub fn benchmark_strategies(&self, articles: &[Article]) -> BenchmarkReport {
        benchmark::benchmark_strategies(&self.composite, articles)
    }

    /// Add a strategy to the chain
    pub fn add_strategy(&mut self, strategy: BoxedStrategy) {
        self.composite.add_strategy(strategy);
    }

    /// Remove a strategy by name, returning whether one was removed
    pub fn remove_strategy(&mut self, name: &str) -> bool {
        self.composite.remove_strategy(name)
    }

    /// Active strategy names in evaluation order
    pub fn strategy_names(&self) -> Vec<&str> {
        self.composite.strategy_names()
    }

    /// Title similarity score used by the Title Similarity strategy
    pub fn calculate_similarity(&self, title1: &str, title2: &str) -> f64 {
        calculate_similarity(title1, title2)
    }

    /// Text normalization used by the title strategies
    pub fn normalize_text(&self, text: &str) -> String {
        normalize(text)
    }

    /// Link canonicalization used by the URL strategies
    pub fn normalize_url(&self, url: &str) -> String {
        crate::url::normalize_url(url)
    }
}

impl Default for Deduplicator {
    fn default() -> Self {
        Self {
            composite: CompositeStrategy::with_defaults(),
            preserve_newest: true,
        }
    }
}
