//! Per-strategy instrumentation
//!
//! Runs every strategy of a chain on its own over all unordered pairs of a
//! batch. Unlike a deduplication run nothing short-circuits, so the numbers
//! show how much each heuristic would catch alone and how fast it is.

use crate::composite::CompositeStrategy;
use crate::strategies::evaluate_guarded;
use serde::{Serialize, Serializer};
use sieve_domain::Article;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Measurements for one strategy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyBenchmark {
    /// Pairs flagged as duplicates
    pub duplicates_found: usize,
    /// Pairs evaluated, `n * (n - 1) / 2`
    pub comparisons: usize,
    /// Time spent on the sweep (serialized in seconds)
    #[serde(serialize_with = "as_secs")]
    pub processing_time: Duration,
    /// Throughput, 0 when the sweep took no measurable time
    pub comparisons_per_second: f64,
    /// Priority of the strategy
    pub priority: i32,
}

fn as_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// Benchmark results keyed by strategy name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BenchmarkReport {
    results: BTreeMap<String, StrategyBenchmark>,
}

impl BenchmarkReport {
    /// Measurements for the named strategy
    pub fn get(&self, name: &str) -> Option<&StrategyBenchmark> {
        self.results.get(name)
    }

    /// Number of strategies measured
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True when nothing was measured (fewer than two articles)
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Entries in evaluation order (priority, then name)
    pub fn by_priority(&self) -> Vec<(&str, &StrategyBenchmark)> {
        let mut entries: Vec<(&str, &StrategyBenchmark)> = self
            .results
            .iter()
            .map(|(name, bench)| (name.as_str(), bench))
            .collect();
        entries.sort_by_key(|(_, bench)| bench.priority);
        entries
    }

    /// Generate a human-readable summary
    pub fn summary(&self) -> String {
        if self.results.is_empty() {
            return "No benchmark results (need at least two articles)".to_string();
        }

        let mut lines = vec![
            "Strategy Benchmark".to_string(),
            "==================".to_string(),
        ];
        for (name, bench) in self.by_priority() {
            lines.push(format!(
                "  [{:>3}] {}: {} duplicates / {} comparisons in {:.3}s ({:.0}/s)",
                bench.priority,
                name,
                bench.duplicates_found,
                bench.comparisons,
                bench.processing_time.as_secs_f64(),
                bench.comparisons_per_second
            ));
        }
        lines.join("\n")
    }
}

/// Benchmark every strategy of `composite` on `articles`
///
/// Fewer than two articles yields an empty report. A strategy failing on a
/// pair is logged and the pair counts as no match.
pub fn benchmark_strategies(composite: &CompositeStrategy, articles: &[Article]) -> BenchmarkReport {
    let mut report = BenchmarkReport::default();
    if articles.len() < 2 {
        return report;
    }

    info!(
        "Benchmarking {} strategies on {} articles",
        composite.len(),
        articles.len()
    );

    for strategy in composite.strategies() {
        let start = Instant::now();
        let mut duplicates_found = 0;
        let mut comparisons = 0;

        for (i, a) in articles.iter().enumerate() {
            for b in &articles[i + 1..] {
                comparisons += 1;
                match evaluate_guarded(strategy.as_ref(), a, b) {
                    Ok(true) => duplicates_found += 1,
                    Ok(false) => {}
                    Err(e) => warn!("{} (benchmarking {} with {})", e, a.label(), b.label()),
                }
            }
        }

        let processing_time = start.elapsed();
        let secs = processing_time.as_secs_f64();
        let comparisons_per_second = if secs > 0.0 {
            comparisons as f64 / secs
        } else {
            0.0
        };

        report.results.insert(
            strategy.name().to_string(),
            StrategyBenchmark {
                duplicates_found,
                comparisons,
                processing_time,
                comparisons_per_second,
                priority: strategy.priority(),
            },
        );
    }

    report
}
