//! Sieve Engine
//!
//! Removes near-duplicate news articles from a freshly fetched batch before it
//! is stored or sent downstream.
//!
//! # Overview
//!
//! The engine is made of:
//! - **Normalizers**: Unicode-aware title normalization with bilingual
//!   (Hebrew + English) keyword extraction, and link canonicalization that
//!   strips fragments and tracking parameters
//! - **Strategies**: Independent heuristics, each deciding whether two
//!   articles are the same story
//! - **Composite**: A priority-ordered chain of strategies where the first
//!   match wins
//! - **Deduplicator**: Walks a batch (newest first by default) and drops every
//!   article that matches one already accepted
//! - **Benchmark**: Runs each strategy alone over all pairs to show what it
//!   catches and how fast
//!
//! ## Built-in Strategies
//!
//! | Priority | Strategy | Catches |
//! |----------|----------|---------|
//! | 0 | Exact URL | Same link modulo tracking parameters and fragment |
//! | 5 | Content Hash | Byte-identical records |
//! | 10 | Similar URL | AMP variants, trailing slashes, pagination |
//! | 15 | Exact Title | Same headline modulo case and punctuation |
//! | 20 | Title Similarity | Copy-edited headlines |
//!
//! # Usage
//!
//! ```
//! use sieve_domain::Article;
//! use sieve_engine::{DedupConfig, Deduplicator};
//!
//! # fn main() -> Result<(), sieve_engine::DedupError> {
//! let dedup = Deduplicator::new(DedupConfig::default())?;
//!
//! let articles = vec![
//!     Article::new("Government approves budget", "https://n.co/1", "Wire"),
//!     Article::new("Government approves new budget", "https://m.co/2", "Daily"),
//!     Article::new("Storm hits the coast", "https://w.co/3", "Weather"),
//! ];
//!
//! let (unique, result) = dedup.deduplicate(&articles);
//! assert_eq!(unique.len(), 2);
//! println!("{}", result.summary());
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Strategies
//!
//! Any [`DuplicateStrategy`](sieve_domain::DuplicateStrategy) can join the
//! chain. It is slotted in by priority:
//!
//! ```
//! use sieve_domain::{Article, DuplicateStrategy, StrategyError};
//! use sieve_engine::Deduplicator;
//!
//! struct SameSummary;
//!
//! impl DuplicateStrategy for SameSummary {
//!     fn name(&self) -> &str { "Same Summary" }
//!     fn priority(&self) -> i32 { 12 }
//!     fn is_duplicate(&self, a: &Article, b: &Article) -> Result<bool, StrategyError> {
//!         Ok(a.summary.is_some() && a.summary == b.summary)
//!     }
//! }
//!
//! let mut dedup = Deduplicator::default();
//! dedup.add_strategy(Box::new(SameSummary));
//! assert_eq!(dedup.strategy_names()[3], "Same Summary");
//! ```
//!
//! # Configuration
//!
//! ```toml
//! similarity_threshold = 0.8
//! path_similarity_threshold = 0.9
//! preserve_newest = true
//! strategies = ["exact_url", "content_hash", "similar_url", "exact_title", "title_similarity"]
//! ```
//!
//! # Scaling
//!
//! Every candidate is compared against every accepted article, so a run is
//! quadratic in the number of unique articles.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod benchmark;
pub mod composite;
pub mod config;
pub mod deduplicator;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod result;
pub mod strategies;
pub mod url;

pub use benchmark::{benchmark_strategies, BenchmarkReport, StrategyBenchmark};
pub use composite::{BoxedStrategy, CompositeStrategy};
pub use config::DedupConfig;
pub use deduplicator::Deduplicator;
pub use error::{DedupError, Result};
pub use result::{DedupReport, DeduplicationResult, DuplicatePair, PairReport};
pub use strategies::{BuiltinStrategy, StrategyKind};
