//! Priority-ordered strategy chain

use crate::strategies::{evaluate_guarded, BuiltinStrategy};
use sieve_domain::{Article, DuplicateStrategy};
use tracing::{info, warn};

/// Boxed strategy as held by the composite
pub type BoxedStrategy = Box<dyn DuplicateStrategy>;

/// An ordered chain of duplicate-detection rules
///
/// Strategies are kept sorted by ascending priority (stable, so equal
/// priorities keep insertion order). The first strategy that reports a
/// duplicate wins and the rest are skipped.
pub struct CompositeStrategy {
    strategies: Vec<BoxedStrategy>,
}

impl CompositeStrategy {
    /// Create a composite from the given strategies
    pub fn new(strategies: Vec<BoxedStrategy>) -> Self {
        let mut composite = Self { strategies };
        composite.sort();
        info!(
            "Initialized deduplication with {} strategies: {:?}",
            composite.strategies.len(),
            composite.strategy_names()
        );
        composite
    }

    /// Create a composite holding the five built-in strategies
    pub fn with_defaults() -> Self {
        Self::new(
            BuiltinStrategy::defaults()
                .into_iter()
                .map(|s| Box::new(s) as BoxedStrategy)
                .collect(),
        )
    }

    /// Check whether two articles are duplicates under any strategy
    ///
    /// Returns `(true, Some(name))` for the first matching strategy, or
    /// `(false, None)` if none matched. A strategy that fails is logged and
    /// counted as no match.
    pub fn is_duplicate(&self, a: &Article, b: &Article) -> (bool, Option<&str>) {
        let matched = self.matching_strategy(a, b);
        (matched.is_some(), matched)
    }

    /// Name of the first strategy that reports `a` and `b` as duplicates
    pub fn matching_strategy(&self, a: &Article, b: &Article) -> Option<&str> {
        for strategy in &self.strategies {
            match evaluate_guarded(strategy.as_ref(), a, b) {
                Ok(true) => return Some(strategy.name()),
                Ok(false) => {}
                Err(e) => {
                    warn!("{} (comparing {} with {})", e, a.label(), b.label());
                }
            }
        }
        None
    }

    /// Add a strategy and restore priority order
    pub fn add_strategy(&mut self, strategy: BoxedStrategy) {
        info!("Added strategy: {}", strategy.name());
        self.strategies.push(strategy);
        self.sort();
    }

    /// Remove the first strategy with the given name
    ///
    /// Returns `true` if a strategy was removed.
    pub fn remove_strategy(&mut self, name: &str) -> bool {
        match self.strategies.iter().position(|s| s.name() == name) {
            Some(index) => {
                self.strategies.remove(index);
                info!("Removed strategy: {}", name);
                true
            }
            None => false,
        }
    }

    /// Strategy names in evaluation order
    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Strategies in evaluation order
    pub fn strategies(&self) -> &[BoxedStrategy] {
        &self.strategies
    }

    /// Number of strategies in the chain
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Whether the chain is empty
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    fn sort(&mut self) {
        self.strategies.sort_by_key(|s| s.priority());
    }
}

impl Default for CompositeStrategy {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for CompositeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeStrategy")
            .field("strategies", &self.strategy_names())
            .finish()
    }
}
