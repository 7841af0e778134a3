//! Trait definitions for pluggable duplicate detection
//!
//! The engine ships a closed set of built-in heuristics, but hosts can add
//! their own by implementing [`DuplicateStrategy`].

use crate::{Article, StrategyError};

/// A rule deciding whether two articles describe the same story
///
/// Implemented by the engine layer (sieve-engine) and by host plugins.
///
/// Implementations must be pure functions of their two inputs: no hidden
/// mutable state, and `is_duplicate(a, b) == is_duplicate(b, a)`. Missing or
/// empty fields should yield `Ok(false)` rather than an error.
pub trait DuplicateStrategy: Send + Sync {
    /// Human-readable name, used as the key in run statistics
    fn name(&self) -> &str;

    /// Evaluation rank; lower values are evaluated first
    fn priority(&self) -> i32;

    /// Decide whether `a` and `b` are duplicates according to this rule
    fn is_duplicate(&self, a: &Article, b: &Article) -> Result<bool, StrategyError>;
}

impl<S: DuplicateStrategy + ?Sized> DuplicateStrategy for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn priority(&self) -> i32 {
        (**self).priority()
    }

    fn is_duplicate(&self, a: &Article, b: &Article) -> Result<bool, StrategyError> {
        (**self).is_duplicate(a, b)
    }
}
