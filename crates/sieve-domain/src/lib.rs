//! Sieve Domain Layer
//!
//! This crate contains the data model shared by the deduplication engine and
//! its hosts. It defines the article record the engine reasons over and the
//! trait seam every duplicate-detection heuristic implements.
//!
//! ## Key Concepts
//!
//! - **Article**: A fetched news item (title, link, source, optional summary and
//!   publish time). Read-only as far as the engine is concerned.
//! - **Strategy**: A pure rule deciding whether two articles are the same story,
//!   ranked by a priority (lower runs first).
//!
//! ## Architecture
//!
//! - No I/O, no global state
//! - Engine implementations live in `sieve-engine`
//! - Trait definitions for everything the engine plugs together

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod article;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use article::Article;
pub use error::StrategyError;
pub use traits::DuplicateStrategy;
