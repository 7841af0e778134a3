//! Benchmark command implementation.

use super::read_articles;
use crate::cli::InputArgs;
use crate::error::Result;
use crate::output::Formatter;
use sieve_engine::{DedupConfig, Deduplicator};

/// Execute the benchmark command.
pub fn execute_benchmark(args: InputArgs, config: DedupConfig, formatter: &Formatter) -> Result<()> {
    let articles = read_articles(&args)?;
    let deduplicator = Deduplicator::new(config)?;
    let report = deduplicator.benchmark_strategies(&articles);

    println!("{}", formatter.format_benchmark(&report, articles.len())?);
    Ok(())
}
