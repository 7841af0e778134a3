//! Dedup command implementation.

use super::read_articles;
use crate::cli::DedupArgs;
use crate::error::Result;
use crate::output::Formatter;
use sieve_engine::{DedupConfig, Deduplicator};

/// Execute the dedup command.
pub fn execute_dedup(args: DedupArgs, config: DedupConfig, formatter: &Formatter) -> Result<()> {
    let articles = read_articles(&args.input)?;

    if args.no_dedupe {
        eprintln!("{}", formatter.warning("Deduplication disabled, passing batch through"));
        let all: Vec<_> = articles.iter().collect();
        println!("{}", formatter.format_articles(&all)?);
        return Ok(());
    }

    let deduplicator = Deduplicator::new(config)?;
    let (unique, result) = deduplicator.deduplicate(&articles);

    println!("{}", formatter.format_dedup(&unique, &result, args.show_pairs)?);
    Ok(())
}
