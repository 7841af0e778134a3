//! Similarity command implementation.

use crate::cli::SimilarityArgs;
use crate::error::Result;
use crate::output::Formatter;
use sieve_engine::strategies::TitleSimilarityStrategy;
use sieve_engine::DedupConfig;

/// Execute the similarity command.
pub fn execute_similarity(
    args: SimilarityArgs,
    config: &DedupConfig,
    formatter: &Formatter,
) -> Result<()> {
    let strategy = TitleSimilarityStrategy::new(config.similarity_threshold)?;
    let (similarity, duplicate) = strategy.compare(&args.title1, &args.title2);
    println!(
        "{}",
        formatter.format_similarity(
            &args.title1,
            &args.title2,
            similarity,
            strategy.threshold(),
            duplicate
        )?
    );
    Ok(())
}
