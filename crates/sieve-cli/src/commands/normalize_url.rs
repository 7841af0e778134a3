//! Normalize-url command implementation.

use crate::cli::NormalizeUrlArgs;
use crate::error::Result;
use crate::output::Formatter;
use sieve_engine::url::normalize_url;

/// Execute the normalize-url command.
pub fn execute_normalize_url(args: NormalizeUrlArgs, formatter: &Formatter) -> Result<()> {
    let normalized = normalize_url(&args.url);
    println!("{}", formatter.format_normalized_url(&args.url, &normalized)?);
    Ok(())
}
