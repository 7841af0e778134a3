//! CLI command definitions and argument parsing.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Sieve - Remove near-duplicate news articles from a batch.
#[derive(Debug, Parser)]
#[command(name = "sieve")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SIEVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Title similarity threshold (0.0-1.0)
    #[arg(short, long, alias = "similarity", global = true, value_parser = parse_threshold)]
    pub threshold: Option<f64>,

    /// Keep input order instead of preferring the newest copy
    #[arg(long, global = true)]
    pub keep_order: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Deduplicate a batch of articles
    Dedup(DedupArgs),

    /// Benchmark each strategy on its own
    Benchmark(InputArgs),

    /// Score the similarity of two titles
    Similarity(SimilarityArgs),

    /// Print the canonical form of a link
    NormalizeUrl(NormalizeUrlArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Where to read a JSON array of articles from.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// JSON file containing the articles
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Read the JSON array from stdin
    #[arg(long, conflicts_with = "file")]
    pub stdin: bool,
}

/// Arguments for the dedup command.
#[derive(Debug, Args)]
pub struct DedupArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Pass the batch through unchanged
    #[arg(long)]
    pub no_dedupe: bool,

    /// List every dropped article and the strategy that caught it
    #[arg(long)]
    pub show_pairs: bool,
}

/// Arguments for the similarity command.
#[derive(Debug, Args)]
pub struct SimilarityArgs {
    /// First title
    pub title1: String,

    /// Second title
    pub title2: String,
}

/// Arguments for the normalize-url command.
#[derive(Debug, Args)]
pub struct NormalizeUrlArgs {
    /// Link to canonicalize
    pub url: String,
}

/// Arguments for configuration management.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn parse_threshold(value: &str) -> Result<f64, String> {
    let threshold: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err("threshold must be between 0.0 and 1.0".to_string())
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_command() {
        let cli = Cli::parse_from(["sieve", "dedup", "--file", "batch.json", "--show-pairs"]);
        match cli.command {
            Command::Dedup(args) => {
                assert_eq!(args.input.file, Some(PathBuf::from("batch.json")));
                assert!(!args.input.stdin);
                assert!(args.show_pairs);
                assert!(!args.no_dedupe);
            }
            _ => panic!("Expected Dedup command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "sieve",
            "dedup",
            "--stdin",
            "--threshold",
            "0.75",
            "--keep-order",
            "-vv",
            "--format",
            "json",
        ]);
        assert_eq!(cli.threshold, Some(0.75));
        assert!(cli.keep_order);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, Some(CliFormat::Json));
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["sieve", "--threshold", "1.5", "benchmark"]).is_err());
        assert!(Cli::try_parse_from(["sieve", "--threshold", "abc", "benchmark"]).is_err());
    }

    #[test]
    fn test_similarity_flag_sets_threshold() {
        let cli = Cli::parse_from(["sieve", "--similarity", "0.85", "dedup", "--stdin"]);
        assert_eq!(cli.threshold, Some(0.85));

        let cli = Cli::parse_from(["sieve", "similarity", "--similarity", "0.6", "a", "b"]);
        assert_eq!(cli.threshold, Some(0.6));
        assert!(matches!(cli.command, Command::Similarity(_)));

        assert!(Cli::try_parse_from(["sieve", "--similarity", "2", "benchmark"]).is_err());
    }

    #[test]
    fn test_file_and_stdin_conflict() {
        let result = Cli::try_parse_from(["sieve", "benchmark", "--file", "a.json", "--stdin"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_similarity_command() {
        let cli = Cli::parse_from(["sieve", "similarity", "Budget passes", "Budget passed"]);
        match cli.command {
            Command::Similarity(args) => {
                assert_eq!(args.title1, "Budget passes");
                assert_eq!(args.title2, "Budget passed");
            }
            _ => panic!("Expected Similarity command"),
        }
    }

    #[test]
    fn test_config_init_command() {
        let cli = Cli::parse_from(["sieve", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force: true }
            })
        ));
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Json.into();
        assert_eq!(format, crate::config::OutputFormat::Json);
    }
}
