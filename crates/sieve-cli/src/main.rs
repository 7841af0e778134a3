//! Sieve CLI - Command-line interface for the article deduplication engine.

use clap::Parser;
use sieve_cli::commands;
use sieve_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> sieve_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Load config from --config or the default location
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Command-line flags win over the config file
    let dedup = config.effective_dedup(cli.threshold, cli.keep_order);

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Dedup(args) => commands::execute_dedup(args, dedup, &formatter)?,
        Command::Benchmark(args) => commands::execute_benchmark(args, dedup, &formatter)?,
        Command::Similarity(args) => commands::execute_similarity(args, &dedup, &formatter)?,
        Command::NormalizeUrl(args) => commands::execute_normalize_url(args, &formatter)?,
        Command::Config(args) => {
            commands::execute_config(args, cli.config.as_deref(), &dedup, &formatter)?
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins, otherwise `-v` raises the level from warn.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
