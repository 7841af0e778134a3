//! Integration tests for sieve-cli
//!
//! These tests exercise argument parsing, configuration files and the
//! file-based article input path together with the engine.

use clap::Parser;
use sieve_cli::cli::ConfigAction;
use sieve_cli::commands::{self, config::init_config};
use sieve_cli::config::OutputFormat;
use sieve_cli::{Cli, CliError, Command, Config, Formatter};
use sieve_engine::strategies::TitleSimilarityStrategy;
use sieve_engine::Deduplicator;
use std::fs;
use tempfile::TempDir;

const BATCH: &str = r#"[
    {"title": "Government approves budget", "link": "https://n.co/x?utm_source=tw",
     "source": "A", "published": "2024-05-14T09:00:00Z"},
    {"title": "Government approves budget", "link": "https://n.co/x",
     "source": "A", "published": "2024-05-14T09:05:00Z"},
    {"title": "Opposition rejects vote", "link": "https://n.co/y",
     "source": "B", "published": "2024-05-14T09:00:00Z"}
]"#;

#[test]
fn test_dedup_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("batch.json");
    fs::write(&path, BATCH).unwrap();

    let cli = Cli::parse_from(["sieve", "dedup", "--file", path.to_str().unwrap()]);
    let args = match cli.command {
        Command::Dedup(args) => args,
        _ => panic!("Expected Dedup command"),
    };

    let articles = commands::read_articles(&args.input).unwrap();
    assert_eq!(articles.len(), 3);

    let config = Config::default().effective_dedup(cli.threshold, cli.keep_order);
    let dedup = Deduplicator::new(config).unwrap();
    let (unique, result) = dedup.deduplicate(&articles);

    let titles: Vec<&str> = unique.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Government approves budget", "Opposition rejects vote"]);
    assert_eq!(unique[0].link, "https://n.co/x");
    assert_eq!(result.strategy_stats["Exact URL"], 1);

    let formatter = Formatter::new(OutputFormat::Json, false);
    let output = formatter.format_dedup(&unique, &result, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["report"]["unique_count"], 2);
}

#[test]
fn test_keep_order_flag_changes_survivor() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("batch.json");
    fs::write(&path, BATCH).unwrap();

    let cli = Cli::parse_from(["sieve", "--keep-order", "dedup", "--file", path.to_str().unwrap()]);
    let config = Config::default().effective_dedup(cli.threshold, cli.keep_order);
    let articles = match &cli.command {
        Command::Dedup(args) => commands::read_articles(&args.input).unwrap(),
        _ => panic!("Expected Dedup command"),
    };

    let unique = Deduplicator::new(config).unwrap().deduplicate_simple(&articles);
    assert_eq!(unique[0].link, "https://n.co/x?utm_source=tw");
}

#[test]
fn test_similarity_verdict_matches_engine() {
    let cli = Cli::parse_from(["sieve", "similarity", "?!", "?!"]);
    let args = match cli.command {
        Command::Similarity(args) => args,
        _ => panic!("Expected Similarity command"),
    };

    let config = Config::default().effective_dedup(cli.threshold, cli.keep_order);
    let strategy = TitleSimilarityStrategy::new(config.similarity_threshold).unwrap();
    assert_eq!(strategy.compare(&args.title1, &args.title2), (0.0, false));

    // The batch path reaches the same verdict: both copies survive
    let articles = vec![
        sieve_domain::Article::new("?!", "https://a.co/1", "A"),
        sieve_domain::Article::new("?!", "https://b.co/2", "B"),
    ];
    let unique = Deduplicator::new(config).unwrap().deduplicate_simple(&articles);
    assert_eq!(unique.len(), 2);
}

#[test]
fn test_missing_file_is_io_error() {
    let cli = Cli::parse_from(["sieve", "benchmark", "--file", "/nonexistent/batch.json"]);
    match cli.command {
        Command::Benchmark(args) => {
            assert!(matches!(commands::read_articles(&args), Err(CliError::Io(_))));
        }
        _ => panic!("Expected Benchmark command"),
    }
}

#[test]
fn test_config_init_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sieve").join("config.toml");

    init_config(&path, false).unwrap();
    assert!(path.exists());
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());

    // Refuses to clobber without --force
    assert!(matches!(init_config(&path, false), Err(CliError::Config(_))));
    assert!(init_config(&path, true).is_ok());
}

#[test]
fn test_config_file_feeds_engine() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[dedup]
similarity_threshold = 0.95
strategies = ["exact_title", "title_similarity"]

[settings]
format = "json"
color = false
"#,
    )
    .unwrap();

    let cli = Cli::parse_from(["sieve", "--config", path.to_str().unwrap(), "config", "show"]);
    assert!(matches!(
        cli.command,
        Command::Config(ref args) if matches!(args.action, ConfigAction::Show)
    ));

    let config = Config::load_from(cli.config.as_deref().unwrap()).unwrap();
    assert_eq!(config.settings.format, OutputFormat::Json);
    assert!(!config.settings.color);

    let dedup = Deduplicator::new(config.effective_dedup(None, false)).unwrap();
    assert_eq!(dedup.strategy_names(), vec!["Exact Title", "Title Similarity"]);

    // The command-line threshold overrides the file
    let overridden = config.effective_dedup(Some(0.5), false);
    assert_eq!(overridden.similarity_threshold, 0.5);
}

#[test]
fn test_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[dedup]\nstrategies = []\n").unwrap();
    assert!(matches!(Config::load_from(&path), Err(CliError::Engine(_))));

    fs::write(&path, "not = [valid").unwrap();
    assert!(matches!(Config::load_from(&path), Err(CliError::Toml(_))));
}
