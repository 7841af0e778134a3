//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use sieve_domain::Article;
use sieve_engine::{BenchmarkReport, DedupConfig, DeduplicationResult};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Titles longer than this are truncated in tables.
const TITLE_WIDTH: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a deduplication run: surviving articles plus the report.
    pub fn format_dedup(
        &self,
        unique: &[&Article],
        result: &DeduplicationResult<'_>,
        show_pairs: bool,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let mut report = serde_json::to_value(result.to_report())?;
                if !show_pairs {
                    if let Some(object) = report.as_object_mut() {
                        object.remove("duplicate_pairs");
                    }
                }
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "articles": unique,
                    "report": report,
                }))?)
            }
            OutputFormat::Table => {
                let mut sections = vec![
                    self.format_articles_table(unique),
                    self.format_report_table(result),
                ];
                if show_pairs && !result.duplicate_pairs.is_empty() {
                    sections.push(self.format_pairs_table(result));
                }
                Ok(sections.join("\n\n"))
            }
        }
    }

    /// Format articles on their own.
    pub fn format_articles(&self, articles: &[&Article]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(articles)?),
            OutputFormat::Table => Ok(self.format_articles_table(articles)),
        }
    }

    /// Format a benchmark report.
    pub fn format_benchmark(&self, report: &BenchmarkReport, article_count: usize) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(report)?);
        }

        if report.is_empty() {
            return Ok(self.colorize("Need at least two articles to benchmark.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record([
            "Priority",
            "Strategy",
            "Duplicates",
            "Comparisons",
            "Time (ms)",
            "Comparisons/s",
        ]);
        for (name, bench) in report.by_priority() {
            builder.push_record([
                bench.priority.to_string(),
                name.to_string(),
                bench.duplicates_found.to_string(),
                bench.comparisons.to_string(),
                format!("{:.3}", bench.processing_time.as_secs_f64() * 1000.0),
                format!("{:.0}", bench.comparisons_per_second),
            ]);
        }

        Ok(format!(
            "{}\n{}",
            self.info(&format!("Benchmarked {} articles", article_count)),
            styled(builder)
        ))
    }

    /// Format a title similarity probe.
    pub fn format_similarity(
        &self,
        title1: &str,
        title2: &str,
        similarity: f64,
        threshold: f64,
        duplicate: bool,
    ) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(&serde_json::json!({
                "title1": title1,
                "title2": title2,
                "similarity": similarity,
                "threshold": threshold,
                "duplicate": duplicate,
            }))?);
        }

        let verdict = format!("Similarity {:.4} (threshold {:.2})", similarity, threshold);
        Ok(if duplicate {
            self.success(&format!("{}: duplicate", verdict))
        } else {
            self.info(&format!("{}: distinct", verdict))
        })
    }

    /// Format a canonicalized link.
    pub fn format_normalized_url(&self, url: &str, normalized: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "url": url,
                "normalized": normalized,
            }))?),
            OutputFormat::Table => Ok(normalized.to_string()),
        }
    }

    /// Format the effective engine configuration.
    pub fn format_config(&self, config: &DedupConfig) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
            OutputFormat::Table => {
                let strategies: Vec<&str> = config.strategies.iter().map(|s| s.as_str()).collect();
                let mut builder = Builder::default();
                builder.push_record(["Setting", "Value"]);
                builder.push_record([
                    "similarity_threshold".to_string(),
                    config.similarity_threshold.to_string(),
                ]);
                builder.push_record([
                    "path_similarity_threshold".to_string(),
                    config.path_similarity_threshold.to_string(),
                ]);
                builder.push_record([
                    "preserve_newest".to_string(),
                    config.preserve_newest.to_string(),
                ]);
                builder.push_record(["strategies".to_string(), strategies.join(", ")]);
                Ok(styled(builder))
            }
        }
    }

    fn format_articles_table(&self, articles: &[&Article]) -> String {
        if articles.is_empty() {
            return self.colorize("No articles.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Published", "Source", "Title", "Link"]);
        for (index, article) in articles.iter().enumerate() {
            let published = article
                .published
                .map(|p| p.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string());
            builder.push_record([
                (index + 1).to_string(),
                published,
                article.source.clone(),
                truncate(&article.title, TITLE_WIDTH),
                article.link.clone(),
            ]);
        }
        styled(builder)
    }

    fn format_report_table(&self, result: &DeduplicationResult<'_>) -> String {
        let headline = format!(
            "{} -> {} articles, {} duplicates ({:.1}%) in {:.3}s",
            result.original_count,
            result.unique_count,
            result.duplicates_found,
            result.duplicate_rate() * 100.0,
            result.processing_time.as_secs_f64()
        );

        if result.strategy_stats.is_empty() {
            return self.success(&headline);
        }

        let mut builder = Builder::default();
        builder.push_record(["Strategy", "Duplicates"]);
        for (name, count) in result.sorted_stats() {
            builder.push_record([name.to_string(), count.to_string()]);
        }
        format!("{}\n{}", self.success(&headline), styled(builder))
    }

    fn format_pairs_table(&self, result: &DeduplicationResult<'_>) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Strategy", "Kept", "Dropped"]);
        for pair in &result.duplicate_pairs {
            builder.push_record([
                pair.strategy.clone(),
                truncate(&pair.kept.title, TITLE_WIDTH),
                truncate(&pair.dropped.title, TITLE_WIDTH),
            ]);
        }
        styled(builder)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let head: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}
