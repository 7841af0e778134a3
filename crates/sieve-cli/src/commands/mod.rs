//! Command implementations.

pub mod benchmark;
pub mod config;
pub mod dedup;
pub mod normalize_url;
pub mod similarity;

pub use self::benchmark::execute_benchmark;
pub use self::config::execute_config;
pub use self::dedup::execute_dedup;
pub use self::normalize_url::execute_normalize_url;
pub use self::similarity::execute_similarity;

use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use sieve_domain::Article;
use std::fs;
use std::io::{self, Read};
use tracing::debug;

/// Read a JSON array of articles from the file or stdin named in `input`.
pub fn read_articles(input: &InputArgs) -> Result<Vec<Article>> {
    let json_data = if input.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else if let Some(path) = &input.file {
        fs::read_to_string(path)?
    } else {
        return Err(CliError::InvalidInput(
            "Must specify either --file or --stdin".to_string(),
        ));
    };

    let articles = parse_articles(&json_data)?;
    debug!("Read {} articles", articles.len());
    Ok(articles)
}

/// Parse a JSON array of articles.
pub fn parse_articles(json_data: &str) -> Result<Vec<Article>> {
    Ok(serde_json::from_str(json_data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_articles() {
        let articles = parse_articles(
            r#"[
                {"title": " Budget passes ", "link": "https://n.co/a", "source": "A",
                 "published": "2024-03-01T12:00:00Z"},
                {"title": "Storm", "link": "https://w.co/s"}
            ]"#,
        )
        .unwrap();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Budget passes");
        assert!(articles[0].published.is_some());
        assert_eq!(articles[1].source, "");
        assert!(articles[1].published.is_none());
    }

    #[test]
    fn test_parse_articles_rejects_non_array() {
        assert!(matches!(
            parse_articles(r#"{"title": "x"}"#),
            Err(CliError::Serialization(_))
        ));
    }

    #[test]
    fn test_missing_input_source() {
        let input = InputArgs {
            file: None,
            stdin: false,
        };
        assert!(matches!(read_articles(&input), Err(CliError::InvalidInput(_))));
    }
}
