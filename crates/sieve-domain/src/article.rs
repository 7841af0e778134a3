//! Article module - the record the deduplication engine reasons over

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A single fetched news article
///
/// Articles are created by the feed layer and handed to the engine by
/// reference. Nothing here is validated: an empty title or link is legal and
/// simply never matches anything on the strategies that read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Headline as published by the source
    #[serde(default, deserialize_with = "trimmed")]
    pub title: String,

    /// Link to the article (not yet canonicalized)
    #[serde(default, deserialize_with = "trimmed")]
    pub link: String,

    /// Name of the feed or outlet the article came from
    #[serde(default, deserialize_with = "trimmed")]
    pub source: String,

    /// Optional short summary or lede
    #[serde(
        default,
        deserialize_with = "trimmed_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub summary: Option<String>,

    /// Publish time, if the feed provided one
    #[serde(default)]
    pub published: Option<DateTime<Utc>>,
}

impl Article {
    /// Create a new article with no summary and no publish time
    ///
    /// Surrounding whitespace is stripped from every field.
    ///
    /// # Examples
    ///
    /// ```
    /// use sieve_domain::Article;
    ///
    /// let article = Article::new("  Budget passes ", "https://n.co/x", "A");
    /// assert_eq!(article.title, "Budget passes");
    /// assert!(article.published.is_none());
    /// ```
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into().trim().to_string(),
            link: link.into().trim().to_string(),
            source: source.into().trim().to_string(),
            summary: None,
            published: None,
        }
    }

    /// Set the publish time
    pub fn with_published(mut self, published: DateTime<Utc>) -> Self {
        self.published = Some(published);
        self
    }

    /// Set the summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        let summary = summary.into().trim().to_string();
        self.summary = (!summary.is_empty()).then_some(summary);
        self
    }

    /// Short identifier used in log lines (truncated title plus link)
    pub fn label(&self) -> String {
        let title: String = self.title.chars().take(50).collect();
        if self.link.is_empty() {
            format!("'{}'", title)
        } else {
            format!("'{}' <{}>", title, self.link)
        }
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.source, self.title)
    }
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|s| s.trim().to_string()).unwrap_or_default())
}

// Blank strings carry no summary
fn trimmed_optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: constructed fields never carry surrounding whitespace
        #[test]
        fn test_new_is_always_trimmed(title in "\\PC*", link in "\\PC*") {
            let article = Article::new(title, link, "src");
            prop_assert_eq!(article.title.trim(), article.title.as_str());
            prop_assert_eq!(article.link.trim(), article.link.as_str());
        }
    }
}
