//! Link canonicalization

use ::url::Url;
use percent_encoding::percent_decode_str;

/// Query parameters that identify a campaign or referrer, not content
pub const TRACKING_PARAMS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_content",
    "utm_term",
    "fbclid",
    "gclid",
    "ref",
    "source",
];

/// Canonicalize a link for comparison
///
/// Drops the fragment and any tracking query parameters (matched
/// case-insensitively on the key), keeps the remaining parameters in their
/// original order, then lowercases and trims the whole string. Query segments
/// without a `=` are dropped, as is a `?` left with nothing after it.
///
/// # Examples
///
/// ```
/// use sieve_engine::url::normalize_url;
///
/// assert_eq!(
///     normalize_url("https://site.co/a?utm_source=fb&id=7"),
///     normalize_url("https://site.co/a?id=7"),
/// );
/// assert_eq!(normalize_url("https://Site.co/A#top"), "https://site.co/a");
/// assert_eq!(normalize_url(""), "");
/// ```
pub fn normalize_url(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    let without_fragment = url.split('#').next().unwrap_or_default();

    let canonical = match without_fragment.split_once('?') {
        Some((base, query)) => {
            let kept: Vec<&str> = query
                .split('&')
                .filter(|param| match param.split_once('=') {
                    Some((key, _)) => !is_tracking_param(key),
                    None => false,
                })
                .collect();

            if kept.is_empty() {
                base.to_string()
            } else {
                format!("{}?{}", base, kept.join("&"))
            }
        }
        None => without_fragment.to_string(),
    };

    canonical.to_lowercase().trim().to_string()
}

fn is_tracking_param(key: &str) -> bool {
    let key = key.to_lowercase();
    TRACKING_PARAMS.contains(&key.as_str())
}

/// Host, port and path of an already-canonical link
///
/// The path is percent-decoded, so non-ASCII slugs compare by character and
/// not by their `%xx` escapes. Returns `None` for links that do not parse as
/// absolute URLs or that have no host; such links never take part in
/// host/path comparisons.
pub(crate) fn host_and_path(canonical: &str) -> Option<(String, Option<u16>, String)> {
    let parsed = Url::parse(canonical).ok()?;
    let host = parsed.host_str()?.to_string();
    let path = percent_decode_str(parsed.path()).decode_utf8_lossy().into_owned();
    Some((host, parsed.port(), path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tracking_params() {
        assert_eq!(
            normalize_url("https://site.co/a?utm_source=fb&id=7"),
            "https://site.co/a?id=7"
        );
        assert_eq!(
            normalize_url("https://site.co/a?utm_source=tw&utm_medium=social&fbclid=abc"),
            "https://site.co/a"
        );
    }

    #[test]
    fn test_keeps_param_order() {
        assert_eq!(
            normalize_url("https://site.co/a?b=2&gclid=x&a=1"),
            "https://site.co/a?b=2&a=1"
        );
    }

    #[test]
    fn test_tracking_keys_are_case_insensitive() {
        assert_eq!(
            normalize_url("https://site.co/a?UTM_Source=fb&Ref=home&id=7"),
            "https://site.co/a?id=7"
        );
    }

    #[test]
    fn test_drops_fragment_and_lowercases() {
        assert_eq!(normalize_url("  HTTPS://Site.CO/Path#Section  "), "https://site.co/path");
    }

    #[test]
    fn test_drops_valueless_segments() {
        assert_eq!(normalize_url("https://site.co/a?flag&id=7"), "https://site.co/a?id=7");
        assert_eq!(normalize_url("https://site.co/a?"), "https://site.co/a");
    }

    #[test]
    fn test_non_tracking_lookalikes_survive() {
        assert_eq!(
            normalize_url("https://site.co/a?sources=3&referrer=x"),
            "https://site.co/a?sources=3&referrer=x"
        );
    }

    #[test]
    fn test_empty_and_relative() {
        assert_eq!(normalize_url(""), "");
        assert_eq!(normalize_url("/relative/path?ref=x"), "/relative/path");
    }

    #[test]
    fn test_host_and_path() {
        let (host, port, path) = host_and_path("https://n.co/news/123").unwrap();
        assert_eq!(host, "n.co");
        assert_eq!(port, None);
        assert_eq!(path, "/news/123");

        let (_, port, _) = host_and_path("http://n.co:8080/x").unwrap();
        assert_eq!(port, Some(8080));
    }

    #[test]
    fn test_host_and_path_decodes_non_ascii_path() {
        let canonical = normalize_url("https://www.ynet.co.il/חדשות/תקציב");
        let (host, _, path) = host_and_path(&canonical).unwrap();
        assert_eq!(host, "www.ynet.co.il");
        assert_eq!(path, "/חדשות/תקציב");

        let (_, _, path) = host_and_path("https://n.co/caf%C3%A9%20menu").unwrap();
        assert_eq!(path, "/café menu");
    }

    #[test]
    fn test_host_and_path_rejects_unparseable() {
        assert!(host_and_path("not a url").is_none());
        assert!(host_and_path("/relative/path").is_none());
        assert!(host_and_path("mailto:desk@n.co").is_none());
    }
}
