//! Title text normalization and keyword extraction

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Words ignored when comparing headline keywords (Hebrew, then English)
pub const STOP_WORDS: &[&str] = &[
    // Hebrew
    "של", "את", "על", "אל", "מן", "בן", "כל", "לא", "או", "גם", "רק", "עם", "אך", "כי",
    "זה", "זו", "הוא", "היא", "הם", "הן", "אני", "אתה", "אתם", "אתן", "אנחנו",
    // English
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
    "by", "from", "up", "about", "into", "through", "during", "before", "after",
    "above", "below", "between", "among", "this", "that", "these", "those",
];

/// Keywords must be longer than this many characters
const MIN_KEYWORD_CHARS: usize = 2;

static PUNCTUATION_REGEX: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();
static STOP_WORD_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

// Word characters are letters, numbers and `_`
fn punctuation_regex() -> &'static Regex {
    PUNCTUATION_REGEX.get_or_init(|| {
        Regex::new(r"[^\p{L}\p{N}_\s]+").expect("Failed to compile punctuation regex")
    })
}

fn whitespace_regex() -> &'static Regex {
    WHITESPACE_REGEX.get_or_init(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"))
}

fn stop_words() -> &'static HashSet<&'static str> {
    STOP_WORD_SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

/// Normalize text for comparison
///
/// Applies, in order:
/// 1. Unicode compatibility decomposition (NFKD)
/// 2. Lowercasing
/// 3. Combining marks (accents, niqqud, harakat) are removed
/// 4. Every run of characters that are not letters, numbers, `_` or
///    whitespace becomes a single space
/// 5. Whitespace runs collapse to one space, ends trimmed
///
/// # Examples
///
/// ```
/// use sieve_engine::normalize::normalize;
///
/// assert_eq!(normalize("Breaking: PM announces new policy"), "breaking pm announces new policy");
/// assert_eq!(normalize("Breaking — PM announces new policy"), "breaking pm announces new policy");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let decomposed: String = text.nfkd().collect();
    let folded: String = decomposed
        .to_lowercase()
        .chars()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    let spaced = punctuation_regex().replace_all(&folded, " ");
    whitespace_regex()
        .replace_all(&spaced, " ")
        .trim()
        .to_string()
}

/// Extract the meaningful keywords of a headline
///
/// Tokens of the normalized title, minus stop words and tokens of two
/// characters or fewer.
pub fn extract_keywords(title: &str) -> HashSet<String> {
    keywords_of_normalized(&normalize(title))
}

/// Keywords of a title that has already been through [`normalize`]
pub(crate) fn keywords_of_normalized(normalized: &str) -> HashSet<String> {
    let stop_words = stop_words();
    normalized
        .split_whitespace()
        .filter(|word| !stop_words.contains(word))
        .filter(|word| word.chars().count() > MIN_KEYWORD_CHARS)
        .map(str::to_string)
        .collect()
}

/// Jaccard index of two keyword sets; 0.0 if either is empty
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;
    intersection / union
}
