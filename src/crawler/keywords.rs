//! Keyword extraction from page text
//!
//! Words are runs of at least four word characters (letters, digits,
//! underscore), compared case-insensitively. The most frequent words win;
//! equal counts keep the order in which the words first appeared.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Default number of keywords reported per page (`crawler.keyword-limit`)
pub const DEFAULT_KEYWORD_LIMIT: usize = 5;

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b\w{4,}\b").expect("keyword pattern is valid"))
}

/// Extracts the `limit` most frequent qualifying words from `text`
///
/// # Examples
///
/// ```
/// use seed_crawl::crawler::extract_keywords;
///
/// let words = extract_keywords("Rust crawler. The crawler is FAST, rust rust!", 5);
/// assert_eq!(words, vec!["rust", "crawler", "fast"]);
/// ```
pub fn extract_keywords(text: &str, limit: usize) -> Vec<String> {
    let lowered = text.to_lowercase();

    // word -> (count, first position)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, m) in word_pattern().find_iter(&lowered).enumerate() {
        counts
            .entry(m.as_str())
            .and_modify(|(count, _)| *count += 1)
            .or_insert((1, position));
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(limit)
        .map(|(word, _, _)| word.to_string())
        .collect()
}
