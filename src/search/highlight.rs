// ABOUTME: Relevant-substring highlighter for search results.
// ABOUTME: Wraps query word matches in a highlight tag, case-insensitively.

use regex::Regex;

/// Opening tag wrapped around matched substrings.
const HIGHLIGHT_OPEN: &str = "<strong class=\"search-highlight\">";

/// Closing tag wrapped around matched substrings.
const HIGHLIGHT_CLOSE: &str = "</strong>";

/// Highlight every query word occurring in the text.
///
/// Matching is case-insensitive over whole words of the query; the original
/// casing of the text is preserved inside the highlight tags. Text without
/// matches, and empty queries, come back unchanged.
pub fn highlight_relevant(text: &str, query: &str) -> String {
    let words: Vec<String> = query
        .split_whitespace()
        .filter(|word| !word.is_empty())
        .map(regex::escape)
        .collect();

    if words.is_empty() || text.is_empty() {
        return text.to_string();
    }

    let pattern = format!("(?i){}", words.join("|"));
    let Ok(re) = Regex::new(&pattern) else {
        return text.to_string();
    };

    re.replace_all(text, |caps: &regex::Captures<'_>| {
        format!("{}{}{}", HIGHLIGHT_OPEN, &caps[0], HIGHLIGHT_CLOSE)
    })
    .into_owned()
}
