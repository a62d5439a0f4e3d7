//! Parsing of raw query strings into ordered search terms.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// One parsed search term.
///
/// Terms are trimmed, longer than one character, and keep the casing the
/// user typed; matching folds case at comparison time. Duplicates are
/// allowed and input order is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SearchTerm(String);

impl SearchTerm {
    fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.chars().count() > 1 {
            Some(SearchTerm(trimmed.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the case-folded form used for comparisons.
    pub fn folded(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SearchTerm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Explicit separators: comma, semicolon, pipe, or a run of two or more
/// spaces.
fn separator_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[,;|]| {2,}").unwrap())
}

fn starts_uppercase(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_uppercase)
}

/// Parses a raw query string into an ordered list of search terms.
///
/// When the input contains an explicit separator (comma, semicolon, pipe,
/// or two-plus consecutive spaces), it is split on those. Otherwise the
/// parser walks the space-separated tokens and starts a new term at every
/// token that begins with an uppercase letter (beyond the first token),
/// appending lowercase tokens to the term being built:
///
/// ```
/// use larder_search::parse_query;
///
/// let terms = parse_query("white bread Cheddar cheese");
/// let terms: Vec<_> = terms.iter().map(|t| t.as_str()).collect();
/// assert_eq!(terms, vec!["white bread", "Cheddar cheese"]);
/// ```
///
/// With no capitalization boundary at all, every token stands alone, so a
/// multi-word ingredient typed in lowercase degrades to one term per word.
///
/// Empty, whitespace-only and separator-only input all yield an empty
/// list, which callers treat as "no query".
pub fn parse_query(raw: &str) -> Vec<SearchTerm> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }

    if separator_pattern().is_match(raw) {
        return separator_pattern()
            .split(raw)
            .filter_map(SearchTerm::new)
            .collect();
    }

    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if !tokens.iter().skip(1).any(|t| starts_uppercase(t)) {
        return tokens.into_iter().filter_map(SearchTerm::new).collect();
    }

    let mut terms: Vec<String> = Vec::new();
    for (index, token) in tokens.into_iter().enumerate() {
        if index == 0 || starts_uppercase(token) {
            terms.push(token.to_string());
        } else if let Some(current) = terms.last_mut() {
            current.push(' ');
            current.push_str(token);
        }
    }
    terms.iter().filter_map(|t| SearchTerm::new(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(raw: &str) -> Vec<String> {
        parse_query(raw)
            .into_iter()
            .map(|t| t.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_parse_comma_separated() {
        assert_eq!(
            parsed("sausage meat, egg, thyme"),
            vec!["sausage meat", "egg", "thyme"]
        );
    }

    #[test]
    fn test_parse_other_separators() {
        assert_eq!(parsed("egg; thyme"), vec!["egg", "thyme"]);
        assert_eq!(parsed("egg|thyme"), vec!["egg", "thyme"]);
        assert_eq!(
            parsed("white bread  cheddar cheese"),
            vec!["white bread", "cheddar cheese"]
        );
    }

    #[test]
    fn test_separator_path_drops_empty_and_single_char_pieces() {
        assert_eq!(parsed("egg, x,, thyme"), vec!["egg", "thyme"]);
        assert!(parsed(",;|").is_empty());
        assert!(parsed(" , , ").is_empty());
    }

    #[test]
    fn test_capitalization_boundary_groups_words() {
        assert_eq!(
            parsed("white bread Cheddar cheese"),
            vec!["white bread", "Cheddar cheese"]
        );
        assert_eq!(
            parsed("Sausage meat Brown sauce"),
            vec!["Sausage meat", "Brown sauce"]
        );
    }

    #[test]
    fn test_consecutive_capitalized_tokens_never_merge() {
        assert_eq!(parsed("Roast Chicken"), vec!["Roast", "Chicken"]);
        assert_eq!(
            parsed("white bread Cheddar Stilton"),
            vec!["white bread", "Cheddar", "Stilton"]
        );
    }

    #[test]
    fn test_all_lowercase_degrades_to_one_term_per_word() {
        assert_eq!(parsed("chicken beef onion"), vec!["chicken", "beef", "onion"]);
        assert_eq!(parsed("sausage meat"), vec!["sausage", "meat"]);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(parsed("").is_empty());
        assert!(parsed("   ").is_empty());
    }

    #[test]
    fn test_single_token() {
        assert_eq!(parsed("egg"), vec!["egg"]);
        assert!(parsed("x").is_empty());
    }

    #[test]
    fn test_duplicates_are_preserved_in_order() {
        assert_eq!(parsed("egg, thyme, egg"), vec!["egg", "thyme", "egg"]);
    }

    #[test]
    fn test_casing_is_preserved_and_folded_on_demand() {
        let terms = parse_query("Cheddar, EGG");
        assert_eq!(terms[0].as_str(), "Cheddar");
        assert_eq!(terms[0].folded(), "cheddar");
        assert_eq!(terms[1].folded(), "egg");
    }

    #[test]
    fn test_parse_is_deterministic() {
        let raw = "white bread Cheddar cheese";
        assert_eq!(parse_query(raw), parse_query(raw));
    }
}
