use serde::Serialize;

use crate::model::Recipe;
use crate::query::SearchTerm;

/// Which tier of the matcher satisfied an ingredient entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchTier {
    /// Matched on the entry's free-text name.
    Text,
    /// Matched on the resolved reference name.
    Reference,
    /// Matched a dangling reference through the lexicon, or the raw id
    /// itself.
    Fallback,
}

/// One matched ingredient entry: the name to show and the tier that
/// matched it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedIngredient {
    pub display_name: String,
    pub tier: MatchTier,
}

/// A recipe's match against the full term set.
///
/// Each ingredient entry contributes at most once to `total_matches`,
/// whichever tier or however many terms it satisfied.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeMatch<'a> {
    pub recipe: &'a Recipe,
    pub matched: Vec<MatchedIngredient>,
    pub total_matches: usize,
}

/// The closest partial match, offered when nothing satisfies the whole
/// query. `missing` keeps the input term order.
#[derive(Debug, Clone, Serialize)]
pub struct NearMiss<'a> {
    pub recipe: &'a Recipe,
    pub missing: Vec<SearchTerm>,
    pub match_count: usize,
}

/// Output of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<'a> {
    /// Parsed terms, in input order. Empty means "no query".
    pub terms: Vec<SearchTerm>,
    /// Ranked matches; already preference-filtered when the caller asked
    /// for that.
    pub matches: Vec<RecipeMatch<'a>>,
    /// Present only when `matches` is empty.
    pub near_miss: Option<NearMiss<'a>>,
}

impl SearchResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
