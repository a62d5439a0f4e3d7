//! The ingredient-search pipeline: term matching, ranking and the
//! near-miss fallback.

use regex::Regex;
use tracing::debug;

use crate::filter;
use crate::lexicon::IngredientLexicon;
use crate::model::{IngredientItem, Preferences, Recipe};
use crate::query::{parse_query, SearchTerm};

mod model;

pub use model::{MatchTier, MatchedIngredient, NearMiss, RecipeMatch, SearchResults};

/// Minimum word-level term coverage before a recipe can be offered as a
/// near miss.
const MIN_NEAR_MISS_MATCHES: usize = 3;

/// Shortest word that may count as a one-sided (substring) overlap in the
/// near-miss presence check. Equal words always count.
const MIN_PARTIAL_WORD_LEN: usize = 4;

/// The case-folded term set plus one combined alternation pattern built
/// from it, so "does any term occur in this text" is a single pass rather
/// than a pass per term.
struct TermMatcher {
    folded: Vec<String>,
    pattern: Option<Regex>,
}

impl TermMatcher {
    fn new(terms: &[SearchTerm]) -> Option<TermMatcher> {
        if terms.is_empty() {
            return None;
        }
        let folded: Vec<String> = terms.iter().map(|t| t.folded()).collect();
        let alternation = folded
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        // Compilation only fails past the regex size limit; fall back to a
        // linear per-term scan in that case.
        let pattern = Regex::new(&alternation).ok();
        Some(TermMatcher { folded, pattern })
    }

    /// True when any term occurs in the already-folded text.
    fn occurs_in(&self, folded_text: &str) -> bool {
        match &self.pattern {
            Some(pattern) => pattern.is_match(folded_text),
            None => self.folded.iter().any(|t| folded_text.contains(t.as_str())),
        }
    }

    /// True when the already-folded text equals one of the terms.
    fn equals_any(&self, folded_text: &str) -> bool {
        self.folded.iter().any(|t| t == folded_text)
    }
}

/// Decides which tier, if any, satisfies one ingredient entry.
///
/// Tier order is fixed: free text, then resolved reference name, then the
/// dangling-id fallback, which applies only to entries carrying nothing
/// but an id. Inert entries satisfy nothing.
fn match_item(
    item: &IngredientItem,
    matcher: &TermMatcher,
    lexicon: &IngredientLexicon,
) -> Option<MatchTier> {
    if let Some(text) = &item.text {
        if matcher.occurs_in(&text.to_lowercase()) {
            return Some(MatchTier::Text);
        }
    }
    if let Some(name) = &item.ingredient_name {
        if matcher.occurs_in(&name.to_lowercase()) {
            return Some(MatchTier::Reference);
        }
    }
    if item.is_dangling() {
        if let Some(id) = &item.ingredient_id {
            let known_spelling = lexicon
                .entry(id)
                .is_some_and(|entry| entry.spellings().any(|s| matcher.equals_any(&s.to_lowercase())));
            if known_spelling || matcher.occurs_in(&id.to_lowercase()) {
                return Some(MatchTier::Fallback);
            }
        }
    }
    None
}

/// Runs the matcher over one recipe's entries.
///
/// Returns `None` when no entry matched; a matched entry counts once.
fn match_recipe<'a>(
    recipe: &'a Recipe,
    matcher: &TermMatcher,
    lexicon: &IngredientLexicon,
) -> Option<RecipeMatch<'a>> {
    let mut matched = Vec::new();
    for item in recipe.items() {
        if let Some(tier) = match_item(item, matcher, lexicon) {
            if let Some(display_name) = item.display_name(lexicon) {
                matched.push(MatchedIngredient { display_name, tier });
            }
        }
    }
    if matched.is_empty() {
        return None;
    }
    let total_matches = matched.len();
    Some(RecipeMatch {
        recipe,
        matched,
        total_matches,
    })
}

/// Orders matches by match count descending, newest recipe first on ties.
fn rank_matches(matches: &mut [RecipeMatch<'_>]) {
    matches.sort_unstable_by(|a, b| {
        b.total_matches
            .cmp(&a.total_matches)
            .then_with(|| b.recipe.created_at.cmp(&a.recipe.created_at))
    });
}

fn ranked_matches<'a>(
    recipes: &'a [Recipe],
    terms: &[SearchTerm],
    lexicon: &IngredientLexicon,
) -> Vec<RecipeMatch<'a>> {
    let mut matches = Vec::new();
    if let Some(matcher) = TermMatcher::new(terms) {
        for recipe in recipes {
            if let Some(recipe_match) = match_recipe(recipe, &matcher, lexicon) {
                matches.push(recipe_match);
            }
        }
    }
    rank_matches(&mut matches);
    matches
}

/// Word-level presence check used by the near-miss finder: a term is
/// present when any of its words overlaps any word of any ingredient
/// display name.
fn term_present(term: &SearchTerm, display_names: &[String]) -> bool {
    let folded = term.folded();
    folded.split_whitespace().any(|term_word| {
        display_names.iter().any(|name| {
            name.to_lowercase()
                .split_whitespace()
                .any(|name_word| words_overlap(term_word, name_word))
        })
    })
}

/// Equal words always overlap; containment in either direction counts only
/// when the shorter word is at least `MIN_PARTIAL_WORD_LEN` characters, so
/// short fragments cannot mark a term present by accident.
fn words_overlap(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    shorter.chars().count() >= MIN_PARTIAL_WORD_LEN && longer.contains(shorter)
}

/// Finds the closest partial match for a query nothing fully satisfies.
///
/// Every recipe is a candidate. A candidate qualifies when it covers at
/// least three terms at word level but not all of them; the highest
/// coverage wins, with earlier corpus position breaking ties. The missing
/// terms come back in input order, ready to seed a suggestion for the
/// ingredients the user would still need.
pub fn find_near_miss<'a>(
    recipes: &'a [Recipe],
    terms: &[SearchTerm],
    lexicon: &IngredientLexicon,
) -> Option<NearMiss<'a>> {
    if terms.len() <= MIN_NEAR_MISS_MATCHES {
        return None;
    }
    let mut best: Option<NearMiss<'a>> = None;
    for recipe in recipes {
        let names = recipe.ingredient_names(lexicon);
        let missing: Vec<SearchTerm> = terms
            .iter()
            .filter(|term| !term_present(term, &names))
            .cloned()
            .collect();
        if missing.is_empty() {
            // Covers every term at word level; not a near miss.
            continue;
        }
        let match_count = terms.len() - missing.len();
        if match_count < MIN_NEAR_MISS_MATCHES {
            continue;
        }
        if best.as_ref().map_or(true, |b| match_count > b.match_count) {
            best = Some(NearMiss {
                recipe,
                missing,
                match_count,
            });
        }
    }
    best
}

/// Runs the full pipeline without preference filtering.
///
/// The query is parsed into terms, every recipe is matched and ranked, and
/// when nothing matches at all the near-miss finder supplies the closest
/// partial match.
///
/// # Examples
///
/// ```
/// use larder_search::{search, IngredientGroup, IngredientItem, IngredientLexicon, Recipe};
///
/// let recipes = vec![Recipe {
///     id: "toastie".into(),
///     title: "Cheese Toastie".into(),
///     description: None,
///     intro: None,
///     servings: 2,
///     created_at: 0,
///     ingredient_groups: vec![IngredientGroup::new(
///         None,
///         vec![IngredientItem::from_text("Cheddar cheese")],
///     )],
/// }];
///
/// let results = search(&recipes, "cheddar", IngredientLexicon::builtin());
/// assert_eq!(results.matches.len(), 1);
/// assert_eq!(results.matches[0].total_matches, 1);
/// ```
pub fn search<'a>(
    recipes: &'a [Recipe],
    query: &str,
    lexicon: &IngredientLexicon,
) -> SearchResults<'a> {
    let terms = parse_query(query);
    let matches = ranked_matches(recipes, &terms, lexicon);
    debug!(
        terms = terms.len(),
        matches = matches.len(),
        "search complete"
    );
    let near_miss = if matches.is_empty() {
        find_near_miss(recipes, &terms, lexicon)
    } else {
        None
    };
    SearchResults {
        terms,
        matches,
        near_miss,
    }
}

/// Runs the pipeline and applies the preference filter to the ranked list.
///
/// The near-miss fallback fires on the filtered result, so a query whose
/// matches were all rejected by preferences still gets a suggestion drawn
/// from the whole corpus.
pub fn search_with_preferences<'a>(
    recipes: &'a [Recipe],
    query: &str,
    lexicon: &IngredientLexicon,
    preferences: &Preferences,
) -> SearchResults<'a> {
    let terms = parse_query(query);
    let ranked = ranked_matches(recipes, &terms, lexicon);
    let ranked_len = ranked.len();
    let matches = filter::apply_preferences(ranked, preferences, lexicon);
    debug!(
        terms = terms.len(),
        ranked = ranked_len,
        kept = matches.len(),
        "filtered search complete"
    );
    let near_miss = if matches.is_empty() {
        find_near_miss(recipes, &terms, lexicon)
    } else {
        None
    };
    SearchResults {
        terms,
        matches,
        near_miss,
    }
}
