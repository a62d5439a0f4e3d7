//! Keyword-heuristic preference filtering.
//!
//! Works over recipe title, description and intro text only, plus the
//! serving count and ingredient display names for the avoid-list. Stands
//! in for structured metadata the corpus does not have, so every check is
//! a documented heuristic rather than a guarantee.

use tracing::debug;

use crate::lexicon::IngredientLexicon;
use crate::model::{Diet, Method, Preferences, Recipe, SpiceLevel};
use crate::search::RecipeMatch;

mod rules;

pub use rules::KeywordRule;

/// Portion distance tolerated before the undersized check applies.
const PORTION_TOLERANCE: u32 = 2;

/// Applies every preference dimension to a ranked match list, preserving
/// order.
pub fn apply_preferences<'a>(
    matches: Vec<RecipeMatch<'a>>,
    preferences: &Preferences,
    lexicon: &IngredientLexicon,
) -> Vec<RecipeMatch<'a>> {
    let avoid_terms = preferences.avoid_terms();
    matches
        .into_iter()
        .filter(|m| recipe_passes(m.recipe, preferences, &avoid_terms, lexicon))
        .collect()
}

/// Decides whether one recipe satisfies every preference dimension.
///
/// Also usable without a preceding search, e.g. for browsing the whole
/// corpus under a set of preferences.
pub fn matches_preferences(
    recipe: &Recipe,
    preferences: &Preferences,
    lexicon: &IngredientLexicon,
) -> bool {
    recipe_passes(recipe, preferences, &preferences.avoid_terms(), lexicon)
}

fn recipe_passes(
    recipe: &Recipe,
    preferences: &Preferences,
    avoid_terms: &[String],
    lexicon: &IngredientLexicon,
) -> bool {
    let text = recipe.profile_text();
    let ok = passes_diet(&text, preferences.diet)
        && passes_method(&text, preferences.method)
        && passes_spice(&text, preferences.spice)
        && passes_portions(recipe.servings, preferences.portions)
        && passes_avoid(recipe, &text, avoid_terms, lexicon);
    if !ok {
        debug!(recipe = %recipe.id, "rejected by preference filter");
    }
    ok
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// An explicit diet label accepts outright; otherwise any exclude keyword
/// rejects.
fn passes_diet(text: &str, diet: Diet) -> bool {
    match rules::diet_rule(diet) {
        None => true,
        Some(rule) => contains_any(text, rule.include) || !contains_any(text, rule.exclude),
    }
}

/// The text must mention the requested cooking method somewhere.
fn passes_method(text: &str, method: Method) -> bool {
    match rules::method_rule(method) {
        None => true,
        Some(rule) => contains_any(text, rule.include),
    }
}

/// Only the Hot tier rejects; everything below it is advisory.
fn passes_spice(text: &str, spice: SpiceLevel) -> bool {
    match rules::spice_rule(spice) {
        None => true,
        Some(rule) => contains_any(text, rule.include),
    }
}

/// Asymmetric portion window: a recipe is rejected only when it is both
/// outside the tolerance and under half the requested size. A recipe
/// serving more than requested always passes.
fn passes_portions(servings: u32, requested: Option<u32>) -> bool {
    match requested {
        None => true,
        Some(requested) => {
            let distance = servings.abs_diff(requested);
            distance <= PORTION_TOLERANCE || f64::from(servings) >= f64::from(requested) * 0.5
        }
    }
}

/// Avoided terms reject on the profile text, or on any ingredient display
/// name with containment checked in both directions.
fn passes_avoid(
    recipe: &Recipe,
    text: &str,
    avoid_terms: &[String],
    lexicon: &IngredientLexicon,
) -> bool {
    if avoid_terms.is_empty() {
        return true;
    }
    let names: Vec<String> = recipe
        .ingredient_names(lexicon)
        .iter()
        .map(|n| n.to_lowercase())
        .collect();
    for term in avoid_terms {
        if text.contains(term.as_str()) {
            return false;
        }
        if names
            .iter()
            .any(|name| name.contains(term.as_str()) || term.contains(name.as_str()))
        {
            return false;
        }
    }
    true
}
