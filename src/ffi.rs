//! UniFFI bindings for cross-platform support (iOS, Android).
//!
//! This module provides FFI-safe types and functions for use with UniFFI.
//! Search results borrow from the corpus internally; here they are converted
//! to owned records suitable for FFI.

use crate::fetcher::{
    corpus_from_json as corpus_from_json_internal, load_corpus as load_corpus_internal, FetchError,
};
use crate::lexicon::{IngredientLexicon, LexiconError};
use crate::model::{PreferenceError, Preferences, Recipe};
use crate::query::parse_query;
use crate::search::{
    find_near_miss as find_near_miss_internal, search as search_internal,
    search_with_preferences as search_with_preferences_internal, MatchTier, MatchedIngredient,
    NearMiss, RecipeMatch, SearchResults,
};
use camino::Utf8Path;
use std::sync::Arc;

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum LarderError {
    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },

    #[error("Invalid preference: {message}")]
    InvalidPreference { message: String },
}

impl From<FetchError> for LarderError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::IoError(e) => LarderError::IoError {
                message: e.to_string(),
            },
            FetchError::JsonError(e) => LarderError::ParseError {
                message: e.to_string(),
            },
            FetchError::GlobError(e) => LarderError::IoError {
                message: e.to_string(),
            },
            FetchError::PatternError(e) => LarderError::InvalidPath {
                message: e.to_string(),
            },
            FetchError::InvalidPath(p) => LarderError::InvalidPath {
                message: p.to_string(),
            },
        }
    }
}

impl From<LexiconError> for LarderError {
    fn from(e: LexiconError) -> Self {
        match e {
            LexiconError::IoError(e) => LarderError::IoError {
                message: e.to_string(),
            },
            LexiconError::ParseError(e) => LarderError::ParseError {
                message: e.to_string(),
            },
        }
    }
}

impl From<PreferenceError> for LarderError {
    fn from(e: PreferenceError) -> Self {
        LarderError::InvalidPreference {
            message: e.to_string(),
        }
    }
}

/// Which tier satisfied a matched ingredient entry.
#[derive(Debug, Clone, uniffi::Enum)]
pub enum FfiMatchTier {
    Text,
    Reference,
    Fallback,
}

impl From<MatchTier> for FfiMatchTier {
    fn from(tier: MatchTier) -> Self {
        match tier {
            MatchTier::Text => FfiMatchTier::Text,
            MatchTier::Reference => FfiMatchTier::Reference,
            MatchTier::Fallback => FfiMatchTier::Fallback,
        }
    }
}

/// One matched ingredient entry on a result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMatchedIngredient {
    pub display_name: String,
    pub tier: FfiMatchTier,
}

impl From<&MatchedIngredient> for FfiMatchedIngredient {
    fn from(m: &MatchedIngredient) -> Self {
        FfiMatchedIngredient {
            display_name: m.display_name.clone(),
            tier: m.tier.into(),
        }
    }
}

/// One ranked search result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecipeMatch {
    pub recipe_id: String,
    pub title: String,
    pub matched: Vec<FfiMatchedIngredient>,
    pub total_matches: u32,
}

impl From<&RecipeMatch<'_>> for FfiRecipeMatch {
    fn from(m: &RecipeMatch<'_>) -> Self {
        FfiRecipeMatch {
            recipe_id: m.recipe.id.clone(),
            title: m.recipe.title.clone(),
            matched: m.matched.iter().map(FfiMatchedIngredient::from).collect(),
            total_matches: m.total_matches as u32,
        }
    }
}

/// The closest-partial-match suggestion for a query nothing satisfied.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNearMiss {
    pub recipe_id: String,
    pub title: String,
    /// Terms the suggested recipe does not cover, in query order.
    pub missing: Vec<String>,
    pub match_count: u32,
}

impl From<&NearMiss<'_>> for FfiNearMiss {
    fn from(n: &NearMiss<'_>) -> Self {
        FfiNearMiss {
            recipe_id: n.recipe.id.clone(),
            title: n.recipe.title.clone(),
            missing: n.missing.iter().map(|t| t.as_str().to_string()).collect(),
            match_count: n.match_count as u32,
        }
    }
}

/// A full search outcome: parsed terms, ranked matches, optional near miss.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSearchResults {
    pub terms: Vec<String>,
    pub matches: Vec<FfiRecipeMatch>,
    pub near_miss: Option<FfiNearMiss>,
}

impl From<&SearchResults<'_>> for FfiSearchResults {
    fn from(r: &SearchResults<'_>) -> Self {
        FfiSearchResults {
            terms: r.terms.iter().map(|t| t.as_str().to_string()).collect(),
            matches: r.matches.iter().map(FfiRecipeMatch::from).collect(),
            near_miss: r.near_miss.as_ref().map(FfiNearMiss::from),
        }
    }
}

/// Preference values as the site passes them through from URL parameters.
///
/// The enum-backed fields travel as strings; empty strings select the inert
/// defaults, anything else must be a known token.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPreferences {
    pub diet: String,
    pub method: String,
    pub spice: String,
    pub portions: Option<u32>,
    pub avoid: String,
}

impl TryFrom<FfiPreferences> for Preferences {
    type Error = LarderError;

    fn try_from(p: FfiPreferences) -> Result<Self, Self::Error> {
        Ok(Preferences {
            diet: p.diet.parse()?,
            method: p.method.parse()?,
            spice: p.spice.parse()?,
            portions: p.portions,
            avoid: p.avoid,
        })
    }
}

/// A loaded recipe corpus and the lexicon it searches with.
///
/// This is the main type across the FFI boundary: load a corpus once, then
/// run any number of searches against the same snapshot.
#[derive(uniffi::Object)]
pub struct FfiCorpus {
    recipes: Vec<Recipe>,
    lexicon: IngredientLexicon,
}

#[uniffi::export]
impl FfiCorpus {
    /// Returns the number of recipes in the snapshot.
    pub fn recipe_count(&self) -> u32 {
        self.recipes.len() as u32
    }

    /// Returns the ids of all recipes, in corpus order.
    pub fn recipe_ids(&self) -> Vec<String> {
        self.recipes.iter().map(|r| r.id.clone()).collect()
    }

    /// Runs an ingredient search over the snapshot.
    pub fn search(&self, query: String) -> FfiSearchResults {
        let results = search_internal(&self.recipes, &query, &self.lexicon);
        FfiSearchResults::from(&results)
    }

    /// Runs an ingredient search and filters the ranked results by the
    /// given preferences.
    pub fn search_with_preferences(
        &self,
        query: String,
        preferences: FfiPreferences,
    ) -> Result<FfiSearchResults, LarderError> {
        let preferences = Preferences::try_from(preferences)?;
        let results =
            search_with_preferences_internal(&self.recipes, &query, &self.lexicon, &preferences);
        Ok(FfiSearchResults::from(&results))
    }

    /// Returns the closest partial match for a query, if one qualifies.
    pub fn near_miss(&self, query: String) -> Option<FfiNearMiss> {
        let terms = parse_query(&query);
        find_near_miss_internal(&self.recipes, &terms, &self.lexicon)
            .as_ref()
            .map(FfiNearMiss::from)
    }
}

impl FfiCorpus {
    fn new(recipes: Vec<Recipe>, lexicon: IngredientLexicon) -> Self {
        FfiCorpus { recipes, lexicon }
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Loads a recipe corpus from a CMS export path.
///
/// The path may be a single JSON file holding an array of recipes, or a
/// directory of per-recipe JSON files. When no lexicon path is given the
/// bundled ingredient lexicon is used.
///
/// # Arguments
/// * `path` - Export file or directory to load
/// * `lexicon_path` - Optional YAML lexicon overriding the bundled one
///
/// # Returns
/// The loaded corpus, or an error.
#[uniffi::export]
pub fn load_corpus(
    path: String,
    lexicon_path: Option<String>,
) -> Result<Arc<FfiCorpus>, LarderError> {
    let recipes = load_corpus_internal(Utf8Path::new(&path))?;
    let lexicon = match lexicon_path {
        Some(p) => IngredientLexicon::from_path(Utf8Path::new(&p))?,
        None => IngredientLexicon::builtin().clone(),
    };
    Ok(Arc::new(FfiCorpus::new(recipes, lexicon)))
}

/// Creates a corpus from a raw JSON export string.
///
/// Useful for corpora obtained from sources other than files, such as a
/// network response from the CMS.
///
/// # Arguments
/// * `json` - A JSON array of recipes
///
/// # Returns
/// The loaded corpus, or an error if parsing fails.
#[uniffi::export]
pub fn corpus_from_json(json: String) -> Result<Arc<FfiCorpus>, LarderError> {
    let recipes = corpus_from_json_internal(&json)?;
    Ok(Arc::new(FfiCorpus::new(
        recipes,
        IngredientLexicon::builtin().clone(),
    )))
}

/// Splits a raw query string into search terms.
///
/// Exposed so clients can show the parsed terms exactly as the search
/// pipeline will use them.
#[uniffi::export]
pub fn parse_query_terms(query: String) -> Vec<String> {
    parse_query(&query)
        .into_iter()
        .map(|t| t.as_str().to_string())
        .collect()
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
