uniffi::setup_scaffolding!();

pub mod fetcher;
pub mod ffi;
pub mod filter;
pub mod lexicon;
pub mod model;
pub mod query;
pub mod search;

pub use fetcher::{corpus_from_json, load_corpus};
pub use filter::{apply_preferences, matches_preferences};
pub use lexicon::{IngredientLexicon, LexiconEntry};
pub use model::*;
pub use query::{parse_query, SearchTerm};
pub use search::{
    find_near_miss, search, search_with_preferences, MatchTier, MatchedIngredient, NearMiss,
    RecipeMatch, SearchResults,
};
