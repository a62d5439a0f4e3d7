mod preferences;
mod recipe;

pub use preferences::{Diet, Method, PreferenceError, Preferences, SpiceLevel};
pub use recipe::{IngredientGroup, IngredientItem, Recipe};
