//! Static keyword tables for the preference filter.
//!
//! Recipes carry no structured diet, method or spice metadata, so each
//! dimension is a table from enum value to include/exclude keyword lists,
//! matched as substrings of the case-folded recipe text. Rules live here
//! as data; the filter functions contain no per-value keyword logic.

use crate::model::{Diet, Method, SpiceLevel};

/// Include/exclude keyword lists for one value of one preference
/// dimension.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    /// Keywords whose presence satisfies the rule outright.
    pub include: &'static [&'static str],
    /// Keywords whose presence rejects, unless an include keyword already
    /// hit.
    pub exclude: &'static [&'static str],
}

static VEGETARIAN: KeywordRule = KeywordRule {
    include: &["vegetarian", "veggie", "meat-free", "meat free", "meatless"],
    exclude: &[
        "chicken", "beef", "pork", "lamb", "bacon", "ham", "sausage", "steak", "mince", "turkey",
        "duck", "gammon", "chorizo", "pepperoni", "meatball", "fish", "salmon", "tuna", "cod",
        "haddock", "prawn", "anchovy",
    ],
};

static VEGAN: KeywordRule = KeywordRule {
    include: &["vegan", "plant-based", "plant based"],
    exclude: &[
        "chicken", "beef", "pork", "lamb", "bacon", "ham", "sausage", "steak", "mince", "turkey",
        "duck", "gammon", "chorizo", "pepperoni", "meatball", "fish", "salmon", "tuna", "cod",
        "haddock", "prawn", "anchovy", "cheese", "milk", "cream", "butter", "egg", "yoghurt",
        "yogurt", "honey", "mayonnaise",
    ],
};

static PESCATARIAN: KeywordRule = KeywordRule {
    include: &["pescatarian", "pescetarian"],
    exclude: &[
        "chicken", "beef", "pork", "lamb", "bacon", "ham", "sausage", "steak", "mince", "turkey",
        "duck", "gammon", "chorizo", "pepperoni", "meatball",
    ],
};

static OVEN: KeywordRule = KeywordRule {
    include: &["oven", "bake", "baked", "baking", "roast", "roasted"],
    exclude: &[],
};

static HOB: KeywordRule = KeywordRule {
    include: &[
        "hob", "pan", "fry", "fried", "frying", "simmer", "saucepan", "boil", "stir-fry",
    ],
    exclude: &[],
};

static GRILL: KeywordRule = KeywordRule {
    include: &["grill", "grilled", "barbecue", "bbq", "griddle"],
    exclude: &[],
};

static AIR_FRYER: KeywordRule = KeywordRule {
    include: &["air fryer", "air-fryer", "airfryer", "air fry"],
    exclude: &[],
};

static SLOW_COOKER: KeywordRule = KeywordRule {
    include: &["slow cooker", "slow-cooker", "slow cook", "crockpot", "crock pot"],
    exclude: &[],
};

static MICROWAVE: KeywordRule = KeywordRule {
    include: &["microwave", "microwaved"],
    exclude: &[],
};

static NO_COOK: KeywordRule = KeywordRule {
    include: &["no-cook", "no cook", "no-bake", "no bake", "assemble"],
    exclude: &[],
};

static HOT: KeywordRule = KeywordRule {
    include: &[
        "hot", "spicy", "chilli", "chili", "fiery", "cayenne", "scotch bonnet", "sriracha",
        "jalapeno", "harissa",
    ],
    exclude: &[],
};

/// Returns the rule for a diet, or `None` when the value filters nothing.
pub(crate) fn diet_rule(diet: Diet) -> Option<&'static KeywordRule> {
    match diet {
        Diet::None => None,
        Diet::Vegetarian => Some(&VEGETARIAN),
        Diet::Vegan => Some(&VEGAN),
        Diet::Pescatarian => Some(&PESCATARIAN),
    }
}

/// Returns the rule for a method, or `None` for the `Any` sentinel.
pub(crate) fn method_rule(method: Method) -> Option<&'static KeywordRule> {
    match method {
        Method::Any => None,
        Method::Oven => Some(&OVEN),
        Method::Hob => Some(&HOB),
        Method::Grill => Some(&GRILL),
        Method::AirFryer => Some(&AIR_FRYER),
        Method::SlowCooker => Some(&SLOW_COOKER),
        Method::Microwave => Some(&MICROWAVE),
        Method::NoCook => Some(&NO_COOK),
    }
}

/// Returns the rule for a spice level. Only `Hot` is a hard requirement;
/// the lower tiers are advisory and have no rule.
pub(crate) fn spice_rule(spice: SpiceLevel) -> Option<&'static KeywordRule> {
    match spice {
        SpiceLevel::Hot => Some(&HOT),
        SpiceLevel::None | SpiceLevel::Mild | SpiceLevel::Medium => None,
    }
}
