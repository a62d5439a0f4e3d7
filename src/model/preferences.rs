use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing preference values from URL parameters.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("Failed to parse diet preference: {0}")]
    UnknownDiet(String),

    #[error("Failed to parse method preference: {0}")]
    UnknownMethod(String),

    #[error("Failed to parse spice preference: {0}")]
    UnknownSpice(String),
}

/// Dietary requirement. `None` applies no dietary filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Diet {
    #[default]
    None,
    Vegetarian,
    Vegan,
    Pescatarian,
}

impl FromStr for Diet {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(Diet::None),
            "vegetarian" | "veggie" => Ok(Diet::Vegetarian),
            "vegan" => Ok(Diet::Vegan),
            "pescatarian" | "pescetarian" => Ok(Diet::Pescatarian),
            other => Err(PreferenceError::UnknownDiet(other.to_string())),
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Diet::None => "none",
            Diet::Vegetarian => "vegetarian",
            Diet::Vegan => "vegan",
            Diet::Pescatarian => "pescatarian",
        };
        write!(f, "{token}")
    }
}

/// Cooking method. `Any` is the sentinel that disables method filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    #[default]
    Any,
    Oven,
    Hob,
    Grill,
    AirFryer,
    SlowCooker,
    Microwave,
    NoCook,
}

impl FromStr for Method {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "any" => Ok(Method::Any),
            "oven" => Ok(Method::Oven),
            "hob" | "stovetop" => Ok(Method::Hob),
            "grill" => Ok(Method::Grill),
            "air-fryer" | "airfryer" | "air fryer" => Ok(Method::AirFryer),
            "slow-cooker" | "slowcooker" | "slow cooker" => Ok(Method::SlowCooker),
            "microwave" => Ok(Method::Microwave),
            "no-cook" | "nocook" | "no cook" => Ok(Method::NoCook),
            other => Err(PreferenceError::UnknownMethod(other.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Method::Any => "any",
            Method::Oven => "oven",
            Method::Hob => "hob",
            Method::Grill => "grill",
            Method::AirFryer => "air-fryer",
            Method::SlowCooker => "slow-cooker",
            Method::Microwave => "microwave",
            Method::NoCook => "no-cook",
        };
        write!(f, "{token}")
    }
}

/// Spice tolerance. Only `Hot` is a hard requirement; the lower tiers are
/// advisory and never exclude a recipe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpiceLevel {
    #[default]
    None,
    Mild,
    Medium,
    Hot,
}

impl FromStr for SpiceLevel {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(SpiceLevel::None),
            "mild" => Ok(SpiceLevel::Mild),
            "medium" => Ok(SpiceLevel::Medium),
            "hot" => Ok(SpiceLevel::Hot),
            other => Err(PreferenceError::UnknownSpice(other.to_string())),
        }
    }
}

impl fmt::Display for SpiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            SpiceLevel::None => "none",
            SpiceLevel::Mild => "mild",
            SpiceLevel::Medium => "medium",
            SpiceLevel::Hot => "hot",
        };
        write!(f, "{token}")
    }
}

/// User preferences applied to the ranked result list.
///
/// Every field defaults to its inert value, so `Preferences::default()`
/// filters nothing. The site passes these through from URL parameters;
/// the enum types parse their kebab-case tokens via `FromStr`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub diet: Diet,
    pub method: Method,
    pub spice: SpiceLevel,
    /// Desired number of portions. `None` disables the portion check.
    pub portions: Option<u32>,
    /// Comma-separated ingredients the user wants to avoid.
    pub avoid: String,
}

impl Preferences {
    /// Splits the avoid-list into trimmed, case-folded terms.
    ///
    /// Empty and single-character fragments are dropped, the same rule the
    /// query parser applies to search terms.
    pub fn avoid_terms(&self) -> Vec<String> {
        self.avoid
            .split(',')
            .map(|t| t.trim().to_lowercase())
            .filter(|t| t.chars().count() > 1)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diet_from_str() {
        assert_eq!("vegetarian".parse::<Diet>().unwrap(), Diet::Vegetarian);
        assert_eq!("Vegan".parse::<Diet>().unwrap(), Diet::Vegan);
        assert_eq!(" pescatarian ".parse::<Diet>().unwrap(), Diet::Pescatarian);
        assert_eq!("".parse::<Diet>().unwrap(), Diet::None);
        assert_eq!(
            "carnivore".parse::<Diet>(),
            Err(PreferenceError::UnknownDiet("carnivore".to_string()))
        );
    }

    #[test]
    fn test_method_from_str_accepts_spelling_variants() {
        assert_eq!("air-fryer".parse::<Method>().unwrap(), Method::AirFryer);
        assert_eq!("airfryer".parse::<Method>().unwrap(), Method::AirFryer);
        assert_eq!("Slow Cooker".parse::<Method>().unwrap(), Method::SlowCooker);
        assert_eq!("no-cook".parse::<Method>().unwrap(), Method::NoCook);
        assert_eq!("any".parse::<Method>().unwrap(), Method::Any);
        assert!("cauldron".parse::<Method>().is_err());
    }

    #[test]
    fn test_spice_ordering() {
        assert!(SpiceLevel::Hot > SpiceLevel::Medium);
        assert!(SpiceLevel::Mild > SpiceLevel::None);
        assert_eq!("HOT".parse::<SpiceLevel>().unwrap(), SpiceLevel::Hot);
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for method in [
            Method::Any,
            Method::Oven,
            Method::Hob,
            Method::Grill,
            Method::AirFryer,
            Method::SlowCooker,
            Method::Microwave,
            Method::NoCook,
        ] {
            assert_eq!(method.to_string().parse::<Method>().unwrap(), method);
        }
        for diet in [Diet::None, Diet::Vegetarian, Diet::Vegan, Diet::Pescatarian] {
            assert_eq!(diet.to_string().parse::<Diet>().unwrap(), diet);
        }
    }

    #[test]
    fn test_default_preferences_are_inert() {
        let prefs = Preferences::default();
        assert_eq!(prefs.diet, Diet::None);
        assert_eq!(prefs.method, Method::Any);
        assert_eq!(prefs.spice, SpiceLevel::None);
        assert!(prefs.portions.is_none());
        assert!(prefs.avoid_terms().is_empty());
    }

    #[test]
    fn test_avoid_terms_splitting() {
        let prefs = Preferences {
            avoid: " Sausage, x,, PRAWNS ,bacon".to_string(),
            ..Default::default()
        };
        assert_eq!(prefs.avoid_terms(), vec!["sausage", "prawns", "bacon"]);
    }

    #[test]
    fn test_preferences_deserialize_from_params() {
        let json = r#"{ "diet": "vegetarian", "method": "air-fryer", "spice": "hot", "portions": 4, "avoid": "nuts" }"#;
        let prefs: Preferences = serde_json::from_str(json).unwrap();
        assert_eq!(prefs.diet, Diet::Vegetarian);
        assert_eq!(prefs.method, Method::AirFryer);
        assert_eq!(prefs.spice, SpiceLevel::Hot);
        assert_eq!(prefs.portions, Some(4));
    }
}
