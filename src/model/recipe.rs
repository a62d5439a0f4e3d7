use serde::{Deserialize, Serialize};

use crate::lexicon::IngredientLexicon;

/// A single ingredient entry on a recipe.
///
/// Entries come out of the CMS export in one of three shapes:
/// - free-text only (`text`), typed directly by an editor
/// - a resolved reference (`ingredient_name` + `ingredient_id`)
/// - a dangling reference (`ingredient_id` only), where the referenced
///   ingredient document was renamed or never published
///
/// An entry with none of the three fields is inert: it is skipped during
/// matching and never treated as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IngredientItem {
    /// Free-text name typed by an editor, e.g. "2 slices white bread".
    pub text: Option<String>,
    /// Name of the referenced ingredient document, when the reference resolved.
    pub ingredient_name: Option<String>,
    /// Raw id of the referenced ingredient document.
    pub ingredient_id: Option<String>,
}

impl IngredientItem {
    /// Creates an entry holding only free text.
    pub fn from_text(text: impl Into<String>) -> Self {
        IngredientItem {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Creates an entry for a resolved ingredient reference.
    pub fn from_reference(name: impl Into<String>, id: impl Into<String>) -> Self {
        IngredientItem {
            ingredient_name: Some(name.into()),
            ingredient_id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Creates an entry for a reference that did not resolve to a name.
    pub fn from_dangling_id(id: impl Into<String>) -> Self {
        IngredientItem {
            ingredient_id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Returns true when the entry carries no usable field at all.
    pub fn is_inert(&self) -> bool {
        self.text.is_none() && self.ingredient_name.is_none() && self.ingredient_id.is_none()
    }

    /// Returns true when the entry carries only a reference id.
    pub fn is_dangling(&self) -> bool {
        self.text.is_none() && self.ingredient_name.is_none() && self.ingredient_id.is_some()
    }

    /// Returns the name to show for this entry.
    ///
    /// Resolution order: free text, then the resolved reference name, then
    /// the lexicon's canonical name for the id, then the raw id itself.
    /// Inert entries have no display name.
    ///
    /// # Examples
    ///
    /// ```
    /// use larder_search::{IngredientItem, IngredientLexicon};
    ///
    /// let lexicon = IngredientLexicon::builtin();
    /// let item = IngredientItem::from_dangling_id("sausage-meat");
    /// assert_eq!(item.display_name(lexicon).as_deref(), Some("Sausage Meat"));
    /// ```
    pub fn display_name(&self, lexicon: &IngredientLexicon) -> Option<String> {
        if let Some(text) = &self.text {
            return Some(text.clone());
        }
        if let Some(name) = &self.ingredient_name {
            return Some(name.clone());
        }
        self.ingredient_id.as_ref().map(|id| {
            lexicon
                .canonical_name(id)
                .map(|name| name.to_string())
                .unwrap_or_else(|| id.clone())
        })
    }
}

/// An ordered group of ingredient entries, e.g. "For the filling".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IngredientGroup {
    pub heading: Option<String>,
    pub items: Vec<IngredientItem>,
}

impl IngredientGroup {
    pub fn new(heading: Option<String>, items: Vec<IngredientItem>) -> Self {
        IngredientGroup { heading, items }
    }
}

fn default_servings() -> u32 {
    1
}

/// One recipe from the corpus snapshot.
///
/// The snapshot is read-only: the pipeline never mutates a recipe, and all
/// search operations borrow from it. Field names map one-to-one onto the
/// CMS export's camelCase JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub intro: Option<String>,
    /// Number of servings the recipe is written for.
    #[serde(default = "default_servings")]
    pub servings: u32,
    /// Creation timestamp as unix epoch milliseconds. Only its ordering is
    /// ever used (newer recipes win ranking ties).
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub ingredient_groups: Vec<IngredientGroup>,
}

impl Recipe {
    /// Iterates over all ingredient entries across all groups, in order.
    pub fn items(&self) -> impl Iterator<Item = &IngredientItem> {
        self.ingredient_groups.iter().flat_map(|g| g.items.iter())
    }

    /// Returns the display names of all non-inert ingredient entries.
    pub fn ingredient_names(&self, lexicon: &IngredientLexicon) -> Vec<String> {
        self.items()
            .filter_map(|item| item.display_name(lexicon))
            .collect()
    }

    /// Returns the case-folded concatenation of title, description and
    /// intro. This is the only text the preference filter looks at.
    pub fn profile_text(&self) -> String {
        let mut text = self.title.to_lowercase();
        for part in [&self.description, &self.intro].into_iter().flatten() {
            text.push(' ');
            text.push_str(&part.to_lowercase());
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn create_test_recipe(items: Vec<IngredientItem>) -> Recipe {
        Recipe {
            id: "recipe-1".to_string(),
            title: "Test Recipe".to_string(),
            description: Some("A test description".to_string()),
            intro: None,
            servings: 4,
            created_at: 1_700_000_000_000,
            ingredient_groups: vec![IngredientGroup::new(None, items)],
        }
    }

    #[test]
    fn test_item_shapes() {
        let text = IngredientItem::from_text("2 eggs");
        assert!(!text.is_inert());
        assert!(!text.is_dangling());

        let reference = IngredientItem::from_reference("Thyme", "thyme");
        assert!(!reference.is_dangling());

        let dangling = IngredientItem::from_dangling_id("sausage-meat");
        assert!(dangling.is_dangling());

        let inert = IngredientItem::default();
        assert!(inert.is_inert());
    }

    #[test]
    fn test_display_name_resolution_order() {
        let lexicon = IngredientLexicon::builtin();

        let mut item = IngredientItem::from_reference("Thyme", "thyme");
        item.text = Some("fresh thyme sprigs".to_string());
        // Free text wins over the resolved name
        assert_eq!(
            item.display_name(lexicon).as_deref(),
            Some("fresh thyme sprigs")
        );

        let item = IngredientItem::from_reference("Thyme", "thyme");
        assert_eq!(item.display_name(lexicon).as_deref(), Some("Thyme"));

        let item = IngredientItem::from_dangling_id("sausage-meat");
        assert_eq!(item.display_name(lexicon).as_deref(), Some("Sausage Meat"));

        // Unknown id degrades to the raw id
        let item = IngredientItem::from_dangling_id("mystery-id-9");
        assert_eq!(item.display_name(lexicon).as_deref(), Some("mystery-id-9"));

        let inert = IngredientItem::default();
        assert!(inert.display_name(lexicon).is_none());
    }

    #[test]
    fn test_items_iterates_groups_in_order() {
        let recipe = Recipe {
            ingredient_groups: vec![
                IngredientGroup::new(
                    Some("Filling".to_string()),
                    vec![IngredientItem::from_text("pork")],
                ),
                IngredientGroup::new(
                    Some("Pastry".to_string()),
                    vec![
                        IngredientItem::from_text("flour"),
                        IngredientItem::from_text("butter"),
                    ],
                ),
            ],
            ..create_test_recipe(vec![])
        };

        let texts: Vec<_> = recipe.items().filter_map(|i| i.text.as_deref()).collect();
        assert_eq!(texts, vec!["pork", "flour", "butter"]);
    }

    #[test]
    fn test_ingredient_names_skip_inert_entries() {
        let lexicon = IngredientLexicon::builtin();
        let recipe = create_test_recipe(vec![
            IngredientItem::from_text("Egg"),
            IngredientItem::default(),
            IngredientItem::from_dangling_id("cheddar-cheese"),
        ]);

        assert_eq!(
            recipe.ingredient_names(lexicon),
            vec!["Egg".to_string(), "Cheddar Cheese".to_string()]
        );
    }

    #[test]
    fn test_profile_text_is_folded_and_combined() {
        let mut recipe = create_test_recipe(vec![]);
        recipe.title = "Greggs Chicken Bake".to_string();
        recipe.description = Some("Flaky Pastry".to_string());
        recipe.intro = Some("A LUNCHTIME favourite".to_string());

        let text = recipe.profile_text();
        assert_eq!(text, "greggs chicken bake flaky pastry a lunchtime favourite");
    }

    #[test]
    fn test_recipe_deserializes_cms_export() {
        let json = indoc! {r#"
            {
                "id": "recipe-breakfast-bap",
                "title": "Breakfast Bap",
                "description": "A proper start to the day",
                "servings": 2,
                "createdAt": 1712000000000,
                "ingredientGroups": [
                    {
                        "heading": "Main",
                        "items": [
                            { "text": "2 rashers bacon" },
                            { "ingredientName": "Egg", "ingredientId": "egg" },
                            { "ingredientId": "brown-sauce" },
                            {}
                        ]
                    }
                ]
            }
        "#};

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, "recipe-breakfast-bap");
        assert_eq!(recipe.servings, 2);
        assert_eq!(recipe.created_at, 1_712_000_000_000);
        assert_eq!(recipe.items().count(), 4);
        assert!(recipe.items().nth(3).unwrap().is_inert());
        assert!(recipe.items().nth(2).unwrap().is_dangling());
    }

    #[test]
    fn test_recipe_defaults_for_missing_fields() {
        let json = r#"{ "id": "r1", "title": "Plain Toast" }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.servings, 1);
        assert_eq!(recipe.created_at, 0);
        assert!(recipe.description.is_none());
        assert!(recipe.ingredient_groups.is_empty());
    }
}
