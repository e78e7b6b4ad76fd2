mod category;

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Recipes are written for this many people unless stated otherwise.
pub const BASELINE_SERVINGS: u32 = 4;

#[derive(
    Encode,
    Decode,
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum IngredientCategory {
    Produce,
    Dairy,
    Meat,
    Pantry,
    Spices,
    #[default]
    Other,
}

impl From<Option<String>> for IngredientCategory {
    fn from(value: Option<String>) -> Self {
        value
            .as_deref()
            .map(str::trim)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

#[derive(
    Encode,
    Decode,
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl From<Option<String>> for Difficulty {
    fn from(value: Option<String>) -> Self {
        value
            .as_deref()
            .map(str::trim)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

#[derive(Encode, Decode, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub category: IngredientCategory,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        category: IngredientCategory,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            category,
        }
    }

    /// Aggregation key: two ingredients merge on a shopping list only when
    /// their keys are equal. Amount and unit play no part in it.
    pub fn key(&self) -> String {
        format!("{}-{}", self.name.to_lowercase(), self.category)
    }
}

/// A recipe as produced by a generation provider, before it is owned by anyone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRecipe {
    pub title: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub cook_time: String,
    pub estimated_calories: u32,
    pub cuisine: String,
    pub dietary_tags: Vec<String>,
    pub difficulty: Difficulty,
    pub servings: u32,
}

impl GeneratedRecipe {
    pub fn cook_time_minutes(&self) -> Option<u32> {
        leading_minutes(&self.cook_time)
    }
}

/// First run of digits in a free-text duration ("about 45 minutes" -> 45).
pub fn leading_minutes(value: &str) -> Option<u32> {
    let start = value.find(|c: char| c.is_ascii_digit())?;
    let digits: String = value[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse().ok()
}

fn default_cuisine() -> String {
    "General".to_owned()
}

fn default_servings() -> u32 {
    BASELINE_SERVINGS
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub cook_time: String,
    #[serde(default)]
    pub estimated_calories: u32,
    #[serde(default = "default_cuisine")]
    pub cuisine: String,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default = "default_servings")]
    pub servings: u32,
}

impl Recipe {
    pub fn from_generated(
        id: impl Into<String>,
        owner_id: impl Into<String>,
        recipe: GeneratedRecipe,
    ) -> Self {
        Self {
            id: id.into(),
            owner_id: owner_id.into(),
            title: recipe.title,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            cook_time: recipe.cook_time,
            estimated_calories: recipe.estimated_calories,
            cuisine: recipe.cuisine,
            dietary_tags: recipe.dietary_tags,
            difficulty: recipe.difficulty,
            servings: recipe.servings,
        }
    }

    pub fn cook_time_minutes(&self) -> Option<u32> {
        leading_minutes(&self.cook_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ignores_name_case() {
        let a = Ingredient::new("Tomato", "2 cups", IngredientCategory::Produce);
        let b = Ingredient::new("tomato", "1 cup", IngredientCategory::Produce);
        assert_eq!(a.key(), "tomato-produce");
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_key_separates_categories() {
        let a = Ingredient::new("Tomato", "2", IngredientCategory::Produce);
        let b = Ingredient::new("Tomato", "2", IngredientCategory::Pantry);
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn test_category_deserialize_is_lenient() {
        let ingredient: Ingredient =
            serde_json::from_str(r#"{"name":"Milk","amount":"1 cup","category":"Dairy"}"#)
                .unwrap();
        assert_eq!(ingredient.category, IngredientCategory::Dairy);

        let ingredient: Ingredient =
            serde_json::from_str(r#"{"name":"Squid","amount":"1","category":"seafood"}"#)
                .unwrap();
        assert_eq!(ingredient.category, IngredientCategory::Other);

        let ingredient: Ingredient = serde_json::from_str(r#"{"name":"Salt"}"#).unwrap();
        assert_eq!(ingredient.category, IngredientCategory::Other);
        assert_eq!(ingredient.amount, "");

        let ingredient: Ingredient =
            serde_json::from_str(r#"{"name":"Salt","category":null}"#).unwrap();
        assert_eq!(ingredient.category, IngredientCategory::Other);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&IngredientCategory::Produce).unwrap();
        assert_eq!(json, "\"produce\"");
        assert_eq!(IngredientCategory::Spices.to_string(), "spices");
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("any".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::from(Some("weird".to_owned())), Difficulty::Medium);
    }

    #[test]
    fn test_leading_minutes() {
        assert_eq!(leading_minutes("45 minutes"), Some(45));
        assert_eq!(leading_minutes("about 20 min"), Some(20));
        assert_eq!(leading_minutes("quick"), None);
        assert_eq!(leading_minutes(""), None);
    }

    #[test]
    fn test_recipe_defaults() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"id":"r1","ownerId":"u1","title":"Soup"}"#).unwrap();
        assert_eq!(recipe.cuisine, "General");
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.difficulty, Difficulty::Medium);
        assert!(recipe.ingredients.is_empty());
    }
}
