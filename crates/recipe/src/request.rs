use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

pub const DEFAULT_MAX_COOK_TIME: u16 = 60;
pub const DEFAULT_DIFFICULTY: &str = "medium";

/// Requested difficulty that leaves the generated recipe untouched.
pub const ANY_DIFFICULTY: &str = "any";

static DIFFICULTY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(easy|medium|hard|any)\s*$").expect("difficulty regex")
});

#[derive(Debug, Default, Clone, Validate, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationRequest {
    #[validate(
        length(min = 1, message = "At least one ingredient is required"),
        custom(function = "validate_ingredients")
    )]
    pub ingredients: Vec<String>,
    pub cuisine_type: Option<String>,
    pub dietary_preferences: Vec<String>,
    #[validate(range(
        min = 10,
        max = 300,
        message = "Cook time must be between 10 and 300 minutes"
    ))]
    pub max_cook_time: Option<u16>,
    #[validate(regex(
        path = *DIFFICULTY_REGEX,
        message = "Difficulty must be easy, medium, hard or any"
    ))]
    pub difficulty: Option<String>,
    #[validate(range(min = 1, max = 12, message = "Servings must be between 1 and 12"))]
    pub servings: Option<u32>,
}

fn validate_ingredients(ingredients: &[String]) -> Result<(), ValidationError> {
    if ingredients.iter().any(|i| i.trim().is_empty()) {
        return Err(ValidationError::new("blank_ingredient")
            .with_message("Ingredient cannot be empty".into()));
    }

    Ok(())
}

impl GenerationRequest {
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Ingredients with surrounding whitespace removed.
    pub fn ingredient_names(&self) -> Vec<&str> {
        self.ingredients.iter().map(|i| i.trim()).collect()
    }

    /// First dietary preference, the only one the prompt mentions.
    pub fn diet(&self) -> Option<&str> {
        self.dietary_preferences
            .iter()
            .map(|d| d.trim())
            .find(|d| !d.is_empty())
    }

    pub fn cuisine(&self) -> Option<&str> {
        self.cuisine_type
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Requested difficulty, lowercased. `None` when absent or "any".
    pub fn difficulty_override(&self) -> Option<String> {
        self.difficulty
            .as_deref()
            .map(|d| d.trim().to_lowercase())
            .filter(|d| !d.is_empty() && d != ANY_DIFFICULTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = GenerationRequest {
            max_cook_time: Some(30),
            difficulty: Some("Hard".to_owned()),
            servings: Some(2),
            ..GenerationRequest::new(["mushroom", "onion"])
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_ingredients() {
        let request = GenerationRequest::new(Vec::<String>::new());
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("ingredients"));

        let request = GenerationRequest::new(["tomato", "  "]);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_ranges() {
        for (max_cook_time, servings) in [
            (Some(9), None),
            (Some(301), None),
            (None, Some(0)),
            (None, Some(13)),
        ] {
            let request = GenerationRequest {
                max_cook_time,
                servings,
                ..GenerationRequest::new(["rice"])
            };
            assert!(request.validate().is_err(), "{max_cook_time:?} {servings:?}");
        }
    }

    #[test]
    fn test_difficulty() {
        let request = GenerationRequest {
            difficulty: Some("extreme".to_owned()),
            ..GenerationRequest::new(["rice"])
        };
        assert!(request.validate().is_err());

        let request = GenerationRequest {
            difficulty: Some("ANY".to_owned()),
            ..GenerationRequest::new(["rice"])
        };
        assert!(request.validate().is_ok());
        assert_eq!(request.difficulty_override(), None);

        let request = GenerationRequest {
            difficulty: Some(" Hard ".to_owned()),
            ..GenerationRequest::new(["rice"])
        };
        assert_eq!(request.difficulty_override().as_deref(), Some("hard"));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let request: GenerationRequest = serde_json::from_str(
            r#"{"ingredients":["egg"],"cuisineType":"Italian","maxCookTime":45,"dietaryPreferences":["Vegetarian"]}"#,
        )
        .unwrap();

        assert_eq!(request.cuisine(), Some("Italian"));
        assert_eq!(request.max_cook_time, Some(45));
        assert_eq!(request.diet(), Some("Vegetarian"));
        assert_eq!(request.servings, None);
    }
}
