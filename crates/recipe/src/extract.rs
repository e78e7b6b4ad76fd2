use serde::Deserialize;
use smartchef_shared::recipe::{BASELINE_SERVINGS, Difficulty, GeneratedRecipe, Ingredient};

use crate::provider::ProviderError;

/// The first balanced `{...}` object in `text`. Providers tend to wrap
/// their JSON in prose or markdown fences, sometimes with more braces after it.
///
/// Braces inside JSON strings do not count. Returns `None` when no object
/// closes.
pub fn extract_json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, byte) in text.as_bytes()[start..].iter().enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    None
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CookTime {
    Text(String),
    Minutes(u32),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecipe {
    title: Option<String>,
    ingredients: Option<Vec<Ingredient>>,
    instructions: Option<Vec<String>>,
    cook_time: Option<CookTime>,
    estimated_calories: Option<f64>,
    cuisine: Option<String>,
    #[serde(default)]
    dietary_tags: Vec<String>,
    #[serde(default)]
    difficulty: Difficulty,
    servings: Option<u32>,
}

/// Decodes raw provider output into a recipe.
///
/// `title`, `ingredients`, `instructions` and `cookTime` must be present;
/// the remaining fields fall back to defaults.
pub fn decode_recipe(text: &str) -> Result<GeneratedRecipe, ProviderError> {
    let span = extract_json_span(text).ok_or(ProviderError::NoJson)?;
    let raw: RawRecipe = serde_json::from_str(span)?;

    let title = raw
        .title
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty())
        .ok_or(ProviderError::MissingField("title"))?;

    let ingredients = raw
        .ingredients
        .ok_or(ProviderError::MissingField("ingredients"))?;

    let instructions = raw
        .instructions
        .filter(|i| !i.is_empty())
        .ok_or(ProviderError::MissingField("instructions"))?;

    let cook_time = match raw.cook_time {
        Some(CookTime::Text(text)) => text,
        Some(CookTime::Minutes(minutes)) => format!("{minutes} minutes"),
        None => return Err(ProviderError::MissingField("cookTime")),
    };

    let estimated_calories = raw
        .estimated_calories
        .map(|c| c.max(0.0).round() as u32)
        .unwrap_or(0);

    let cuisine = raw
        .cuisine
        .map(|c| c.trim().to_owned())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| "General".to_owned());

    Ok(GeneratedRecipe {
        title,
        ingredients,
        instructions,
        cook_time,
        estimated_calories,
        cuisine,
        dietary_tags: raw.dietary_tags,
        difficulty: raw.difficulty,
        servings: raw
            .servings
            .filter(|s| *s > 0)
            .unwrap_or(BASELINE_SERVINGS),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartchef_shared::recipe::IngredientCategory;

    const FENCED: &str = r#"Here is your recipe:
```json
{
  "title": "Lemon Chicken",
  "ingredients": [
    {"name": "Chicken thighs", "amount": "4 pieces", "category": "meat"},
    {"name": "Lemon", "amount": "1", "category": "citrus"}
  ],
  "instructions": ["Season", "Roast"],
  "cookTime": "45 minutes",
  "estimatedCalories": 520,
  "cuisine": "Greek",
  "dietaryTags": ["gluten-free"],
  "difficulty": "Hard",
  "servings": 2
}
```
Enjoy!"#;

    #[test]
    fn test_extract_span() {
        assert_eq!(extract_json_span("x {\"a\":{}} y"), Some("{\"a\":{}}"));
        assert_eq!(extract_json_span("no json here"), None);
        assert_eq!(extract_json_span("} backwards {"), None);
        assert_eq!(extract_json_span("{\"a\": {\"b\": 1}"), None);
    }

    #[test]
    fn test_extract_span_stops_at_first_object() {
        assert_eq!(
            extract_json_span("{\"a\":1} then {\"b\":2}"),
            Some("{\"a\":1}")
        );
    }

    #[test]
    fn test_extract_span_ignores_braces_in_strings() {
        assert_eq!(
            extract_json_span(r#"{"note":"use } and {","q":"say \"}\""} tail }"#),
            Some(r#"{"note":"use } and {","q":"say \"}\""}"#)
        );
    }

    #[test]
    fn test_decode_with_trailing_braced_prose() {
        let recipe = decode_recipe(
            r#"{"title":"A","ingredients":[],"instructions":["a"],"cookTime":"5 minutes"} Tip: use {fresh} herbs."#,
        )
        .unwrap();

        assert_eq!(recipe.title, "A");
    }

    #[test]
    fn test_decode_with_braces_in_values() {
        let recipe = decode_recipe(
            r#"Here you go: {"title":"Curly {Brace} Pasta","ingredients":[{"name":"Pasta","amount":"1 lb"}],"instructions":["Boil {well}"],"cookTime":"12 minutes"}"#,
        )
        .unwrap();

        assert_eq!(recipe.title, "Curly {Brace} Pasta");
        assert_eq!(recipe.instructions, vec!["Boil {well}"]);
    }

    #[test]
    fn test_decode_fenced_output() {
        let recipe = decode_recipe(FENCED).unwrap();

        assert_eq!(recipe.title, "Lemon Chicken");
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[1].category, IngredientCategory::Other);
        assert_eq!(recipe.cook_time, "45 minutes");
        assert_eq!(recipe.estimated_calories, 520);
        assert_eq!(recipe.difficulty, Difficulty::Hard);
        assert_eq!(recipe.servings, 2);
    }

    #[test]
    fn test_decode_defaults() {
        let recipe = decode_recipe(
            r#"{"title":"Toast","ingredients":[{"name":"Bread"}],"instructions":["Toast it"],"cookTime":5,"difficulty":"insane"}"#,
        )
        .unwrap();

        assert_eq!(recipe.cook_time, "5 minutes");
        assert_eq!(recipe.estimated_calories, 0);
        assert_eq!(recipe.cuisine, "General");
        assert_eq!(recipe.difficulty, Difficulty::Medium);
        assert_eq!(recipe.servings, 4);
        assert!(recipe.dietary_tags.is_empty());
    }

    #[test]
    fn test_decode_failures() {
        assert!(matches!(
            decode_recipe("Sorry, I cannot help with that."),
            Err(ProviderError::NoJson)
        ));
        assert!(matches!(
            decode_recipe("{ title: 'not json' }"),
            Err(ProviderError::Json(_))
        ));
        assert!(matches!(
            decode_recipe(r#"{"ingredients":[],"instructions":["a"],"cookTime":"5 minutes"}"#),
            Err(ProviderError::MissingField("title"))
        ));
        assert!(matches!(
            decode_recipe(r#"{"title":"A","instructions":["a"],"cookTime":"5 minutes"}"#),
            Err(ProviderError::MissingField("ingredients"))
        ));
        assert!(matches!(
            decode_recipe(r#"{"title":"A","ingredients":[],"instructions":[],"cookTime":"5"}"#),
            Err(ProviderError::MissingField("instructions"))
        ));
        assert!(matches!(
            decode_recipe(r#"{"title":"A","ingredients":[],"instructions":["a"]}"#),
            Err(ProviderError::MissingField("cookTime"))
        ));
    }
}
