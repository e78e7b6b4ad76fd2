use smartchef::config::{Config, DatabaseConfig, GeminiConfig, ObservabilityConfig};
use smartchef_shared::recipe::{Difficulty, Ingredient, IngredientCategory, Recipe};
use std::path::Path;

/// Config pointing at a throwaway database, with no Gemini key so every
/// generation stays local.
pub fn config(dir: &Path) -> Config {
    Config {
        database: DatabaseConfig {
            url: format!("sqlite:{}", dir.join("smartchef.db").display()),
            max_connections: 2,
        },
        gemini: GeminiConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn recipe(id: &str, owner_id: &str, ingredients: &[(&str, &str)]) -> Recipe {
    Recipe {
        id: id.to_owned(),
        owner_id: owner_id.to_owned(),
        title: format!("Recipe {id}"),
        ingredients: ingredients
            .iter()
            .map(|(name, amount)| {
                Ingredient::new(*name, *amount, IngredientCategory::infer(name))
            })
            .collect(),
        instructions: vec!["Cook".to_owned()],
        cook_time: "20 minutes".to_owned(),
        estimated_calories: 300,
        cuisine: "General".to_owned(),
        dietary_tags: vec![],
        difficulty: Difficulty::Easy,
        servings: 4,
    }
}
