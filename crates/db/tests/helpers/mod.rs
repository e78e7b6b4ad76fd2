use smartchef_db::SqliteStore;
use smartchef_shared::recipe::{Difficulty, Ingredient, IngredientCategory, Recipe};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::{path::PathBuf, str::FromStr};

pub async fn setup_test_store(path: PathBuf) -> anyhow::Result<SqliteStore> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    smartchef_db::create_tables(&pool).await?;

    Ok(SqliteStore::new(pool))
}

pub fn recipe(id: &str, owner_id: &str) -> Recipe {
    Recipe {
        id: id.to_owned(),
        owner_id: owner_id.to_owned(),
        title: format!("{owner_id} recipe {id}"),
        ingredients: vec![
            Ingredient::new("Tomato", "2 cups", IngredientCategory::Produce),
            Ingredient::new("Salt", "1 tsp", IngredientCategory::Spices),
        ],
        instructions: vec!["Chop".to_owned(), "Cook".to_owned()],
        cook_time: "25 minutes".to_owned(),
        estimated_calories: 320,
        cuisine: "Italian".to_owned(),
        dietary_tags: vec!["vegetarian".to_owned()],
        difficulty: Difficulty::Easy,
        servings: 4,
    }
}
