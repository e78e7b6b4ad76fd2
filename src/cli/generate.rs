use anyhow::Result;
use clap::Args;
use serde::Serialize;
use smartchef_recipe::GenerationRequest;
use smartchef_shared::recipe::{GeneratedRecipe, Recipe};

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Ingredients on hand, comma separated or repeated
    #[arg(required = true, value_delimiter = ',')]
    pub ingredients: Vec<String>,

    #[arg(long)]
    pub cuisine: Option<String>,

    /// Dietary preference, only the first one reaches the model
    #[arg(long = "diet")]
    pub dietary_preferences: Vec<String>,

    /// Upper bound in minutes (10-300)
    #[arg(long)]
    pub max_cook_time: Option<u16>,

    /// easy, medium, hard or any
    #[arg(long)]
    pub difficulty: Option<String>,

    /// 1-12
    #[arg(long)]
    pub servings: Option<u32>,

    /// Save the recipe for this owner
    #[arg(long)]
    pub owner: Option<String>,
}

impl From<GenerateArgs> for GenerationRequest {
    fn from(args: GenerateArgs) -> Self {
        GenerationRequest {
            ingredients: args.ingredients,
            cuisine_type: args.cuisine,
            dietary_preferences: args.dietary_preferences,
            max_cook_time: args.max_cook_time,
            difficulty: args.difficulty,
            servings: args.servings,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Generated {
    Saved(Recipe),
    Unsaved(GeneratedRecipe),
}

pub async fn generate(config: &crate::config::Config, args: GenerateArgs) -> Result<Generated> {
    let owner = args.owner.clone();
    let request = GenerationRequest::from(args);
    let generator = config.gemini.generator()?;

    let recipe = generator.generate(&request).await?;

    let Some(owner) = owner else {
        return Ok(Generated::Unsaved(recipe));
    };

    let store =
        crate::db::open_store(&config.database.url, config.database.max_connections).await?;
    let recipe = Recipe::from_generated(ulid::Ulid::new().to_string(), owner, recipe);
    store.save_recipe(&recipe).await?;

    tracing::info!(recipe_id = %recipe.id, owner_id = %recipe.owner_id, "recipe saved");

    Ok(Generated::Saved(recipe))
}
