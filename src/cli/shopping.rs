use anyhow::Result;
use clap::Subcommand;
use smartchef_shared::recipe::Ingredient;
use smartchef_shopping::{FromRecipesInput, GroceryList, ShoppingCategory};
use std::collections::BTreeMap;

#[derive(Subcommand, Debug, Clone)]
pub enum ShoppingCommand {
    /// Grocery list for a set of saved recipes
    Recipes {
        #[arg(long)]
        owner: String,

        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Categorized shopping list for a meal plan
    MealPlan {
        #[arg(long)]
        owner: String,

        id: String,
    },
}

async fn command(
    config: &crate::config::Config,
) -> Result<smartchef_shopping::Command<smartchef_db::SqliteStore>> {
    let store =
        crate::db::open_store(&config.database.url, config.database.max_connections).await?;

    Ok(smartchef_shopping::Command(store))
}

pub async fn from_recipes(
    config: &crate::config::Config,
    owner: &str,
    ids: Vec<String>,
) -> Result<GroceryList> {
    let items = command(config)
        .await?
        .from_recipes(owner, FromRecipesInput { recipe_ids: ids })
        .await?;

    Ok(GroceryList::new(items))
}

pub async fn from_meal_plan(
    config: &crate::config::Config,
    owner: &str,
    id: &str,
) -> Result<BTreeMap<ShoppingCategory, Vec<Ingredient>>> {
    Ok(command(config).await?.from_meal_plan(owner, id).await?)
}

pub async fn run(config: &crate::config::Config, cmd: ShoppingCommand) -> Result<()> {
    match cmd {
        ShoppingCommand::Recipes { owner, ids } => {
            let list = from_recipes(config, &owner, ids).await?;
            super::print_json(&list)
        }
        ShoppingCommand::MealPlan { owner, id } => {
            let sections = from_meal_plan(config, &owner, &id).await?;
            super::print_json(&sections)
        }
    }
}
