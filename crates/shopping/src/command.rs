use smartchef_shared::{RecipeRepository, recipe::Ingredient, recipe::Recipe};
use std::collections::BTreeMap;
use validator::Validate;

use crate::{
    aggregation::IngredientAggregationService,
    categorization::{self, ShoppingCategory},
    grocery::GroceryItem,
};

#[derive(Clone)]
pub struct Command<R: RecipeRepository>(pub R);

#[derive(Debug, Validate)]
pub struct FromRecipesInput {
    #[validate(length(min = 1))]
    pub recipe_ids: Vec<String>,
}

impl<R: RecipeRepository> Command<R> {
    /// Resolves `ids` for `owner_id`, returned in the order of `ids`.
    /// Fails when any id is unknown or owned by someone else.
    async fn load_recipes(
        &self,
        ids: &[String],
        owner_id: &str,
    ) -> smartchef_shared::Result<Vec<Recipe>> {
        let mut found = self.0.find_recipes_by_ids(ids, owner_id).await?;

        let mut recipes = Vec::with_capacity(ids.len());
        for id in ids {
            let Some(pos) = found.iter().position(|r| &r.id == id) else {
                tracing::debug!(recipe_id = %id, "recipe not resolved for owner");
                smartchef_shared::not_found!("One or more recipes not found or access denied");
            };

            recipes.push(found.swap_remove(pos));
        }

        Ok(recipes)
    }

    #[tracing::instrument(skip(self, input), fields(recipes = input.recipe_ids.len()))]
    pub async fn from_recipes(
        &self,
        owner_id: &str,
        input: FromRecipesInput,
    ) -> smartchef_shared::Result<Vec<GroceryItem>> {
        input.validate()?;

        let mut ids: Vec<String> = Vec::with_capacity(input.recipe_ids.len());
        for id in input.recipe_ids {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        let recipes = self.load_recipes(&ids, owner_id).await?;
        let ingredients = IngredientAggregationService::aggregate(&recipes);

        if ingredients.is_empty() {
            smartchef_shared::user!("No ingredients found in the selected recipes");
        }

        tracing::info!(items = ingredients.len(), "grocery items aggregated");

        Ok(ingredients.iter().map(GroceryItem::from_ingredient).collect())
    }

    #[tracing::instrument(skip(self))]
    pub async fn from_meal_plan(
        &self,
        owner_id: &str,
        meal_plan_id: &str,
    ) -> smartchef_shared::Result<BTreeMap<ShoppingCategory, Vec<Ingredient>>> {
        let Some(plan) = self.0.find_meal_plan_by_id(meal_plan_id).await? else {
            smartchef_shared::not_found!("Meal plan {meal_plan_id} not found");
        };

        if plan.owner_id != owner_id {
            return Err(smartchef_shared::Error::Forbidden);
        }

        let ids = plan.recipe_ids();
        let recipes = self.load_recipes(&ids, owner_id).await?;
        let ingredients = IngredientAggregationService::aggregate(&recipes);

        tracing::info!(
            recipes = recipes.len(),
            items = ingredients.len(),
            "meal plan ingredients aggregated"
        );

        Ok(categorization::group_by_category(&ingredients))
    }
}
