use crate::{mealplan::MealPlan, recipe::Recipe};

/// Read access to stored recipes and meal plans.
///
/// Shopping list generation only ever reads through this trait; saving is left
/// to the concrete store.
#[async_trait::async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Recipes among `ids` that belong to `owner_id`. Unknown ids and recipes
    /// owned by someone else are silently absent from the result.
    async fn find_recipes_by_ids(
        &self,
        ids: &[String],
        owner_id: &str,
    ) -> anyhow::Result<Vec<Recipe>>;

    async fn find_meal_plan_by_id(&self, id: &str) -> anyhow::Result<Option<MealPlan>>;
}
