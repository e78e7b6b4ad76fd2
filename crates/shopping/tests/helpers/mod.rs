use smartchef_shared::{
    RecipeRepository,
    mealplan::{DailyPlan, MealPlan},
    recipe::{Difficulty, Ingredient, IngredientCategory, Recipe},
};

#[derive(Default)]
pub struct MemoryRepository {
    pub recipes: Vec<Recipe>,
    pub meal_plans: Vec<MealPlan>,
}

#[async_trait::async_trait]
impl RecipeRepository for MemoryRepository {
    async fn find_recipes_by_ids(
        &self,
        ids: &[String],
        owner_id: &str,
    ) -> anyhow::Result<Vec<Recipe>> {
        Ok(self
            .recipes
            .iter()
            .filter(|r| r.owner_id == owner_id && ids.contains(&r.id))
            .cloned()
            .collect())
    }

    async fn find_meal_plan_by_id(&self, id: &str) -> anyhow::Result<Option<MealPlan>> {
        Ok(self.meal_plans.iter().find(|p| p.id == id).cloned())
    }
}

pub fn recipe(id: &str, owner_id: &str, ingredients: Vec<Ingredient>) -> Recipe {
    Recipe {
        id: id.to_owned(),
        owner_id: owner_id.to_owned(),
        title: format!("recipe {id}"),
        ingredients,
        instructions: vec!["Cook".to_owned()],
        cook_time: "30 minutes".to_owned(),
        estimated_calories: 400,
        cuisine: "General".to_owned(),
        dietary_tags: vec![],
        difficulty: Difficulty::Medium,
        servings: 4,
    }
}

pub fn ingredient(name: &str, amount: &str, category: IngredientCategory) -> Ingredient {
    Ingredient::new(name, amount, category)
}

pub fn meal_plan(id: &str, owner_id: &str, daily_plan: DailyPlan) -> MealPlan {
    MealPlan {
        id: id.to_owned(),
        owner_id: owner_id.to_owned(),
        week_start: 1_760_313_600,
        week_end: 1_760_918_399,
        daily_plan,
        notes: None,
    }
}
