use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use smartchef_shared::{
    RecipeRepository,
    mealplan::{DailyPlan, MealPlan},
    recipe::{Difficulty, Ingredient, Recipe},
};
use sqlx::{SqlitePool, prelude::FromRow};

use crate::table;

#[derive(FromRow)]
struct RecipeRow {
    id: String,
    owner_id: String,
    title: String,
    ingredients: Vec<u8>,
    instructions: Vec<u8>,
    cook_time: String,
    estimated_calories: u32,
    cuisine: String,
    dietary_tags: Vec<u8>,
    difficulty: String,
    servings: u32,
}

impl TryFrom<RecipeRow> for Recipe {
    type Error = anyhow::Error;

    fn try_from(row: RecipeRow) -> Result<Self, Self::Error> {
        Ok(Recipe {
            id: row.id,
            owner_id: row.owner_id,
            title: row.title,
            ingredients: bitcode::decode::<Vec<Ingredient>>(&row.ingredients)?,
            instructions: bitcode::decode::<Vec<String>>(&row.instructions)?,
            cook_time: row.cook_time,
            estimated_calories: row.estimated_calories,
            cuisine: row.cuisine,
            dietary_tags: bitcode::decode::<Vec<String>>(&row.dietary_tags)?,
            difficulty: row.difficulty.parse::<Difficulty>().unwrap_or_default(),
            servings: row.servings,
        })
    }
}

#[derive(FromRow)]
struct MealPlanRow {
    id: String,
    owner_id: String,
    week_start: u64,
    week_end: u64,
    daily_plan: Vec<u8>,
    notes: Option<String>,
}

impl TryFrom<MealPlanRow> for MealPlan {
    type Error = anyhow::Error;

    fn try_from(row: MealPlanRow) -> Result<Self, Self::Error> {
        Ok(MealPlan {
            id: row.id,
            owner_id: row.owner_id,
            week_start: row.week_start,
            week_end: row.week_end,
            daily_plan: bitcode::decode::<DailyPlan>(&row.daily_plan)?,
            notes: row.notes,
        })
    }
}

/// SQLite-backed recipe and meal plan storage.
#[derive(Clone)]
pub struct SqliteStore {
    pub read_db: SqlitePool,
    pub write_db: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            read_db: pool.clone(),
            write_db: pool,
        }
    }

    pub fn with_pools(read_db: SqlitePool, write_db: SqlitePool) -> Self {
        Self { read_db, write_db }
    }

    /// Inserts the recipe, replacing any stored recipe with the same id.
    pub async fn save_recipe(&self, recipe: &Recipe) -> anyhow::Result<()> {
        let statement = Query::insert()
            .into_table(table::Recipe::Table)
            .columns([
                table::Recipe::Id,
                table::Recipe::OwnerId,
                table::Recipe::Title,
                table::Recipe::Ingredients,
                table::Recipe::Instructions,
                table::Recipe::CookTime,
                table::Recipe::EstimatedCalories,
                table::Recipe::Cuisine,
                table::Recipe::DietaryTags,
                table::Recipe::Difficulty,
                table::Recipe::Servings,
            ])
            .values_panic([
                recipe.id.to_owned().into(),
                recipe.owner_id.to_owned().into(),
                recipe.title.to_owned().into(),
                bitcode::encode(&recipe.ingredients).into(),
                bitcode::encode(&recipe.instructions).into(),
                recipe.cook_time.to_owned().into(),
                recipe.estimated_calories.into(),
                recipe.cuisine.to_owned().into(),
                bitcode::encode(&recipe.dietary_tags).into(),
                recipe.difficulty.to_string().into(),
                recipe.servings.into(),
            ])
            .on_conflict(
                OnConflict::column(table::Recipe::Id)
                    .update_columns([
                        table::Recipe::OwnerId,
                        table::Recipe::Title,
                        table::Recipe::Ingredients,
                        table::Recipe::Instructions,
                        table::Recipe::CookTime,
                        table::Recipe::EstimatedCalories,
                        table::Recipe::Cuisine,
                        table::Recipe::DietaryTags,
                        table::Recipe::Difficulty,
                        table::Recipe::Servings,
                    ])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::debug!(recipe_id = %recipe.id, "recipe saved");

        Ok(())
    }

    /// Inserts the meal plan, replacing any stored plan with the same id.
    pub async fn save_meal_plan(&self, plan: &MealPlan) -> anyhow::Result<()> {
        let statement = Query::insert()
            .into_table(table::MealPlan::Table)
            .columns([
                table::MealPlan::Id,
                table::MealPlan::OwnerId,
                table::MealPlan::WeekStart,
                table::MealPlan::WeekEnd,
                table::MealPlan::DailyPlan,
                table::MealPlan::Notes,
            ])
            .values_panic([
                plan.id.to_owned().into(),
                plan.owner_id.to_owned().into(),
                plan.week_start.into(),
                plan.week_end.into(),
                bitcode::encode(&plan.daily_plan).into(),
                plan.notes.to_owned().into(),
            ])
            .on_conflict(
                OnConflict::column(table::MealPlan::Id)
                    .update_columns([
                        table::MealPlan::OwnerId,
                        table::MealPlan::WeekStart,
                        table::MealPlan::WeekEnd,
                        table::MealPlan::DailyPlan,
                        table::MealPlan::Notes,
                    ])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::debug!(meal_plan_id = %plan.id, "meal plan saved");

        Ok(())
    }
}

#[async_trait::async_trait]
impl RecipeRepository for SqliteStore {
    async fn find_recipes_by_ids(
        &self,
        ids: &[String],
        owner_id: &str,
    ) -> anyhow::Result<Vec<Recipe>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let statement = Query::select()
            .columns([
                table::Recipe::Id,
                table::Recipe::OwnerId,
                table::Recipe::Title,
                table::Recipe::Ingredients,
                table::Recipe::Instructions,
                table::Recipe::CookTime,
                table::Recipe::EstimatedCalories,
                table::Recipe::Cuisine,
                table::Recipe::DietaryTags,
                table::Recipe::Difficulty,
                table::Recipe::Servings,
            ])
            .from(table::Recipe::Table)
            .and_where(Expr::col(table::Recipe::OwnerId).eq(owner_id))
            .and_where(Expr::col(table::Recipe::Id).is_in(ids.iter().map(String::as_str)))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        rows.into_iter().map(Recipe::try_from).collect()
    }

    async fn find_meal_plan_by_id(&self, id: &str) -> anyhow::Result<Option<MealPlan>> {
        let statement = Query::select()
            .columns([
                table::MealPlan::Id,
                table::MealPlan::OwnerId,
                table::MealPlan::WeekStart,
                table::MealPlan::WeekEnd,
                table::MealPlan::DailyPlan,
                table::MealPlan::Notes,
            ])
            .from(table::MealPlan::Table)
            .and_where(Expr::col(table::MealPlan::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, MealPlanRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        row.map(MealPlan::try_from).transpose()
    }
}
