use sea_query::{
    ColumnDef, Index, IndexCreateStatement, SqliteQueryBuilder, Table, TableCreateStatement,
};
use sqlx::SqlitePool;

use crate::table::{MealPlan, Recipe};

fn create_recipe_table() -> TableCreateStatement {
    Table::create()
        .table(Recipe::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Recipe::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Recipe::OwnerId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(Recipe::Title).string().not_null())
        .col(ColumnDef::new(Recipe::Ingredients).blob().not_null())
        .col(ColumnDef::new(Recipe::Instructions).blob().not_null())
        .col(ColumnDef::new(Recipe::CookTime).string().not_null())
        .col(
            ColumnDef::new(Recipe::EstimatedCalories)
                .integer()
                .not_null()
                .default(0),
        )
        .col(ColumnDef::new(Recipe::Cuisine).string().not_null())
        .col(ColumnDef::new(Recipe::DietaryTags).blob().not_null())
        .col(ColumnDef::new(Recipe::Difficulty).string().not_null())
        .col(
            ColumnDef::new(Recipe::Servings)
                .integer()
                .not_null()
                .default(4),
        )
        .to_owned()
}

fn create_recipe_owner_idx() -> IndexCreateStatement {
    Index::create()
        .if_not_exists()
        .name("idx_recipe_owner_id")
        .table(Recipe::Table)
        .col(Recipe::OwnerId)
        .to_owned()
}

fn create_meal_plan_table() -> TableCreateStatement {
    Table::create()
        .table(MealPlan::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(MealPlan::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(MealPlan::OwnerId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(MealPlan::WeekStart).big_integer().not_null())
        .col(ColumnDef::new(MealPlan::WeekEnd).big_integer().not_null())
        .col(ColumnDef::new(MealPlan::DailyPlan).blob().not_null())
        .col(ColumnDef::new(MealPlan::Notes).string().null())
        .to_owned()
}

/// Creates the recipe and meal plan tables when they do not exist yet.
pub async fn create_tables(pool: &SqlitePool) -> anyhow::Result<()> {
    let statements = [
        create_recipe_table().to_string(SqliteQueryBuilder),
        create_recipe_owner_idx().to_string(SqliteQueryBuilder),
        create_meal_plan_table().to_string(SqliteQueryBuilder),
    ];

    for statement in statements {
        sqlx::query(&statement).execute(pool).await?;
    }

    tracing::debug!("recipe and meal plan tables ready");

    Ok(())
}
