use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    OwnerId,
    Title,
    Ingredients,
    Instructions,
    CookTime,
    EstimatedCalories,
    Cuisine,
    DietaryTags,
    Difficulty,
    Servings,
}

#[derive(Iden, Clone)]
pub enum MealPlan {
    Table,
    Id,
    OwnerId,
    WeekStart,
    WeekEnd,
    DailyPlan,
    Notes,
}
