use smartchef_shared::recipe::{Difficulty, GeneratedRecipe};

use crate::request::{DEFAULT_MAX_COOK_TIME, GenerationRequest};

/// Applies the caller's cook time cap, difficulty and servings to a
/// generated recipe, whichever provider produced it.
///
/// A cook time without any number counts as the default cap of 60 minutes.
pub fn enforce(recipe: &mut GeneratedRecipe, request: &GenerationRequest) {
    if let Some(cap) = request.max_cook_time {
        let minutes = recipe
            .cook_time_minutes()
            .unwrap_or(u32::from(DEFAULT_MAX_COOK_TIME));

        if minutes > u32::from(cap) {
            tracing::debug!(minutes, cap, "cook time clamped");
            recipe.cook_time = format!("{cap} minutes");
        }
    }

    if let Some(difficulty) = request
        .difficulty_override()
        .and_then(|d| d.parse::<Difficulty>().ok())
    {
        recipe.difficulty = difficulty;
    }

    if let Some(servings) = request.servings {
        recipe.servings = servings;
    }
}
