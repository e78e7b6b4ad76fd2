use crate::request::{DEFAULT_DIFFICULTY, DEFAULT_MAX_COOK_TIME, GenerationRequest};
use smartchef_shared::recipe::BASELINE_SERVINGS;

/// Instruction text sent to the primary provider.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let ingredients = request.ingredient_names().join(", ");
    let diet = request.diet().unwrap_or("none");
    let cuisine = request.cuisine().unwrap_or("any");
    let max_cook_time = request.max_cook_time.unwrap_or(DEFAULT_MAX_COOK_TIME);
    let difficulty = request
        .difficulty
        .as_deref()
        .map(|d| d.trim().to_lowercase())
        .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_owned());
    let servings = request.servings.unwrap_or(BASELINE_SERVINGS);

    format!(
        r#"You are YourSmartChef, a helpful AI chef. Given the ingredients: {ingredients}, dietary preferences: {diet}, cuisine: {cuisine}, max cook time: {max_cook_time} minutes, difficulty level: {difficulty}, servings: {servings}, generate a recipe in JSON format:

{{
  "title": "Recipe Title",
  "ingredients": [
    {{
      "name": "Ingredient Name",
      "amount": "Amount needed",
      "category": "produce|dairy|meat|pantry|spices|other"
    }}
  ],
  "instructions": [
    "Step 1 description",
    "Step 2 description"
  ],
  "cookTime": "XX minutes",
  "estimatedCalories": 500,
  "cuisine": "Cuisine type",
  "dietaryTags": ["vegan", "vegetarian", "gluten-free"],
  "difficulty": "easy|medium|hard",
  "servings": {servings}
}}

Important guidelines:
- Use only the provided ingredients plus common pantry staples (salt, pepper, oil, etc.)
- Ensure the recipe is realistic and achievable
- Provide clear, step-by-step instructions
- Estimate calories accurately
- Categorize ingredients properly
- Make sure cook time is within the specified limit ({max_cook_time} minutes maximum)
- Set difficulty level to "{difficulty}" (easy/medium/hard)
- Set servings to exactly {servings}
- Add appropriate dietary tags
- Return ONLY valid JSON, no additional text"#
    )
}
