use regex::Regex;
use smartchef_shared::recipe::GeneratedRecipe;
use std::sync::LazyLock;

static SCALABLE_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+)?)\s+(.+)$").expect("scalable amount regex"));

/// Rescales ingredient amounts from `baseline` servings to the recipe's
/// current servings.
///
/// Only amounts shaped like "{number} {rest}" change; the number is
/// multiplied and rounded to one decimal. "to taste", "1/2 cup" and "200g"
/// are left alone.
pub fn scale(recipe: &mut GeneratedRecipe, baseline: u32) {
    if baseline == 0 || recipe.servings == baseline {
        return;
    }

    let multiplier = f64::from(recipe.servings) / f64::from(baseline);

    for ingredient in recipe.ingredients.iter_mut() {
        if let Some(scaled) = scale_amount(&ingredient.amount, multiplier) {
            ingredient.amount = scaled;
        }
    }

    tracing::debug!(baseline, servings = recipe.servings, multiplier, "ingredients scaled");
}

fn scale_amount(amount: &str, multiplier: f64) -> Option<String> {
    let caps = SCALABLE_AMOUNT.captures(amount)?;
    let quantity = caps[1].parse::<f64>().ok()?;
    let scaled = (quantity * multiplier * 10.0).round() / 10.0;

    Some(format!("{scaled} {}", &caps[2]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartchef_shared::recipe::{Difficulty, Ingredient, IngredientCategory};

    fn recipe(servings: u32, amounts: &[&str]) -> GeneratedRecipe {
        GeneratedRecipe {
            title: "Soup".to_owned(),
            ingredients: amounts
                .iter()
                .map(|a| Ingredient::new("Thing", *a, IngredientCategory::Other))
                .collect(),
            instructions: vec!["Boil".to_owned()],
            cook_time: "30 minutes".to_owned(),
            estimated_calories: 200,
            cuisine: "General".to_owned(),
            dietary_tags: vec![],
            difficulty: Difficulty::Easy,
            servings,
        }
    }

    fn amounts(recipe: &GeneratedRecipe) -> Vec<&str> {
        recipe.ingredients.iter().map(|i| i.amount.as_str()).collect()
    }

    #[test]
    fn test_doubles() {
        let mut soup = recipe(8, &["2 cups", "0.5 tsp", "16 oz", "1 cup shredded"]);
        scale(&mut soup, 4);
        assert_eq!(amounts(&soup), vec!["4 cups", "1 tsp", "32 oz", "2 cup shredded"]);
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        let mut soup = recipe(3, &["1 cup", "2 tbsp"]);
        scale(&mut soup, 4);
        assert_eq!(amounts(&soup), vec!["0.8 cup", "1.5 tbsp"]);
    }

    #[test]
    fn test_unscalable_amounts_untouched() {
        let mut soup = recipe(8, &["to taste", "1/2 cup", "200g", "3"]);
        scale(&mut soup, 4);
        assert_eq!(amounts(&soup), vec!["to taste", "1/2 cup", "200g", "3"]);
    }

    #[test]
    fn test_same_servings_is_noop() {
        let mut soup = recipe(4, &["1.25 cups"]);
        scale(&mut soup, 4);
        assert_eq!(amounts(&soup), vec!["1.25 cups"]);
    }
}
