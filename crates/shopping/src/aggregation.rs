use smartchef_shared::recipe::{Ingredient, Recipe};
use std::collections::HashMap;

use crate::amount;

/// Ingredient Aggregation Service
///
/// Stateless domain service that folds the ingredients of several recipes into
/// one shopping list. Ingredients merge when their [`Ingredient::key`] matches
/// (case-insensitive name plus category) and their amounts are combined with
/// [`amount::combine`]:
/// - "Tomato 2 cups" + "tomato 2 cups" = "Tomato 4 cups"
/// - "Salt 1 tsp" + "Salt to taste" = "Salt 1 tsp"
/// - "Tomato" (produce) + "Tomato" (pantry) = 2 separate line items
///
/// The first occurrence of a key decides the item's position and its name
/// spelling.
pub struct IngredientAggregationService;

impl IngredientAggregationService {
    pub fn aggregate<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> Vec<Ingredient> {
        Self::aggregate_lists(recipes.into_iter().map(|r| r.ingredients.as_slice()))
    }

    pub fn aggregate_lists<'a>(
        lists: impl IntoIterator<Item = &'a [Ingredient]>,
    ) -> Vec<Ingredient> {
        let mut items: Vec<Ingredient> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for ingredient in lists.into_iter().flatten() {
            let key = ingredient.key();

            match positions.get(&key) {
                Some(&pos) => {
                    let existing = &mut items[pos];
                    existing.amount = amount::combine(&existing.amount, &ingredient.amount);
                }
                None => {
                    positions.insert(key, items.len());
                    items.push(ingredient.clone());
                }
            }
        }

        items
    }
}
