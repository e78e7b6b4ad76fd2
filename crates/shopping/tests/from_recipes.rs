use smartchef_shared::{Error, recipe::IngredientCategory};
use smartchef_shopping::{Command, FromRecipesInput, ShoppingCategory};

mod helpers;

use helpers::{MemoryRepository, ingredient, recipe};

fn repository() -> MemoryRepository {
    MemoryRepository {
        recipes: vec![
            recipe(
                "r1",
                "john",
                vec![
                    ingredient("Tomato", "2 cups", IngredientCategory::Produce),
                    ingredient("Salt", "1 tsp", IngredientCategory::Spices),
                ],
            ),
            recipe(
                "r2",
                "john",
                vec![
                    ingredient("tomato", "2 cups", IngredientCategory::Produce),
                    ingredient("Tomato", "1 can", IngredientCategory::Pantry),
                    ingredient("Salt", "to taste", IngredientCategory::Spices),
                ],
            ),
            recipe("r3", "john", vec![]),
            recipe(
                "r4",
                "albert",
                vec![ingredient("Milk", "1 cup", IngredientCategory::Dairy)],
            ),
        ],
        meal_plans: vec![],
    }
}

fn input(ids: &[&str]) -> FromRecipesInput {
    FromRecipesInput {
        recipe_ids: ids.iter().map(|id| id.to_string()).collect(),
    }
}

#[tokio::test]
async fn test_merges_shared_ingredients() -> anyhow::Result<()> {
    let command = Command(repository());
    let items = command.from_recipes("john", input(&["r1", "r2"])).await?;

    let summary: Vec<_> = items
        .iter()
        .map(|i| (i.name.as_str(), i.amount.as_str(), i.category))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("Tomato", "4 cups", ShoppingCategory::Produce),
            ("Salt", "1 tsp", ShoppingCategory::Spices),
            ("Tomato", "1 can", ShoppingCategory::Pantry),
        ]
    );

    for item in &items {
        assert_eq!(item.quantity, 1);
        assert!(!item.checked);
        assert_eq!(item.id.len(), 26);
    }
    assert_eq!(items[0].unit, "cups");

    Ok(())
}

#[tokio::test]
async fn test_duplicate_ids_count_once() -> anyhow::Result<()> {
    let command = Command(repository());
    let items = command.from_recipes("john", input(&["r1", "r1"])).await?;

    assert_eq!(items[0].amount, "2 cups");

    Ok(())
}

#[tokio::test]
async fn test_caller_order_decides_item_order() -> anyhow::Result<()> {
    let command = Command(repository());
    let items = command.from_recipes("john", input(&["r2", "r1"])).await?;

    assert_eq!(items[0].name, "tomato");
    assert_eq!(items[0].amount, "4 cups");
    assert_eq!(items[1].category, ShoppingCategory::Pantry);

    Ok(())
}

#[tokio::test]
async fn test_empty_ids_rejected() {
    let command = Command(repository());
    let result = command.from_recipes("john", input(&[])).await;

    assert!(matches!(result, Err(Error::Validate(_))));
}

#[tokio::test]
async fn test_foreign_recipe_rejects_all() {
    let command = Command(repository());

    let result = command.from_recipes("john", input(&["r1", "r4"])).await;
    assert!(matches!(result, Err(Error::NotFound(_))));

    let result = command.from_recipes("john", input(&["r1", "missing"])).await;
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn test_no_ingredients_is_user_error() {
    let command = Command(repository());
    let result = command.from_recipes("john", input(&["r3"])).await;

    assert!(
        matches!(result, Err(Error::User(msg)) if msg == "No ingredients found in the selected recipes")
    );
}
