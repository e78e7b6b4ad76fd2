use smartchef_shared::recipe::{
    BASELINE_SERVINGS, Difficulty, GeneratedRecipe, Ingredient, IngredientCategory,
};

use crate::{
    provider::{GenerationProvider, ProviderError},
    request::GenerationRequest,
};
use IngredientCategory::{Dairy, Meat, Pantry, Produce, Spices};

struct Template {
    keyword: &'static str,
    title: &'static str,
    ingredients: &'static [(&'static str, &'static str, IngredientCategory)],
    instructions: &'static [&'static str],
    cook_time: &'static str,
    estimated_calories: u32,
    cuisine: &'static str,
    dietary_tags: &'static [&'static str],
    difficulty: Difficulty,
}

static TEMPLATES: &[Template] = &[
    Template {
        keyword: "mushroom",
        title: "Garlic Butter Mushroom Skillet",
        ingredients: &[
            ("Mushrooms", "16 oz", Produce),
            ("Garlic", "4 cloves", Produce),
            ("Butter", "3 tbsp", Dairy),
            ("Fresh thyme", "2 sprigs", Produce),
            ("Parsley", "2 tbsp", Produce),
            ("Lemon juice", "1 tbsp", Produce),
        ],
        instructions: &[
            "Wipe the mushrooms clean and slice them thickly",
            "Melt the butter with the olive oil in a large skillet over medium-high heat",
            "Add the mushrooms in a single layer and cook undisturbed for 4 minutes until golden",
            "Stir, add minced garlic and thyme, and cook for another 3 minutes",
            "Season with salt and pepper, then finish with lemon juice",
            "Sprinkle with chopped parsley and serve warm",
        ],
        cook_time: "25 minutes",
        estimated_calories: 220,
        cuisine: "French",
        dietary_tags: &["vegetarian", "gluten-free"],
        difficulty: Difficulty::Easy,
    },
    Template {
        keyword: "onion",
        title: "Caramelized Onion Frittata",
        ingredients: &[
            ("Onions", "3 large", Produce),
            ("Eggs", "8 large", Dairy),
            ("Parmesan cheese", "0.5 cup", Dairy),
            ("Milk", "0.25 cup", Dairy),
            ("Fresh thyme", "1 tsp", Produce),
        ],
        instructions: &[
            "Thinly slice the onions",
            "Heat the olive oil in an oven-safe skillet over medium-low heat",
            "Cook the onions slowly for 20 minutes, stirring often, until deep golden",
            "Whisk the eggs with milk, parmesan, thyme, salt and pepper",
            "Pour the eggs over the onions and cook for 5 minutes until the edges set",
            "Finish under the broiler for 3 minutes and let rest before slicing",
        ],
        cook_time: "35 minutes",
        estimated_calories: 310,
        cuisine: "Italian",
        dietary_tags: &["vegetarian", "gluten-free"],
        difficulty: Difficulty::Medium,
    },
    Template {
        keyword: "tomato",
        title: "Fresh Tomato Basil Pasta",
        ingredients: &[
            ("Fresh tomatoes", "4 large", Produce),
            ("Basil leaves", "1 cup", Produce),
            ("Spaghetti", "1 pound", Pantry),
            ("Garlic", "3 cloves", Produce),
            ("Parmesan cheese", "0.5 cup", Dairy),
        ],
        instructions: &[
            "Bring a large pot of salted water to boil and cook spaghetti according to package directions",
            "Meanwhile, dice tomatoes and mince garlic",
            "Heat olive oil in a large skillet over medium heat",
            "Add minced garlic and cook until fragrant, about 1 minute",
            "Add diced tomatoes and cook for 5-7 minutes until they start to break down",
            "Tear basil leaves and add to the skillet",
            "Drain pasta and add to the skillet with tomato mixture",
            "Toss to combine and add grated parmesan cheese",
            "Season with salt and pepper to taste",
        ],
        cook_time: "20 minutes",
        estimated_calories: 450,
        cuisine: "Italian",
        dietary_tags: &["vegetarian"],
        difficulty: Difficulty::Easy,
    },
    Template {
        keyword: "chicken",
        title: "Spicy Garlic Chicken Stir-Fry",
        ingredients: &[
            ("Chicken breast", "2 pieces", Meat),
            ("Garlic", "4 cloves", Produce),
            ("Ginger", "1 inch", Produce),
            ("Soy sauce", "3 tbsp", Pantry),
            ("Bell peppers", "2 medium", Produce),
            ("Onion", "1 medium", Produce),
        ],
        instructions: &[
            "Cut chicken into bite-sized pieces and season with salt and pepper",
            "Heat oil in a large wok or skillet over high heat",
            "Add minced garlic and ginger, stir-fry for 30 seconds until fragrant",
            "Add chicken pieces and cook until golden brown, about 5-7 minutes",
            "Add sliced bell peppers and onion, stir-fry for 3-4 minutes",
            "Pour in soy sauce and stir to combine",
            "Cook for another 2 minutes until vegetables are tender-crisp",
        ],
        cook_time: "25 minutes",
        estimated_calories: 350,
        cuisine: "Asian",
        dietary_tags: &["high-protein", "gluten-free"],
        difficulty: Difficulty::Easy,
    },
    Template {
        keyword: "beef",
        title: "Classic Beef Tacos",
        ingredients: &[
            ("Ground beef", "1 pound", Meat),
            ("Taco seasoning", "1 packet", Spices),
            ("Tortillas", "8 medium", Pantry),
            ("Lettuce", "1 head", Produce),
            ("Tomatoes", "2 medium", Produce),
            ("Onion", "1 medium", Produce),
            ("Cheese", "1 cup shredded", Dairy),
            ("Sour cream", "0.5 cup", Dairy),
        ],
        instructions: &[
            "Heat a large skillet over medium-high heat",
            "Add ground beef and cook until browned, breaking it up with a spoon",
            "Drain excess fat and add taco seasoning with half a cup of water",
            "Simmer for 5 minutes until sauce thickens",
            "Warm tortillas in a dry skillet or microwave",
            "Chop lettuce, tomatoes, and onion",
            "Assemble tacos with beef, vegetables, cheese, and sour cream",
        ],
        cook_time: "15 minutes",
        estimated_calories: 380,
        cuisine: "Mexican",
        dietary_tags: &["high-protein"],
        difficulty: Difficulty::Easy,
    },
];

/// Cuisine names that select a template when no ingredient keyword matched.
const CUISINE_HINTS: &[(&str, &'static str)] = &[("italian", "tomato"), ("mexican", "beef")];

/// Diets that select a template when no ingredient keyword matched. Checked
/// before cuisine so a vegetarian request never lands on a meat template.
const DIET_HINTS: &[(&str, &'static str)] = &[("vegetarian", "tomato"), ("vegan", "tomato")];

const PANTRY_STAPLES: &[(&str, &str, IngredientCategory)] = &[
    ("Olive oil", "2 tbsp", Pantry),
    ("Salt", "1 tsp", Spices),
    ("Black pepper", "0.5 tsp", Spices),
];

/// Deterministic recipe builder used when the primary provider fails.
///
/// Picks a template by ingredient keyword, then by diet or cuisine, and otherwise
/// builds a stir-fry from the requested ingredients. Recipes are written for
/// four servings and always end with oil, salt and pepper.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalGenerator;

impl LocalGenerator {
    pub fn generate_recipe(&self, request: &GenerationRequest) -> GeneratedRecipe {
        let mut recipe = match Self::select_template(request) {
            Some(template) => Self::from_template(template),
            None => Self::stir_fry(request),
        };

        recipe.ingredients.extend(
            PANTRY_STAPLES
                .iter()
                .map(|(name, amount, category)| Ingredient::new(*name, *amount, *category)),
        );

        recipe
    }

    fn select_template(request: &GenerationRequest) -> Option<&'static Template> {
        for ingredient in request.ingredient_names() {
            let ingredient = ingredient.to_lowercase();

            if let Some(template) = TEMPLATES.iter().find(|t| ingredient.contains(t.keyword)) {
                return Some(template);
            }
        }

        let keyword = hint(request.diet(), DIET_HINTS)
            .or_else(|| hint(request.cuisine(), CUISINE_HINTS))?;

        TEMPLATES.iter().find(|t| t.keyword == keyword)
    }

    fn from_template(template: &Template) -> GeneratedRecipe {
        GeneratedRecipe {
            title: template.title.to_owned(),
            ingredients: template
                .ingredients
                .iter()
                .map(|(name, amount, category)| Ingredient::new(*name, *amount, *category))
                .collect(),
            instructions: template.instructions.iter().map(|s| s.to_string()).collect(),
            cook_time: template.cook_time.to_owned(),
            estimated_calories: template.estimated_calories,
            cuisine: template.cuisine.to_owned(),
            dietary_tags: template.dietary_tags.iter().map(|s| s.to_string()).collect(),
            difficulty: template.difficulty,
            servings: BASELINE_SERVINGS,
        }
    }

    fn stir_fry(request: &GenerationRequest) -> GeneratedRecipe {
        let names: Vec<String> = request
            .ingredient_names()
            .into_iter()
            .filter(|name| !name.is_empty())
            .map(title_case)
            .collect();

        let featured = match names.as_slice() {
            [] => "Pantry".to_owned(),
            [only] => only.to_owned(),
            [first, second] => format!("{first} and {second}"),
            [first, second, ..] => format!("{first}, {second} and More"),
        };

        let listed = names.join(", ").to_lowercase();

        GeneratedRecipe {
            title: format!("{featured} Stir-Fry"),
            ingredients: names
                .iter()
                .map(|name| Ingredient::new(name, "1 cup", IngredientCategory::infer(name)))
                .collect(),
            instructions: vec![
                format!("Wash and cut the {listed} into bite-sized pieces"),
                "Heat the olive oil in a large skillet or wok over medium-high heat".to_owned(),
                "Add the firmest ingredients first and stir-fry for 3-4 minutes".to_owned(),
                "Add the remaining ingredients and cook for 5-6 minutes until tender".to_owned(),
                "Season with salt and black pepper to taste".to_owned(),
                "Serve hot".to_owned(),
            ],
            cook_time: "20 minutes".to_owned(),
            estimated_calories: 300,
            cuisine: request.cuisine().unwrap_or("General").to_owned(),
            dietary_tags: request
                .dietary_preferences
                .iter()
                .map(|d| d.trim().to_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
            difficulty: Difficulty::Easy,
            servings: BASELINE_SERVINGS,
        }
    }
}

#[async_trait::async_trait]
impl GenerationProvider for LocalGenerator {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedRecipe, ProviderError> {
        Ok(self.generate_recipe(request))
    }
}

fn hint(value: Option<&str>, hints: &[(&str, &'static str)]) -> Option<&'static str> {
    let value = value?.to_lowercase();

    hints
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, keyword)| *keyword)
}

/// "bok choy" -> "Bok Choy"
fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
