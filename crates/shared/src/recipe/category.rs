use super::IngredientCategory;

impl IngredientCategory {
    /// Guess a category from an ingredient name using a fixed keyword table.
    ///
    /// The full (trimmed, lowercased) name is tried first, then its last word,
    /// so "fresh basil" resolves like "basil". Names that match nothing are
    /// `Other`.
    pub fn infer(name: &str) -> IngredientCategory {
        let normalized = name.trim().to_lowercase();

        if let Some(category) = Self::lookup(&normalized) {
            return category;
        }

        normalized
            .split_whitespace()
            .last()
            .and_then(Self::lookup)
            .unwrap_or_default()
    }

    fn lookup(name: &str) -> Option<IngredientCategory> {
        if is_spice(name) {
            return Some(IngredientCategory::Spices);
        }

        if is_produce(name) {
            return Some(IngredientCategory::Produce);
        }

        if is_dairy(name) {
            return Some(IngredientCategory::Dairy);
        }

        if is_meat(name) {
            return Some(IngredientCategory::Meat);
        }

        if is_pantry(name) {
            return Some(IngredientCategory::Pantry);
        }

        None
    }
}

fn is_produce(name: &str) -> bool {
    matches!(
        name,
        "tomato" | "tomatoes"
            | "onion" | "onions"
            | "garlic"
            | "lettuce"
            | "carrot" | "carrots"
            | "celery"
            | "bell pepper" | "bell peppers"
            | "cucumber" | "cucumbers"
            | "zucchini"
            | "broccoli"
            | "cauliflower"
            | "spinach"
            | "kale"
            | "cabbage"
            | "potato" | "potatoes"
            | "sweet potato" | "sweet potatoes"
            | "mushroom" | "mushrooms"
            | "green beans"
            | "peas"
            | "corn"
            | "avocado" | "avocados"
            | "eggplant"
            | "squash"
            | "jalapeño" | "jalapeno"
            | "ginger"
            | "cilantro"
            | "parsley"
            | "basil"
            | "mint"
            | "apple" | "apples"
            | "banana" | "bananas"
            | "lemon" | "lemons"
            | "lime" | "limes"
            | "mango" | "mangoes"
    )
}

fn is_dairy(name: &str) -> bool {
    matches!(
        name,
        "milk"
            | "cream"
            | "heavy cream"
            | "sour cream"
            | "butter"
            | "cheese"
            | "cheddar cheese"
            | "mozzarella cheese"
            | "parmesan cheese"
            | "feta cheese"
            | "cream cheese"
            | "yogurt"
            | "greek yogurt"
            | "egg" | "eggs"
    )
}

fn is_meat(name: &str) -> bool {
    matches!(
        name,
        "chicken"
            | "chicken breast" | "chicken breasts"
            | "chicken thigh" | "chicken thighs"
            | "turkey"
            | "beef"
            | "ground beef"
            | "steak"
            | "pork"
            | "bacon"
            | "ham"
            | "sausage"
            | "lamb"
            | "fish"
            | "salmon"
            | "tuna"
            | "cod"
            | "shrimp"
            | "prawns"
    )
}

fn is_pantry(name: &str) -> bool {
    matches!(
        name,
        "flour"
            | "rice"
            | "pasta"
            | "spaghetti"
            | "noodles"
            | "oats"
            | "quinoa"
            | "sugar"
            | "brown sugar"
            | "olive oil"
            | "vegetable oil"
            | "oil"
            | "vinegar"
            | "soy sauce"
            | "tomato sauce"
            | "tomato paste"
            | "chicken broth"
            | "vegetable broth"
            | "beans"
            | "black beans"
            | "chickpeas"
            | "lentils"
            | "honey"
            | "bread"
            | "tortillas"
            | "tofu"
    )
}

fn is_spice(name: &str) -> bool {
    matches!(
        name,
        "salt"
            | "pepper"
            | "black pepper"
            | "paprika"
            | "cumin"
            | "coriander"
            | "turmeric"
            | "cinnamon"
            | "nutmeg"
            | "oregano"
            | "thyme"
            | "rosemary"
            | "chili powder"
            | "cayenne pepper"
            | "garlic powder"
            | "onion powder"
            | "curry powder"
    )
}
