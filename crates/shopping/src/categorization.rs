use serde::{Deserialize, Serialize};
use smartchef_shared::recipe::{Ingredient, IngredientCategory};
use std::collections::BTreeMap;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Shopping list section, declared in store-walk order.
///
/// The derived `Ord` follows declaration order, so a `BTreeMap` keyed by
/// this enum always iterates Produce first and Other last.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum ShoppingCategory {
    Produce,
    Dairy,
    Meat,
    Pantry,
    Frozen,
    Beverages,
    Snacks,
    Bakery,
    #[strum(serialize = "Canned Goods")]
    #[serde(rename = "Canned Goods")]
    CannedGoods,
    Spices,
    #[default]
    Other,
}

impl From<IngredientCategory> for ShoppingCategory {
    fn from(value: IngredientCategory) -> Self {
        classify(value.as_ref())
    }
}

/// Title-cases every word of a category token: "canned goods" -> "Canned Goods".
/// Blank input becomes "Other".
pub fn capitalize(token: &str) -> String {
    let words: Vec<String> = token
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect();

    if words.is_empty() {
        return ShoppingCategory::Other.to_string();
    }

    words.join(" ")
}

/// Maps any category token onto the fixed section list; unknown tokens are `Other`.
pub fn classify(token: &str) -> ShoppingCategory {
    capitalize(token).parse().unwrap_or_default()
}

/// Anything that can be placed in a shopping list section.
pub trait Categorized {
    fn shopping_category(&self) -> ShoppingCategory;
}

impl Categorized for Ingredient {
    fn shopping_category(&self) -> ShoppingCategory {
        self.category.into()
    }
}

/// Groups items for display: sections without items are left out.
pub fn group_by_category<T: Categorized + Clone>(
    items: &[T],
) -> BTreeMap<ShoppingCategory, Vec<T>> {
    let mut groups: BTreeMap<ShoppingCategory, Vec<T>> = BTreeMap::new();

    for item in items {
        groups
            .entry(item.shopping_category())
            .or_default()
            .push(item.clone());
    }

    groups
}

/// Groups items with every section present as a key, empty or not.
pub fn group_all_categories<T: Categorized + Clone>(
    items: &[T],
) -> BTreeMap<ShoppingCategory, Vec<T>> {
    let mut groups: BTreeMap<ShoppingCategory, Vec<T>> = ShoppingCategory::VARIANTS
        .iter()
        .map(|category| (*category, Vec::new()))
        .collect();

    for item in items {
        groups
            .entry(item.shopping_category())
            .or_default()
            .push(item.clone());
    }

    groups
}
