use serde::{Deserialize, Serialize};
use smartchef_shared::recipe::Ingredient;
use std::collections::BTreeMap;
use validator::Validate;

use crate::{
    amount,
    categorization::{self, Categorized, ShoppingCategory},
};

pub const DEFAULT_LIST_NAME: &str = "My Grocery List";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: String,
    pub name: String,
    pub amount: String,
    pub category: ShoppingCategory,
    pub quantity: u32,
    pub unit: String,
    pub checked: bool,
}

impl GroceryItem {
    /// Fresh unchecked item with its own ULID; `unit` is the amount with
    /// digits and periods removed.
    pub fn from_ingredient(ingredient: &Ingredient) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            name: ingredient.name.to_owned(),
            amount: ingredient.amount.to_owned(),
            category: ingredient.shopping_category(),
            quantity: 1,
            unit: amount::strip_quantity(&ingredient.amount),
            checked: false,
        }
    }
}

impl Categorized for GroceryItem {
    fn shopping_category(&self) -> ShoppingCategory {
        self.category
    }
}

#[derive(Debug, Default, Clone, Validate, Deserialize)]
pub struct ItemUpdate {
    pub checked: Option<bool>,
    #[validate(range(min = 1))]
    pub quantity: Option<u32>,
    pub unit: Option<String>,
}

#[derive(Debug, Validate)]
pub struct NewItem {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub category: String,
    #[validate(range(min = 1))]
    pub quantity: u32,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryList {
    pub name: String,
    pub items: Vec<GroceryItem>,
}

impl Default for GroceryList {
    fn default() -> Self {
        Self::new(vec![])
    }
}

impl GroceryList {
    pub fn new(items: Vec<GroceryItem>) -> Self {
        Self {
            name: DEFAULT_LIST_NAME.to_owned(),
            items,
        }
    }

    pub fn from_ingredients(ingredients: &[Ingredient]) -> Self {
        Self::new(ingredients.iter().map(GroceryItem::from_ingredient).collect())
    }

    fn item_mut(&mut self, item_id: &str) -> smartchef_shared::Result<&mut GroceryItem> {
        match self.items.iter_mut().find(|item| item.id == item_id) {
            Some(item) => Ok(item),
            None => smartchef_shared::not_found!("Item {item_id} not found"),
        }
    }

    /// Flips the checked flag and returns its new value.
    pub fn toggle(&mut self, item_id: &str) -> smartchef_shared::Result<bool> {
        let item = self.item_mut(item_id)?;
        item.checked = !item.checked;

        Ok(item.checked)
    }

    pub fn update_item(
        &mut self,
        item_id: &str,
        input: ItemUpdate,
    ) -> smartchef_shared::Result<&GroceryItem> {
        input.validate()?;

        let item = self.item_mut(item_id)?;

        if let Some(checked) = input.checked {
            item.checked = checked;
        }

        if let Some(quantity) = input.quantity {
            item.quantity = quantity;
        }

        if let Some(unit) = input.unit {
            item.unit = unit.trim().to_owned();
        }

        Ok(item)
    }

    pub fn remove(&mut self, item_id: &str) -> smartchef_shared::Result<GroceryItem> {
        let Some(pos) = self.items.iter().position(|item| item.id == item_id) else {
            smartchef_shared::not_found!("Item {item_id} not found");
        };

        Ok(self.items.remove(pos))
    }

    pub fn add_item(&mut self, input: NewItem) -> smartchef_shared::Result<&GroceryItem> {
        input.validate()?;

        let name = input.name.trim();
        if name.is_empty() {
            smartchef_shared::user!("Item name is required");
        }

        let unit = input.unit.trim();
        let amount = if unit.is_empty() {
            input.quantity.to_string()
        } else {
            format!("{} {unit}", input.quantity)
        };

        self.items.push(GroceryItem {
            id: ulid::Ulid::new().to_string(),
            name: name.to_owned(),
            amount,
            category: categorization::classify(&input.category),
            quantity: input.quantity,
            unit: unit.to_owned(),
            checked: false,
        });

        let index = self.items.len() - 1;
        Ok(&self.items[index])
    }

    /// Items per section for display, empty sections omitted.
    pub fn grouped(&self) -> BTreeMap<ShoppingCategory, Vec<GroceryItem>> {
        categorization::group_by_category(&self.items)
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }
}
