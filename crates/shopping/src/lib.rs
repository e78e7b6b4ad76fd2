pub mod aggregation;
pub mod amount;
pub mod categorization;
mod command;
pub mod grocery;

pub use aggregation::IngredientAggregationService;
pub use amount::ParsedAmount;
pub use categorization::{Categorized, ShoppingCategory};
pub use command::*;
pub use grocery::{GroceryItem, GroceryList, ItemUpdate, NewItem};
