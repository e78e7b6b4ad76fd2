mod error;
pub mod mealplan;
pub mod recipe;
mod repository;

pub use error::*;
pub use repository::*;
