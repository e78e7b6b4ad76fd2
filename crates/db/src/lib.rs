mod schema;
mod store;
pub mod table;

pub use schema::create_tables;
pub use store::SqliteStore;
