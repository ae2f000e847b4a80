//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod category;
pub mod product;
pub mod supplier;

// Re-export specific types to avoid conflicts
pub use category::Entity as Category;
pub use product::Entity as Product;
pub use supplier::Entity as Supplier;
