//! SQLite persistence for the catalog

mod repository;
mod schema;

pub use repository::Repository;
pub use schema::{Schema, SCHEMA_VERSION};
