//! Partstock Core - PC-parts inventory and pre-built configuration catalog
//!
//! This crate provides the storage-facing core of the partstock system:
//!
//! - **Item**: Inventory items keyed by `(category, id)` with three fixed
//!   columns and an open-ended attribute bag stored as a JSON sidecar
//! - **Configs**: Pre-built configuration entries keyed by
//!   `(cpu_vendor, game, budget_tier)` with an arbitrary JSON payload
//! - **Merge**: Pure upsert merge engine - keep-old-if-absent per fixed
//!   column, whole-bag replacement for attributes
//! - **Project**: Read projectors rebuilding the nested mapping views from
//!   flat stored rows
//! - **Persistence**: SQLite-based repository with composite primary keys
//!   and per-key upsert/delete
//!
//! The merge engine and projectors are stateless; the repository
//! exclusively owns persisted state.

pub mod configs;
pub mod error;
pub mod item;
pub mod merge;
pub mod persistence;
pub mod project;

pub use configs::ConfigEntry;
pub use error::{CatalogError, Result, SerializationError, StorageError};
pub use item::{InventoryItem, ItemUpdate};
pub use merge::merge_item;
pub use persistence::{Repository, Schema};
pub use project::{project_configs, project_inventory};
