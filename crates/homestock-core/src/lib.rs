//! Core library for the Homestock home inventory.
//!
//! This crate provides the local persistent inventory store: the SQLite
//! schema for items, categories and locations, default-data seeding, the
//! validation of raw form input, and the query/mutation operations front ends
//! call.
//!
//! # Quick Start
//!
//! ```rust
//! use homestock_core::{params::ItemDraft, StoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Open (or create) the store; the schema is initialized here
//! let store = StoreBuilder::new()
//!     .with_database_path(Some("inventory.db"))
//!     .build()
//!     .await?;
//!
//! // Default categories and locations; safe to call on every start
//! store.seed_defaults().await?;
//!
//! let tools = store
//!     .list_categories()
//!     .await?
//!     .into_iter()
//!     .find(|c| c.name == "Tools");
//!
//! let item = store
//!     .create_item(ItemDraft {
//!         name: "Cordless Drill".to_string(),
//!         quantity: Some("2".to_string()),
//!         category_id: tools.map(|c| c.id),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{}", item);
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    Categories, CreateResult, DeleteResult, Items, LocalDateTime, Locations, StoreStatus,
    UpdateResult,
};
pub use error::{ErrorKind, InventoryError, Result};
pub use models::{Category, Item, Location, NewItem, SeedReport};
pub use params::{
    parse_id, CreateCategory, CreateLocation, DeleteItem, EditItem, Id, ItemDraft, SearchItems,
};
pub use store::{Store, StoreBuilder};
