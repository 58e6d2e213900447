//! High-level store API for the inventory.
//!
//! [`Store`] is the single entry point front ends call. It owns nothing but
//! the database path: every operation opens a connection on a blocking
//! thread, runs one statement or one short transaction, and returns.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │  (handlers)     │───▶│ (item_ops,      │───▶│   (via db/)     │
//! │                 │    │  catalog_ops)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Display wrappers        Async contract        SQLite statements
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Store`] instances with configuration
//! - [`item_ops`]: Item create/read/update/delete and search
//! - [`catalog_ops`]: Schema setup, seeding, categories and locations
//! - [`handlers`]: Operations returning display wrappers for front ends
//!
//! ## Concurrency
//!
//! SQLite makes each statement atomic and multi-statement writes run in a
//! transaction. No transaction spans two store calls. For racing calls on
//! the same item, the last `update_item` wins, an update that lands after a
//! delete fails with `NotFound`, and a repeated delete returns `false`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use homestock_core::{params::ItemDraft, StoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = StoreBuilder::new()
//!     .with_database_path(Some("inventory.db"))
//!     .build()
//!     .await?;
//! store.seed_defaults().await?;
//!
//! let item = store
//!     .create_item(ItemDraft {
//!         name: "Drill".to_string(),
//!         quantity: Some("2".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! let found = store.search_items("dri").await?;
//! assert_eq!(found[0].id, item.id);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{InventoryError, Result},
};

pub mod builder;
pub mod catalog_ops;
pub mod handlers;
pub mod item_ops;


pub use builder::StoreBuilder;

/// Main store interface for the inventory.
#[derive(Debug, Clone)]
pub struct Store {
    pub(crate) db_path: PathBuf,
}

impl Store {
    /// Creates a store for the given database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite database backing this store.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `op` against a fresh connection on the blocking thread pool.
    pub(crate) async fn with_db<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::open(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(InventoryError::join_error)?
    }
}
