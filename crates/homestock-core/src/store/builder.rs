//! Builder for creating and configuring Store instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Store;
use crate::{
    db::Database,
    error::{InventoryError, Result},
};

/// Builder for creating and configuring Store instances.
#[derive(Debug, Clone, Default)]
pub struct StoreBuilder {
    database_path: Option<PathBuf>,
}

impl StoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/homestock/homestock.db` or
    /// `~/.local/share/homestock/homestock.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the store and initializes the schema.
    ///
    /// Seeding is left to the caller so that a seeding failure can be
    /// logged without preventing startup.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::FileSystem` if the database directory cannot
    /// be created.
    /// Returns `InventoryError::SchemaInitFailed` if the tables cannot be
    /// created; the store is unusable in that case.
    pub async fn build(self) -> Result<Store> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| InventoryError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), InventoryError>(())
        })
        .await
        .map_err(InventoryError::join_error)??;

        log::info!("Inventory store ready at {}", db_path.display());
        Ok(Store::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("homestock")
            .place_data_file("homestock.db")
            .map_err(|e| InventoryError::XdgDirectory(e.to_string()))
    }
}
