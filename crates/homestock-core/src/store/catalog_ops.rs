//! Schema, seeding, category and location operations for the Store.

use super::Store;
use crate::{
    error::Result,
    models::{Category, Location, SeedReport},
    params::{CreateCategory, CreateLocation, Id},
};

impl Store {
    /// Creates any missing tables. Idempotent; safe on every start.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::SchemaInitFailed` on any DDL failure. Callers
    /// should treat this as fatal.
    pub async fn initialize(&self) -> Result<()> {
        self.with_db(|db| db.initialize_schema()).await
    }

    /// Inserts the default categories and locations unless already present.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::SeedFailed`. The store remains usable, so
    /// callers log this and continue.
    pub async fn seed_defaults(&self) -> Result<SeedReport> {
        let report = self.with_db(|db| db.seed_defaults()).await?;
        if report.is_empty() {
            log::debug!("Default data already present");
        } else {
            log::info!(
                "Seeded {} categories and {} locations",
                report.categories_added,
                report.locations_added
            );
        }
        Ok(report)
    }

    /// Lists all categories ordered by name, ignoring case.
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        self.with_db(|db| db.list_categories()).await
    }

    /// Lists all locations ordered by name, ignoring case.
    pub async fn list_locations(&self) -> Result<Vec<Location>> {
        self.with_db(|db| db.list_locations()).await
    }

    /// Retrieves a category by its ID.
    pub async fn get_category(&self, params: &Id) -> Result<Option<Category>> {
        let id = params.id;
        self.with_db(move |db| db.get_category(id)).await
    }

    /// Retrieves a location by its ID.
    pub async fn get_location(&self, params: &Id) -> Result<Option<Location>> {
        let id = params.id;
        self.with_db(move |db| db.get_location(id)).await
    }

    /// Creates a category, or returns the existing one with the same name.
    pub async fn create_category(&self, params: &CreateCategory) -> Result<Category> {
        let name = params.name.clone();
        let icon = params.icon.clone();

        self.with_db(move |db| db.insert_category(&name, icon.as_deref()))
            .await
    }

    /// Creates a location, or returns the existing one with the same name.
    pub async fn create_location(&self, params: &CreateLocation) -> Result<Location> {
        let name = params.name.clone();
        let description = params.description.clone();

        self.with_db(move |db| db.insert_location(&name, description.as_deref()))
            .await
    }

    /// Deletes a category; its items are kept without a category.
    /// Returns whether a row was removed.
    pub async fn delete_category(&self, params: &Id) -> Result<bool> {
        let id = params.id;
        self.with_db(move |db| db.delete_category(id)).await
    }

    /// Deletes a location; its items are kept without a location.
    /// Returns whether a row was removed.
    pub async fn delete_location(&self, params: &Id) -> Result<bool> {
        let id = params.id;
        self.with_db(move |db| db.delete_location(id)).await
    }
}
