//! Item operations for the Store.

use super::Store;
use crate::{
    error::{InventoryError, Result},
    models::{Item, NewItem},
    params::ItemDraft,
};

impl Store {
    /// Validates a draft and stores it as a new item.
    ///
    /// # Errors
    ///
    /// * `InventoryError::Validation` for `name` when blank, for a date
    ///   field that is not ISO formatted, or for `category_id`/`location_id`
    ///   when the referenced row does not exist. Nothing is inserted.
    /// * `InventoryError::WriteFailed` when the engine rejects the insert.
    pub async fn create_item(&self, draft: ItemDraft) -> Result<Item> {
        let item = NewItem::try_from(draft)?;
        self.with_db(move |db| db.insert_item(&item)).await
    }

    /// Retrieves an item with its category and location names.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::NotFound` when no item has this ID.
    pub async fn get_item_by_id(&self, id: u64) -> Result<Item> {
        self.with_db(move |db| db.get_item(id))
            .await?
            .ok_or_else(|| InventoryError::item_not_found(id))
    }

    /// Overwrites all mutable fields of the stored item and bumps
    /// `updated_at`. `created_at` is preserved.
    ///
    /// # Errors
    ///
    /// * `InventoryError::Validation` when the name is blank, the price is
    ///   not finite, or a reference does not exist.
    /// * `InventoryError::NotFound` when no item has this ID.
    /// * `InventoryError::WriteFailed` when the engine rejects the update.
    pub async fn update_item(&self, item: &Item) -> Result<Item> {
        let mut item = item.clone();
        item.name = item.name.trim().to_string();
        if item.name.is_empty() {
            return Err(InventoryError::validation("name").with_reason("Item name is required"));
        }
        if item.purchase_price.is_some_and(|price| !price.is_finite()) {
            return Err(InventoryError::validation("purchase_price")
                .with_reason("Price must be a finite number"));
        }

        self.with_db(move |db| db.update_item(&item)).await
    }

    /// Deletes an item. Deleting a missing item is not an error; the return
    /// value tells whether a row was removed.
    pub async fn delete_item(&self, id: u64) -> Result<bool> {
        let removed = self.with_db(move |db| db.delete_item(id)).await?;
        if !removed {
            log::debug!("Delete of missing item {id} ignored");
        }
        Ok(removed)
    }

    /// Case-insensitive substring search over item names and descriptions,
    /// ordered by name. A blank term returns every item.
    pub async fn search_items(&self, term: &str) -> Result<Vec<Item>> {
        let term = term.to_string();
        self.with_db(move |db| db.search_items(&term)).await
    }

    /// Every item, ordered by name.
    pub async fn list_items(&self) -> Result<Vec<Item>> {
        self.search_items("").await
    }
}
