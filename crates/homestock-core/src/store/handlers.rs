//! Store handlers that return display wrappers for front ends.
//!
//! Each handler wraps one or two store operations into a complete user
//! workflow (for example get-before-delete) and returns a value that formats
//! itself as markdown.

use super::Store;
use crate::{
    display::{Categories, CreateResult, DeleteResult, Items, Locations, UpdateResult},
    error::{InventoryError, Result},
    models::{Category, Item, Location},
    params::{CreateCategory, CreateLocation, DeleteItem, EditItem, Id, ItemDraft, SearchItems},
};

impl Store {
    /// Handle listing or searching items.
    ///
    /// A blank term lists the whole inventory.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use homestock_core::{params::SearchItems, StoreBuilder};
    /// # async {
    /// let store = StoreBuilder::new().build().await?;
    /// let items = store
    ///     .find_items(&SearchItems { term: "drawer".to_string() })
    ///     .await?;
    /// println!("{items}");
    /// # Result::<(), homestock_core::InventoryError>::Ok(())
    /// # };
    /// ```
    pub async fn find_items(&self, params: &SearchItems) -> Result<Items> {
        self.search_items(&params.term).await.map(Items)
    }

    /// Handle showing a single item with its category and location names.
    pub async fn show_item(&self, params: &Id) -> Result<Item> {
        self.get_item_by_id(params.id).await
    }

    /// Handle adding an item from raw form input.
    pub async fn add_item(&self, draft: ItemDraft) -> Result<CreateResult<Item>> {
        self.create_item(draft).await.map(CreateResult::new)
    }

    /// Handle editing an item.
    ///
    /// Loads the current item, applies the requested edits and writes the
    /// result back. When nothing actually changes no write happens and
    /// `updated_at` is left alone.
    ///
    /// # Errors
    ///
    /// * `InventoryError::NotFound` when the item does not exist
    /// * `InventoryError::Validation` when an edited value is invalid
    pub async fn edit_item(&self, params: &EditItem) -> Result<UpdateResult<Item>> {
        let current = self.get_item_by_id(params.id).await?;
        let (edited, changes) = params.apply(current)?;

        if changes.is_empty() {
            return Ok(UpdateResult::new(edited));
        }

        let saved = self.update_item(&edited).await?;
        Ok(UpdateResult::with_changes(saved, changes))
    }

    /// Handle permanently deleting an item with confirmation.
    ///
    /// Uses get-before-delete so the caller can show what was removed.
    ///
    /// # Errors
    ///
    /// * `InventoryError::Validation` for field `confirmed` when the deletion
    ///   was not confirmed
    /// * `InventoryError::NotFound` when the item does not exist
    pub async fn remove_item(&self, params: &DeleteItem) -> Result<DeleteResult<Item>> {
        if !params.confirmed {
            return Err(InventoryError::validation("confirmed").with_reason(format!(
                "Deleting item {} requires confirmation",
                params.id
            )));
        }

        let item = self.get_item_by_id(params.id).await?;
        self.delete_item(item.id).await?;
        Ok(DeleteResult::new(item))
    }

    /// Handle listing categories.
    pub async fn categories(&self) -> Result<Categories> {
        self.list_categories().await.map(Categories)
    }

    /// Handle listing locations.
    pub async fn locations(&self) -> Result<Locations> {
        self.list_locations().await.map(Locations)
    }

    /// Handle adding a category. An existing category with the same name is
    /// returned unchanged.
    pub async fn add_category(&self, params: &CreateCategory) -> Result<CreateResult<Category>> {
        self.create_category(params).await.map(CreateResult::new)
    }

    /// Handle adding a location. An existing location with the same name is
    /// returned unchanged.
    pub async fn add_location(&self, params: &CreateLocation) -> Result<CreateResult<Location>> {
        self.create_location(params).await.map(CreateResult::new)
    }

    /// Handle deleting a category; its items lose their category.
    pub async fn remove_category(&self, params: &Id) -> Result<DeleteResult<Category>> {
        let category = self
            .get_category(params)
            .await?
            .ok_or(InventoryError::NotFound {
                entity: "Category",
                id: params.id,
            })?;
        self.delete_category(params).await?;
        Ok(DeleteResult::new(category))
    }

    /// Handle deleting a location; its items lose their location.
    pub async fn remove_location(&self, params: &Id) -> Result<DeleteResult<Location>> {
        let location = self
            .get_location(params)
            .await?
            .ok_or(InventoryError::NotFound {
                entity: "Location",
                id: params.id,
            })?;
        self.delete_location(params).await?;
        Ok(DeleteResult::new(location))
    }
}
