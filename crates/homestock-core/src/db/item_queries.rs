//! Item CRUD operations and queries.

use jiff::{SignedDuration, Timestamp};
use rusqlite::{params, OptionalExtension, TransactionBehavior};

use super::utils::{
    ensure_reference, item_from_row, timestamp_column, Reference, ITEM_COLUMNS, ITEM_JOINS,
};
use crate::{
    error::{DatabaseResultExt, InventoryError, Result},
    models::{Item, NewItem},
};

const INSERT_ITEM_SQL: &str = "INSERT INTO items (name, quantity, category_id, location_id, description, purchase_date, purchase_price, warranty_expiry, serial_number, notes, image_uri, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)";
const UPDATE_ITEM_SQL: &str = "UPDATE items SET name = ?1, quantity = ?2, category_id = ?3, location_id = ?4, description = ?5, purchase_date = ?6, purchase_price = ?7, warranty_expiry = ?8, serial_number = ?9, notes = ?10, image_uri = ?11, updated_at = ?12 WHERE id = ?13";
const SELECT_UPDATED_AT_SQL: &str = "SELECT updated_at FROM items WHERE id = ?1";
const DELETE_ITEM_SQL: &str = "DELETE FROM items WHERE id = ?1";
const ITEM_ORDER: &str = "ORDER BY casefold(i.name) ASC, i.id ASC";
const ITEM_SEARCH_FILTER: &str =
    "WHERE instr(casefold(i.name), ?1) > 0 OR instr(casefold(i.description), ?1) > 0";

impl super::Database {
    /// Inserts a validated item. `created_at` and `updated_at` are both set
    /// to the current time.
    pub fn insert_item(&mut self, item: &NewItem) -> Result<Item> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .write_context("Failed to begin transaction")?;

        ensure_reference(&tx, Reference::Category, item.category_id)?;
        ensure_reference(&tx, Reference::Location, item.location_id)?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_ITEM_SQL,
            params![
                item.name,
                item.quantity,
                item.category_id.map(|id| id as i64),
                item.location_id.map(|id| id as i64),
                item.description,
                item.purchase_date.map(|d| d.to_string()),
                item.purchase_price,
                item.warranty_expiry.map(|d| d.to_string()),
                item.serial_number,
                item.notes,
                item.image_uri,
                &now_str,
                &now_str,
            ],
        )
        .write_context("Failed to insert item")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().write_context("Failed to commit transaction")?;
        log::debug!("Inserted item {id}");

        self.get_item(id)?.ok_or_else(|| InventoryError::item_not_found(id))
    }

    /// Retrieves an item by its ID, with category and location names.
    pub fn get_item(&self, id: u64) -> Result<Option<Item>> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM {ITEM_JOINS} WHERE i.id = ?1");
        self.connection
            .query_row(&sql, [id as i64], item_from_row)
            .optional()
            .read_context("Failed to query item")
    }

    /// Overwrites every mutable field of the stored item with `item`'s
    /// values. `created_at` is never written; `updated_at` becomes the
    /// current time, nudged forward if the clock has not advanced past the
    /// previous value.
    pub fn update_item(&mut self, item: &Item) -> Result<Item> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .write_context("Failed to begin transaction")?;

        let previous = tx
            .query_row(SELECT_UPDATED_AT_SQL, [item.id as i64], |row| {
                timestamp_column(row, 0)
            })
            .optional()
            .read_context("Failed to query item")?
            .ok_or_else(|| InventoryError::item_not_found(item.id))?;

        ensure_reference(&tx, Reference::Category, item.category_id)?;
        ensure_reference(&tx, Reference::Location, item.location_id)?;

        let mut now = Timestamp::now();
        if now <= previous {
            now = previous
                .checked_add(SignedDuration::from_micros(1))
                .unwrap_or(previous);
        }

        let updated = tx
            .execute(
                UPDATE_ITEM_SQL,
                params![
                    item.name,
                    item.quantity,
                    item.category_id.map(|id| id as i64),
                    item.location_id.map(|id| id as i64),
                    item.description,
                    item.purchase_date.map(|d| d.to_string()),
                    item.purchase_price,
                    item.warranty_expiry.map(|d| d.to_string()),
                    item.serial_number,
                    item.notes,
                    item.image_uri,
                    now.to_string(),
                    item.id as i64,
                ],
            )
            .write_context("Failed to update item")?;

        if updated == 0 {
            return Err(InventoryError::item_not_found(item.id));
        }

        tx.commit().write_context("Failed to commit transaction")?;
        log::debug!("Updated item {}", item.id);

        self.get_item(item.id)?
            .ok_or_else(|| InventoryError::item_not_found(item.id))
    }

    /// Deletes an item. Returns `false` when no row had that ID.
    pub fn delete_item(&mut self, id: u64) -> Result<bool> {
        let removed = self
            .connection
            .execute(DELETE_ITEM_SQL, [id as i64])
            .write_context("Failed to delete item")?;
        Ok(removed > 0)
    }

    /// Finds items whose name or description contains `term`, ignoring
    /// case (Unicode lower-casing). A blank term returns every item. Results
    /// are ordered by name.
    pub fn search_items(&self, term: &str) -> Result<Vec<Item>> {
        let needle = term.trim().to_lowercase();
        let filter = if needle.is_empty() { "" } else { ITEM_SEARCH_FILTER };
        let sql = format!("SELECT {ITEM_COLUMNS} FROM {ITEM_JOINS} {filter} {ITEM_ORDER}");

        let mut stmt = self
            .connection
            .prepare(&sql)
            .read_context("Failed to prepare query")?;

        let rows = if needle.is_empty() {
            stmt.query_map([], item_from_row)
        } else {
            stmt.query_map([&needle], item_from_row)
        };

        let items = rows
            .read_context("Failed to query items")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .read_context("Failed to fetch items")?;
        Ok(items)
    }
}
