//! Category and location queries.

use rusqlite::{params, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, InventoryError, Result},
    models::{Category, Location},
};

const LIST_CATEGORIES_SQL: &str =
    "SELECT id, name, icon FROM categories ORDER BY casefold(name) ASC, id ASC";
const LIST_LOCATIONS_SQL: &str =
    "SELECT id, name, description FROM locations ORDER BY casefold(name) ASC, id ASC";
const INSERT_CATEGORY_SQL: &str = "INSERT OR IGNORE INTO categories (name, icon) VALUES (?1, ?2)";
const INSERT_LOCATION_SQL: &str =
    "INSERT OR IGNORE INTO locations (name, description) VALUES (?1, ?2)";
const SELECT_CATEGORY_BY_NAME_SQL: &str = "SELECT id, name, icon FROM categories WHERE name = ?1";
const SELECT_LOCATION_BY_NAME_SQL: &str =
    "SELECT id, name, description FROM locations WHERE name = ?1";
const SELECT_CATEGORY_SQL: &str = "SELECT id, name, icon FROM categories WHERE id = ?1";
const SELECT_LOCATION_SQL: &str = "SELECT id, name, description FROM locations WHERE id = ?1";
const DELETE_CATEGORY_SQL: &str = "DELETE FROM categories WHERE id = ?1";
const DELETE_LOCATION_SQL: &str = "DELETE FROM locations WHERE id = ?1";

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        icon: row.get(2)?,
    })
}

fn location_from_row(row: &Row<'_>) -> rusqlite::Result<Location> {
    Ok(Location {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        description: row.get(2)?,
    })
}

fn required_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        Err(InventoryError::validation("name").with_reason("Name is required"))
    } else {
        Ok(name)
    }
}

impl super::Database {
    /// Lists all categories ordered by name, ignoring case.
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self
            .connection
            .prepare(LIST_CATEGORIES_SQL)
            .read_context("Failed to prepare query")?;

        let rows = stmt.query_map([], category_from_row)
            .read_context("Failed to query categories")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .read_context("Failed to fetch categories")?;
        Ok(rows)
    }

    /// Lists all locations ordered by name, ignoring case.
    pub fn list_locations(&self) -> Result<Vec<Location>> {
        let mut stmt = self
            .connection
            .prepare(LIST_LOCATIONS_SQL)
            .read_context("Failed to prepare query")?;

        let rows = stmt.query_map([], location_from_row)
            .read_context("Failed to query locations")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .read_context("Failed to fetch locations")?;
        Ok(rows)
    }

    /// Retrieves a category by its ID.
    pub fn get_category(&self, id: u64) -> Result<Option<Category>> {
        self.connection
            .query_row(SELECT_CATEGORY_SQL, [id as i64], category_from_row)
            .optional()
            .read_context("Failed to query category")
    }

    /// Retrieves a location by its ID.
    pub fn get_location(&self, id: u64) -> Result<Option<Location>> {
        self.connection
            .query_row(SELECT_LOCATION_SQL, [id as i64], location_from_row)
            .optional()
            .read_context("Failed to query location")
    }

    /// Inserts a category unless one with the same name exists, and returns
    /// the stored row either way.
    pub fn insert_category(&mut self, name: &str, icon: Option<&str>) -> Result<Category> {
        let name = required_name(name)?;
        let tx = self
            .connection
            .transaction()
            .write_context("Failed to begin transaction")?;

        tx.execute(INSERT_CATEGORY_SQL, params![name, icon])
            .write_context("Failed to insert category")?;
        let category = tx
            .query_row(SELECT_CATEGORY_BY_NAME_SQL, [name], category_from_row)
            .read_context("Failed to query category")?;

        tx.commit().write_context("Failed to commit transaction")?;
        Ok(category)
    }

    /// Inserts a location unless one with the same name exists, and returns
    /// the stored row either way.
    pub fn insert_location(&mut self, name: &str, description: Option<&str>) -> Result<Location> {
        let name = required_name(name)?;
        let tx = self
            .connection
            .transaction()
            .write_context("Failed to begin transaction")?;

        tx.execute(INSERT_LOCATION_SQL, params![name, description])
            .write_context("Failed to insert location")?;
        let location = tx
            .query_row(SELECT_LOCATION_BY_NAME_SQL, [name], location_from_row)
            .read_context("Failed to query location")?;

        tx.commit().write_context("Failed to commit transaction")?;
        Ok(location)
    }

    /// Deletes a category. Items that referenced it keep existing with no
    /// category. Returns whether a row was removed.
    pub fn delete_category(&mut self, id: u64) -> Result<bool> {
        let removed = self
            .connection
            .execute(DELETE_CATEGORY_SQL, [id as i64])
            .write_context("Failed to delete category")?;
        Ok(removed > 0)
    }

    /// Deletes a location. Items that referenced it keep existing with no
    /// location. Returns whether a row was removed.
    pub fn delete_location(&mut self, id: u64) -> Result<bool> {
        let removed = self
            .connection
            .execute(DELETE_LOCATION_SQL, [id as i64])
            .write_context("Failed to delete location")?;
        Ok(removed > 0)
    }
}
