//! Database schema initialization.

use crate::error::{DatabaseResultExt, Result};

const SCHEMA_SQL: &str = include_str!("../../assets/schema.sql");

const TABLE_COUNT_SQL: &str = "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('categories', 'locations', 'items')";

impl super::Database {
    /// Creates the tables and indexes that do not exist yet.
    ///
    /// Safe to run on every start; an existing store is left untouched.
    pub fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute_batch(SCHEMA_SQL)
            .schema_context("Failed to initialize database schema")?;

        let tables: i64 = self
            .connection
            .query_row(TABLE_COUNT_SQL, [], |row| row.get(0))
            .schema_context("Failed to verify database schema")?;
        log::debug!("Schema ready ({tables} inventory tables)");

        Ok(())
    }

    /// Returns the schema SQL stored in `sqlite_master`, ordered by name.
    ///
    /// Used to confirm that repeated initialization leaves the schema
    /// unchanged.
    pub fn schema_snapshot(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(
                "SELECT sql FROM sqlite_master WHERE sql IS NOT NULL AND name NOT LIKE 'sqlite_%' ORDER BY name",
            )
            .read_context("Failed to prepare schema query")?;

        let rows = stmt.query_map([], |row| row.get::<_, String>(0))
            .read_context("Failed to query schema")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .read_context("Failed to fetch schema")?;
        Ok(rows)
    }
}
