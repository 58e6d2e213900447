//! SQLite access for the inventory store.
//!
//! This module owns the connection, the schema, default-data seeding and the
//! per-table query sets. Every method is synchronous; [`crate::store`] moves
//! the calls onto blocking threads.

use std::{path::Path, time::Duration};

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod catalog_queries;
pub mod item_queries;
pub mod schema;
pub mod seed;
pub mod utils;

/// How long a statement waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens a connection without touching the schema.
    ///
    /// Foreign keys are enabled on every connection so that deleting a
    /// category or location nulls out item references. The `casefold` SQL
    /// function used for searching and ordering is registered here.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).read_context("Failed to open database connection")?;

        connection
            .execute_batch("PRAGMA foreign_keys = ON")
            .read_context("Failed to enable foreign keys")?;
        connection
            .busy_timeout(BUSY_TIMEOUT)
            .read_context("Failed to set busy timeout")?;
        utils::register_casefold(&connection)
            .read_context("Failed to register casefold function")?;

        Ok(Self { connection })
    }

    /// Opens a connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = Self::open(path)?;
        db.initialize_schema()?;
        Ok(db)
    }
}
