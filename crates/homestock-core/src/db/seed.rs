//! Default reference data.

use rusqlite::params;

use crate::{
    error::{DatabaseResultExt, Result},
    models::SeedReport,
};

/// Default categories as `(name, icon)`.
pub const DEFAULT_CATEGORIES: [(&str, &str); 8] = [
    ("Electronics", "devices"),
    ("Furniture", "chair"),
    ("Kitchenware", "kitchen"),
    ("Clothing", "clothing"),
    ("Tools", "build"),
    ("Books", "book"),
    ("Decor", "palette"),
    ("Other", "category"),
];

/// Default locations as `(name, description)`.
pub const DEFAULT_LOCATIONS: [(&str, &str); 7] = [
    ("Living Room", "Main living area"),
    ("Kitchen", "Cooking and food storage"),
    ("Bedroom", "Sleeping area"),
    ("Bathroom", "Personal care"),
    ("Garage", "Storage and vehicles"),
    ("Basement", "Additional storage"),
    ("Attic", "Long-term storage"),
];

const SEED_CATEGORY_SQL: &str = "INSERT OR IGNORE INTO categories (name, icon) VALUES (?1, ?2)";
const SEED_LOCATION_SQL: &str =
    "INSERT OR IGNORE INTO locations (name, description) VALUES (?1, ?2)";

impl super::Database {
    /// Inserts the default categories and locations.
    ///
    /// Rows are keyed by their unique names, so running this again never adds
    /// duplicates. Everything happens in one transaction.
    pub fn seed_defaults(&mut self) -> Result<SeedReport> {
        let tx = self
            .connection
            .transaction()
            .seed_context("Failed to begin transaction")?;

        let mut report = SeedReport::default();
        {
            let mut stmt = tx
                .prepare(SEED_CATEGORY_SQL)
                .seed_context("Failed to prepare category seed")?;
            for (name, icon) in DEFAULT_CATEGORIES {
                report.categories_added += stmt
                    .execute(params![name, icon])
                    .seed_context("Failed to insert default category")?;
            }

            let mut stmt = tx
                .prepare(SEED_LOCATION_SQL)
                .seed_context("Failed to prepare location seed")?;
            for (name, description) in DEFAULT_LOCATIONS {
                report.locations_added += stmt
                    .execute(params![name, description])
                    .seed_context("Failed to insert default location")?;
            }
        }

        tx.commit().seed_context("Failed to commit transaction")?;

        Ok(report)
    }
}
