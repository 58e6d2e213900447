//! Summary printed once the store has been set up.

use std::{fmt, path::Path};

use crate::models::SeedReport;

/// Where the store lives and which default rows a seeding run added.
pub struct StoreStatus<'a> {
    pub path: &'a Path,
    pub seeded: SeedReport,
}

impl fmt::Display for StoreStatus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Store ready")?;
        writeln!(f)?;
        writeln!(f, "- Database: {}", self.path.display())?;
        if self.seeded.is_empty() {
            writeln!(f, "- Default categories and locations already present")
        } else {
            writeln!(
                f,
                "- {} categories and {} locations added",
                self.seeded.categories_added, self.seeded.locations_added
            )
        }
    }
}
