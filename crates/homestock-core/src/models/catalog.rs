//! Reference data: categories and locations.

use serde::{Deserialize, Serialize};

/// A user-facing classification tag assignable to items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique identifier for the category
    pub id: u64,

    /// Display name, unique across categories
    pub name: String,

    /// Optional icon tag used by front ends
    pub icon: Option<String>,
}

/// A named physical place where items are stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    /// Unique identifier for the location
    pub id: u64,

    /// Display name, unique across locations
    pub name: String,

    /// Optional free-form description
    pub description: Option<String>,
}

/// Rows actually inserted by a seeding run.
///
/// Both counts are zero when the defaults were already present.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedReport {
    pub categories_added: usize,
    pub locations_added: usize,
}

impl SeedReport {
    /// Whether the run inserted anything.
    pub fn is_empty(&self) -> bool {
        self.categories_added == 0 && self.locations_added == 0
    }
}
