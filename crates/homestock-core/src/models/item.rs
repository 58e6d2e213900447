//! Item model definition.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

/// A single inventoried physical object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Unique identifier for the item
    pub id: u64,

    /// Name of the item
    pub name: String,

    /// How many of this item are owned
    pub quantity: u32,

    /// Category reference, if any
    pub category_id: Option<u64>,

    /// Location reference, if any
    pub location_id: Option<u64>,

    /// Free-form description, included in searches
    pub description: Option<String>,

    /// Date of purchase
    pub purchase_date: Option<Date>,

    /// Price paid
    pub purchase_price: Option<f64>,

    /// Date the warranty runs out
    pub warranty_expiry: Option<Date>,

    pub serial_number: Option<String>,

    pub notes: Option<String>,

    /// URI of a photo of the item; the store keeps only the string
    pub image_uri: Option<String>,

    /// Timestamp when the item was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the item was last modified (UTC)
    pub updated_at: Timestamp,

    /// Name of the referenced category, filled in on reads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,

    /// Name of the referenced location, filled in on reads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
}

impl Item {
    /// Whether the warranty has run out as of `today`.
    ///
    /// Items without a recorded expiry are never considered expired.
    pub fn warranty_expired(&self, today: Date) -> bool {
        self.warranty_expiry.is_some_and(|expiry| expiry < today)
    }
}
