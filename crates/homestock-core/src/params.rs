//! Parameter structures for inventory operations.
//!
//! These structures are shared by every front end (the CLI today) and carry
//! no framework-specific derives. Front ends wrap them with their own
//! argument types and convert with `From`, keeping parsing concerns out of
//! the core.
//!
//! Raw user input arrives here as text. The coercion helpers in this module
//! are the only place form strings are turned into typed values:
//!
//! ```text
//! CLI args ──▶ ItemDraft ──(TryFrom)──▶ NewItem ──▶ Store
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    error::{InventoryError, Result},
    models::Item,
};

/// Quantity used when the input is missing or not a non-negative integer.
pub const DEFAULT_QUANTITY: u32 = 1;

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

impl Id {
    /// Parse an ID received as text, such as a navigation path segment.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Validation` for field `id` when the text is
    /// not a positive integer.
    pub fn parse(raw: &str) -> Result<Self> {
        parse_id(raw).map(|id| Self { id })
    }
}

/// Raw item form input, exactly as the user typed it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemDraft {
    /// Name of the item (required)
    pub name: String,
    /// Quantity as typed; defaults to 1 when absent or not a valid count
    pub quantity: Option<String>,
    /// Category picked from the category list
    pub category_id: Option<u64>,
    /// Location picked from the location list
    pub location_id: Option<u64>,
    pub description: Option<String>,
    /// ISO `YYYY-MM-DD`
    pub purchase_date: Option<String>,
    /// Price as typed; dropped when it is not a finite number
    pub purchase_price: Option<String>,
    /// ISO `YYYY-MM-DD`
    pub warranty_expiry: Option<String>,
    pub serial_number: Option<String>,
    pub notes: Option<String>,
    pub image_uri: Option<String>,
}

/// Parameters for editing an existing item.
///
/// Every field is optional; only the provided ones are changed. Text fields
/// set to an empty string are cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditItem {
    /// Item ID to edit (required)
    pub id: u64,
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub category_id: Option<u64>,
    /// Remove the category reference
    #[serde(default)]
    pub clear_category: bool,
    pub location_id: Option<u64>,
    /// Remove the location reference
    #[serde(default)]
    pub clear_location: bool,
    pub description: Option<String>,
    pub purchase_date: Option<String>,
    pub purchase_price: Option<String>,
    pub warranty_expiry: Option<String>,
    pub serial_number: Option<String>,
    pub notes: Option<String>,
    pub image_uri: Option<String>,
}

impl EditItem {
    /// Apply the requested edits to `item`, returning the edited item and a
    /// human-readable list of what changed.
    ///
    /// The same coercion rules as item creation apply.
    ///
    /// # Errors
    ///
    /// * `InventoryError::Validation` when the new name is blank
    /// * `InventoryError::Validation` when a date is not ISO formatted
    pub fn apply(&self, mut item: Item) -> Result<(Item, Vec<String>)> {
        let mut changes = Vec::new();

        if let Some(name) = &self.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(
                    InventoryError::validation("name").with_reason("Item name is required")
                );
            }
            if name != item.name {
                item.name = name.to_string();
                changes.push(format!("Renamed to '{name}'"));
            }
        }

        if let Some(raw) = &self.quantity {
            let quantity = coerce_quantity(Some(raw));
            if quantity != item.quantity {
                item.quantity = quantity;
                changes.push(format!("Changed quantity to {quantity}"));
            }
        }

        if self.clear_category {
            if item.category_id.take().is_some() {
                item.category_name = None;
                changes.push("Removed category".to_string());
            }
        } else if let Some(id) = self.category_id {
            if item.category_id != Some(id) {
                item.category_id = Some(id);
                changes.push("Changed category".to_string());
            }
        }

        if self.clear_location {
            if item.location_id.take().is_some() {
                item.location_name = None;
                changes.push("Removed location".to_string());
            }
        } else if let Some(id) = self.location_id {
            if item.location_id != Some(id) {
                item.location_id = Some(id);
                changes.push("Changed location".to_string());
            }
        }

        if let Some(raw) = &self.purchase_date {
            let date = parse_date("purchase_date", Some(raw))?;
            if date != item.purchase_date {
                item.purchase_date = date;
                changes.push("Updated purchase date".to_string());
            }
        }

        if let Some(raw) = &self.warranty_expiry {
            let date = parse_date("warranty_expiry", Some(raw))?;
            if date != item.warranty_expiry {
                item.warranty_expiry = date;
                changes.push("Updated warranty expiry".to_string());
            }
        }

        if let Some(raw) = &self.purchase_price {
            let price = coerce_price(raw);
            if price != item.purchase_price {
                item.purchase_price = price;
                changes.push("Updated purchase price".to_string());
            }
        }

        let text_fields = [
            (&self.description, &mut item.description, "description"),
            (&self.serial_number, &mut item.serial_number, "serial number"),
            (&self.notes, &mut item.notes, "notes"),
            (&self.image_uri, &mut item.image_uri, "image"),
        ];
        for (input, field, label) in text_fields {
            if let Some(raw) = input {
                let value = normalize_text(Some(raw.clone()));
                if value != *field {
                    *field = value;
                    changes.push(format!("Updated {label}"));
                }
            }
        }

        Ok((item, changes))
    }
}

/// Parameters for deleting an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteItem {
    /// ID of the item to delete
    pub id: u64,
    /// Deletion must be confirmed explicitly
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for searching items by name or description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchItems {
    /// Case-insensitive substring; blank matches every item
    #[serde(default)]
    pub term: String,
}

/// Parameters for creating a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub icon: Option<String>,
}

/// Parameters for creating a location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateLocation {
    pub name: String,
    pub description: Option<String>,
}

/// Parse a positive integer ID from text.
///
/// # Errors
///
/// Returns `InventoryError::Validation` for field `id` when `raw` is empty,
/// non-numeric, not positive, or larger than SQLite's largest row ID.
///
/// # Examples
///
/// ```rust
/// use homestock_core::params::parse_id;
///
/// assert_eq!(parse_id(" 42 ").unwrap(), 42);
/// assert!(parse_id("abc").is_err());
/// assert!(parse_id("0").is_err());
/// assert!(parse_id("9223372036854775808").is_err());
/// ```
pub fn parse_id(raw: &str) -> Result<u64> {
    // Row IDs are signed 64-bit in SQLite
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id as u64),
        _ => Err(InventoryError::validation("id")
            .with_reason(format!("'{raw}' is not a valid identifier"))),
    }
}

/// Quantity from form text: a non-negative integer, or
/// [`DEFAULT_QUANTITY`] when absent or unparseable.
pub fn coerce_quantity(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(DEFAULT_QUANTITY)
}

/// Price from form text; `None` unless it parses to a finite number.
pub fn coerce_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
}

/// Optional ISO date; blank input means no date.
///
/// # Errors
///
/// Returns `InventoryError::Validation` for `field` when a non-blank value is
/// not a `YYYY-MM-DD` date.
pub fn parse_date(field: &str, raw: Option<&str>) -> Result<Option<Date>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    raw.parse::<Date>().map(Some).map_err(|_| {
        InventoryError::validation(field).with_reason(format!("'{raw}' is not a YYYY-MM-DD date"))
    })
}

/// Trim optional text; blank becomes `None`.
pub fn normalize_text(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
