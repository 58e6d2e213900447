//! Validated write requests.

use jiff::civil::Date;

use crate::{
    error::{InventoryError, Result},
    params::{coerce_price, coerce_quantity, normalize_text, parse_date, ItemDraft},
};

/// A fully typed item ready to be inserted.
///
/// Produced from an [`ItemDraft`] by the single coercion step at the store
/// boundary; nothing downstream re-parses form text.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub quantity: u32,
    pub category_id: Option<u64>,
    pub location_id: Option<u64>,
    pub description: Option<String>,
    pub purchase_date: Option<Date>,
    pub purchase_price: Option<f64>,
    pub warranty_expiry: Option<Date>,
    pub serial_number: Option<String>,
    pub notes: Option<String>,
    pub image_uri: Option<String>,
}

impl TryFrom<ItemDraft> for NewItem {
    type Error = InventoryError;

    /// Coerce raw form input into typed values.
    ///
    /// # Errors
    ///
    /// * `InventoryError::Validation` for field `name` when the name is blank
    /// * `InventoryError::Validation` for `purchase_date` or `warranty_expiry`
    ///   when a non-empty value is not an ISO `YYYY-MM-DD` date
    ///
    /// # Examples
    ///
    /// ```rust
    /// use homestock_core::{models::NewItem, params::ItemDraft};
    ///
    /// let draft = ItemDraft {
    ///     name: "Drill".to_string(),
    ///     quantity: Some("2".to_string()),
    ///     purchase_price: Some("not a price".to_string()),
    ///     ..Default::default()
    /// };
    /// let item = NewItem::try_from(draft)?;
    /// assert_eq!(item.quantity, 2);
    /// assert_eq!(item.purchase_price, None);
    /// # Ok::<(), homestock_core::InventoryError>(())
    /// ```
    fn try_from(draft: ItemDraft) -> Result<Self> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(InventoryError::validation("name").with_reason("Item name is required"));
        }

        Ok(Self {
            name: name.to_string(),
            quantity: coerce_quantity(draft.quantity.as_deref()),
            category_id: draft.category_id,
            location_id: draft.location_id,
            description: normalize_text(draft.description),
            purchase_date: parse_date("purchase_date", draft.purchase_date.as_deref())?,
            purchase_price: draft.purchase_price.as_deref().and_then(coerce_price),
            warranty_expiry: parse_date("warranty_expiry", draft.warranty_expiry.as_deref())?,
            serial_number: normalize_text(draft.serial_number),
            notes: normalize_text(draft.notes),
            image_uri: normalize_text(draft.image_uri),
        })
    }
}
