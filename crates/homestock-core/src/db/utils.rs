//! Row conversion and query helpers shared by the query modules.

use jiff::{civil::Date, Timestamp};
use rusqlite::{functions::FunctionFlags, types::Type, Connection, Row};

use crate::{
    error::{DatabaseResultExt, InventoryError, Result},
    models::Item,
};

/// Columns selected for every item read, joined with the reference names.
pub(crate) const ITEM_COLUMNS: &str = "i.id, i.name, i.quantity, i.category_id, i.location_id, i.description, i.purchase_date, i.purchase_price, i.warranty_expiry, i.serial_number, i.notes, i.image_uri, i.created_at, i.updated_at, c.name, l.name";

/// Item table joined with its optional category and location.
pub(crate) const ITEM_JOINS: &str = "items i LEFT JOIN categories c ON c.id = i.category_id LEFT JOIN locations l ON l.id = i.location_id";

/// Builds an [`Item`] from a row selected with [`ITEM_COLUMNS`].
pub(crate) fn item_from_row(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        quantity: row.get(2)?,
        category_id: row.get::<_, Option<i64>>(3)?.map(|id| id as u64),
        location_id: row.get::<_, Option<i64>>(4)?.map(|id| id as u64),
        description: row.get(5)?,
        purchase_date: date_column(row, 6)?,
        purchase_price: row.get(7)?,
        warranty_expiry: date_column(row, 8)?,
        serial_number: row.get(9)?,
        notes: row.get(10)?,
        image_uri: row.get(11)?,
        created_at: timestamp_column(row, 12)?,
        updated_at: timestamp_column(row, 13)?,
        category_name: row.get(14)?,
        location_name: row.get(15)?,
    })
}

/// Reads an RFC 3339 timestamp column.
pub(crate) fn timestamp_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Reads an optional ISO date column.
pub(crate) fn date_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<Date>> {
    row.get::<_, Option<String>>(idx)?
        .map(|raw| {
            raw.parse::<Date>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
            })
        })
        .transpose()
}

/// Unicode lower-casing exposed to SQL as `casefold(text)`.
///
/// SQLite's built-in `LIKE`, `lower()` and `NOCASE` fold ASCII only. NULL
/// stays NULL.
pub(crate) fn register_casefold(connection: &Connection) -> rusqlite::Result<()> {
    connection.create_scalar_function(
        "casefold",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| Ok(ctx.get::<Option<String>>(0)?.map(|text| text.to_lowercase())),
    )
}

/// A table an item may reference.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Reference {
    Category,
    Location,
}

impl Reference {
    fn exists_sql(self) -> &'static str {
        match self {
            Reference::Category => "SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?1)",
            Reference::Location => "SELECT EXISTS(SELECT 1 FROM locations WHERE id = ?1)",
        }
    }

    fn field(self) -> &'static str {
        match self {
            Reference::Category => "category_id",
            Reference::Location => "location_id",
        }
    }

    fn entity(self) -> &'static str {
        match self {
            Reference::Category => "category",
            Reference::Location => "location",
        }
    }
}

/// Rejects a reference to a row that does not exist.
///
/// Returns `InventoryError::Validation` naming the foreign key field, so a
/// stale picker selection reads as an input problem rather than an engine
/// failure.
pub(crate) fn ensure_reference(
    connection: &Connection,
    reference: Reference,
    id: Option<u64>,
) -> Result<()> {
    let Some(id) = id else {
        return Ok(());
    };

    let exists: bool = connection
        .query_row(reference.exists_sql(), [id as i64], |row| row.get(0))
        .read_context("Failed to check reference")?;

    if exists {
        Ok(())
    } else {
        Err(InventoryError::validation(reference.field())
            .with_reason(format!("No {} with ID {id}", reference.entity())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold(connection: &Connection, text: Option<&str>) -> Option<String> {
        connection
            .query_row("SELECT casefold(?1)", [text], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn test_casefold_lowercases_unicode() {
        let connection = Connection::open_in_memory().unwrap();
        register_casefold(&connection).unwrap();

        assert_eq!(fold(&connection, Some("ÜBERSCHRANK")).as_deref(), Some("überschrank"));
        assert_eq!(fold(&connection, Some("Émaille Topf")).as_deref(), Some("émaille topf"));
        assert_eq!(fold(&connection, None), None);
    }
}
