//! Error types for the inventory store.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all inventory operations.
#[derive(Error, Debug)]
pub enum InventoryError {
    /// Creating the tables failed; the store cannot be used.
    #[error("Schema initialization failed: {message}")]
    SchemaInitFailed {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Inserting the default categories or locations failed
    #[error("Seeding default data failed: {message}")]
    SeedFailed {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// No row matched the given ID
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: u64 },
    /// Insert, update or delete rejected by the engine
    #[error("Write failed: {message}")]
    WriteFailed {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Query or connection errors
    #[error("Read failed: {message}")]
    ReadFailed {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// A blocking database task panicked or was cancelled
    #[error("Database task failed: {message}")]
    TaskFailed { message: String },
}

/// Flat classification of [`InventoryError`] for callers that only need to
/// branch on the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SchemaInitFailed,
    SeedFailed,
    Validation,
    NotFound,
    WriteFailed,
    ReadFailed,
    Environment,
}

impl InventoryError {
    /// Returns the failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SchemaInitFailed { .. } => ErrorKind::SchemaInitFailed,
            Self::SeedFailed { .. } => ErrorKind::SeedFailed,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::WriteFailed { .. } => ErrorKind::WriteFailed,
            Self::ReadFailed { .. } => ErrorKind::ReadFailed,
            Self::FileSystem { .. } | Self::XdgDirectory(_) | Self::TaskFailed { .. } => {
                ErrorKind::Environment
            }
        }
    }

    /// The offending field for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Creates a builder for input validation errors.
    pub fn validation(field: impl Into<String>) -> ValidationBuilder {
        ValidationBuilder::new(field)
    }

    pub fn item_not_found(id: u64) -> Self {
        Self::NotFound { entity: "Item", id }
    }

    pub(crate) fn join_error(e: tokio::task::JoinError) -> Self {
        Self::TaskFailed {
            message: e.to_string(),
        }
    }
}

/// Builder for creating input validation errors.
pub struct ValidationBuilder {
    field: String,
}

impl ValidationBuilder {
    /// Create a new validation error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> InventoryError {
        InventoryError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

/// Extension trait mapping engine errors onto the store taxonomy.
pub trait DatabaseResultExt<T> {
    /// Map a failed query or connection setup.
    fn read_context(self, message: &str) -> Result<T>;

    /// Map a failed insert, update or delete.
    fn write_context(self, message: &str) -> Result<T>;

    /// Map a failed DDL statement.
    fn schema_context(self, message: &str) -> Result<T>;

    /// Map a failed default-data insert.
    fn seed_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn read_context(self, message: &str) -> Result<T> {
        self.map_err(|source| InventoryError::ReadFailed {
            message: message.to_string(),
            source,
        })
    }

    fn write_context(self, message: &str) -> Result<T> {
        self.map_err(|source| InventoryError::WriteFailed {
            message: message.to_string(),
            source,
        })
    }

    fn schema_context(self, message: &str) -> Result<T> {
        self.map_err(|source| InventoryError::SchemaInitFailed {
            message: message.to_string(),
            source,
        })
    }

    fn seed_context(self, message: &str) -> Result<T> {
        self.map_err(|source| InventoryError::SeedFailed {
            message: message.to_string(),
            source,
        })
    }
}

/// Result type alias for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_reports_field() {
        let err = InventoryError::validation("name").with_reason("must not be empty");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.field(), Some("name"));
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'name': must not be empty"
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = InventoryError::item_not_found(42);
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.field(), None);
        assert_eq!(err.to_string(), "Item with ID 42 not found");
    }

    #[test]
    fn test_database_context_kinds() {
        let failing: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(
            failing.read_context("read").unwrap_err().kind(),
            ErrorKind::ReadFailed
        );

        let failing: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(
            failing.write_context("write").unwrap_err().kind(),
            ErrorKind::WriteFailed
        );

        let failing: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(
            failing.schema_context("ddl").unwrap_err().kind(),
            ErrorKind::SchemaInitFailed
        );

        let failing: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(
            failing.seed_context("seed").unwrap_err().kind(),
            ErrorKind::SeedFailed
        );
    }

    #[tokio::test]
    async fn test_task_failure_is_environment() {
        let join_err = tokio::task::spawn_blocking(|| panic!("boom"))
            .await
            .unwrap_err();
        let err = InventoryError::join_error(join_err);
        assert_eq!(err.kind(), ErrorKind::Environment);
        assert!(err.to_string().starts_with("Database task failed"));
    }
}
