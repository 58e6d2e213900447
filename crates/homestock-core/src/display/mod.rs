//! Display formatting for inventory data and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! while newtype wrappers give collections and operation outcomes their own
//! formatting. All output is markdown so the CLI can render it richly or
//! print it as plain text.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Items, Categories, Locations)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Store readiness summary (StoreStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use homestock_core::{display::CreateResult, models::Category};
//!
//! let category = Category {
//!     id: 9,
//!     name: "Garden".to_string(),
//!     icon: Some("yard".to_string()),
//! };
//!
//! let output = CreateResult::new(category).to_string();
//! assert!(output.contains("Created category with ID: 9"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{Categories, Items, Locations};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::StoreStatus;
