//! Data models for items, categories and locations.
//!
//! This module contains the domain models stored by the inventory. Display
//! implementations live in [`crate::display::models`] so the data structures
//! stay free of presentation logic.
//!
//! # Examples
//!
//! ```rust
//! use homestock_core::models::Item;
//! use jiff::Timestamp;
//!
//! let now = Timestamp::now();
//! let item = Item {
//!     id: 1,
//!     name: "Cordless Drill".to_string(),
//!     quantity: 2,
//!     category_name: Some("Tools".to_string()),
//! #   category_id: Some(5),
//! #   location_id: None,
//! #   location_name: None,
//! #   description: None,
//! #   purchase_date: None,
//! #   purchase_price: None,
//! #   warranty_expiry: None,
//! #   serial_number: None,
//! #   notes: None,
//! #   image_uri: None,
//!     created_at: now,
//!     updated_at: now,
//! };
//! println!("{}", item); // Markdown with metadata bullets
//! ```

pub mod catalog;
pub mod item;
pub mod requests;


pub use catalog::{Category, Location, SeedReport};
pub use item::Item;
pub use requests::NewItem;
