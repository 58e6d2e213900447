//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::{Category, Item, Location};

/// Newtype wrapper for displaying item listings.
///
/// Each item is shown in its compact summary form. Handles empty listings
/// gracefully.
///
/// # Examples
///
/// ```rust
/// use homestock_core::display::Items;
///
/// let items = Items(vec![]);
/// assert_eq!(items.to_string(), "No items found.\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Items(pub Vec<Item>);

impl Items {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of items in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.0.iter()
    }
}

impl Index<usize> for Items {
    type Output = Item;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Items {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Items {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No items found.")
        } else {
            for item in &self.0 {
                item.fmt_summary(f)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the category list.
#[derive(Debug, Clone, Default)]
pub struct Categories(pub Vec<Category>);

impl Categories {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of categories in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the categories.
    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.0.iter()
    }
}

impl fmt::Display for Categories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No categories found.")
        } else {
            for category in &self.0 {
                write!(f, "{category}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the location list.
#[derive(Debug, Clone, Default)]
pub struct Locations(pub Vec<Location>);

impl Locations {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of locations in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the locations.
    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.0.iter()
    }
}

impl fmt::Display for Locations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No locations found.")
        } else {
            for location in &self.0 {
                write!(f, "{location}")?;
            }
            Ok(())
        }
    }
}
