//! Display implementations for domain models.

use std::fmt;

use jiff::Zoned;

use super::datetime::{LocalDateTime, Price};
use crate::models::{Category, Item, Location};

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(f, "- Quantity: {}", self.quantity)?;
        writeln!(
            f,
            "- Category: {}",
            self.category_name.as_deref().unwrap_or("None")
        )?;
        writeln!(
            f,
            "- Location: {}",
            self.location_name.as_deref().unwrap_or("None")
        )?;
        if let Some(date) = &self.purchase_date {
            writeln!(f, "- Purchased: {date}")?;
        }
        if let Some(price) = self.purchase_price {
            writeln!(f, "- Price: {}", Price(price))?;
        }
        if let Some(expiry) = &self.warranty_expiry {
            if self.warranty_expired(Zoned::now().date()) {
                writeln!(f, "- Warranty until: {expiry} (expired)")?;
            } else {
                writeln!(f, "- Warranty until: {expiry}")?;
            }
        }
        if let Some(serial) = &self.serial_number {
            writeln!(f, "- Serial number: {serial}")?;
        }
        if let Some(uri) = &self.image_uri {
            writeln!(f, "- Image: {uri}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if let Some(notes) = &self.notes {
            writeln!(f, "\n## Notes")?;
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        Ok(())
    }
}

impl Item {
    /// Compact format used in item lists: name, ID and one metadata line.
    pub(crate) fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;

        let mut parts = vec![format!("Qty: {}", self.quantity)];
        if let Some(location) = &self.location_name {
            parts.push(location.clone());
        }
        parts.push(
            self.category_name
                .clone()
                .unwrap_or_else(|| "No category".to_string()),
        );
        writeln!(f, "- {}", parts.join(" • "))?;

        if let Some(desc) = &self.description {
            writeln!(f, "- {desc}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.icon {
            Some(icon) => writeln!(f, "- {} (ID: {}, icon: {icon})", self.name, self.id),
            None => writeln!(f, "- {} (ID: {})", self.name, self.id),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => writeln!(f, "- {} (ID: {}): {desc}", self.name, self.id),
            None => writeln!(f, "- {} (ID: {})", self.name, self.id),
        }
    }
}
