use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a product brand.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Brand {
    /// Unique identifier of the brand.
    pub id: i32,
    /// Brand name, unique across the catalog.
    pub name: String,
    /// Descriptive text shown in the storefront.
    pub description: String,
    /// Whether the brand is visible in the storefront.
    pub is_active: bool,
    /// Timestamp for when the brand record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the brand record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new brand.
#[derive(Debug, Clone)]
pub struct NewBrand {
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

impl NewBrand {
    /// Build the default payload used when a feed references an unknown brand.
    pub fn auto_vivified(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            description: format!("{name} products"),
            name,
            is_active: true,
        }
    }
}
