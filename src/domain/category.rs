use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a storefront category.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Category {
    /// Unique identifier of the category.
    pub id: i32,
    /// Category name, unique across the catalog.
    pub name: String,
    /// URL-safe identifier derived from the name.
    pub slug: String,
    /// Descriptive text shown in the storefront.
    pub description: String,
    /// Whether the category is visible in the storefront.
    pub is_active: bool,
    /// Timestamp for when the category record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the category record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub is_active: bool,
}

impl NewCategory {
    /// Build the default payload used when a feed references an unknown category.
    pub fn auto_vivified(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            slug: slugify(&name),
            description: format!("{name} products"),
            name,
            is_active: true,
        }
    }
}

/// Derive a URL-safe slug from a category name: lowercased, spaces to hyphens.
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}
