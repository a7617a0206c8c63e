use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a purchasable product variant.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Variant {
    /// Unique identifier of the variant.
    pub id: i32,
    /// Stock-keeping unit, unique across the catalog.
    pub sku: String,
    /// Owning product identifier.
    pub product_id: i32,
    /// Display label, for example a size or pack count.
    pub label: String,
    /// URL-safe identifier of the variant.
    pub slug: String,
    /// Variant price.
    pub price: f64,
    /// Discount percentage applied to the variant price.
    pub discount: f64,
    /// Units currently in stock.
    pub stock: i32,
    /// Whether the variant is offered for sale.
    pub is_active: bool,
    /// Whether the variant is currently out of stock.
    pub out_of_stock: bool,
    /// Image URLs specific to this variant, maintained outside of import.
    pub images: Vec<String>,
    /// Timestamp for when the variant record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the variant record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new variant.
///
/// Import never sets variant images, so new variants start with an empty
/// image list.
#[derive(Debug, Clone)]
pub struct NewVariant {
    pub sku: String,
    pub product_id: i32,
    pub label: String,
    pub slug: String,
    pub price: f64,
    pub discount: f64,
    pub stock: i32,
    pub is_active: bool,
    pub out_of_stock: bool,
}

/// Full-overwrite update applied when a SKU is re-imported.
#[derive(Debug, Clone)]
pub struct UpdateVariant {
    pub label: String,
    pub slug: String,
    pub price: f64,
    pub discount: f64,
    pub stock: i32,
    pub is_active: bool,
    pub out_of_stock: bool,
    pub updated_at: NaiveDateTime,
}
