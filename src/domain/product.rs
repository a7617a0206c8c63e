use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a storefront product.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// URL-safe identifier, unique across the catalog.
    pub slug: String,
    /// Human-readable name of the product.
    pub name: String,
    /// Longer description shown to users.
    pub description: String,
    /// Ingredient list shown to users.
    pub ingredients: String,
    /// Base price of the product.
    pub price: f64,
    /// Discount percentage applied to the base price.
    pub discount: f64,
    /// Whether the product is visible in the storefront.
    pub is_active: bool,
    /// Whether the product is currently out of stock.
    pub out_of_stock: bool,
    /// Marketing flag: shown in the featured section.
    pub is_featured: bool,
    /// Marketing flag: shown in the top-selling section.
    pub top_selling: bool,
    /// Marketing flag: shown in the new-arrivals section.
    pub new_arrival: bool,
    /// Marketing flag: shown in the best-selling section.
    pub best_selling: bool,
    /// Marketing flag: shown in the specials section.
    pub is_special: bool,
    /// Marketing flag: listed under groceries.
    pub is_grocery: bool,
    /// Owning brand identifier.
    pub brand_id: i32,
    /// Image URLs shown on the product page.
    pub images: Vec<String>,
    /// Denormalized average review rating, maintained outside of import.
    pub rating: f64,
    /// Denormalized review count, maintained outside of import.
    pub review_count: i32,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new product.
///
/// Denormalized review stats start zeroed; the import pipeline never
/// writes them afterwards.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub ingredients: String,
    pub price: f64,
    pub discount: f64,
    pub is_active: bool,
    pub out_of_stock: bool,
    pub is_featured: bool,
    pub top_selling: bool,
    pub new_arrival: bool,
    pub best_selling: bool,
    pub is_special: bool,
    pub is_grocery: bool,
    pub brand_id: i32,
    pub images: Vec<String>,
}

/// Full-overwrite update applied when a slug is re-imported.
///
/// Every mapped field is reassigned, even when the incoming value is an
/// empty default; this is deliberately not a partial patch.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub name: String,
    pub description: String,
    pub ingredients: String,
    pub price: f64,
    pub discount: f64,
    pub is_active: bool,
    pub out_of_stock: bool,
    pub is_featured: bool,
    pub top_selling: bool,
    pub new_arrival: bool,
    pub best_selling: bool,
    pub is_special: bool,
    pub is_grocery: bool,
    pub brand_id: i32,
    pub images: Vec<String>,
    pub updated_at: NaiveDateTime,
}
