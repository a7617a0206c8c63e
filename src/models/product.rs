use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, UpdateProduct as DomainUpdateProduct,
};
use crate::models::{from_json_column, to_json_column};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
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
    pub images: String,
    pub rating: f64,
    pub review_count: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub slug: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub ingredients: &'a str,
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
    pub images: String,
    pub rating: f64,
    pub review_count: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct UpdateProduct<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub ingredients: &'a str,
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
    pub images: String,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            slug: value.slug,
            name: value.name,
            description: value.description,
            ingredients: value.ingredients,
            price: value.price,
            discount: value.discount,
            is_active: value.is_active,
            out_of_stock: value.out_of_stock,
            is_featured: value.is_featured,
            top_selling: value.top_selling,
            new_arrival: value.new_arrival,
            best_selling: value.best_selling,
            is_special: value.is_special,
            is_grocery: value.is_grocery,
            brand_id: value.brand_id,
            images: from_json_column(&value.images),
            rating: value.rating,
            review_count: value.review_count,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            slug: value.slug.as_str(),
            name: value.name.as_str(),
            description: value.description.as_str(),
            ingredients: value.ingredients.as_str(),
            price: value.price,
            discount: value.discount,
            is_active: value.is_active,
            out_of_stock: value.out_of_stock,
            is_featured: value.is_featured,
            top_selling: value.top_selling,
            new_arrival: value.new_arrival,
            best_selling: value.best_selling,
            is_special: value.is_special,
            is_grocery: value.is_grocery,
            brand_id: value.brand_id,
            images: to_json_column(&value.images),
            rating: 0.0,
            review_count: 0,
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(value: &'a DomainUpdateProduct) -> Self {
        Self {
            name: value.name.as_str(),
            description: value.description.as_str(),
            ingredients: value.ingredients.as_str(),
            price: value.price,
            discount: value.discount,
            is_active: value.is_active,
            out_of_stock: value.out_of_stock,
            is_featured: value.is_featured,
            top_selling: value.top_selling,
            new_arrival: value.new_arrival,
            best_selling: value.best_selling,
            is_special: value.is_special,
            is_grocery: value.is_grocery,
            brand_id: value.brand_id,
            images: to_json_column(&value.images),
            updated_at: value.updated_at,
        }
    }
}
