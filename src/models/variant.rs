use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::variant::{
    NewVariant as DomainNewVariant, UpdateVariant as DomainUpdateVariant,
    Variant as DomainVariant,
};
use crate::models::from_json_column;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::variants)]
pub struct Variant {
    pub id: i32,
    pub sku: String,
    pub product_id: i32,
    pub label: String,
    pub slug: String,
    pub price: f64,
    pub discount: f64,
    pub stock: i32,
    pub is_active: bool,
    pub out_of_stock: bool,
    pub images: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::variants)]
pub struct NewVariant<'a> {
    pub sku: &'a str,
    pub product_id: i32,
    pub label: &'a str,
    pub slug: &'a str,
    pub price: f64,
    pub discount: f64,
    pub stock: i32,
    pub is_active: bool,
    pub out_of_stock: bool,
    pub images: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::variants)]
pub struct UpdateVariant<'a> {
    pub label: &'a str,
    pub slug: &'a str,
    pub price: f64,
    pub discount: f64,
    pub stock: i32,
    pub is_active: bool,
    pub out_of_stock: bool,
    pub updated_at: NaiveDateTime,
}

impl From<Variant> for DomainVariant {
    fn from(value: Variant) -> Self {
        Self {
            id: value.id,
            sku: value.sku,
            product_id: value.product_id,
            label: value.label,
            slug: value.slug,
            price: value.price,
            discount: value.discount,
            stock: value.stock,
            is_active: value.is_active,
            out_of_stock: value.out_of_stock,
            images: from_json_column(&value.images),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewVariant> for NewVariant<'a> {
    fn from(value: &'a DomainNewVariant) -> Self {
        Self {
            sku: value.sku.as_str(),
            product_id: value.product_id,
            label: value.label.as_str(),
            slug: value.slug.as_str(),
            price: value.price,
            discount: value.discount,
            stock: value.stock,
            is_active: value.is_active,
            out_of_stock: value.out_of_stock,
            images: "[]",
        }
    }
}

impl<'a> From<&'a DomainUpdateVariant> for UpdateVariant<'a> {
    fn from(value: &'a DomainUpdateVariant) -> Self {
        Self {
            label: value.label.as_str(),
            slug: value.slug.as_str(),
            price: value.price,
            discount: value.discount,
            stock: value.stock,
            is_active: value.is_active,
            out_of_stock: value.out_of_stock,
            updated_at: value.updated_at,
        }
    }
}
