use diesel::prelude::*;

/// Insertable row linking a brand to one of its products.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::brand_products)]
pub struct NewBrandProduct {
    pub brand_id: i32,
    pub product_id: i32,
}

/// Insertable row linking a category to one of its products.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::category_products)]
pub struct NewCategoryProduct {
    pub category_id: i32,
    pub product_id: i32,
}
