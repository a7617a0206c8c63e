use diesel::prelude::*;

use crate::models::junction::{NewBrandProduct, NewCategoryProduct};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, JunctionReader, JunctionWriter};

impl JunctionReader for DieselRepository {
    fn list_brand_products(&self, brand_id: i32) -> RepositoryResult<Vec<i32>> {
        use crate::schema::brand_products;

        let mut conn = self.conn()?;
        let product_ids = brand_products::table
            .filter(brand_products::brand_id.eq(brand_id))
            .order(brand_products::id.asc())
            .select(brand_products::product_id)
            .load::<i32>(&mut conn)?;

        Ok(product_ids)
    }

    fn list_category_products(&self, category_id: i32) -> RepositoryResult<Vec<i32>> {
        use crate::schema::category_products;

        let mut conn = self.conn()?;
        let product_ids = category_products::table
            .filter(category_products::category_id.eq(category_id))
            .order(category_products::id.asc())
            .select(category_products::product_id)
            .load::<i32>(&mut conn)?;

        Ok(product_ids)
    }
}

impl JunctionWriter for DieselRepository {
    fn add_brand_product(&self, brand_id: i32, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::brand_products;

        let mut conn = self.conn()?;
        let row = NewBrandProduct {
            brand_id,
            product_id,
        };

        // Unique (brand_id, product_id) pair keeps the set from growing.
        diesel::insert_into(brand_products::table)
            .values(&row)
            .on_conflict_do_nothing()
            .execute(&mut conn)?;

        Ok(())
    }

    fn add_category_product(&self, category_id: i32, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::category_products;

        let mut conn = self.conn()?;
        let row = NewCategoryProduct {
            category_id,
            product_id,
        };

        diesel::insert_into(category_products::table)
            .values(&row)
            .on_conflict_do_nothing()
            .execute(&mut conn)?;

        Ok(())
    }
}
