use diesel::prelude::*;

use crate::domain::brand::{Brand as DomainBrand, NewBrand as DomainNewBrand};
use crate::models::brand::{Brand as DbBrand, NewBrand as DbNewBrand};
use crate::repository::errors::RepositoryResult;
use crate::repository::{BrandReader, BrandWriter, DieselRepository};

impl BrandReader for DieselRepository {
    fn get_brand_by_name(&self, name: &str) -> RepositoryResult<Option<DomainBrand>> {
        use crate::schema::brands;

        let mut conn = self.conn()?;
        let brand = brands::table
            .filter(brands::name.eq(name))
            .first::<DbBrand>(&mut conn)
            .optional()?;

        Ok(brand.map(DomainBrand::from))
    }
}

impl BrandWriter for DieselRepository {
    fn create_brand(&self, new_brand: &DomainNewBrand) -> RepositoryResult<DomainBrand> {
        use crate::schema::brands;

        let mut conn = self.conn()?;
        let insertable = DbNewBrand::from(new_brand);

        let created = diesel::insert_into(brands::table)
            .values(&insertable)
            .get_result::<DbBrand>(&mut conn)?;

        Ok(created.into())
    }
}
