use diesel::prelude::*;

use crate::domain::variant::{
    NewVariant as DomainNewVariant, UpdateVariant as DomainUpdateVariant,
    Variant as DomainVariant,
};
use crate::models::variant::{
    NewVariant as DbNewVariant, UpdateVariant as DbUpdateVariant, Variant as DbVariant,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, VariantReader, VariantWriter};

impl VariantReader for DieselRepository {
    fn get_variant_by_sku(&self, sku: &str) -> RepositoryResult<Option<DomainVariant>> {
        use crate::schema::variants;

        let mut conn = self.conn()?;
        let variant = variants::table
            .filter(variants::sku.eq(sku))
            .first::<DbVariant>(&mut conn)
            .optional()?;

        Ok(variant.map(DomainVariant::from))
    }
}

impl VariantWriter for DieselRepository {
    fn create_variant(&self, new_variant: &DomainNewVariant) -> RepositoryResult<DomainVariant> {
        use crate::schema::variants;

        let mut conn = self.conn()?;
        let insertable = DbNewVariant::from(new_variant);

        let created = diesel::insert_into(variants::table)
            .values(&insertable)
            .get_result::<DbVariant>(&mut conn)?;

        Ok(created.into())
    }

    fn update_variant(
        &self,
        variant_id: i32,
        updates: &DomainUpdateVariant,
    ) -> RepositoryResult<DomainVariant> {
        use crate::schema::variants;

        let mut conn = self.conn()?;
        let changeset = DbUpdateVariant::from(updates);

        let updated = diesel::update(variants::table.filter(variants::id.eq(variant_id)))
            .set(&changeset)
            .get_result::<DbVariant>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_variant(&self, variant_id: i32) -> RepositoryResult<()> {
        use crate::schema::variants;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(variants::table.filter(variants::id.eq(variant_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
