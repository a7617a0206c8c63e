use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::import::{
    ImportHistory as DomainImportHistory, NewImportHistory as DomainNewImportHistory,
};
use crate::models::import_history::{
    ImportHistory as DbImportHistory, NewImportHistory as DbNewImportHistory,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ImportHistoryReader, ImportHistoryWriter,
    ImportListQuery};

impl ImportHistoryReader for DieselRepository {
    fn get_import_by_import_id(
        &self,
        import_id: &str,
    ) -> RepositoryResult<Option<DomainImportHistory>> {
        use crate::schema::import_histories;

        let mut conn = self.conn()?;
        let history = import_histories::table
            .filter(import_histories::import_id.eq(import_id))
            .first::<DbImportHistory>(&mut conn)
            .optional()?;

        Ok(history.map(DomainImportHistory::from))
    }

    fn list_imports(
        &self,
        query: ImportListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainImportHistory>)> {
        use crate::schema::import_histories;

        let mut conn = self.conn()?;

        let total = import_histories::table
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let mut items = import_histories::table
            .order(import_histories::created_at.desc())
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let histories = items.load::<DbImportHistory>(&mut conn)?;
        let histories = histories
            .into_iter()
            .map(DomainImportHistory::from)
            .collect();

        Ok((total, histories))
    }
}

impl ImportHistoryWriter for DieselRepository {
    fn create_import_history(
        &self,
        new_history: &DomainNewImportHistory,
    ) -> RepositoryResult<DomainImportHistory> {
        use crate::schema::import_histories;

        let mut conn = self.conn()?;
        let insertable = DbNewImportHistory::from(new_history);

        let created = diesel::insert_into(import_histories::table)
            .values(&insertable)
            .get_result::<DbImportHistory>(&mut conn)?;

        Ok(created.into())
    }

    fn mark_import_undone(
        &self,
        import_id: &str,
        undone_by: &str,
        undone_at: NaiveDateTime,
    ) -> RepositoryResult<()> {
        use crate::schema::import_histories;

        let mut conn = self.conn()?;

        // Only the first undo records its actor and timestamp.
        let updated = diesel::update(
            import_histories::table
                .filter(import_histories::import_id.eq(import_id))
                .filter(import_histories::is_undone.eq(false)),
        )
        .set((
            import_histories::is_undone.eq(true),
            import_histories::undone_by.eq(undone_by),
            import_histories::undone_at.eq(undone_at),
        ))
        .execute(&mut conn)?;

        if updated == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
