use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::import::{
    ImportHistory as DomainImportHistory, NewImportHistory as DomainNewImportHistory,
};
use crate::models::{from_json_column, to_json_column};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::import_histories)]
pub struct ImportHistory {
    pub id: i32,
    pub import_id: String,
    pub file_name: String,
    pub imported_by: String,
    pub total_rows: i32,
    pub products_created: i32,
    pub variants_created: i32,
    pub groups_succeeded: i32,
    pub error_count: i32,
    pub errors: String,
    pub snapshot: String,
    pub is_undone: bool,
    pub undone_by: Option<String>,
    pub undone_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::import_histories)]
pub struct NewImportHistory<'a> {
    pub import_id: &'a str,
    pub file_name: &'a str,
    pub imported_by: &'a str,
    pub total_rows: i32,
    pub products_created: i32,
    pub variants_created: i32,
    pub groups_succeeded: i32,
    pub error_count: i32,
    pub errors: String,
    pub snapshot: String,
}

impl From<ImportHistory> for DomainImportHistory {
    fn from(value: ImportHistory) -> Self {
        Self {
            id: value.id,
            import_id: value.import_id,
            file_name: value.file_name,
            imported_by: value.imported_by,
            total_rows: value.total_rows,
            products_created: value.products_created,
            variants_created: value.variants_created,
            groups_succeeded: value.groups_succeeded,
            error_count: value.error_count,
            errors: from_json_column(&value.errors),
            snapshot: from_json_column(&value.snapshot),
            is_undone: value.is_undone,
            undone_by: value.undone_by,
            undone_at: value.undone_at,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewImportHistory> for NewImportHistory<'a> {
    fn from(value: &'a DomainNewImportHistory) -> Self {
        Self {
            import_id: value.import_id.as_str(),
            file_name: value.file_name.as_str(),
            imported_by: value.imported_by.as_str(),
            total_rows: value.total_rows,
            products_created: value.products_created,
            variants_created: value.variants_created,
            groups_succeeded: value.groups_succeeded,
            error_count: value.errors.len() as i32,
            errors: to_json_column(&value.errors),
            snapshot: to_json_column(&value.snapshot),
        }
    }
}
