use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::SERVICE_ACCESS_ROLE;
use crate::auth::{AuthenticatedUser, check_role};
use crate::domain::import::ImportHistory;
use crate::repository::{DEFAULT_ITEMS_PER_PAGE, ImportHistoryReader, ImportListQuery};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the import history listing.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    /// Page requested by the caller (1-based).
    pub page: Option<usize>,
}

/// Import history page returned to the caller.
#[derive(Debug, Serialize)]
pub struct HistoryPageData {
    pub total: usize,
    pub page: usize,
    pub items: Vec<ImportHistoryView>,
}

/// View over a history record, without the undo snapshot.
#[derive(Debug, Serialize)]
pub struct ImportHistoryView {
    pub import_id: String,
    pub file_name: String,
    pub imported_by: String,
    pub total_rows: i32,
    pub products_created: i32,
    pub variants_created: i32,
    pub groups_succeeded: i32,
    pub error_count: i32,
    pub errors: Vec<String>,
    pub is_undone: bool,
    pub undone_by: Option<String>,
    pub undone_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl From<ImportHistory> for ImportHistoryView {
    fn from(value: ImportHistory) -> Self {
        Self {
            import_id: value.import_id,
            file_name: value.file_name,
            imported_by: value.imported_by,
            total_rows: value.total_rows,
            products_created: value.products_created,
            variants_created: value.variants_created,
            groups_succeeded: value.groups_succeeded,
            error_count: value.error_count,
            errors: value.errors,
            is_undone: value.is_undone,
            undone_by: value.undone_by,
            undone_at: value.undone_at,
            created_at: value.created_at,
        }
    }
}

/// Lists import runs, newest first.
pub fn list_import_history<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: HistoryQuery,
) -> ServiceResult<HistoryPageData>
where
    R: ImportHistoryReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let page = query.page.unwrap_or(1);
    let list_query = ImportListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    let (total, items) = repo.list_imports(list_query).map_err(ServiceError::from)?;
    let items = items.into_iter().map(ImportHistoryView::from).collect();

    Ok(HistoryPageData { total, page, items })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::import::ImportSnapshot;
    use crate::repository::mock::MockImportHistoryReader;

    fn sample_history(import_id: &str) -> ImportHistory {
        ImportHistory {
            id: 1,
            import_id: import_id.to_string(),
            file_name: "feed.csv".to_string(),
            imported_by: "admin@example.com".to_string(),
            total_rows: 4,
            products_created: 2,
            variants_created: 4,
            groups_succeeded: 2,
            error_count: 0,
            errors: Vec::new(),
            snapshot: ImportSnapshot::default(),
            is_undone: false,
            undone_by: None,
            undone_at: None,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn listing_requires_role() {
        let repo = MockImportHistoryReader::new();
        let user = AuthenticatedUser {
            email: "user@example.com".to_string(),
            name: "User".to_string(),
            roles: Vec::new(),
        };

        let result = list_import_history(&repo, &user, HistoryQuery::default());

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn listing_paginates_and_strips_snapshots() {
        let mut repo = MockImportHistoryReader::new();
        let user = AuthenticatedUser {
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            roles: vec![SERVICE_ACCESS_ROLE.to_string()],
        };

        repo.expect_list_imports()
            .times(1)
            .withf(|query| {
                let pagination = query.pagination.as_ref().expect("expected pagination");
                assert_eq!(pagination.page, 2);
                assert_eq!(pagination.per_page, DEFAULT_ITEMS_PER_PAGE);
                true
            })
            .returning(|_| Ok((26, vec![sample_history("imp-26")])));

        let data = list_import_history(&repo, &user, HistoryQuery { page: Some(2) })
            .expect("expected success");

        assert_eq!(data.total, 26);
        assert_eq!(data.page, 2);
        assert_eq!(data.items.len(), 1);
        assert_eq!(data.items[0].import_id, "imp-26");
    }
}
