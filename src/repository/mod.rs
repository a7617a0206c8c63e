use chrono::NaiveDateTime;

use crate::db::{DbConnection, DbPool};
use crate::domain::brand::{Brand, NewBrand};
use crate::domain::category::{Category, NewCategory};
use crate::domain::import::{ImportHistory, NewImportHistory};
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::variant::{NewVariant, UpdateVariant, Variant};
use crate::repository::errors::RepositoryResult;

pub mod brand;
pub mod category;
pub mod errors;
pub mod import_history;
pub mod junction;
pub mod product;
pub mod variant;

#[cfg(test)]
pub mod mock;

/// Default page size for history listings.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 25;

/// Offset/limit pair applied to list queries.
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query definition used to list import history records.
#[derive(Debug, Clone, Default)]
pub struct ImportListQuery {
    pub pagination: Option<Pagination>,
}

impl ImportListQuery {
    /// Construct a query over all history records, newest first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read-only operations over brand records.
pub trait BrandReader {
    fn get_brand_by_name(&self, name: &str) -> RepositoryResult<Option<Brand>>;
}

/// Write operations over brand records.
pub trait BrandWriter {
    fn create_brand(&self, new_brand: &NewBrand) -> RepositoryResult<Brand>;
}

/// Read-only operations over category records.
pub trait CategoryReader {
    fn get_category_by_name(&self, name: &str) -> RepositoryResult<Option<Category>>;
}

/// Write operations over category records.
pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<Product>>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over variant records.
pub trait VariantReader {
    fn get_variant_by_sku(&self, sku: &str) -> RepositoryResult<Option<Variant>>;
}

/// Write operations over variant records.
pub trait VariantWriter {
    fn create_variant(&self, new_variant: &NewVariant) -> RepositoryResult<Variant>;
    fn update_variant(&self, variant_id: i32, updates: &UpdateVariant)
    -> RepositoryResult<Variant>;
    fn delete_variant(&self, variant_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over the brand/category product junctions.
pub trait JunctionReader {
    fn list_brand_products(&self, brand_id: i32) -> RepositoryResult<Vec<i32>>;
    fn list_category_products(&self, category_id: i32) -> RepositoryResult<Vec<i32>>;
}

/// Idempotent write operations over the brand/category product junctions.
pub trait JunctionWriter {
    fn add_brand_product(&self, brand_id: i32, product_id: i32) -> RepositoryResult<()>;
    fn add_category_product(&self, category_id: i32, product_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over import history records.
pub trait ImportHistoryReader {
    fn get_import_by_import_id(&self, import_id: &str)
    -> RepositoryResult<Option<ImportHistory>>;
    fn list_imports(&self, query: ImportListQuery)
    -> RepositoryResult<(usize, Vec<ImportHistory>)>;
}

/// Write operations over import history records.
pub trait ImportHistoryWriter {
    fn create_import_history(
        &self,
        new_history: &NewImportHistory,
    ) -> RepositoryResult<ImportHistory>;
    fn mark_import_undone(
        &self,
        import_id: &str,
        undone_by: &str,
        undone_at: NaiveDateTime,
    ) -> RepositoryResult<()>;
}
