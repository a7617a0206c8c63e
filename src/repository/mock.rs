use chrono::NaiveDateTime;
use mockall::mock;

use super::{
    BrandReader, BrandWriter, CategoryReader, CategoryWriter, ImportHistoryReader,
    ImportHistoryWriter, ImportListQuery, JunctionWriter, ProductReader, ProductWriter,
    VariantReader, VariantWriter,
};
use crate::domain::{
    brand::{Brand, NewBrand},
    category::{Category, NewCategory},
    import::{ImportHistory, NewImportHistory},
    product::{NewProduct, Product, UpdateProduct},
    variant::{NewVariant, UpdateVariant, Variant},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub BrandReader {}

    impl BrandReader for BrandReader {
        fn get_brand_by_name(&self, name: &str) -> RepositoryResult<Option<Brand>>;
    }
}

mock! {
    pub BrandWriter {}

    impl BrandWriter for BrandWriter {
        fn create_brand(&self, new_brand: &NewBrand) -> RepositoryResult<Brand>;
    }
}

mock! {
    pub CategoryReader {}

    impl CategoryReader for CategoryReader {
        fn get_category_by_name(&self, name: &str) -> RepositoryResult<Option<Category>>;
    }
}

mock! {
    pub CategoryWriter {}

    impl CategoryWriter for CategoryWriter {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    }
}

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<Product>>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub VariantReader {}

    impl VariantReader for VariantReader {
        fn get_variant_by_sku(&self, sku: &str) -> RepositoryResult<Option<Variant>>;
    }
}

mock! {
    pub VariantWriter {}

    impl VariantWriter for VariantWriter {
        fn create_variant(&self, new_variant: &NewVariant) -> RepositoryResult<Variant>;
        fn update_variant(&self, variant_id: i32, updates: &UpdateVariant) -> RepositoryResult<Variant>;
        fn delete_variant(&self, variant_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub JunctionWriter {}

    impl JunctionWriter for JunctionWriter {
        fn add_brand_product(&self, brand_id: i32, product_id: i32) -> RepositoryResult<()>;
        fn add_category_product(&self, category_id: i32, product_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ImportHistoryReader {}

    impl ImportHistoryReader for ImportHistoryReader {
        fn get_import_by_import_id(&self, import_id: &str) -> RepositoryResult<Option<ImportHistory>>;
        fn list_imports(&self, query: ImportListQuery) -> RepositoryResult<(usize, Vec<ImportHistory>)>;
    }
}

mock! {
    pub ImportHistoryWriter {}

    impl ImportHistoryWriter for ImportHistoryWriter {
        fn create_import_history(&self, new_history: &NewImportHistory) -> RepositoryResult<ImportHistory>;
        fn mark_import_undone(&self, import_id: &str, undone_by: &str, undone_at: NaiveDateTime) -> RepositoryResult<()>;
    }
}
