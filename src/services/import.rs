use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::SERVICE_ACCESS_ROLE;
use crate::auth::{AuthenticatedUser, check_role};
use crate::domain::brand::{Brand, NewBrand};
use crate::domain::category::{Category, NewCategory};
use crate::domain::import::{ImportSnapshot, NewImportHistory, SnapshotProduct, SnapshotVariant};
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::variant::{NewVariant, UpdateVariant, Variant};
use crate::forms::import::{FeedRow, UploadFeedForm};
use crate::repository::{
    BrandReader, BrandWriter, CategoryReader, CategoryWriter, ImportHistoryWriter, JunctionWriter,
    ProductReader, ProductWriter, VariantReader, VariantWriter,
};
use crate::services::images::default_images;
use crate::services::{ServiceError, ServiceResult};

/// Everything the import engine needs from the persistent store.
pub trait ImportRepository:
    BrandReader
    + BrandWriter
    + CategoryReader
    + CategoryWriter
    + ProductReader
    + ProductWriter
    + VariantReader
    + VariantWriter
    + JunctionWriter
    + ImportHistoryWriter
{
}

impl<T> ImportRepository for T where
    T: BrandReader
        + BrandWriter
        + CategoryReader
        + CategoryWriter
        + ProductReader
        + ProductWriter
        + VariantReader
        + VariantWriter
        + JunctionWriter
        + ImportHistoryWriter
{
}

/// Structured result returned to the import caller.
///
/// Partial success is the normal case for large feeds: callers must check
/// `errors` even on an overall success response.
#[derive(Debug, Serialize)]
pub struct ImportSummary {
    /// Public identifier of this import run.
    pub import_id: String,
    /// Number of rows retained by the parser.
    pub total_rows: usize,
    /// Number of products created (updates are not counted).
    pub products_created: usize,
    /// Number of variants created (updates are not counted).
    pub variants_created: usize,
    /// Number of product groups persisted without error.
    pub groups_succeeded: usize,
    /// Per-group error messages, in processing order.
    pub errors: Vec<String>,
}

/// Rows of one logical product, grouped by (name, slug).
///
/// The composite key is deliberate: two rows sharing a slug but differing
/// in product name form two distinct groups.
#[derive(Debug)]
struct RowGroup<'a> {
    name: String,
    slug: String,
    rows: Vec<&'a FeedRow>,
}

/// What one successfully reconciled group contributed.
struct GroupOutcome {
    product_created: bool,
    variants_created: usize,
    snapshot: SnapshotProduct,
}

/// Imports an uploaded product feed.
///
/// Groups are processed sequentially in file order. A failing group is
/// recorded and skipped; it never aborts the rest of the batch. The history
/// record is best-effort telemetry: a failure to persist it is logged and
/// swallowed because the commerce writes are already durable.
pub fn import_feed<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: UploadFeedForm,
) -> ServiceResult<ImportSummary>
where
    R: ImportRepository + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let (file_name, rows) = form
        .into_rows()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let mut summary = ImportSummary {
        import_id: Uuid::new_v4().to_string(),
        total_rows: rows.len(),
        products_created: 0,
        variants_created: 0,
        groups_succeeded: 0,
        errors: Vec::new(),
    };
    let mut snapshot = ImportSnapshot::default();

    for group in group_rows(&rows) {
        match reconcile_group(repo, &group) {
            Ok(outcome) => {
                summary.groups_succeeded += 1;
                if outcome.product_created {
                    summary.products_created += 1;
                }
                summary.variants_created += outcome.variants_created;
                snapshot.products.push(outcome.snapshot);
            }
            Err(err) => {
                summary.errors.push(format!("{}: {err}", group.name));
            }
        }
    }

    let history = NewImportHistory {
        import_id: summary.import_id.clone(),
        file_name: file_name.unwrap_or_default(),
        imported_by: user.email.clone(),
        total_rows: summary.total_rows as i32,
        products_created: summary.products_created as i32,
        variants_created: summary.variants_created as i32,
        groups_succeeded: summary.groups_succeeded as i32,
        errors: summary.errors.clone(),
        snapshot,
    };
    if let Err(err) = repo.create_import_history(&history) {
        log::error!(
            "Failed to record history for import {}: {err}",
            summary.import_id
        );
    }

    Ok(summary)
}

/// Group rows by (product name, product slug), preserving file order.
fn group_rows(rows: &[FeedRow]) -> Vec<RowGroup<'_>> {
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut groups: Vec<RowGroup<'_>> = Vec::new();

    for row in rows {
        let key = (row.product_name.as_str(), row.slug.as_str());
        match index.get(&key) {
            Some(&position) => groups[position].rows.push(row),
            None => {
                index.insert(key, groups.len());
                groups.push(RowGroup {
                    name: row.product_name.clone(),
                    slug: row.slug.clone(),
                    rows: vec![row],
                });
            }
        }
    }

    groups
}

/// Reconcile one product group against the store.
///
/// Any repository failure aborts this group only; the caller records the
/// error and moves on.
fn reconcile_group<R>(repo: &R, group: &RowGroup<'_>) -> ServiceResult<GroupOutcome>
where
    R: ImportRepository + ?Sized,
{
    let first = group.rows[0];

    let brand = resolve_brand(repo, &first.brand)?;

    let category_names = first.category_names();
    let mut categories = Vec::with_capacity(category_names.len());
    for name in &category_names {
        categories.push(resolve_category(repo, name)?);
    }

    let images = match first.image_urls() {
        urls if !urls.is_empty() => urls,
        _ => default_images(&group.slug, &category_names),
    };

    let (product, product_created) = upsert_product(repo, group, brand.id, images)?;

    let mut variants_created = 0;
    let mut snapshot_variants = Vec::new();
    for row in &group.rows {
        if row.variant_sku.is_empty() {
            continue;
        }

        let (variant, created) = upsert_variant(repo, row, product.id)?;
        if created {
            variants_created += 1;
        }
        snapshot_variants.push(SnapshotVariant {
            id: variant.id,
            sku: variant.sku,
            label: variant.label,
        });
    }

    repo.add_brand_product(brand.id, product.id)
        .map_err(ServiceError::from)?;
    for category in &categories {
        repo.add_category_product(category.id, product.id)
            .map_err(ServiceError::from)?;
    }

    Ok(GroupOutcome {
        product_created,
        variants_created,
        snapshot: SnapshotProduct {
            id: product.id,
            slug: product.slug,
            name: product.name,
            variants: snapshot_variants,
        },
    })
}

/// Resolve a brand by exact name, creating it with defaults when absent.
fn resolve_brand<R>(repo: &R, name: &str) -> ServiceResult<Brand>
where
    R: BrandReader + BrandWriter + ?Sized,
{
    if let Some(brand) = repo.get_brand_by_name(name)? {
        return Ok(brand);
    }

    repo.create_brand(&NewBrand::auto_vivified(name))
        .map_err(ServiceError::from)
}

/// Resolve a category by exact name, creating it with defaults when absent.
fn resolve_category<R>(repo: &R, name: &str) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter + ?Sized,
{
    if let Some(category) = repo.get_category_by_name(name)? {
        return Ok(category);
    }

    repo.create_category(&NewCategory::auto_vivified(name))
        .map_err(ServiceError::from)
}

/// Create the product or overwrite every mapped field of the existing one.
fn upsert_product<R>(
    repo: &R,
    group: &RowGroup<'_>,
    brand_id: i32,
    images: Vec<String>,
) -> ServiceResult<(Product, bool)>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    let first = group.rows[0];

    match repo.get_product_by_slug(&group.slug)? {
        Some(existing) => {
            let updates = UpdateProduct {
                name: first.product_name.clone(),
                description: first.description.clone(),
                ingredients: first.ingredients.clone(),
                price: first.price,
                discount: first.discount,
                is_active: first.active,
                out_of_stock: first.out_of_stock,
                is_featured: first.featured,
                top_selling: first.top_selling,
                new_arrival: first.new_arrival,
                best_selling: first.best_selling,
                is_special: first.special,
                is_grocery: first.grocery,
                brand_id,
                images,
                updated_at: chrono::Local::now().naive_utc(),
            };
            let updated = repo.update_product(existing.id, &updates)?;
            Ok((updated, false))
        }
        None => {
            let new_product = NewProduct {
                slug: group.slug.clone(),
                name: first.product_name.clone(),
                description: first.description.clone(),
                ingredients: first.ingredients.clone(),
                price: first.price,
                discount: first.discount,
                is_active: first.active,
                out_of_stock: first.out_of_stock,
                is_featured: first.featured,
                top_selling: first.top_selling,
                new_arrival: first.new_arrival,
                best_selling: first.best_selling,
                is_special: first.special,
                is_grocery: first.grocery,
                brand_id,
                images,
            };
            let created = repo.create_product(&new_product)?;
            Ok((created, true))
        }
    }
}

/// Create the variant or overwrite its mutable fields when the SKU exists.
fn upsert_variant<R>(
    repo: &R,
    row: &FeedRow,
    product_id: i32,
) -> ServiceResult<(Variant, bool)>
where
    R: VariantReader + VariantWriter + ?Sized,
{
    match repo.get_variant_by_sku(&row.variant_sku)? {
        Some(existing) => {
            let updates = UpdateVariant {
                label: row.variant_label.clone(),
                slug: row.variant_slug.clone(),
                price: row.variant_price,
                discount: row.variant_discount,
                stock: row.variant_stock,
                is_active: row.variant_active,
                out_of_stock: row.variant_out_of_stock,
                updated_at: chrono::Local::now().naive_utc(),
            };
            let updated = repo.update_variant(existing.id, &updates)?;
            Ok((updated, false))
        }
        None => {
            let new_variant = NewVariant {
                sku: row.variant_sku.clone(),
                product_id,
                label: row.variant_label.clone(),
                slug: row.variant_slug.clone(),
                price: row.variant_price,
                discount: row.variant_discount,
                stock: row.variant_stock,
                is_active: row.variant_active,
                out_of_stock: row.variant_out_of_stock,
            };
            let created = repo.create_variant(&new_variant)?;
            Ok((created, true))
        }
    }
}
