use crate::SERVICE_ACCESS_ROLE;
use crate::auth::{AuthenticatedUser, check_role};
use crate::domain::import::SnapshotProduct;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ImportHistoryReader, ImportHistoryWriter, ProductWriter, VariantWriter};
use crate::services::{ServiceError, ServiceResult};

/// What an undo request addresses within one import.
#[derive(Debug, Clone, Copy)]
pub enum UndoTarget {
    /// Every product and variant in the import snapshot.
    All,
    /// One product (and its snapshot variants) by identifier.
    Product(i32),
    /// One variant by identifier.
    Variant(i32),
}

/// Reverses creations recorded in an import's snapshot.
///
/// Deletion converges to "absent": a target already deleted, whether by a
/// prior undo or externally, is treated as satisfied. Brands, categories,
/// and the product junctions are never touched.
pub fn undo_import<R>(
    repo: &R,
    user: &AuthenticatedUser,
    import_id: &str,
    target: UndoTarget,
) -> ServiceResult<()>
where
    R: ImportHistoryReader + ImportHistoryWriter + ProductWriter + VariantWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let history = repo
        .get_import_by_import_id(import_id)?
        .ok_or(ServiceError::NotFound)?;

    match target {
        UndoTarget::All => {
            if history.is_undone {
                // Repeat undo keeps the first marking untouched.
                return Ok(());
            }

            for product in &history.snapshot.products {
                delete_snapshot_product(repo, product)?;
            }

            mark_undone(repo, &history.import_id, user)
        }
        UndoTarget::Product(product_id) => {
            let product = history
                .snapshot
                .products
                .iter()
                .find(|product| product.id == product_id)
                .ok_or(ServiceError::NotFound)?;

            delete_snapshot_product(repo, product)?;

            // Removing the only product empties the import, which counts
            // as undoing it wholesale.
            if !history.is_undone && history.snapshot.products.len() == 1 {
                mark_undone(repo, &history.import_id, user)?;
            }

            Ok(())
        }
        UndoTarget::Variant(variant_id) => {
            let variant = history
                .snapshot
                .products
                .iter()
                .flat_map(|product| product.variants.iter())
                .find(|variant| variant.id == variant_id)
                .ok_or(ServiceError::NotFound)?;

            tolerate_missing(repo.delete_variant(variant.id))
        }
    }
}

fn delete_snapshot_product<R>(repo: &R, product: &SnapshotProduct) -> ServiceResult<()>
where
    R: ProductWriter + VariantWriter + ?Sized,
{
    for variant in &product.variants {
        tolerate_missing(repo.delete_variant(variant.id))?;
    }
    tolerate_missing(repo.delete_product(product.id))
}

fn mark_undone<R>(repo: &R, import_id: &str, user: &AuthenticatedUser) -> ServiceResult<()>
where
    R: ImportHistoryWriter + ?Sized,
{
    let now = chrono::Local::now().naive_utc();
    tolerate_missing(repo.mark_import_undone(import_id, &user.email, now))
}

/// A target that is already gone satisfies the undo.
fn tolerate_missing(result: RepositoryResult<()>) -> ServiceResult<()> {
    match result {
        Err(RepositoryError::NotFound) => Ok(()),
        other => other.map_err(ServiceError::from),
    }
}
