use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Audit record written once per import run.
///
/// The record is append-only: after creation only the undo-marking fields
/// (`is_undone`, `undone_by`, `undone_at`) ever change. Its nested snapshot
/// is the sole input to the undo engine.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ImportHistory {
    /// Unique identifier of the history row.
    pub id: i32,
    /// Public identifier of the import run.
    pub import_id: String,
    /// Name of the uploaded feed file.
    pub file_name: String,
    /// Email of the actor who triggered the import.
    pub imported_by: String,
    /// Number of rows retained by the parser.
    pub total_rows: i32,
    /// Number of products created by this run.
    pub products_created: i32,
    /// Number of variants created by this run.
    pub variants_created: i32,
    /// Number of product groups that persisted without error.
    pub groups_succeeded: i32,
    /// Number of isolated row/group failures.
    pub error_count: i32,
    /// Human-readable error messages, in processing order.
    pub errors: Vec<String>,
    /// Nested record of every product and variant this import touched.
    pub snapshot: ImportSnapshot,
    /// Whether the whole import has been undone.
    pub is_undone: bool,
    /// Email of the actor who undid the import.
    pub undone_by: Option<String>,
    /// Timestamp of the undo.
    pub undone_at: Option<NaiveDateTime>,
    /// Timestamp for when the history record was created.
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new history record.
#[derive(Debug, Clone)]
pub struct NewImportHistory {
    pub import_id: String,
    pub file_name: String,
    pub imported_by: String,
    pub total_rows: i32,
    pub products_created: i32,
    pub variants_created: i32,
    pub groups_succeeded: i32,
    pub errors: Vec<String>,
    pub snapshot: ImportSnapshot,
}

/// Compensating-action record: everything an undo needs to reverse the run.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ImportSnapshot {
    pub products: Vec<SnapshotProduct>,
}

/// One product touched by an import, with the variants filed under it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SnapshotProduct {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub variants: Vec<SnapshotVariant>,
}

/// One variant touched by an import.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SnapshotVariant {
    pub id: i32,
    pub sku: String,
    pub label: String,
}
