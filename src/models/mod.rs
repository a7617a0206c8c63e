pub mod brand;
pub mod category;
pub mod import_history;
pub mod junction;
pub mod product;
pub mod variant;

/// Serialize a list-valued column to its JSON text representation.
pub(crate) fn to_json_column<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "[]".to_string())
}

/// Deserialize a JSON text column, treating corrupt data as empty.
pub(crate) fn from_json_column<T: serde::de::DeserializeOwned + Default>(value: &str) -> T {
    serde_json::from_str(value).unwrap_or_default()
}
