//! Product feed upload parsing.
//!
//! The feed is a comma-separated table with a fixed column set. Parsing is
//! deliberately lenient: double quotes delimit fields that contain literal
//! commas (embedded quote characters are stripped, not escaped), rows with
//! fewer fields than the header are silently dropped, boolean columns
//! normalize to `"true"`/`"false"`, and numeric columns parse-or-zero.

use std::collections::HashMap;

use thiserror::Error;

pub const COL_PRODUCT_NAME: &str = "Product Name";
pub const COL_DESCRIPTION: &str = "Description";
pub const COL_INGREDIENTS: &str = "Ingredients";
pub const COL_PRICE: &str = "Price";
pub const COL_DISCOUNT: &str = "Discount (%)";
pub const COL_SLUG: &str = "Slug";
pub const COL_ACTIVE: &str = "Active";
pub const COL_OUT_OF_STOCK: &str = "Out of Stock";
pub const COL_FEATURED: &str = "Featured";
pub const COL_TOP_SELLING: &str = "Top Selling";
pub const COL_NEW_ARRIVAL: &str = "New Arrival";
pub const COL_BEST_SELLING: &str = "Best Selling";
pub const COL_SPECIAL: &str = "Special";
pub const COL_GROCERY: &str = "Grocery";
pub const COL_BRAND: &str = "Brand";
pub const COL_CATEGORIES: &str = "Categories";
pub const COL_IMAGES: &str = "Images";
pub const COL_VARIANT_SKU: &str = "Variant SKU";
pub const COL_VARIANT_LABEL: &str = "Variant Label";
pub const COL_VARIANT_SLUG: &str = "Variant Slug";
pub const COL_VARIANT_PRICE: &str = "Variant Price";
pub const COL_VARIANT_DISCOUNT: &str = "Variant Discount (%)";
pub const COL_VARIANT_STOCK: &str = "Variant Stock";
pub const COL_VARIANT_ACTIVE: &str = "Variant Active";
pub const COL_VARIANT_OUT_OF_STOCK: &str = "Variant Out of Stock";

/// Columns normalized to the literal strings `"true"`/`"false"`.
const BOOLEAN_COLUMNS: [&str; 10] = [
    COL_ACTIVE,
    COL_OUT_OF_STOCK,
    COL_FEATURED,
    COL_TOP_SELLING,
    COL_NEW_ARRIVAL,
    COL_BEST_SELLING,
    COL_SPECIAL,
    COL_GROCERY,
    COL_VARIANT_ACTIVE,
    COL_VARIANT_OUT_OF_STOCK,
];

/// Columns normalized via parse-as-float-or-zero.
const NUMERIC_COLUMNS: [&str; 5] = [
    COL_PRICE,
    COL_DISCOUNT,
    COL_VARIANT_PRICE,
    COL_VARIANT_DISCOUNT,
    COL_VARIANT_STOCK,
];

/// Result type returned by the feed form helpers.
pub type FeedFormResult<T> = Result<T, FeedFormError>;

/// Errors that can occur while processing an uploaded feed.
#[derive(Debug, Error)]
pub enum FeedFormError {
    /// The upload contained no bytes.
    #[error("upload payload is empty")]
    EmptyPayload,
    /// Parsing retained zero rows.
    #[error("upload contains no usable rows")]
    NoRows,
}

/// One retained data row, keyed by header name, values normalized.
pub type FeedRecord = HashMap<String, String>;

/// Multipart-backed upload payload for the product feed.
#[derive(Debug)]
pub struct UploadFeedForm {
    /// Optional filename provided by the client.
    pub file_name: Option<String>,
    /// Raw feed bytes received from the upload.
    pub bytes: Vec<u8>,
}

impl UploadFeedForm {
    /// Construct a new upload payload from the multipart data.
    pub fn new(file_name: Option<String>, bytes: Vec<u8>) -> Self {
        Self { file_name, bytes }
    }

    /// Parse the uploaded feed into typed rows, in file order.
    pub fn into_rows(self) -> FeedFormResult<(Option<String>, Vec<FeedRow>)> {
        if self.bytes.is_empty() {
            return Err(FeedFormError::EmptyPayload);
        }

        let text = String::from_utf8_lossy(&self.bytes);
        let records = parse_feed(&text);
        if records.is_empty() {
            return Err(FeedFormError::NoRows);
        }

        let rows = records.iter().map(FeedRow::from_record).collect();
        Ok((self.file_name, rows))
    }
}

/// Parse the raw feed text into normalized records.
///
/// The first non-empty line is the header; a data row is retained only when
/// its field count is at least the header count.
pub fn parse_feed(text: &str) -> Vec<FeedRecord> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = split_fields(header_line)
        .into_iter()
        .map(|field| field.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for line in lines {
        let fields = split_fields(line);
        if fields.len() < headers.len() {
            // Short rows are dropped, not reported.
            continue;
        }

        let record = headers
            .iter()
            .zip(fields)
            .map(|(header, value)| (header.clone(), normalize_field(header, &value)))
            .collect();
        records.push(record);
    }

    records
}

/// Split one line on commas, honoring double-quoted fields.
///
/// A quote character toggles the in-quotes state and is stripped from the
/// output; there is no escape sequence for embedded quotes.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields
}

fn normalize_field(header: &str, value: &str) -> String {
    let trimmed = value.trim();

    if BOOLEAN_COLUMNS.contains(&header) {
        return coerce_bool(trimmed).to_string();
    }

    if NUMERIC_COLUMNS.contains(&header) {
        return coerce_number(trimmed).to_string();
    }

    trimmed.to_string()
}

/// Case-insensitive match on the literal `true`; everything else is false.
fn coerce_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// Parse-or-zero numeric coercion.
fn coerce_number(value: &str) -> f64 {
    value.parse::<f64>().unwrap_or(0.0)
}

/// Typed view over one feed record, as consumed by the import engine.
#[derive(Debug, Clone)]
pub struct FeedRow {
    pub product_name: String,
    pub description: String,
    pub ingredients: String,
    pub price: f64,
    pub discount: f64,
    pub slug: String,
    pub active: bool,
    pub out_of_stock: bool,
    pub featured: bool,
    pub top_selling: bool,
    pub new_arrival: bool,
    pub best_selling: bool,
    pub special: bool,
    pub grocery: bool,
    pub brand: String,
    pub categories: String,
    pub images: String,
    pub variant_sku: String,
    pub variant_label: String,
    pub variant_slug: String,
    pub variant_price: f64,
    pub variant_discount: f64,
    pub variant_stock: i32,
    pub variant_active: bool,
    pub variant_out_of_stock: bool,
}

impl FeedRow {
    /// Build a typed row from a normalized record; absent columns default.
    pub fn from_record(record: &FeedRecord) -> Self {
        let text = |column: &str| record.get(column).cloned().unwrap_or_default();
        let number = |column: &str| {
            record
                .get(column)
                .map(|value| coerce_number(value))
                .unwrap_or(0.0)
        };
        let flag = |column: &str| {
            record
                .get(column)
                .map(|value| value == "true")
                .unwrap_or(false)
        };

        Self {
            product_name: text(COL_PRODUCT_NAME),
            description: text(COL_DESCRIPTION),
            ingredients: text(COL_INGREDIENTS),
            price: number(COL_PRICE),
            discount: number(COL_DISCOUNT),
            slug: text(COL_SLUG),
            active: flag(COL_ACTIVE),
            out_of_stock: flag(COL_OUT_OF_STOCK),
            featured: flag(COL_FEATURED),
            top_selling: flag(COL_TOP_SELLING),
            new_arrival: flag(COL_NEW_ARRIVAL),
            best_selling: flag(COL_BEST_SELLING),
            special: flag(COL_SPECIAL),
            grocery: flag(COL_GROCERY),
            brand: text(COL_BRAND),
            categories: text(COL_CATEGORIES),
            images: text(COL_IMAGES),
            variant_sku: text(COL_VARIANT_SKU),
            variant_label: text(COL_VARIANT_LABEL),
            variant_slug: text(COL_VARIANT_SLUG),
            variant_price: number(COL_VARIANT_PRICE),
            variant_discount: number(COL_VARIANT_DISCOUNT),
            variant_stock: number(COL_VARIANT_STOCK) as i32,
            variant_active: flag(COL_VARIANT_ACTIVE),
            variant_out_of_stock: flag(COL_VARIANT_OUT_OF_STOCK),
        }
    }

    /// Category names from the comma-separated `Categories` cell, trimmed.
    pub fn category_names(&self) -> Vec<String> {
        split_sub_list(&self.categories)
    }

    /// Image URLs from the comma-separated `Images` cell, trimmed.
    pub fn image_urls(&self) -> Vec<String> {
        split_sub_list(&self.images)
    }
}

fn split_sub_list(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> String {
        [
            COL_PRODUCT_NAME,
            COL_DESCRIPTION,
            COL_INGREDIENTS,
            COL_PRICE,
            COL_DISCOUNT,
            COL_SLUG,
            COL_ACTIVE,
            COL_OUT_OF_STOCK,
            COL_FEATURED,
            COL_TOP_SELLING,
            COL_NEW_ARRIVAL,
            COL_BEST_SELLING,
            COL_SPECIAL,
            COL_GROCERY,
            COL_BRAND,
            COL_CATEGORIES,
            COL_IMAGES,
            COL_VARIANT_SKU,
            COL_VARIANT_LABEL,
            COL_VARIANT_SLUG,
            COL_VARIANT_PRICE,
            COL_VARIANT_DISCOUNT,
            COL_VARIANT_STOCK,
            COL_VARIANT_ACTIVE,
            COL_VARIANT_OUT_OF_STOCK,
        ]
        .join(",")
    }

    #[test]
    fn quoted_fields_preserve_embedded_commas() {
        let text = "City,Country\n\"Lahore, Pakistan\",PK\n";
        let records = parse_feed(text);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["City"], "Lahore, Pakistan");
        assert_eq!(records[0]["Country"], "PK");
    }

    #[test]
    fn embedded_quotes_are_stripped() {
        let text = "Name,Note\nSoap,\"pre\"\"mium\"\n";
        let records = parse_feed(text);

        // Quotes only toggle state; none survive into the field value.
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["Note"], "premium");
    }

    #[test]
    fn short_rows_are_dropped() {
        let text = "A,B,C\n1,2\n4,5,6\n";
        let records = parse_feed(text);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["A"], "4");
    }

    #[test]
    fn extra_fields_are_retained() {
        let text = "A,B\n1,2,3\n";
        let records = parse_feed(text);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["A"], "1");
        assert_eq!(records[0]["B"], "2");
    }

    #[test]
    fn boolean_columns_normalize_to_literal_strings() {
        let text = format!("{},{},{}\n", COL_ACTIVE, COL_FEATURED, COL_GROCERY)
            + "TRUE,yes,True\n";
        let records = parse_feed(&text);

        assert_eq!(records[0][COL_ACTIVE], "true");
        assert_eq!(records[0][COL_FEATURED], "false");
        assert_eq!(records[0][COL_GROCERY], "true");
    }

    #[test]
    fn numeric_columns_parse_or_zero() {
        let text = format!("{},{}\n", COL_PRICE, COL_VARIANT_STOCK) + "12.50,oops\n";
        let records = parse_feed(&text);

        assert_eq!(records[0][COL_PRICE], "12.5");
        assert_eq!(records[0][COL_VARIANT_STOCK], "0");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let text = "A,B\n\n1,2\n\n";
        let records = parse_feed(text);

        assert_eq!(records.len(), 1);
    }

    #[test]
    fn feed_row_builds_typed_fields() {
        let data = [
            "Rose Water",        // Product Name
            "Toner",             // Description
            "Rose extract",      // Ingredients
            "9.99",              // Price
            "5",                 // Discount (%)
            "rose-water",        // Slug
            "true",              // Active
            "false",             // Out of Stock
            "true",              // Featured
            "false",             // Top Selling
            "false",             // New Arrival
            "false",             // Best Selling
            "false",             // Special
            "false",             // Grocery
            "Herbal Co",         // Brand
            "\"Skin Care, Organic\"", // Categories
            "",                  // Images
            "RW-100",            // Variant SKU
            "100ml",             // Variant Label
            "rose-water-100ml",  // Variant Slug
            "9.99",              // Variant Price
            "5",                 // Variant Discount (%)
            "25",                // Variant Stock
            "true",              // Variant Active
            "false",             // Variant Out of Stock
        ]
        .join(",");
        let text = format!("{}\n{}\n", header(), data);

        let form = UploadFeedForm::new(Some("feed.csv".into()), text.into_bytes());
        let (file_name, rows) = form.into_rows().expect("expected rows");

        assert_eq!(file_name.as_deref(), Some("feed.csv"));
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row.product_name, "Rose Water");
        assert_eq!(row.slug, "rose-water");
        assert_eq!(row.price, 9.99);
        assert!(row.active);
        assert!(!row.grocery);
        assert_eq!(
            row.category_names(),
            vec!["Skin Care".to_string(), "Organic".to_string()]
        );
        assert!(row.image_urls().is_empty());
        assert_eq!(row.variant_sku, "RW-100");
        assert_eq!(row.variant_stock, 25);
    }

    #[test]
    fn empty_payload_is_rejected() {
        let form = UploadFeedForm::new(None, Vec::new());
        assert!(matches!(form.into_rows(), Err(FeedFormError::EmptyPayload)));
    }

    #[test]
    fn header_only_feed_is_rejected() {
        let form = UploadFeedForm::new(None, header().into_bytes());
        assert!(matches!(form.into_rows(), Err(FeedFormError::NoRows)));
    }
}
