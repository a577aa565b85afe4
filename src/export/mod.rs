//! Export module for Kiro Finance
//!
//! Provides complete data export functionality in multiple formats:
//! - CSV: For the transaction log and expenses (spreadsheet-compatible)
//! - JSON: For machine-readable full data export
//! - YAML: For human-readable full data export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_expenses_csv, export_transactions_csv};
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
