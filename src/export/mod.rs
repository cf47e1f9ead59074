//! Export module for gastos
//!
//! Provides data export in multiple formats:
//! - JSON: the import bundle shape, directly re-importable
//! - YAML: the same bundle for reading by humans
//! - CSV: expenses with names resolved (spreadsheet-compatible)

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_bundle_json, write_bundle_json, ExportBundle};
pub use yaml::export_bundle_yaml;
