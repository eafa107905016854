//! Export module for Coggnify
//!
//! Provides registry export in multiple formats:
//! - CSV: the horse roster (spreadsheet-compatible)
//! - JSON: machine-readable full registry export
//! - YAML: human-readable full registry export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_horses_csv, HORSE_CSV_HEADER};
pub use json::{export_full_json, ExportMetadata, RegistryExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
