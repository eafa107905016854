//! YAML Export functionality
//!
//! Exports the registry to YAML format for human-readable backup.

use crate::error::{CoggnifyError, CoggnifyResult};
use crate::export::json::RegistryExport;
use crate::storage::Storage;
use std::io::Write;

/// Export the full registry to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> CoggnifyResult<()> {
    let export = RegistryExport::from_storage(storage)?;

    let header = format!(
        "# Coggnify Registry Export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| CoggnifyError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| CoggnifyError::Export(e.to_string()))?;

    Ok(())
}
