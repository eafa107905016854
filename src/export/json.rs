//! JSON Export functionality
//!
//! Exports the owner and horse collection to JSON with schema versioning.

use crate::error::{CoggnifyError, CoggnifyResult};
use crate::models::{Horse, Owner};
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full registry export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The registered owner, if any
    pub owner: Option<Owner>,

    /// All horses in insertion order
    pub horses: Vec<Horse>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportMetadata {
    pub has_owner: bool,

    /// Total number of horses
    pub horse_count: usize,

    /// Horses carrying a microchip id
    pub microchipped_count: usize,

    /// When the first horse was added
    pub first_added: Option<DateTime<Utc>>,

    /// When the latest horse was added
    pub last_added: Option<DateTime<Utc>>,
}

impl ExportMetadata {
    fn collect(owner: Option<&Owner>, horses: &[Horse]) -> Self {
        Self {
            has_owner: owner.is_some(),
            horse_count: horses.len(),
            microchipped_count: horses.iter().filter(|h| h.microchip_id.is_some()).count(),
            first_added: horses.iter().map(|h| h.added_at).min(),
            last_added: horses.iter().map(|h| h.added_at).max(),
        }
    }
}

impl RegistryExport {
    /// Create a new export from storage
    pub fn from_storage(storage: &Storage) -> CoggnifyResult<Self> {
        let owner = storage.owner.get()?;
        let horses = storage.horses.get_all()?;
        let metadata = ExportMetadata::collect(owner.as_ref(), &horses);

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            owner,
            horses,
            metadata,
        })
    }
}

/// Export the full registry to JSON format
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W, pretty: bool) -> CoggnifyResult<()> {
    let export = RegistryExport::from_storage(storage)?;

    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    result.map_err(|e| CoggnifyError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| CoggnifyError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CoggnifyPaths;
    use crate::models::{HorseForm, OwnerForm};
    use crate::services::{HorseService, OwnerService};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CoggnifyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_json_export() {
        let (_temp_dir, storage) = create_test_storage();
        let owner = OwnerService::new(&storage)
            .create(OwnerForm::new("Jane Smith", "555-1212", "1 Oak Ave"))
            .unwrap();
        let horses = HorseService::new(&storage);
        horses
            .add(HorseForm::new("Biscuit", "Quarter Horse", "Bay"), owner.id.clone())
            .unwrap();
        horses
            .add(HorseForm::new("Pepper", "Arabian", "Grey").with_microchip("123"), owner.id)
            .unwrap();

        let mut output = Vec::new();
        export_full_json(&storage, &mut output, true).unwrap();

        let parsed: RegistryExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.owner.unwrap().name, "Jane Smith");
        assert_eq!(parsed.horses.len(), 2);
        assert_eq!(parsed.metadata.horse_count, 2);
        assert_eq!(parsed.metadata.microchipped_count, 1);
    }

    #[test]
    fn test_empty_export() {
        let (_temp_dir, storage) = create_test_storage();
        let export = RegistryExport::from_storage(&storage).unwrap();
        assert!(export.owner.is_none());
        assert!(!export.metadata.has_owner);
        assert!(export.metadata.first_added.is_none());
    }
}
