//! Session service
//!
//! Wiping the stored owner and horses.

use chrono::Utc;
use tracing::info;

use crate::audit::AuditEntry;
use crate::error::CoggnifyResult;
use crate::storage::Storage;

/// What a reset removed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetSummary {
    pub owner_removed: bool,
    pub horses_removed: usize,
}

/// Service for session-wide operations
pub struct SessionService<'a> {
    storage: &'a Storage,
}

impl<'a> SessionService<'a> {
    /// Create a new session service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Delete the stored owner and horses
    pub fn reset(&self) -> CoggnifyResult<ResetSummary> {
        let owner = self.storage.owner.clear()?;
        let horses = self.storage.horses.clear()?;

        let now = Utc::now();
        let entries: Vec<AuditEntry> = owner
            .iter()
            .map(|o| AuditEntry::owner_removed(o, now))
            .chain(horses.iter().map(|h| AuditEntry::horse_removed(h, now)))
            .collect();
        self.storage.audit().log_batch(&entries)?;

        let summary = ResetSummary {
            owner_removed: owner.is_some(),
            horses_removed: horses.len(),
        };
        info!(
            owner_removed = summary.owner_removed,
            horses_removed = summary.horses_removed,
            "Session reset"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
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
    fn test_reset() {
        let (temp_dir, storage) = create_test_storage();
        let owner = OwnerService::new(&storage).create(OwnerForm::default()).unwrap();
        HorseService::new(&storage)
            .add(HorseForm::new("Biscuit", "", ""), owner.id)
            .unwrap();

        let summary = SessionService::new(&storage).reset().unwrap();
        assert!(summary.owner_removed);
        assert_eq!(summary.horses_removed, 1);
        assert!(!storage.has_completed_registration().unwrap());
        assert!(!temp_dir.path().join("data").join("owner.json").exists());

        let deletes = storage
            .audit()
            .read_all()
            .unwrap()
            .into_iter()
            .filter(|e| e.operation == Operation::Delete)
            .count();
        assert_eq!(deletes, 2);
    }

    #[test]
    fn test_reset_when_empty() {
        let (_temp_dir, storage) = create_test_storage();
        let summary = SessionService::new(&storage).reset().unwrap();
        assert_eq!(summary, ResetSummary::default());
    }
}
