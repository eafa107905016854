//! Storage layer for Coggnify
//!
//! Two JSON entries stand in for browser local storage: the current owner
//! (`coggnify_owner`, owner.json) and the horse collection (`coggnify_horses`,
//! horses.json). Writes are atomic per entry. There is no schema versioning.

pub mod file_io;
pub mod horses;
pub mod owner;

pub use file_io::{read_json, write_json_atomic};
pub use horses::HorseRepository;
pub use owner::OwnerRepository;

use crate::audit::AuditLogger;
use crate::config::paths::CoggnifyPaths;
use crate::error::CoggnifyError;

/// Storage key of the owner entry
pub const OWNER_KEY: &str = "coggnify_owner";

/// Storage key of the horse collection entry
pub const HORSES_KEY: &str = "coggnify_horses";

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    pub owner: OwnerRepository,
    pub horses: HorseRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: CoggnifyPaths) -> Result<Self, CoggnifyError> {
        paths.ensure_directories()?;

        Ok(Self {
            owner: OwnerRepository::new(paths.owner_file()),
            horses: HorseRepository::new(paths.horses_file()),
            audit: AuditLogger::new(paths.audit_log()),
        })
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), CoggnifyError> {
        self.owner.load()?;
        self.horses.load()?;
        Ok(())
    }

    /// Whether a returning session can skip straight to the dashboard
    pub fn has_completed_registration(&self) -> Result<bool, CoggnifyError> {
        Ok(self.owner.exists()? && self.horses.count()? > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Horse, HorseForm, Owner, OwnerForm};
    use chrono::Utc;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CoggnifyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = create_test_storage();
        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.has_completed_registration().unwrap());
    }

    #[test]
    fn test_round_trip_all() {
        let (temp_dir, storage) = create_test_storage();
        let owner = Owner::from_form(OwnerForm::new("Jane Smith", "555-1212", "1 Oak Ave"), Utc::now());
        let horse = Horse::from_form(
            HorseForm::new("Biscuit", "Quarter Horse", "Bay"),
            owner.id.clone(),
            Utc::now(),
        );

        storage.owner.replace(owner.clone()).unwrap();
        storage.horses.append(horse.clone()).unwrap();

        let paths = CoggnifyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();

        assert_eq!(reloaded.owner.get().unwrap(), Some(owner));
        assert_eq!(reloaded.horses.get_all().unwrap(), vec![horse]);
        assert!(reloaded.has_completed_registration().unwrap());
    }

    #[test]
    fn test_owner_alone_is_not_complete() {
        let (_temp_dir, storage) = create_test_storage();
        let owner = Owner::from_form(OwnerForm::default(), Utc::now());
        storage.owner.replace(owner).unwrap();
        assert!(!storage.has_completed_registration().unwrap());
    }

    #[test]
    fn test_malformed_entry_fails_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CoggnifyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths.clone()).unwrap();
        std::fs::write(paths.horses_file(), "[{\"id\": ").unwrap();

        let err = storage.load_all().unwrap_err();
        assert!(matches!(err, CoggnifyError::Storage(_)));
    }
}
