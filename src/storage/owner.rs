//! Owner repository for JSON storage
//!
//! Holds the single current owner, persisted as one JSON object in owner.json.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::CoggnifyError;
use crate::models::Owner;

use super::file_io::{read_json, remove_entry, write_json_atomic};

/// Repository for the current owner
pub struct OwnerRepository {
    path: PathBuf,
    data: RwLock<Option<Owner>>,
}

impl OwnerRepository {
    /// Create a new owner repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(None),
        }
    }

    /// Load the owner from disk
    pub fn load(&self) -> Result<(), CoggnifyError> {
        let stored: Option<Owner> = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            CoggnifyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *data = stored;
        Ok(())
    }

    /// Get the current owner
    pub fn get(&self) -> Result<Option<Owner>, CoggnifyError> {
        let data = self.data.read().map_err(|e| {
            CoggnifyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Replace the current owner and write it
    ///
    /// The previous owner stays current if the write fails.
    pub fn replace(&self, owner: Owner) -> Result<Option<Owner>, CoggnifyError> {
        let mut data = self.data.write().map_err(|e| {
            CoggnifyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        write_json_atomic(&self.path, &owner)?;
        Ok(data.replace(owner))
    }

    /// Whether an owner with a non-empty id exists
    pub fn exists(&self) -> Result<bool, CoggnifyError> {
        Ok(self.get()?.map(|o| o.has_id()).unwrap_or(false))
    }

    /// Forget the owner in memory and delete the stored entry
    pub fn clear(&self) -> Result<Option<Owner>, CoggnifyError> {
        let mut data = self.data.write().map_err(|e| {
            CoggnifyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        remove_entry(&self.path)?;
        Ok(data.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OwnerForm;
    use chrono::Utc;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, OwnerRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("owner.json");
        let repo = OwnerRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert!(repo.get().unwrap().is_none());
        assert!(!repo.exists().unwrap());
    }

    #[test]
    fn test_replace_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let owner = Owner::from_form(OwnerForm::new("Jane Smith", "555-1212", "1 Oak Ave"), Utc::now());

        repo.load().unwrap();
        repo.replace(owner.clone()).unwrap();

        let repo2 = OwnerRepository::new(temp_dir.path().join("owner.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get().unwrap(), Some(owner));
        assert!(repo2.exists().unwrap());
    }

    #[test]
    fn test_owner_without_id_does_not_count() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(
            temp_dir.path().join("owner.json"),
            r#"{"id": "", "name": "", "phone": "", "address": "", "createdAt": "2024-06-10T06:15:23Z"}"#,
        )
        .unwrap();

        repo.load().unwrap();
        assert!(repo.get().unwrap().is_some());
        assert!(!repo.exists().unwrap());
    }

    #[test]
    fn test_clear() {
        let (temp_dir, repo) = create_test_repo();
        let owner = Owner::from_form(OwnerForm::default(), Utc::now());
        repo.replace(owner).unwrap();

        let removed = repo.clear().unwrap();
        assert!(removed.is_some());
        assert!(repo.get().unwrap().is_none());
        assert!(!temp_dir.path().join("owner.json").exists());
    }

    #[test]
    fn test_failed_write_keeps_previous_owner() {
        let (temp_dir, repo) = create_test_repo();
        let first = Owner::from_form(OwnerForm::new("Jane Smith", "", ""), Utc::now());
        repo.replace(first.clone()).unwrap();

        std::fs::remove_file(temp_dir.path().join("owner.json")).unwrap();
        std::fs::create_dir(temp_dir.path().join("owner.json")).unwrap();

        let second = Owner::from_form(OwnerForm::new("John Doe", "", ""), Utc::now());
        assert!(repo.replace(second).is_err());
        assert_eq!(repo.get().unwrap(), Some(first));
    }
}
