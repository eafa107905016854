//! Horse repository for JSON storage
//!
//! Manages the append-only horse collection in horses.json, stored as a
//! plain JSON array in insertion order.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::CoggnifyError;
use crate::models::Horse;

use super::file_io::{read_json, remove_entry, write_json_atomic};

/// Repository for horse persistence
pub struct HorseRepository {
    path: PathBuf,
    data: RwLock<Vec<Horse>>,
}

impl HorseRepository {
    /// Create a new horse repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load horses from disk
    pub fn load(&self) -> Result<(), CoggnifyError> {
        let stored: Vec<Horse> = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            CoggnifyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *data = stored;
        Ok(())
    }

    /// Get all horses in the order they were added
    pub fn get_all(&self) -> Result<Vec<Horse>, CoggnifyError> {
        let data = self.data.read().map_err(|e| {
            CoggnifyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Append a horse and write the whole collection
    ///
    /// Memory only changes once the write has succeeded.
    pub fn append(&self, horse: Horse) -> Result<(), CoggnifyError> {
        let mut data = self.data.write().map_err(|e| {
            CoggnifyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let mut next = Vec::with_capacity(data.len() + 1);
        next.extend(data.iter().cloned());
        next.push(horse);

        write_json_atomic(&self.path, &next)?;
        *data = next;
        Ok(())
    }

    /// Count horses
    pub fn count(&self) -> Result<usize, CoggnifyError> {
        let data = self.data.read().map_err(|e| {
            CoggnifyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }

    /// Forget all horses and delete the stored entry
    pub fn clear(&self) -> Result<Vec<Horse>, CoggnifyError> {
        let mut data = self.data.write().map_err(|e| {
            CoggnifyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        remove_entry(&self.path)?;
        Ok(std::mem::take(&mut *data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HorseForm, OwnerId};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, HorseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("horses.json");
        let repo = HorseRepository::new(path);
        (temp_dir, repo)
    }

    fn horse(name: &str, millis: i64) -> Horse {
        let now = Utc.timestamp_millis_opt(millis).unwrap();
        Horse::from_form(
            HorseForm::new(name, "Thoroughbred", "Chestnut"),
            OwnerId::from_millis(1_718_000_000_000),
            now,
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_append_preserves_order() {
        let (_temp_dir, repo) = create_test_repo();
        repo.append(horse("First", 1_718_000_000_001)).unwrap();
        repo.append(horse("Second", 1_718_000_000_002)).unwrap();
        repo.append(horse("Third", 1_718_000_000_003)).unwrap();

        let names: Vec<_> = repo.get_all().unwrap().into_iter().map(|h| h.name).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_append_and_reload_round_trip() {
        let (temp_dir, repo) = create_test_repo();
        let horses = vec![horse("First", 1_718_000_000_001), horse("Second", 1_718_000_000_002)];
        for h in &horses {
            repo.append(h.clone()).unwrap();
        }

        let repo2 = HorseRepository::new(temp_dir.path().join("horses.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get_all().unwrap(), horses);
    }

    #[test]
    fn test_stored_as_array() {
        let (temp_dir, repo) = create_test_repo();
        repo.append(horse("First", 1_718_000_000_001)).unwrap();

        let content = std::fs::read_to_string(temp_dir.path().join("horses.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_failed_write_leaves_collection_unchanged() {
        let (temp_dir, repo) = create_test_repo();
        repo.append(horse("First", 1_718_000_000_001)).unwrap();

        // A directory in place of the file makes the rename fail
        std::fs::remove_file(temp_dir.path().join("horses.json")).unwrap();
        std::fs::create_dir(temp_dir.path().join("horses.json")).unwrap();

        assert!(repo.append(horse("Second", 1_718_000_000_002)).is_err());
        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.get_all().unwrap()[0].name, "First");
    }

    #[test]
    fn test_clear() {
        let (_temp_dir, repo) = create_test_repo();
        repo.append(horse("First", 1_718_000_000_001)).unwrap();

        let removed = repo.clear().unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(repo.count().unwrap(), 0);
    }
}
