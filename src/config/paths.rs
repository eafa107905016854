//! Path management for Coggnify
//!
//! Resolves where configuration, stored records and logs live.
//!
//! ## Path Resolution Order
//!
//! 1. `COGGNIFY_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/coggnify`, `%APPDATA%\coggnify`, ...)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::CoggnifyError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "COGGNIFY_DATA_DIR";

/// Manages all paths used by Coggnify
#[derive(Debug, Clone)]
pub struct CoggnifyPaths {
    /// Base directory for all Coggnify data
    base_dir: PathBuf,
}

impl CoggnifyPaths {
    /// Create a new CoggnifyPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, CoggnifyError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CoggnifyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding the stored records
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the diagnostic log written by tracing
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("coggnify.log")
    }

    /// Storage entry for the current owner (`coggnify_owner`)
    pub fn owner_file(&self) -> PathBuf {
        self.data_dir().join("owner.json")
    }

    /// Storage entry for the horse collection (`coggnify_horses`)
    pub fn horses_file(&self) -> PathBuf {
        self.data_dir().join("horses.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), CoggnifyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CoggnifyError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CoggnifyError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default base directory from the platform config dir
fn resolve_default_path() -> Result<PathBuf, CoggnifyError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| CoggnifyError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("coggnify"))
}
