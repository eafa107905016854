//! User settings for Coggnify
//!
//! Camera preferences, the simulated processing delay and the log filter.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::CoggnifyPaths;
use crate::camera::FacingMode;
use crate::error::CoggnifyError;

/// Camera settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CameraSettings {
    /// Preferred facing direction when opening the camera
    #[serde(default)]
    pub facing: FacingMode,

    /// Image file or directory of images the camera reads frames from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

/// User settings for Coggnify
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Camera preferences
    #[serde(default)]
    pub camera: CameraSettings,

    /// Artificial delay of the simulated license processing, in milliseconds
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,

    /// Default tracing filter when `COGGNIFY_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_processing_delay_ms() -> u64 {
    2000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            camera: CameraSettings::default(),
            processing_delay_ms: default_processing_delay_ms(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &CoggnifyPaths) -> Result<Self, CoggnifyError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                CoggnifyError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CoggnifyError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CoggnifyPaths) -> Result<(), CoggnifyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            CoggnifyError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            CoggnifyError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// The processing delay as a Duration
    pub fn processing_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.processing_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.processing_delay_ms, 2000);
        assert_eq!(settings.camera.facing, FacingMode::Environment);
        assert!(settings.camera.source.is_none());
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CoggnifyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.processing_delay_ms = 10;
        settings.camera.facing = FacingMode::User;
        settings.camera.source = Some(PathBuf::from("/dev/frames"));

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.processing_delay_ms, 10);
        assert_eq!(loaded.camera.facing, FacingMode::User);
        assert_eq!(loaded.camera.source, Some(PathBuf::from("/dev/frames")));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.processing_delay_ms, 2000);
    }
}
