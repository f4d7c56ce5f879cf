//! Configuration management for babylog.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::photos::CompressOptions;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "babylog";

/// Default database file name.
const DATABASE_FILE_NAME: &str = "diary.db";

/// File name of the flat JSON document written by older versions.
const LEGACY_FILE_NAME: &str = "baby_log_data.json";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `BABYLOG_`, sections split on `__`)
/// 2. TOML config file at `~/.config/babylog/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Legacy import configuration.
    pub legacy: LegacyConfig,
    /// Photo configuration.
    pub photos: PhotoConfig,
    /// Autosave configuration.
    pub autosave: AutosaveConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the database file.
    /// Defaults to `~/.local/share/babylog/diary.db`
    pub database_path: Option<PathBuf>,
}

/// Legacy import configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyConfig {
    /// Look for a legacy document on startup.
    pub enabled: bool,
    /// Path to the legacy JSON document.
    /// Defaults to `~/.local/share/babylog/baby_log_data.json`
    pub import_path: Option<PathBuf>,
}

/// Photo-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoConfig {
    /// Longest edge of a stored photo, in pixels.
    pub max_long_side: u32,
    /// Lossy encoder quality, 1-100.
    pub quality: u8,
    /// Maximum number of photos attached to one diary entry.
    pub max_per_entry: usize,
}

/// Autosave-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutosaveConfig {
    /// Quiet period after the last change before state is written, in milliseconds.
    pub debounce_ms: u64,
}

impl Default for LegacyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            import_path: None, // Resolved at runtime
        }
    }
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self {
            max_long_side: 1600,
            quality: 82,
            max_per_entry: 3,
        }
    }
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self { debounce_ms: 500 }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("BABYLOG_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.photos.quality == 0 || self.photos.quality > 100 {
            return Err(Error::ConfigValidation {
                message: format!(
                    "photos.quality must be between 1 and 100, got {}",
                    self.photos.quality
                ),
            });
        }

        if self.photos.max_long_side == 0 {
            return Err(Error::ConfigValidation {
                message: "photos.max_long_side must be greater than 0".to_string(),
            });
        }

        if self.photos.max_per_entry == 0 {
            return Err(Error::ConfigValidation {
                message: "photos.max_per_entry must be greater than 0".to_string(),
            });
        }

        if self.autosave.debounce_ms == 0 {
            return Err(Error::ConfigValidation {
                message: "autosave.debounce_ms must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Get the database path, resolving defaults if not set.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DATABASE_FILE_NAME))
    }

    /// Get the legacy document path, or `None` when legacy import is disabled.
    #[must_use]
    pub fn legacy_path(&self) -> Option<PathBuf> {
        if !self.legacy.enabled {
            return None;
        }
        Some(
            self.legacy
                .import_path
                .clone()
                .unwrap_or_else(|| Self::default_data_dir().join(LEGACY_FILE_NAME)),
        )
    }

    /// Get the autosave quiet period as a Duration.
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.autosave.debounce_ms)
    }

    /// Get the photo compression settings.
    #[must_use]
    pub fn compress_options(&self) -> CompressOptions {
        CompressOptions {
            max_long_side: self.photos.max_long_side,
            quality: self.photos.quality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.storage.database_path.is_none());
        assert!(config.legacy.enabled);
        assert!(config.legacy.import_path.is_none());
        assert_eq!(config.photos.max_long_side, 1600);
        assert_eq!(config.photos.quality, 82);
        assert_eq!(config.photos.max_per_entry, 3);
        assert_eq!(config.autosave.debounce_ms, 500);
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_quality_out_of_range() {
        let mut config = Config::default();
        config.photos.quality = 0;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("photos.quality"));

        config.photos.quality = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_long_side() {
        let mut config = Config::default();
        config.photos.max_long_side = 0;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("max_long_side"));
    }

    #[test]
    fn test_validate_zero_photo_limit() {
        let mut config = Config::default();
        config.photos.max_per_entry = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_debounce() {
        let mut config = Config::default();
        config.autosave.debounce_ms = 0;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("debounce_ms"));
    }

    #[test]
    fn test_database_path_default() {
        let path = Config::default().database_path();
        assert!(path.to_string_lossy().contains("diary.db"));
    }

    #[test]
    fn test_database_path_custom() {
        let mut config = Config::default();
        config.storage.database_path = Some(PathBuf::from("/custom/path/db.sqlite"));
        assert_eq!(
            config.database_path(),
            PathBuf::from("/custom/path/db.sqlite")
        );
    }

    #[test]
    fn test_legacy_path_default() {
        let path = Config::default().legacy_path().unwrap();
        assert!(path.to_string_lossy().contains("baby_log_data.json"));
    }

    #[test]
    fn test_legacy_path_disabled() {
        let mut config = Config::default();
        config.legacy.enabled = false;
        config.legacy.import_path = Some(PathBuf::from("/tmp/legacy.json"));
        assert!(config.legacy_path().is_none());
    }

    #[test]
    fn test_debounce() {
        assert_eq!(Config::default().debounce(), Duration::from_millis(500));
    }

    #[test]
    fn test_compress_options() {
        let options = Config::default().compress_options();
        assert_eq!(options.max_long_side, 1600);
        assert_eq!(options.quality, 82);
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("babylog"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let config = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[photos]\nquality = 70\n\n[autosave]\ndebounce_ms = 250\n",
        )
        .unwrap();

        let config = Config::load_from(Some(path)).unwrap();
        assert_eq!(config.photos.quality, 70);
        assert_eq!(config.photos.max_long_side, 1600);
        assert_eq!(config.autosave.debounce_ms, 250);
    }

    #[test]
    fn test_load_storage_and_legacy_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[storage]\ndatabase_path = \"/data/baby/diary.db\"\n\n[legacy]\nenabled = false\n",
        )
        .unwrap();

        let config = Config::load_from(Some(path)).unwrap();
        assert_eq!(config.database_path(), PathBuf::from("/data/baby/diary.db"));
        assert_eq!(config.legacy_path(), None);
        assert_eq!(config.photos, PhotoConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[photos]\nquality = 0\n").unwrap();

        assert!(Config::load_from(Some(path)).is_err());
    }

    #[test]
    fn test_photo_config_deserialize() {
        let json = r#"{"max_long_side": 800}"#;
        let photos: PhotoConfig = serde_json::from_str(json).unwrap();
        assert_eq!(photos.max_long_side, 800);
        assert_eq!(photos.quality, 82);
    }
}
