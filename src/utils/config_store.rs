//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::domain::config::OverlayConfig;
use crate::error::{Error, Result};

/// Get (and create) the per-user application data directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/MSFS-SimRateMonitor/`
/// - **macOS**: `~/Library/Application Support/MSFS-SimRateMonitor/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\MSFS-SimRateMonitor\`
pub fn app_data_dir() -> Result<PathBuf> {
    let Some(base_dirs) = BaseDirs::new() else {
        return Err(Error::Invalid {
            message: "Could not determine the user's config directory".to_string(),
        });
    };

    let dir = base_dirs.config_dir().join(APP_DIR_NAME);
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Load-once / save-on-mutation storage for [`OverlayConfig`]
pub trait ConfigStore {
    /// Load the stored config. A store with nothing saved yet yields the defaults.
    fn load(&self) -> Result<OverlayConfig>;

    /// Replace the stored config
    fn save(&self, config: &OverlayConfig) -> Result<()>;
}

/// JSON file backed store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<app data dir>/config.json`
    pub fn in_app_data_dir() -> Result<Self> {
        Ok(Self::new(app_data_dir()?.join(CONFIG_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<OverlayConfig> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write(&self, config: &OverlayConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl ConfigStore for JsonFileStore {
    fn load(&self) -> Result<OverlayConfig> {
        if !self.path.exists() {
            return Ok(OverlayConfig::default());
        }

        self.read().map_err(|e| Error::ConfigLoad {
            path: self.path.clone(),
            source: Box::new(e),
        })
    }

    fn save(&self, config: &OverlayConfig) -> Result<()> {
        self.write(config).map_err(|e| Error::ConfigPersist {
            path: self.path.clone(),
            source: Box::new(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::{Position, SizeTier};

    fn temp_store() -> (tempfile::TempDir, JsonFileStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join(CONFIG_FILE_NAME));
        (dir, store)
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let (_dir, store) = temp_store();
        let config = store.load().expect("load");
        assert_eq!(config, OverlayConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let (_dir, store) = temp_store();
        let config = OverlayConfig {
            position: Position::new(300, 250),
            size_tier: SizeTier::S,
            auto_hide: false,
            start_with_windows: true,
        };
        store.save(&config).expect("save");
        assert_eq!(store.load().expect("load"), config);
    }

    #[test]
    fn test_malformed_file_is_a_load_error() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "{ not json").expect("write");
        let err = store.load().expect_err("malformed file should not load");
        assert!(matches!(err, Error::ConfigLoad { .. }));
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("nested").join(CONFIG_FILE_NAME));
        store.save(&OverlayConfig::default()).expect("save");
        assert!(store.path().exists());
    }

    #[test]
    fn test_unwritable_path_is_a_persist_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        // The directory itself is not a writable file path
        let store = JsonFileStore::new(dir.path());
        let err = store
            .save(&OverlayConfig::default())
            .expect_err("writing over a directory should fail");
        assert!(matches!(err, Error::ConfigPersist { .. }));
    }
}
