//! Backing file for the pairing config document.
//!
//! Whole-document JSON reads and writes with atomic rename and rolling
//! backup rotation. The store never opens files itself; it goes through
//! the [`DocumentStore`] contract.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::schema::ConfigData;

/// Fixed file name of the pairing config document inside the config dir.
pub const CONFIG_FILE_NAME: &str = "bases.json";

/// Number of rolling backups to keep.
const MAX_BACKUPS: usize = 5;

/// Resolve the homebase config directory.
/// Priority: `HOMEBASE_CONFIG_DIR` env > `~/.homebase`.
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("HOMEBASE_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".homebase");
    }
    PathBuf::from(".homebase")
}

/// Contract between the store and whatever holds the persisted document.
///
/// One document per installation; reads and writes always cover the
/// whole document, never a sub-field.
pub trait DocumentStore {
    /// Whether a persisted document exists at all.
    fn exists(&self) -> bool;

    /// Read the whole document.
    fn read(&self) -> Result<ConfigData, ConfigError>;

    /// Replace the whole document.
    fn write(&self, doc: &ConfigData) -> Result<(), ConfigError>;
}

/// JSON file implementation of [`DocumentStore`].
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    /// Backing file at the fixed name inside `config_dir`.
    pub fn new(config_dir: &Path) -> Self {
        Self {
            path: config_dir.join(CONFIG_FILE_NAME),
        }
    }

    /// Full path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rotate backup files: bases.json.bak.1 → .bak.2 → ... → .bak.N.
    /// A failed rotation is logged and never blocks the write itself.
    fn rotate_backups(&self) {
        for i in (1..MAX_BACKUPS).rev() {
            let old = self.path.with_extension(format!("json.bak.{}", i));
            let new = self.path.with_extension(format!("json.bak.{}", i + 1));
            if old.exists() {
                if let Err(e) = fs::rename(&old, &new) {
                    warn!("Failed to rotate backup {}: {}", old.display(), e);
                }
            }
        }

        let bak = self.path.with_extension("json.bak.1");
        if let Err(e) = fs::copy(&self.path, &bak) {
            warn!("Failed to create backup {}: {}", bak.display(), e);
        }
    }
}

impl DocumentStore for ConfigFile {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read(&self) -> Result<ConfigData, ConfigError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;

        let doc: ConfigData =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), "Loaded config document");
        Ok(doc)
    }

    fn write(&self, doc: &ConfigData) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        if self.path.exists() {
            self.rotate_backups();
        }

        let json = serde_json::to_string_pretty(doc).map_err(ConfigError::Serialize)?;

        // Write to a temp file, then rename for atomicity.
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json.as_bytes()).map_err(|source| ConfigError::Write {
            path: tmp_path.clone(),
            source,
        })?;

        fs::rename(&tmp_path, &self.path).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), "Wrote config document");
        Ok(())
    }
}
