//! Typed errors for the pairing config store.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the config store and its backing file.
///
/// A missing backing file is not an error (the store starts from the
/// empty document); a file that exists but cannot be read or parsed is.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The backing file exists but could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing file exists but is not a valid config document.
    #[error("malformed config file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be written back; the attempted change was
    /// not persisted.
    #[error("failed to write config file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document could not be serialized.
    #[error("failed to serialize config document: {0}")]
    Serialize(#[source] serde_json::Error),
}
