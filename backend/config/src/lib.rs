//! `homebase-config`: persisted pairing state for companion bases.
//!
//! Provides:
//! - Typed document schema (app handshake keypair, trusted base pubkeys,
//!   registered bases)
//! - JSON backing file with atomic writes and backup rotation
//! - A reader-writer-locked store that round-trips the whole document on
//!   every call

pub mod error;
pub mod io;
pub mod schema;
pub mod store;

// Re-export most-used types at crate root.
pub use error::ConfigError;
pub use io::{config_dir, ConfigFile, DocumentStore, CONFIG_FILE_NAME};
pub use schema::{ConfigData, RegisteredBase};
pub use store::BaseStore;
