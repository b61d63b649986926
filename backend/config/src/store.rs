//! Reader-writer-locked store over the pairing config document.
//!
//! Every operation round-trips the whole document through the backing
//! store; nothing is cached between calls. Mutations hold the exclusive
//! lock across the entire load-check-mutate-write cycle, so an
//! idempotence check can never interleave with another caller's write.

use std::path::Path;
use std::sync::RwLock;

use homebase_noise::NoiseKeypair;
use tracing::{info, warn};

use crate::error::ConfigError;
use crate::io::{ConfigFile, DocumentStore};
use crate::schema::{ConfigData, RegisteredBase};

/// Lock-guarded pairing state for companion bases.
///
/// Keeps no document in memory between calls; the backing store is the
/// single source of truth and every call reloads it. Suitable for
/// pairing-time call rates, not a hot data path.
pub struct BaseStore<S = ConfigFile> {
    store: RwLock<S>,
}

impl BaseStore<ConfigFile> {
    /// Store backed by `bases.json` inside the given config directory.
    pub fn open(config_dir: &Path) -> Self {
        Self::with_store(ConfigFile::new(config_dir))
    }
}

impl<S: DocumentStore> BaseStore<S> {
    /// Store over an arbitrary document backend.
    pub fn with_store(store: S) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// Load the current document, or the empty default if none was ever
    /// written. A file that exists but fails to read or parse is an
    /// error, not an empty document.
    fn load(store: &S) -> Result<ConfigData, ConfigError> {
        if !store.exists() {
            return Ok(ConfigData::default());
        }
        store.read()
    }

    /// Whether `pubkey` is in the trusted set.
    pub fn contains_trusted_pubkey(&self, pubkey: &[u8]) -> Result<bool, ConfigError> {
        let store = self.store.read().unwrap();
        let doc = Self::load(&store)?;
        Ok(doc.trusted_pubkeys.iter().any(|known| known == pubkey))
    }

    /// Trust a base pubkey. Adding an already-trusted key is a no-op.
    pub fn add_trusted_pubkey(&self, pubkey: &[u8]) -> Result<(), ConfigError> {
        let store = self.store.write().unwrap();
        let mut doc = Self::load(&store)?;
        if doc.trusted_pubkeys.iter().any(|known| known == pubkey) {
            return Ok(());
        }

        doc.trusted_pubkeys.push(pubkey.to_vec());
        store.write(&doc)?;
        info!(pubkey = %hex::encode(pubkey), "Added trusted base pubkey");
        Ok(())
    }

    /// The app's long-term handshake keypair, if one was ever stored.
    pub fn app_keypair(&self) -> Result<Option<NoiseKeypair>, ConfigError> {
        let store = self.store.read().unwrap();
        Ok(Self::load(&store)?.app_keypair)
    }

    /// Store the app's handshake keypair, replacing any previous one.
    /// Last writer wins.
    pub fn set_app_keypair(&self, keypair: &NoiseKeypair) -> Result<(), ConfigError> {
        let store = self.store.write().unwrap();
        let mut doc = Self::load(&store)?;
        doc.app_keypair = Some(keypair.clone());
        store.write(&doc)?;
        info!("Stored app handshake keypair");
        Ok(())
    }

    /// Whether a base with this id is registered.
    pub fn contains_registered_base(&self, base_id: &str) -> Result<bool, ConfigError> {
        let store = self.store.read().unwrap();
        let doc = Self::load(&store)?;
        Ok(doc.registered_bases.iter().any(|base| base.base_id == base_id))
    }

    /// Register a base. Registering an id that is already present is a
    /// no-op, even with a different hostname.
    pub fn add_registered_base(&self, base_id: &str, hostname: &str) -> Result<(), ConfigError> {
        let store = self.store.write().unwrap();
        let mut doc = Self::load(&store)?;
        if doc.registered_bases.iter().any(|base| base.base_id == base_id) {
            return Ok(());
        }

        doc.registered_bases.push(RegisteredBase {
            base_id: base_id.to_string(),
            hostname: hostname.to_string(),
        });
        store.write(&doc)?;
        info!(base_id, hostname, "Registered base");
        Ok(())
    }

    /// Snapshot of all registered bases.
    pub fn registered_bases(&self) -> Result<Vec<RegisteredBase>, ConfigError> {
        let store = self.store.read().unwrap();
        Ok(Self::load(&store)?.registered_bases)
    }

    /// Remove every entry registered under this id. Unknown ids are a
    /// no-op.
    pub fn remove_registered_base(&self, base_id: &str) -> Result<(), ConfigError> {
        let store = self.store.write().unwrap();
        let mut doc = Self::load(&store)?;
        let before = doc.registered_bases.len();
        doc.registered_bases.retain(|base| base.base_id != base_id);
        if doc.registered_bases.len() == before {
            return Ok(());
        }

        store.write(&doc)?;
        warn!(base_id, "Removed registered base");
        Ok(())
    }

    /// Point a registered base at a new hostname. Unknown ids and
    /// unchanged hostnames are no-ops.
    pub fn update_registered_base_hostname(
        &self,
        base_id: &str,
        hostname: &str,
    ) -> Result<(), ConfigError> {
        let store = self.store.write().unwrap();
        let mut doc = Self::load(&store)?;
        let Some(base) = doc
            .registered_bases
            .iter_mut()
            .find(|base| base.base_id == base_id)
        else {
            return Ok(());
        };
        if base.hostname == hostname {
            return Ok(());
        }

        base.hostname = hostname.to_string();
        store.write(&doc)?;
        info!(base_id, hostname, "Updated base hostname");
        Ok(())
    }
}
