//! Persisted pairing config schema.
//!
//! One document per installation, grouping everything the backend keeps
//! about companion bases: the app's handshake keypair plus the trusted
//! pubkeys and registry entries of the bases paired with it.

use homebase_noise::{hexbytes, NoiseKeypair};
use serde::{Deserialize, Serialize};

/// A base paired with the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredBase {
    /// Stable identifier, immutable once paired.
    #[serde(rename = "baseID")]
    pub base_id: String,
    /// Network hostname the base is currently reachable under.
    pub hostname: String,
}

/// Root of the persisted document. Always loaded and written back whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigData {
    /// The app's long-term handshake keypair, absent until the handshake
    /// layer generates one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_keypair: Option<NoiseKeypair>,

    /// Static pubkeys of bases accepted as handshake peers, in insertion
    /// order. Uniqueness is enforced by the store, not the schema.
    #[serde(default, with = "hexbytes::seq")]
    pub trusted_pubkeys: Vec<Vec<u8>>,

    /// Paired bases, unique by `base_id`.
    #[serde(default)]
    pub registered_bases: Vec<RegisteredBase>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConfigData {
        ConfigData {
            app_keypair: Some(NoiseKeypair {
                private: vec![0x01; 4],
                public: vec![0x02; 4],
            }),
            trusted_pubkeys: vec![vec![0xaa, 0xbb], vec![0xcc]],
            registered_bases: vec![RegisteredBase {
                base_id: "base1".to_string(),
                hostname: "host1.local".to_string(),
            }],
        }
    }

    #[test]
    fn test_empty_input_parses_to_default() {
        let doc: ConfigData = serde_json::from_str("{}").unwrap();
        assert_eq!(doc, ConfigData::default());
        assert!(doc.app_keypair.is_none());
    }

    #[test]
    fn test_absent_keypair_is_omitted_and_stays_absent() {
        let json = serde_json::to_string(&ConfigData::default()).unwrap();
        assert!(!json.contains("appKeypair"));
        let back: ConfigData = serde_json::from_str(&json).unwrap();
        assert!(back.app_keypair.is_none());
    }

    #[test]
    fn test_document_field_names() {
        let json = serde_json::to_value(&sample()).unwrap();
        assert_eq!(json["appKeypair"]["private"], "01010101");
        assert_eq!(json["trustedPubkeys"][0], "aabb");
        assert_eq!(json["registeredBases"][0]["baseID"], "base1");
        assert_eq!(json["registeredBases"][0]["hostname"], "host1.local");
    }

    #[test]
    fn test_roundtrip() {
        let doc = sample();
        let json = serde_json::to_string(&doc).unwrap();
        let back: ConfigData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
