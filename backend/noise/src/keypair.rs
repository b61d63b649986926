//! The app's long-term Noise static keypair.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Long-term static keypair identifying the app to a base during the
/// secure-channel handshake.
///
/// Generated and consumed by the handshake layer; the rest of the backend
/// treats both halves as opaque byte buffers.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoiseKeypair {
    /// Static private key. Masked in `Debug` output.
    #[serde(with = "crate::hexbytes")]
    pub private: Vec<u8>,
    /// Static public key, shared with bases while pairing.
    #[serde(with = "crate::hexbytes")]
    pub public: Vec<u8>,
}

impl fmt::Debug for NoiseKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseKeypair")
            .field("private", &"***")
            .field("public", &hex::encode(&self.public))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_masks_private_key() {
        let keypair = NoiseKeypair {
            private: vec![0xaa, 0xbb, 0xcc],
            public: vec![0x01, 0x02],
        };
        let printed = format!("{keypair:?}");
        assert!(printed.contains("***"));
        assert!(printed.contains("0102"));
        assert!(!printed.contains("aabbcc"));
    }

    #[test]
    fn test_serializes_as_hex_fields() {
        let keypair = NoiseKeypair {
            private: vec![0x0f],
            public: vec![0xf0],
        };
        let json = serde_json::to_value(&keypair).unwrap();
        assert_eq!(json["private"], "0f");
        assert_eq!(json["public"], "f0");
    }

    #[test]
    fn test_roundtrip_is_byte_exact() {
        let keypair = NoiseKeypair {
            private: (0..32).collect(),
            public: (32..64).collect(),
        };
        let json = serde_json::to_string(&keypair).unwrap();
        let back: NoiseKeypair = serde_json::from_str(&json).unwrap();
        assert_eq!(back, keypair);
    }
}
