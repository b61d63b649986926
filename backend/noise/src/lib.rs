//! `homebase-noise`: shared Noise handshake types for the homebase backend.
//!
//! Holds the value types both the handshake layer and the persisted
//! pairing config need: the app's long-term static keypair and the serde
//! helpers that encode opaque key material as hex strings.

pub mod hexbytes;
pub mod keypair;

pub use keypair::NoiseKeypair;
