// src/lib.rs
//! ecdh-envelope: versioned keypair-derived encryption for text payloads
//!
//! Party A encrypts for party B with A's private key and B's public key;
//! B decrypts with B's private key and A's public key. No handshake.
//!
//! Version 1:
//! - secp256k1 ECDH, key = SHA-256 of the shared point's X coordinate
//! - XChaCha20 with a random 24-byte nonce per message
//! - JSON container `{"ciphertext":"…","nonce":"…","v":1}` (base64 fields)
//!
//! Version 1 has no authentication tag. A tampered payload or a wrong key
//! produces garbage text (or `CoreError::TextDecoding`), not a crypto error.
//! Version 0 is reserved and always rejected.

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;
pub mod key_ops;

// Re-export everything users need at the crate root
pub use aliases::SharedSecret32;
pub use crate::core::{decrypt, derive_shared_secret, encrypt, encrypt_with_version, Payload};
pub use enums::Version;
pub use error::{CoreError, Result};
pub use key_ops::{generate_keypair, Keypair, PrivateKey, PublicKey};
