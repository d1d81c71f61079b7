// src/consts.rs
//! Shared constants: key, nonce and wire-format parameters

/// secp256k1 private scalar, big-endian
pub const PRIVATE_KEY_SIZE: usize = 32;

/// SEC1 compressed point: one format byte + 32-byte X coordinate
pub const PUBLIC_KEY_SIZE: usize = 33;

/// Output of the shared-secret derivation (SHA-256)
pub const SHARED_SECRET_SIZE: usize = 32;

/// XChaCha20 nonce
pub const NONCE_SIZE: usize = 24;

/// Version tag that must never be processed
pub const RESERVED_VERSION: u64 = 0;

/// Wire field names
pub const FIELD_VERSION: &str = "v";
pub const FIELD_NONCE: &str = "nonce";
pub const FIELD_CIPHERTEXT: &str = "ciphertext";
