// src/aliases.rs
//! Secret containers used throughout ecdh-envelope
//!
//! `SharedSecret32` and `PrivateKeyBytes` own their bytes, are not `Copy`
//! and overwrite them with zeros when dropped. Random public values come
//! from secure-gate's `random_alias!`.

use std::fmt;

use zeroize::Zeroizing;

use crate::consts::{NONCE_SIZE, SHARED_SECRET_SIZE};

pub use secure_gate::{random_alias, SecureConversionsExt, SecureRandomExt};

// Random values (not secret)
random_alias!(RandomNonce24, 24); // XChaCha20 nonce, sent in the clear

/// SHA-256 of the ECDH X coordinate; keys XChaCha20
pub struct SharedSecret32(Zeroizing<[u8; SHARED_SECRET_SIZE]>);

impl SharedSecret32 {
    pub fn new(bytes: [u8; SHARED_SECRET_SIZE]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    pub fn expose_secret(&self) -> &[u8; SHARED_SECRET_SIZE] {
        &self.0
    }

    pub(crate) fn expose_secret_mut(&mut self) -> &mut [u8; SHARED_SECRET_SIZE] {
        &mut self.0
    }
}

impl fmt::Debug for SharedSecret32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret32([REDACTED])")
    }
}

/// Raw private scalar bytes outside of k256
pub struct PrivateKeyBytes(Zeroizing<Vec<u8>>);

impl PrivateKeyBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(Zeroizing::new(bytes))
    }

    pub fn expose_secret(&self) -> &Vec<u8> {
        &self.0
    }
}

impl fmt::Debug for PrivateKeyBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKeyBytes([REDACTED])")
    }
}

/// Fresh nonce from secure-gate's CSPRNG-backed random type
pub(crate) fn random_nonce() -> [u8; NONCE_SIZE] {
    **RandomNonce24::new()
}
