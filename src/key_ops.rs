// src/key_ops.rs
//! Key parsing, generation and representation utilities
//!
//! The cipher engine accepts raw key bytes; this module gives callers typed
//! secp256k1 keys with validation and hex representations on top.

use std::fmt;
use std::str::FromStr;

use k256::elliptic_curve::sec1::ToEncodedPoint;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::aliases::{PrivateKeyBytes, SecureConversionsExt};
use crate::consts::{PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE};
use crate::error::{CoreError, Result};

/// secp256k1 private scalar, zeroized on drop
#[derive(Clone)]
pub struct PrivateKey(k256::SecretKey);

impl PrivateKey {
    /// Parse a 32-byte big-endian scalar
    ///
    /// Zero and values at or above the group order are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PRIVATE_KEY_SIZE {
            return Err(CoreError::KeyFormat(format!(
                "invalid private key size, expected {}, got {}",
                PRIVATE_KEY_SIZE,
                bytes.len()
            )));
        }
        Ok(Self(k256::SecretKey::from_slice(bytes)?))
    }

    /// Parse a private key from hex. Accepts plain or "0x"-prefixed hex.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        let bytes = PrivateKeyBytes::new(
            hex::decode(hex)
                .map_err(|e| CoreError::KeyFormat(format!("private key hex decode error: {e}")))?,
        );
        Self::from_bytes(bytes.expose_secret())
    }

    /// Generate a fresh private key from the thread-local CSPRNG
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let mut candidate = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
        loop {
            rng.fill_bytes(candidate.as_mut_slice());
            // out-of-range scalars occur with probability ~2^-128
            if let Ok(secret) = k256::SecretKey::from_slice(candidate.as_slice()) {
                return Self(secret);
            }
        }
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.public_key())
    }

    /// Raw scalar bytes in a zeroizing container
    pub fn to_bytes(&self) -> PrivateKeyBytes {
        PrivateKeyBytes::new(self.0.to_bytes().to_vec())
    }

    pub fn to_hex(&self) -> String {
        self.to_bytes().expose_secret().to_hex()
    }

    pub(crate) fn as_secret_key(&self) -> &k256::SecretKey {
        &self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

impl FromStr for PrivateKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// secp256k1 public point, exchanged in SEC1 compressed form
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicKey(k256::PublicKey);

impl PublicKey {
    /// Parse a 33-byte compressed point
    ///
    /// Uncompressed encodings and points off the curve are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PUBLIC_KEY_SIZE {
            return Err(CoreError::KeyFormat(format!(
                "invalid public key size, expected {}, got {}",
                PUBLIC_KEY_SIZE,
                bytes.len()
            )));
        }
        if !matches!(bytes[0], 0x02 | 0x03) {
            return Err(CoreError::KeyFormat(format!(
                "public key is not a compressed point (prefix {:#04x})",
                bytes[0]
            )));
        }
        Ok(Self(k256::PublicKey::from_sec1_bytes(bytes)?))
    }

    /// Parse a public key from hex. Accepts plain or "0x"-prefixed hex.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        let bytes = hex::decode(hex)
            .map_err(|e| CoreError::KeyFormat(format!("public key hex decode error: {e}")))?;
        Self::from_bytes(&bytes)
    }

    /// Compressed SEC1 encoding
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        let point = self.0.to_encoded_point(true);
        let mut out = [0u8; PUBLIC_KEY_SIZE];
        out.copy_from_slice(point.as_bytes());
        out
    }

    pub fn to_hex(&self) -> String {
        self.to_bytes().to_hex()
    }

    pub(crate) fn as_public_key(&self) -> &k256::PublicKey {
        &self.0
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for PublicKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// A private key together with its compressed public key
#[derive(Debug, Clone)]
pub struct Keypair {
    pub private: PrivateKey,
    pub public: PublicKey,
}

impl Keypair {
    pub fn from_private(private: PrivateKey) -> Self {
        let public = private.public_key();
        Self { private, public }
    }
}

/// Generate a new random keypair
#[inline]
pub fn generate_keypair() -> Keypair {
    Keypair::from_private(PrivateKey::generate())
}
