// src/core/crypto/decrypt.rs
use zeroize::Zeroize;

use crate::consts::NONCE_SIZE;
use crate::core::payload::Payload;
use crate::error::{CoreError, Result};
use crate::key_ops::{PrivateKey, PublicKey};

use super::derive::shared_secret;
use super::stream::apply_keystream;

/// Decrypt a serialized payload sent by the holder of `peer_public_key`
///
/// Version 1 carries no MAC. A wrong key is not detected cryptographically:
/// the result is either `CoreError::TextDecoding` or a garbled string.
pub fn decrypt(
    own_private_key: impl AsRef<[u8]>,
    peer_public_key: impl AsRef<[u8]>,
    payload: &str,
) -> Result<String> {
    let (nonce, ciphertext) = match Payload::from_json(payload)? {
        Payload::V1 { nonce, ciphertext } => (nonce, ciphertext),
        Payload::Unsupported { version } => {
            #[cfg(feature = "logging")]
            tracing::warn!(version, "refusing to decrypt unsupported payload version");
            return Err(CoreError::UnsupportedVersion(version));
        }
    };

    let private = PrivateKey::from_bytes(own_private_key.as_ref())?;
    let public = PublicKey::from_bytes(peer_public_key.as_ref())?;

    open_v1(&private, &public, &nonce, ciphertext)
}

pub(crate) fn open_v1(
    private: &PrivateKey,
    public: &PublicKey,
    nonce: &[u8; NONCE_SIZE],
    mut data: Vec<u8>,
) -> Result<String> {
    {
        let secret = shared_secret(private, public);
        apply_keystream(&secret, nonce, &mut data)?;
    }

    #[cfg(feature = "logging")]
    tracing::debug!(plaintext_len = data.len(), "opened v1 payload");

    match String::from_utf8(data) {
        Ok(text) => Ok(text),
        Err(e) => {
            // keep the position only; the bytes may be near-plaintext
            let error = e.utf8_error();
            e.into_bytes().zeroize();
            Err(CoreError::TextDecoding(error))
        }
    }
}
