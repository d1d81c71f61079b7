// src/core/crypto/encrypt.rs
use zeroize::Zeroize;

use crate::aliases::random_nonce;
use crate::consts::NONCE_SIZE;
use crate::core::payload::Payload;
use crate::enums::Version;
use crate::error::Result;
use crate::key_ops::{PrivateKey, PublicKey};

use super::derive::shared_secret;
use super::stream::apply_keystream;

/// Encrypt `plaintext` for the holder of `peer_public_key` using the current version
///
/// Returns the serialized payload, e.g. `{"ciphertext":"…","nonce":"…","v":1}`.
pub fn encrypt(
    own_private_key: impl AsRef<[u8]>,
    peer_public_key: impl AsRef<[u8]>,
    plaintext: &str,
) -> Result<String> {
    encrypt_with_version(
        own_private_key,
        peer_public_key,
        plaintext,
        Version::CURRENT.tag(),
    )
}

/// Encrypt with an explicit version tag
///
/// Any tag other than 1 fails with `UnsupportedVersion` before keys are
/// parsed or randomness is drawn.
pub fn encrypt_with_version(
    own_private_key: impl AsRef<[u8]>,
    peer_public_key: impl AsRef<[u8]>,
    plaintext: &str,
    version: u64,
) -> Result<String> {
    let version = Version::from_tag(version).inspect_err(|_e| {
        #[cfg(feature = "logging")]
        tracing::warn!(version, "refusing to encrypt with unsupported version");
    })?;

    let private = PrivateKey::from_bytes(own_private_key.as_ref())?;
    let public = PublicKey::from_bytes(peer_public_key.as_ref())?;

    seal(&private, &public, plaintext, version, random_nonce())?.to_json()
}

/// Build the payload for a given nonce. Callers own nonce uniqueness.
pub(crate) fn seal(
    private: &PrivateKey,
    public: &PublicKey,
    plaintext: &str,
    version: Version,
    nonce: [u8; NONCE_SIZE],
) -> Result<Payload> {
    match version {
        Version::V1 => {
            let secret = shared_secret(private, public);
            let mut data = plaintext.as_bytes().to_vec();
            if let Err(e) = apply_keystream(&secret, &nonce, &mut data) {
                data.zeroize();
                return Err(e);
            }

            #[cfg(feature = "logging")]
            tracing::debug!(
                version = %version,
                ciphertext_len = data.len(),
                "sealed payload"
            );

            Ok(Payload::V1 {
                nonce,
                ciphertext: data,
            })
        }
    }
}
