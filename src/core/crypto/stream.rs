// src/core/crypto/stream.rs
use chacha20::cipher::{KeyIvInit, StreamCipher};
use chacha20::{Key, XChaCha20, XNonce};

use crate::aliases::SharedSecret32;
use crate::consts::NONCE_SIZE;
use crate::error::{CoreError, Result};

/// XOR the XChaCha20 keystream into `data`. Encrypt and decrypt are the same call.
pub(crate) fn apply_keystream(
    secret: &SharedSecret32,
    nonce: &[u8; NONCE_SIZE],
    data: &mut [u8],
) -> Result<()> {
    let mut cipher = XChaCha20::new(
        Key::from_slice(secret.expose_secret()),
        XNonce::from_slice(nonce),
    );
    cipher
        .try_apply_keystream(data)
        .map_err(|_| CoreError::CryptoPrimitive("XChaCha20 keystream exhausted".into()))
}
