// src/error.rs
//! Public error type for the entire crate

use std::str::Utf8Error;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid key: {0}")]
    KeyFormat(String),

    #[error("Unsupported payload version: {0}")]
    UnsupportedVersion(u64),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Decrypted bytes are not UTF-8. With v1 this is the usual symptom of a key mismatch.
    /// Carries only the error position, never the decrypted bytes.
    #[error("Decrypted bytes are not valid UTF-8: {0}")]
    TextDecoding(#[from] Utf8Error),

    #[error("Crypto primitive failed: {0}")]
    CryptoPrimitive(String),
}

impl CoreError {
    /// True for errors caused by the caller's input (keys, version, container)
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CoreError::KeyFormat(_)
                | CoreError::UnsupportedVersion(_)
                | CoreError::MalformedPayload(_)
        )
    }
}

impl From<k256::elliptic_curve::Error> for CoreError {
    fn from(_: k256::elliptic_curve::Error) -> Self {
        // elliptic_curve::Error is opaque; the only thing it tells us is "invalid encoding"
        CoreError::KeyFormat("not a valid secp256k1 key".into())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
