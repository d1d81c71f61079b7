// src/core/payload.rs
//! Versioned payload container and its JSON wire form
//!
//! Pure format transform: no key material and no cryptography pass through
//! here. The `v` field is read first and decides which other fields are
//! required, so future versions can carry a different field set without
//! touching the cipher engine.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::consts::{FIELD_CIPHERTEXT, FIELD_NONCE, FIELD_VERSION, NONCE_SIZE};
use crate::enums::Version;
use crate::error::{CoreError, Result};

/// A parsed encrypted payload
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Payload {
    V1 {
        nonce: [u8; NONCE_SIZE],
        ciphertext: Vec<u8>,
    },
    /// Declared a tag outside the executable set; its other fields are never inspected
    Unsupported { version: u64 },
}

impl Payload {
    /// Version tag as declared on the wire
    pub fn version(&self) -> u64 {
        match self {
            Payload::V1 { .. } => Version::V1.tag(),
            Payload::Unsupported { version } => *version,
        }
    }

    /// Serialize to JSON. Only executable versions can be written.
    pub fn to_json(&self) -> Result<String> {
        match self {
            Payload::V1 { nonce, ciphertext } => serialize(Version::V1, nonce, ciphertext),
            Payload::Unsupported { version } => Err(CoreError::UnsupportedVersion(*version)),
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        parse(text)
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json().map_err(|_| fmt::Error)?)
    }
}

impl FromStr for Payload {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

// Field order here is the order on the wire.
#[derive(Serialize)]
struct WireV1 {
    ciphertext: String,
    nonce: String,
    v: u64,
}

/// Serialize a payload to compact JSON
///
/// Keys come out in a fixed order (`ciphertext`, `nonce`, `v`), so identical
/// inputs always produce identical text.
pub fn serialize(version: Version, nonce: &[u8; NONCE_SIZE], ciphertext: &[u8]) -> Result<String> {
    let wire = match version {
        Version::V1 => WireV1 {
            ciphertext: STANDARD.encode(ciphertext),
            nonce: STANDARD.encode(nonce),
            v: version.tag(),
        },
    };
    serde_json::to_string(&wire)
        .map_err(|e| CoreError::MalformedPayload(format!("failed to serialize payload: {e}")))
}

/// Parse JSON text into a [`Payload`]
pub fn parse(text: &str) -> Result<Payload> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| CoreError::MalformedPayload(format!("not valid JSON: {e}")))?;
    let object = value
        .as_object()
        .ok_or_else(|| CoreError::MalformedPayload("expected a JSON object".into()))?;

    let tag = object
        .get(FIELD_VERSION)
        .ok_or_else(|| CoreError::MalformedPayload(format!("missing `{FIELD_VERSION}` field")))?
        .as_u64()
        .ok_or_else(|| {
            CoreError::MalformedPayload(format!(
                "`{FIELD_VERSION}` must be a non-negative integer"
            ))
        })?;

    match Version::from_tag(tag) {
        Ok(Version::V1) => parse_v1(object),
        Err(_) => Ok(Payload::Unsupported { version: tag }),
    }
}

fn parse_v1(object: &Map<String, Value>) -> Result<Payload> {
    let nonce_bytes = base64_field(object, FIELD_NONCE)?;
    let nonce: [u8; NONCE_SIZE] = nonce_bytes.as_slice().try_into().map_err(|_| {
        CoreError::MalformedPayload(format!(
            "nonce must be {} bytes, got {}",
            NONCE_SIZE,
            nonce_bytes.len()
        ))
    })?;
    let ciphertext = base64_field(object, FIELD_CIPHERTEXT)?;
    Ok(Payload::V1 { nonce, ciphertext })
}

fn base64_field(object: &Map<String, Value>, name: &str) -> Result<Vec<u8>> {
    let encoded = object
        .get(name)
        .ok_or_else(|| CoreError::MalformedPayload(format!("missing `{name}` field")))?
        .as_str()
        .ok_or_else(|| CoreError::MalformedPayload(format!("`{name}` must be a string")))?;
    STANDARD
        .decode(encoded)
        .map_err(|e| CoreError::MalformedPayload(format!("`{name}` is not valid base64: {e}")))
}
