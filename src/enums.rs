// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible algorithm choice.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::RESERVED_VERSION;
use crate::error::{CoreError, Result};

/// Executable payload versions
///
/// Each variant names one complete algorithm. Tags outside this set are
/// rejected by [`Version::from_tag`], never guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum Version {
    /// secp256k1 ECDH → SHA-256(X) key, XChaCha20 with a random 24-byte nonce, no MAC
    #[default]
    V1,
}

impl Version {
    pub const CURRENT: Version = Version::V1;

    /// Numeric tag written to the `v` field
    pub fn tag(self) -> u64 {
        match self {
            Version::V1 => 1,
        }
    }

    /// Resolve a wire tag to an executable version
    ///
    /// Tag `0` is reserved and rejected exactly like any unknown tag.
    pub fn from_tag(tag: u64) -> Result<Self> {
        match tag {
            1 => Ok(Version::V1),
            RESERVED_VERSION => Err(CoreError::UnsupportedVersion(tag)),
            other => Err(CoreError::UnsupportedVersion(other)),
        }
    }
}

impl TryFrom<u64> for Version {
    type Error = CoreError;

    fn try_from(tag: u64) -> Result<Self> {
        Version::from_tag(tag)
    }
}

impl From<Version> for u64 {
    fn from(version: Version) -> Self {
        version.tag()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_and_unknown_tags_are_rejected() {
        assert!(matches!(
            Version::from_tag(0),
            Err(CoreError::UnsupportedVersion(0))
        ));
        assert!(matches!(
            Version::from_tag(7),
            Err(CoreError::UnsupportedVersion(7))
        ));
        assert_eq!(Version::from_tag(1).unwrap(), Version::V1);
    }

    #[test]
    fn current_is_v1() {
        assert_eq!(Version::CURRENT, Version::default());
        assert_eq!(u64::from(Version::CURRENT), 1);
        assert_eq!(Version::CURRENT.to_string(), "v1");
    }
}
