// src/config/app.rs
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::defaults::*;
use crate::enums::Version;
use crate::error::CoreError;
use crate::key_ops::{PrivateKey, PublicKey};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub keys: Keys,
    pub cipher: Cipher,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Keys {
    /// File holding the hex-encoded private key
    pub private_key_file: Option<PathBuf>,
    /// Hex-encoded compressed public key of the usual correspondent
    pub peer_public_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Cipher {
    pub version: u64,
}

impl Default for Cipher {
    fn default() -> Self {
        default_cipher()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config key error: {0}")]
    Key(#[from] CoreError),
}

impl Config {
    /// Load the private key referenced by `keys.private_key_file`, if any
    pub fn private_key(&self) -> Result<Option<PrivateKey>, ConfigError> {
        let Some(path) = &self.keys.private_key_file else {
            return Ok(None);
        };
        let hex = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(Some(PrivateKey::from_hex(&hex)?))
    }

    pub fn peer_public_key(&self) -> Result<Option<PublicKey>, ConfigError> {
        self.keys
            .peer_public_key
            .as_deref()
            .map(PublicKey::from_hex)
            .transpose()
            .map_err(ConfigError::from)
    }

    /// Configured version, validated against the executable set
    pub fn version(&self) -> Result<Version, ConfigError> {
        Ok(Version::from_tag(self.cipher.version)?)
    }
}

/// Parse a config file that must exist
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve and load configuration
///
/// An explicit path or `ECDH_ENVELOPE_CONFIG` must point at a readable file.
/// The per-user default location is optional; without it the built-in
/// defaults apply.
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return load_from(path);
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return load_from(Path::new(&path));
    }
    match default_config_path() {
        Some(path) if path.exists() => load_from(&path),
        _ => {
            #[cfg(feature = "logging")]
            tracing::debug!("no config file found, using built-in defaults");
            Ok(Config::default())
        }
    }
}
