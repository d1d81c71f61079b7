// src/config/defaults.rs
use std::path::PathBuf;

use crate::config::app::Cipher;
use crate::enums::Version;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "ECDH_ENVELOPE_CONFIG";

pub const CONFIG_DIR_NAME: &str = "ecdh-envelope";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub fn default_cipher() -> Cipher {
    Cipher {
        version: Version::CURRENT.tag(),
    }
}

/// `<config dir>/ecdh-envelope/config.toml`, when the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
