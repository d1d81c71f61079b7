// tests/config_tests.rs
use std::fs;
use std::path::Path;

use ecdh_envelope::config::{load, load_from, Config, ConfigError};
use ecdh_envelope::{generate_keypair, Version};
use tempfile::tempdir;

#[test]
fn test_defaults_use_current_version_and_no_keys() {
    let config = Config::default();
    assert_eq!(config.cipher.version, 1);
    assert_eq!(config.version().unwrap(), Version::CURRENT);
    assert!(config.private_key().unwrap().is_none());
    assert!(config.peer_public_key().unwrap().is_none());
}

#[test]
fn test_load_full_config_with_key_file() {
    let dir = tempdir().unwrap();
    let me = generate_keypair();
    let peer = generate_keypair();

    let key_path = dir.path().join("private.hex");
    fs::write(&key_path, format!("{}\n", me.private.to_hex())).unwrap();

    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "[keys]\nprivate_key_file = {:?}\npeer_public_key = \"{}\"\n\n[cipher]\nversion = 1\n",
            key_path.display().to_string(),
            peer.public.to_hex()
        ),
    )
    .unwrap();

    let config = load(Some(&config_path)).unwrap();
    assert_eq!(
        config.private_key().unwrap().unwrap().public_key(),
        me.public
    );
    assert_eq!(config.peer_public_key().unwrap().unwrap(), peer.public);
    assert_eq!(config.version().unwrap(), Version::V1);
}

#[test]
fn test_partial_config_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[keys]\n").unwrap();

    let config = load_from(&config_path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_reserved_version_in_config_is_rejected_on_use() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[cipher]\nversion = 0\n").unwrap();

    let config = load_from(&config_path).unwrap();
    assert!(matches!(config.version(), Err(ConfigError::Key(_))));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let result = load(Some(Path::new("/definitely/not/here/config.toml")));
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[keys\nthis is not toml").unwrap();

    assert!(matches!(
        load_from(&config_path),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn test_bad_peer_key_surfaces_key_error() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[keys]\npeer_public_key = \"02abcd\"\n").unwrap();

    let config = load_from(&config_path).unwrap();
    assert!(matches!(config.peer_public_key(), Err(ConfigError::Key(_))));
}
