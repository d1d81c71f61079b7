// src/config/mod.rs
//! Configuration for the command-line front end
//!
//! TOML file with env-var override. Loaded on request and returned by
//! value; the library itself never reads configuration.

pub use app::{load, load_from, Cipher, Config, ConfigError, Keys};
pub use defaults::{default_config_path, CONFIG_ENV};

mod app;
mod defaults;
