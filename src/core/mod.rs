// src/core/mod.rs
pub mod crypto;
pub mod payload;

pub use crypto::*;
pub use payload::Payload;
