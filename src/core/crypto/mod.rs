// src/core/crypto/mod.rs
//! Pure cryptographic operations: no I/O, no global state
//!
//! All functions work exclusively on in-memory buffers and are safe to call
//! from any number of threads at once. Secrets (private scalar, shared
//! secret, cipher state) zeroize on drop, including on error paths.
mod decrypt;
mod derive;
mod encrypt;
mod stream;

pub use decrypt::decrypt;
pub use derive::{derive_shared_secret, shared_secret};
pub use encrypt::{encrypt, encrypt_with_version};

#[cfg(test)]
pub(crate) use decrypt::open_v1;
#[cfg(test)]
pub(crate) use encrypt::seal;
