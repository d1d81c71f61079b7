// tests/common.rs
//! Shared test utilities: logging setup and key fixtures

#![allow(dead_code)] // each test binary uses a different subset

use ecdh_envelope::{generate_keypair, Keypair};

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

/// Raw bytes for a freshly generated party, as the byte-slice API expects them
pub struct Party {
    pub keypair: Keypair,
    pub private: Vec<u8>,
    pub public: [u8; 33],
}

pub fn party() -> Party {
    let keypair = generate_keypair();
    let private = keypair.private.to_bytes().expose_secret().clone();
    let public = keypair.public.to_bytes();
    Party {
        keypair,
        private,
        public,
    }
}
