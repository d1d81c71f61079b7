// src/core/crypto/derive.rs
use k256::ecdh::diffie_hellman;
use sha2::digest::generic_array::GenericArray;
use sha2::{Digest, Sha256};

use crate::aliases::SharedSecret32;
use crate::consts::SHARED_SECRET_SIZE;
use crate::error::Result;
use crate::key_ops::{PrivateKey, PublicKey};

/// ECDH over secp256k1, then SHA-256 of the shared point's X coordinate
///
/// `own_private_key` is a 32-byte scalar, `peer_public_key` a 33-byte
/// compressed point. Symmetric: `derive(a, B) == derive(b, A)`.
pub fn derive_shared_secret(
    own_private_key: impl AsRef<[u8]>,
    peer_public_key: impl AsRef<[u8]>,
) -> Result<SharedSecret32> {
    let private = PrivateKey::from_bytes(own_private_key.as_ref())?;
    let public = PublicKey::from_bytes(peer_public_key.as_ref())?;
    Ok(shared_secret(&private, &public))
}

/// Same derivation over already-validated keys
pub fn shared_secret(private: &PrivateKey, public: &PublicKey) -> SharedSecret32 {
    let shared = diffie_hellman(
        private.as_secret_key().to_nonzero_scalar(),
        public.as_public_key().as_affine(),
    );
    // raw_secret_bytes is the 32-byte X coordinate, i.e. the compressed point minus its prefix.
    // Finalized in place into the wiping container.
    let mut secret = SharedSecret32::new([0u8; SHARED_SECRET_SIZE]);
    Sha256::new()
        .chain_update(shared.raw_secret_bytes())
        .finalize_into(GenericArray::from_mut_slice(secret.expose_secret_mut()));
    secret
}
