//! Cryptographic primitives for the config envelopes

pub mod aead;
pub mod kdf;

use crate::error::{NtflyError, Result};
use rand::RngCore;

pub const NONCE_LEN: usize = 12;
pub const SALT_LEN: usize = 16;

/// Fill buffer with cryptographically secure random bytes
pub fn secure_random(buf: &mut [u8]) -> Result<()> {
    let mut rng = rand::thread_rng();
    rng.try_fill_bytes(buf)
        .map_err(|_| NtflyError::EntropyUnavailable)
}

/// Generate a random nonce for AEAD
pub fn generate_nonce() -> Result<[u8; NONCE_LEN]> {
    let mut nonce = [0u8; NONCE_LEN];
    secure_random(&mut nonce)?;
    Ok(nonce)
}

/// Generate a random salt for key derivation
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    secure_random(&mut salt)?;
    Ok(salt)
}
