//! Passphrase-based key derivation (PBKDF2-HMAC-SHA256)

use crate::error::{NtflyError, Result};
use ring::pbkdf2;
use std::num::NonZeroU32;
use zeroize::Zeroizing;

/// Iteration count used for every stored envelope
pub const DEFAULT_ITERATIONS: u32 = 250_000;

/// Lowest iteration count accepted by [`CodecParams::new`]
pub const MIN_ITERATIONS: u32 = 100_000;

/// Key derivation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecParams {
    iterations: NonZeroU32,
}

impl CodecParams {
    pub fn new(iterations: u32) -> Result<Self> {
        if iterations < MIN_ITERATIONS {
            return Err(NtflyError::Validation(format!(
                "PBKDF2 iteration count must be at least {MIN_ITERATIONS}"
            )));
        }
        let iterations = NonZeroU32::new(iterations).ok_or(NtflyError::Internal)?;
        Ok(Self { iterations })
    }

    pub fn iterations(&self) -> u32 {
        self.iterations.get()
    }
}

impl Default for CodecParams {
    fn default() -> Self {
        Self {
            iterations: NonZeroU32::new(DEFAULT_ITERATIONS).unwrap_or(NonZeroU32::MIN),
        }
    }
}

/// Derive a 256-bit AES key from a passphrase and salt.
///
/// Deterministic for a given `(passphrase, salt, params)` triple.
pub fn derive_key(
    passphrase: &str,
    salt: &[u8],
    params: &CodecParams,
) -> Zeroizing<[u8; 32]> {
    let mut key = Zeroizing::new([0u8; 32]);
    pbkdf2::derive(
        pbkdf2::PBKDF2_HMAC_SHA256,
        params.iterations,
        salt,
        passphrase.as_bytes(),
        key.as_mut_slice(),
    );
    key
}
