//! High-level envelope operations

use crate::{
    crypto::{self, aead, kdf, kdf::CodecParams, NONCE_LEN, SALT_LEN},
    envelope::EncryptedEnvelope,
    error::{NtflyError, Result},
};
use serde::{de::DeserializeOwned, Serialize};

/// Passphrase-keyed JSON codec
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvelopeCodec {
    params: CodecParams,
}

impl EnvelopeCodec {
    pub fn new(params: CodecParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &CodecParams {
        &self.params
    }

    /// Serialize `payload` to JSON and seal it under a key derived from
    /// `passphrase`. Salt and IV are fresh for every call.
    pub fn encrypt<T: Serialize + ?Sized>(
        &self,
        payload: &T,
        passphrase: &str,
    ) -> Result<EncryptedEnvelope> {
        let plaintext = zeroize::Zeroizing::new(serde_json::to_vec(payload)?);

        let salt = crypto::generate_salt()?;
        let iv = crypto::generate_nonce()?;
        let key = kdf::derive_key(passphrase, &salt, &self.params);

        let ciphertext = aead::aes_256_gcm_encrypt(&key, &iv, &plaintext)?;

        let envelope = EncryptedEnvelope {
            iv: iv.to_vec(),
            salt: salt.to_vec(),
            ciphertext,
            created_at_ms: chrono::Utc::now().timestamp_millis(),
        };
        tracing::debug!(
            bytes = envelope.ciphertext.len(),
            ts = envelope.created_at_ms,
            "payload sealed"
        );
        Ok(envelope)
    }

    /// Open an envelope. Every failure, whether a wrong passphrase, a
    /// truncated field or an undecodable payload, is reported as
    /// [`NtflyError::Decryption`].
    pub fn decrypt<T: DeserializeOwned>(
        &self,
        envelope: &EncryptedEnvelope,
        passphrase: &str,
    ) -> Result<T> {
        let iv = <[u8; NONCE_LEN]>::try_from(envelope.iv.as_slice())
            .map_err(|_| NtflyError::Decryption)?;
        if envelope.salt.len() != SALT_LEN {
            return Err(NtflyError::Decryption);
        }

        let key = kdf::derive_key(passphrase, &envelope.salt, &self.params);
        let plaintext = aead::aes_256_gcm_decrypt(&key, &iv, &envelope.ciphertext)?;

        serde_json::from_slice(&plaintext).map_err(|_| NtflyError::Decryption)
    }

    pub fn encrypt_text(&self, text: &str, passphrase: &str) -> Result<EncryptedEnvelope> {
        self.encrypt(text, passphrase)
    }

    pub fn decrypt_text(&self, envelope: &EncryptedEnvelope, passphrase: &str) -> Result<String> {
        self.decrypt(envelope, passphrase)
    }
}
