//! AES-256-GCM seal/open

use crate::error::{NtflyError, Result};
use aes_gcm::{
    aead::{Aead as _, KeyInit, Payload},
    Aes256Gcm, Key, Nonce,
};
use zeroize::Zeroizing;

/// Encrypt with AES-256-GCM. The 16-byte tag is appended to the ciphertext.
pub fn aes_256_gcm_encrypt(
    key: &[u8; 32],
    nonce: &[u8; 12],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let key = Key::<Aes256Gcm>::from_slice(key);
    let cipher = Aes256Gcm::new(key);
    let nonce = Nonce::from_slice(nonce);

    let payload = Payload {
        msg: plaintext,
        aad: &[],
    };

    cipher
        .encrypt(nonce, payload)
        .map_err(|_| NtflyError::Internal)
}

/// Decrypt with AES-256-GCM
pub fn aes_256_gcm_decrypt(
    key: &[u8; 32],
    nonce: &[u8; 12],
    ciphertext: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let key = Key::<Aes256Gcm>::from_slice(key);
    let cipher = Aes256Gcm::new(key);
    let nonce = Nonce::from_slice(nonce);

    let payload = Payload {
        msg: ciphertext,
        aad: &[],
    };

    cipher
        .decrypt(nonce, payload)
        .map(Zeroizing::new)
        .map_err(|_| NtflyError::Decryption)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aes_gcm_roundtrip() {
        let key = [0x42u8; 32];
        let nonce = [0x01u8; 12];
        let plaintext = b"Hello, Ntfly!";

        let ct = aes_256_gcm_encrypt(&key, &nonce, plaintext).unwrap();
        let pt = aes_256_gcm_decrypt(&key, &nonce, &ct).unwrap();

        assert_eq!(plaintext, pt.as_slice());
        assert_eq!(ct.len(), plaintext.len() + 16);
    }

    #[test]
    fn test_aes_gcm_rejects_tampering() {
        let key = [0x42u8; 32];
        let nonce = [0x01u8; 12];

        let mut ct = aes_256_gcm_encrypt(&key, &nonce, b"payload").unwrap();
        ct[0] ^= 0xff;

        assert_eq!(
            aes_256_gcm_decrypt(&key, &nonce, &ct).unwrap_err(),
            NtflyError::Decryption
        );
    }

    #[test]
    fn test_aes_gcm_rejects_wrong_key() {
        let nonce = [0x01u8; 12];
        let ct = aes_256_gcm_encrypt(&[1u8; 32], &nonce, b"payload").unwrap();

        assert!(aes_256_gcm_decrypt(&[2u8; 32], &nonce, &ct).is_err());
    }
}
