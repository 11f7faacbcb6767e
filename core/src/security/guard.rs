//! Rate-limited, threat-checked access to the encrypted config stores

use super::rate_limit::{now_ms, RateLimitDecision, RateLimiter};
use super::ensure_safe;
use crate::config::{ConfigDocument, ConfigKind, EncryptedConfigStore};
use crate::error::{NtflyError, Result};

pub struct Guard {
    limiter: RateLimiter,
}

impl Guard {
    pub fn new(limiter: RateLimiter) -> Self {
        Self { limiter }
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    pub fn limiter_mut(&mut self) -> &mut RateLimiter {
        &mut self.limiter
    }

    /// Count an attempt for `key`, failing with [`NtflyError::RateLimited`]
    /// when the key is blocked.
    pub fn admit(&mut self, key: &str) -> Result<RateLimitDecision> {
        let now = now_ms();
        let decision = self.limiter.check_at(key, now);
        if !decision.allowed {
            return Err(NtflyError::RateLimited {
                retry_after_ms: decision.retry_after_ms(now),
            });
        }
        Ok(decision)
    }

    /// Decrypt a stored config. A success clears prior failed attempts.
    pub async fn unlock<T: ConfigDocument>(
        &mut self,
        store: &EncryptedConfigStore<T>,
        passphrase: &str,
    ) -> Result<Option<T>> {
        check_passphrase(passphrase)?;
        let key = rate_key(T::KIND);
        self.admit(&key)?;

        let config = store.load_decrypted(passphrase).await?;
        self.limiter.reset(&key);
        Ok(config)
    }

    /// Encrypt and store a config after vetting the passphrase.
    pub async fn seal<T: ConfigDocument>(
        &mut self,
        store: &EncryptedConfigStore<T>,
        config: &T,
        passphrase: &str,
    ) -> Result<()> {
        check_passphrase(passphrase)?;
        store.save(config, passphrase).await
    }
}

impl Default for Guard {
    fn default() -> Self {
        Self::new(RateLimiter::default())
    }
}

pub fn rate_key(kind: ConfigKind) -> String {
    format!("config_{}", kind.as_str())
}

fn check_passphrase(passphrase: &str) -> Result<()> {
    if passphrase.is_empty() {
        return Err(NtflyError::Validation("passphrase must not be empty".into()));
    }
    ensure_safe("passphrase", passphrase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AIProviderConfig, AiKeysStore, AiProvider};
    use crate::crypto::kdf::{CodecParams, MIN_ITERATIONS};
    use crate::envelope::operations::EnvelopeCodec;
    use crate::security::RateLimitConfig;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn store() -> AiKeysStore {
        AiKeysStore::new(
            Arc::new(MemoryStore::new()),
            EnvelopeCodec::new(CodecParams::new(MIN_ITERATIONS).unwrap()),
        )
    }

    #[tokio::test]
    async fn test_unlock_roundtrip_resets_attempts() {
        let store = store();
        let mut guard = Guard::default();
        let mut config = AIProviderConfig::default();
        config.set(AiProvider::Gemini, "g", true);

        guard.seal(&store, &config, "open sesame").await.unwrap();
        assert!(guard.unlock(&store, "wrong").await.is_err());
        assert!(guard.limiter().entry("config_ai").is_some());

        let loaded = guard.unlock(&store, "open sesame").await.unwrap();
        assert_eq!(loaded, Some(config));
        assert!(guard.limiter().entry("config_ai").is_none());
    }

    #[tokio::test]
    async fn test_unlock_blocks_after_repeated_failures() {
        let store = store();
        let mut guard = Guard::new(RateLimiter::new(RateLimitConfig {
            max_attempts: 2,
            ..Default::default()
        }));
        guard.seal(&store, &AIProviderConfig::default(), "right").await.unwrap();

        assert_eq!(guard.unlock(&store, "a").await.unwrap_err(), NtflyError::Decryption);
        assert_eq!(guard.unlock(&store, "b").await.unwrap_err(), NtflyError::Decryption);

        let blocked = guard.unlock(&store, "right").await.unwrap_err();
        assert!(matches!(blocked, NtflyError::RateLimited { retry_after_ms } if retry_after_ms > 0));
    }

    #[tokio::test]
    async fn test_rejects_malicious_passphrase() {
        let store = store();
        let mut guard = Guard::default();

        let err = guard
            .seal(&store, &AIProviderConfig::default(), "javascript:alert(1)")
            .await
            .unwrap_err();
        assert!(matches!(err, NtflyError::SecurityViolation { .. }));
        assert!(!store.exists());

        assert!(matches!(
            guard.unlock(&store, "").await.unwrap_err(),
            NtflyError::Validation(_)
        ));
    }
}
