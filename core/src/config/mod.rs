//! Encrypted config stores.
//!
//! Each config kind owns exactly one storage slot holding a JSON-serialized
//! [`EncryptedEnvelope`]. A config is always saved as a whole: decrypt, change
//! the value in memory, save again. Key derivation and AEAD run on tokio's
//! blocking pool so async callers are never stalled by PBKDF2, and a per-store
//! mutex keeps at most one save or load in flight per kind.

pub mod ai_keys;
pub mod backend;

pub use ai_keys::{AIProviderConfig, AiProvider, ProviderKey};
pub use backend::BackendServiceConfig;

use crate::envelope::{operations::EnvelopeCodec, EncryptedEnvelope};
use crate::error::{NtflyError, Result};
use crate::storage::KeyValueStore;
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::Mutex;
use zeroize::Zeroizing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKind {
    AiProviders,
    BackendService,
}

impl ConfigKind {
    pub fn storage_key(&self) -> &'static str {
        match self {
            ConfigKind::AiProviders => "encrypted_ai_keys_config",
            ConfigKind::BackendService => "encrypted_firebase_config",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKind::AiProviders => "ai",
            ConfigKind::BackendService => "backend",
        }
    }
}

/// A config shape that can be stored encrypted
pub trait ConfigDocument: Serialize + DeserializeOwned + Clone + Send + 'static {
    const KIND: ConfigKind;
}

pub struct EncryptedConfigStore<T: ConfigDocument> {
    store: Arc<dyn KeyValueStore>,
    codec: EnvelopeCodec,
    in_flight: Mutex<()>,
    _doc: PhantomData<fn() -> T>,
}

pub type AiKeysStore = EncryptedConfigStore<AIProviderConfig>;
pub type BackendConfigStore = EncryptedConfigStore<BackendServiceConfig>;

impl<T: ConfigDocument> EncryptedConfigStore<T> {
    pub fn new(store: Arc<dyn KeyValueStore>, codec: EnvelopeCodec) -> Self {
        Self {
            store,
            codec,
            in_flight: Mutex::new(()),
            _doc: PhantomData,
        }
    }

    pub fn kind(&self) -> ConfigKind {
        T::KIND
    }

    /// Encrypt the full config and overwrite the stored envelope.
    ///
    /// The slot is only written once sealing succeeded, so a failure leaves
    /// the previous envelope untouched.
    pub async fn save(&self, config: &T, passphrase: &str) -> Result<()> {
        let _guard = self.in_flight.lock().await;

        let codec = self.codec;
        let config = config.clone();
        let passphrase = Zeroizing::new(passphrase.to_owned());
        let envelope = tokio::task::spawn_blocking(move || codec.encrypt(&config, &passphrase))
            .await
            .map_err(|_| NtflyError::Internal)??;

        let bytes = envelope.to_json()?;
        self.store.set(T::KIND.storage_key(), &bytes)?;

        tracing::info!(kind = T::KIND.as_str(), ts = envelope.created_at_ms, "config saved");
        Ok(())
    }

    /// The raw stored envelope, or `None` if nothing usable is stored.
    pub fn load_envelope(&self) -> Option<EncryptedEnvelope> {
        let raw = match self.store.get(T::KIND.storage_key()) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(kind = T::KIND.as_str(), error = %e, "config slot unreadable");
                return None;
            }
        };
        match EncryptedEnvelope::from_json(&raw) {
            Ok(envelope) => Some(envelope),
            Err(e) => {
                tracing::warn!(kind = T::KIND.as_str(), error = %e, "stored envelope unparsable");
                None
            }
        }
    }

    /// Decrypt the stored config.
    ///
    /// `Ok(None)` when nothing is stored; [`NtflyError::Decryption`] when an
    /// envelope exists but the passphrase does not open it.
    pub async fn load_decrypted(&self, passphrase: &str) -> Result<Option<T>> {
        let _guard = self.in_flight.lock().await;

        let Some(envelope) = self.load_envelope() else {
            return Ok(None);
        };

        let codec = self.codec;
        let passphrase = Zeroizing::new(passphrase.to_owned());
        let result = tokio::task::spawn_blocking(move || codec.decrypt::<T>(&envelope, &passphrase))
            .await
            .map_err(|_| NtflyError::Internal)?;

        match result {
            Ok(config) => {
                tracing::debug!(kind = T::KIND.as_str(), "config decrypted");
                Ok(Some(config))
            }
            Err(e) => {
                tracing::warn!(kind = T::KIND.as_str(), "config decryption failed");
                Err(e)
            }
        }
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(T::KIND.storage_key())?;
        tracing::info!(kind = T::KIND.as_str(), "config cleared");
        Ok(())
    }

    /// True iff an envelope is stored, whatever the passphrase.
    pub fn exists(&self) -> bool {
        self.store
            .contains(T::KIND.storage_key())
            .unwrap_or_else(|e| {
                tracing::warn!(kind = T::KIND.as_str(), error = %e, "config slot unreadable");
                false
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::kdf::{CodecParams, MIN_ITERATIONS};
    use crate::storage::MemoryStore;

    fn codec() -> EnvelopeCodec {
        EnvelopeCodec::new(CodecParams::new(MIN_ITERATIONS).unwrap())
    }

    fn stores() -> (Arc<MemoryStore>, AiKeysStore) {
        let kv = Arc::new(MemoryStore::new());
        let store = AiKeysStore::new(kv.clone(), codec());
        (kv, store)
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let (_, store) = stores();
        let mut config = AIProviderConfig::default();
        config.set(AiProvider::ChatGpt, "sk-123", true);

        store.save(&config, "passphrase").await.unwrap();
        assert!(store.exists());

        let loaded = store.load_decrypted("passphrase").await.unwrap();
        assert_eq!(loaded, Some(config));
    }

    #[tokio::test]
    async fn test_load_without_envelope_is_absent() {
        let (_, store) = stores();
        assert!(!store.exists());
        assert!(store.load_envelope().is_none());
        assert_eq!(store.load_decrypted("anything").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_wrong_passphrase_surfaces_error() {
        let (_, store) = stores();
        store.save(&AIProviderConfig::default(), "right").await.unwrap();

        let err = store.load_decrypted("wrong").await.unwrap_err();
        assert_eq!(err, NtflyError::Decryption);
        assert!(store.exists());
    }

    #[tokio::test]
    async fn test_resave_replaces_envelope() {
        let (_, store) = stores();
        let config = AIProviderConfig::default();

        store.save(&config, "k").await.unwrap();
        let first = store.load_envelope().unwrap();
        store.save(&config, "k").await.unwrap();
        let second = store.load_envelope().unwrap();

        assert_ne!(first.salt, second.salt);
        assert_ne!(first.iv, second.iv);
    }

    #[tokio::test]
    async fn test_clear_removes_envelope() {
        let (_, store) = stores();
        store.save(&AIProviderConfig::default(), "k").await.unwrap();
        store.clear().unwrap();

        assert!(!store.exists());
        assert_eq!(store.load_decrypted("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_kinds_use_separate_slots() {
        let kv = Arc::new(MemoryStore::new());
        let ai = AiKeysStore::new(kv.clone(), codec());
        let backend = BackendConfigStore::new(kv.clone(), codec());

        ai.save(&AIProviderConfig::default(), "k").await.unwrap();
        assert!(ai.exists());
        assert!(!backend.exists());
        assert!(kv.contains("encrypted_ai_keys_config").unwrap());
    }

    #[tokio::test]
    async fn test_garbage_slot_reads_as_absent() {
        let (kv, store) = stores();
        kv.set(ConfigKind::AiProviders.storage_key(), b"not json").unwrap();

        assert!(store.exists());
        assert!(store.load_envelope().is_none());
        assert_eq!(store.load_decrypted("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_passphrase_never_stored() {
        let (kv, store) = stores();
        store.save(&AIProviderConfig::default(), "hunter2-unique").await.unwrap();

        let raw = kv.get(ConfigKind::AiProviders.storage_key()).unwrap().unwrap();
        let text = String::from_utf8(raw).unwrap();
        assert!(!text.contains("hunter2-unique"));
    }

    /// Accepts `allowed` writes, then fails every later one.
    struct ExhaustedStore {
        inner: MemoryStore,
        allowed: usize,
        writes: std::sync::atomic::AtomicUsize,
    }

    impl KeyValueStore for ExhaustedStore {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
            self.inner.get(key)
        }
        fn set(&self, key: &str, value: &[u8]) -> Result<()> {
            let n = self.writes.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            if n >= self.allowed {
                return Err(NtflyError::Storage("quota exceeded".into()));
            }
            self.inner.set(key, value)
        }
        fn remove(&self, key: &str) -> Result<()> {
            self.inner.remove(key)
        }
        fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
            self.inner.keys_with_prefix(prefix)
        }
        fn clear(&self) -> Result<()> {
            self.inner.clear()
        }
    }

    #[tokio::test]
    async fn test_failed_save_keeps_previous_envelope() {
        let kv = Arc::new(ExhaustedStore {
            inner: MemoryStore::new(),
            allowed: 1,
            writes: Default::default(),
        });
        let store = AiKeysStore::new(kv, codec());

        let mut first = AIProviderConfig::default();
        first.set(AiProvider::Claude, "first-key", true);
        store.save(&first, "pass").await.unwrap();
        let before = store.load_envelope().unwrap();

        let mut second = first.clone();
        second.set(AiProvider::Claude, "second-key", false);
        assert!(matches!(
            store.save(&second, "pass").await,
            Err(NtflyError::Storage(_))
        ));

        assert_eq!(store.load_envelope(), Some(before));
        assert_eq!(store.load_decrypted("pass").await.unwrap(), Some(first));
    }

    #[test]
    fn test_slot_keys() {
        assert_eq!(ConfigKind::AiProviders.storage_key(), "encrypted_ai_keys_config");
        assert_eq!(ConfigKind::BackendService.storage_key(), "encrypted_firebase_config");
    }
}
