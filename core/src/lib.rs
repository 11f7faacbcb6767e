//! Ntfly core: encrypted provider configuration and input guarding

pub mod config;
pub mod crypto;
pub mod envelope;
pub mod error;
pub mod security;
pub mod storage;

// Re-exports
pub use config::{
    AIProviderConfig, AiKeysStore, AiProvider, BackendConfigStore, BackendServiceConfig,
    ConfigDocument, ConfigKind, EncryptedConfigStore,
};
pub use crypto::kdf::CodecParams;
pub use envelope::{operations::EnvelopeCodec, EncryptedEnvelope};
pub use error::{NtflyError, Result};
pub use security::{Guard, RateLimiter};
pub use storage::{KeyValueStore, MemoryStore, SledStore, StoreConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
