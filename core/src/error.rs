//! Ntfly error types

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NtflyError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid input detected in {field}")]
    SecurityViolation { field: String },

    #[error("Too many attempts, retry in {retry_after_ms} ms")]
    RateLimited { retry_after_ms: u64 },

    /// Wrong passphrase or a corrupted envelope. Carries no detail on purpose.
    #[error("Decryption failed")]
    Decryption,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Entropy unavailable")]
    EntropyUnavailable,

    #[error("Internal error")]
    Internal,
}

impl From<sled::Error> for NtflyError {
    fn from(err: sled::Error) -> Self {
        NtflyError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for NtflyError {
    fn from(err: serde_json::Error) -> Self {
        NtflyError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NtflyError>;
