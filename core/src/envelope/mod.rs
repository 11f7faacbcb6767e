//! Encrypted envelope: the only persisted form of a secret payload

pub mod operations;

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One encrypted payload.
///
/// The JSON field names (`iv`, `salt`, `cipher`, `ts`) and the slot keys of the
/// config stores match what the browser front-end writes to local storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EncryptedEnvelope {
    pub iv: Vec<u8>,
    pub salt: Vec<u8>,
    #[serde(rename = "cipher")]
    pub ciphertext: Vec<u8>,
    #[serde(rename = "ts")]
    pub created_at_ms: i64,
}

impl EncryptedEnvelope {
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn from_json(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn created_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp_millis(self.created_at_ms)
    }
}
