//! AI provider credentials

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{ConfigDocument, ConfigKind};
use crate::error::NtflyError;

/// The fixed set of supported AI providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AiProvider {
    ChatGpt,
    Gemini,
    Claude,
    Sonnet,
}

impl AiProvider {
    pub const ALL: [AiProvider; 4] = [
        AiProvider::ChatGpt,
        AiProvider::Gemini,
        AiProvider::Claude,
        AiProvider::Sonnet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AiProvider::ChatGpt => "chatgpt",
            AiProvider::Gemini => "gemini",
            AiProvider::Claude => "claude",
            AiProvider::Sonnet => "sonnet",
        }
    }
}

impl fmt::Display for AiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AiProvider {
    type Err = NtflyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AiProvider::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NtflyError::Validation(format!("unknown AI provider: {s}")))
    }
}

#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderKey {
    #[serde(rename = "key")]
    pub secret_key: String,
    pub enabled: bool,
}

impl fmt::Debug for ProviderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderKey")
            .field("secret_key", &if self.secret_key.is_empty() { "" } else { "[REDACTED]" })
            .field("enabled", &self.enabled)
            .finish()
    }
}

/// Keys for every provider. Always persisted as a whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AIProviderConfig {
    pub chatgpt: ProviderKey,
    pub gemini: ProviderKey,
    pub claude: ProviderKey,
    pub sonnet: ProviderKey,
}

impl AIProviderConfig {
    pub fn get(&self, provider: AiProvider) -> &ProviderKey {
        match provider {
            AiProvider::ChatGpt => &self.chatgpt,
            AiProvider::Gemini => &self.gemini,
            AiProvider::Claude => &self.claude,
            AiProvider::Sonnet => &self.sonnet,
        }
    }

    pub fn get_mut(&mut self, provider: AiProvider) -> &mut ProviderKey {
        match provider {
            AiProvider::ChatGpt => &mut self.chatgpt,
            AiProvider::Gemini => &mut self.gemini,
            AiProvider::Claude => &mut self.claude,
            AiProvider::Sonnet => &mut self.sonnet,
        }
    }

    pub fn set(&mut self, provider: AiProvider, secret_key: impl Into<String>, enabled: bool) {
        *self.get_mut(provider) = ProviderKey {
            secret_key: secret_key.into(),
            enabled,
        };
    }

    pub fn enabled_providers(&self) -> Vec<AiProvider> {
        AiProvider::ALL
            .into_iter()
            .filter(|p| self.get(*p).enabled)
            .collect()
    }
}

impl ConfigDocument for AIProviderConfig {
    const KIND: ConfigKind = ConfigKind::AiProviders;
}
