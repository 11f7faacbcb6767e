//! Backend-service (hosting/auth provider) credentials

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ConfigDocument, ConfigKind};

pub const ENV_PREFIX: &str = "NTFLY_BACKEND_";

#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BackendServiceConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement_id: Option<String>,
}

impl BackendServiceConfig {
    /// Read `NTFLY_BACKEND_*` variables; missing ones become empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| lookup(&format!("{ENV_PREFIX}{suffix}")).unwrap_or_default();
        Self {
            api_key: var("API_KEY"),
            auth_domain: var("AUTH_DOMAIN"),
            project_id: var("PROJECT_ID"),
            storage_bucket: var("STORAGE_BUCKET"),
            messaging_sender_id: var("MESSAGING_SENDER_ID"),
            app_id: var("APP_ID"),
            measurement_id: Some(var("MEASUREMENT_ID")).filter(|v| !v.is_empty()),
        }
    }

    /// True when the fields a client needs to connect are all present.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
            && !self.auth_domain.is_empty()
            && !self.project_id.is_empty()
            && !self.app_id.is_empty()
    }
}

impl fmt::Debug for BackendServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendServiceConfig")
            .field("api_key", &"[REDACTED]")
            .field("auth_domain", &self.auth_domain)
            .field("project_id", &self.project_id)
            .field("storage_bucket", &self.storage_bucket)
            .field("messaging_sender_id", &self.messaging_sender_id)
            .field("app_id", &self.app_id)
            .field("measurement_id", &self.measurement_id)
            .finish()
    }
}

impl ConfigDocument for BackendServiceConfig {
    const KIND: ConfigKind = ConfigKind::BackendService;
}
