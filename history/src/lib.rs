//! Ntfly login history.
//!
//! A bounded, newest-first list of dashboard and admin logins kept in the
//! shared key-value store. Recording is telemetry: it must never interrupt
//! the operation it is attached to, so [`LoginHistory::record`] swallows its
//! own failures.

use chrono::{DateTime, Duration, Utc};
use ntfly_core::{KeyValueStore, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const HISTORY_KEY: &str = "ntfly_login_records";
pub const MAX_RECORDS: usize = 100;
pub const RECENT_RECORDS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginKind {
    Dashboard,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRecord {
    pub user_id: String,
    pub email: String,
    /// Epoch millis
    pub timestamp: i64,
    #[serde(rename = "date")]
    pub formatted_date: String,
    #[serde(rename = "time")]
    pub formatted_time: String,
    #[serde(rename = "type")]
    pub kind: LoginKind,
}

impl LoginRecord {
    pub fn new(user_id: &str, email: &str, kind: LoginKind, at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.to_string(),
            email: email.to_string(),
            timestamp: at.timestamp_millis(),
            formatted_date: at.format("%Y-%m-%d").to_string(),
            formatted_time: at.format("%H:%M:%S").to_string(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginStats {
    pub total: usize,
    pub last_24h: usize,
    pub last_7d: usize,
    pub recent: Vec<LoginRecord>,
}

pub struct LoginHistory {
    store: Arc<dyn KeyValueStore>,
}

impl LoginHistory {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Best-effort record; failures are logged and dropped.
    pub fn record(&self, user_id: &str, email: &str, kind: LoginKind) {
        if let Err(e) = self.try_record(LoginRecord::new(user_id, email, kind, Utc::now())) {
            tracing::debug!(error = %e, "login record dropped");
        }
    }

    pub fn try_record(&self, record: LoginRecord) -> Result<()> {
        let mut records = self.load()?;
        records.insert(0, record);
        records.truncate(MAX_RECORDS);

        let blob = serde_json::to_vec(&records)?;
        self.store.set(HISTORY_KEY, &blob)
    }

    /// Newest first. Unreadable history reads as empty.
    pub fn records(&self) -> Vec<LoginRecord> {
        self.load().unwrap_or_else(|e| {
            tracing::debug!(error = %e, "login history unreadable");
            Vec::new()
        })
    }

    pub fn stats(&self) -> LoginStats {
        self.stats_at(Utc::now())
    }

    pub fn stats_at(&self, now: DateTime<Utc>) -> LoginStats {
        let records = self.records();
        let day_start = (now - Duration::days(1)).timestamp_millis();
        let week_start = (now - Duration::days(7)).timestamp_millis();

        LoginStats {
            total: records.len(),
            last_24h: records.iter().filter(|r| r.timestamp > day_start).count(),
            last_7d: records.iter().filter(|r| r.timestamp > week_start).count(),
            recent: records.into_iter().take(RECENT_RECORDS).collect(),
        }
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(HISTORY_KEY)
    }

    /// A slot that does not parse reads as empty and is overwritten by the
    /// next record. Storage errors still propagate.
    fn load(&self) -> Result<Vec<LoginRecord>> {
        let Some(blob) = self.store.get(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };
        Ok(serde_json::from_slice(&blob).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "login history unparsable, starting over");
            Vec::new()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntfly_core::{MemoryStore, NtflyError};

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
            Ok(None)
        }
        fn set(&self, _key: &str, _value: &[u8]) -> Result<()> {
            Err(NtflyError::Storage("quota exceeded".into()))
        }
        fn remove(&self, _key: &str) -> Result<()> {
            Ok(())
        }
        fn keys_with_prefix(&self, _prefix: &str) -> Result<Vec<String>> {
            Ok(Vec::new())
        }
        fn clear(&self) -> Result<()> {
            Ok(())
        }
    }

    fn at(millis: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(millis).unwrap()
    }

    #[test]
    fn test_newest_first() {
        let history = LoginHistory::new(Arc::new(MemoryStore::new()));
        history.record("u1", "one@example.com", LoginKind::Dashboard);
        history.record("u2", "two@example.com", LoginKind::Admin);

        let records = history.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].user_id, "u2");
        assert_eq!(records[0].kind, LoginKind::Admin);
        assert_eq!(records[1].email, "one@example.com");
    }

    #[test]
    fn test_bounded_to_max() {
        let history = LoginHistory::new(Arc::new(MemoryStore::new()));
        for i in 0..(MAX_RECORDS + 5) {
            let record = LoginRecord::new(&format!("u{i}"), "x@example.com", LoginKind::Dashboard, at(i as i64));
            history.try_record(record).unwrap();
        }

        let records = history.records();
        assert_eq!(records.len(), MAX_RECORDS);
        assert_eq!(records[0].user_id, format!("u{}", MAX_RECORDS + 4));
        assert_eq!(records[MAX_RECORDS - 1].user_id, "u5");
    }

    #[test]
    fn test_failures_are_swallowed() {
        let history = LoginHistory::new(Arc::new(FailingStore));
        history.record("u", "u@example.com", LoginKind::Dashboard);
        assert!(history.records().is_empty());
    }

    #[test]
    fn test_stats_windows() {
        let history = LoginHistory::new(Arc::new(MemoryStore::new()));
        let now = at(1_700_000_000_000);
        let hour = 3_600_000;

        for offset in [30 * 24 * hour, 3 * 24 * hour, 2 * hour, hour] {
            let when = at(now.timestamp_millis() - offset);
            history
                .try_record(LoginRecord::new("u", "u@example.com", LoginKind::Dashboard, when))
                .unwrap();
        }

        let stats = history.stats_at(now);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.last_24h, 2);
        assert_eq!(stats.last_7d, 3);
        assert_eq!(stats.recent.len(), 4);
    }

    #[test]
    fn test_record_format() {
        let record = LoginRecord::new("u", "u@example.com", LoginKind::Admin, at(0));
        assert_eq!(record.formatted_date, "1970-01-01");
        assert_eq!(record.formatted_time, "00:00:00");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "admin");
        assert_eq!(json["userId"], "u");
        assert_eq!(json["date"], "1970-01-01");
    }

    #[test]
    fn test_recovers_from_corrupt_slot() {
        let store = Arc::new(MemoryStore::new());
        store.set(HISTORY_KEY, b"{not json").unwrap();
        let history = LoginHistory::new(store.clone());
        assert!(history.records().is_empty());

        history.record("u1", "one@example.com", LoginKind::Dashboard);
        history.record("u2", "two@example.com", LoginKind::Dashboard);

        let records = history.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].user_id, "u2");
        let raw = store.get(HISTORY_KEY).unwrap().unwrap();
        assert!(serde_json::from_slice::<Vec<LoginRecord>>(&raw).is_ok());
    }

    #[test]
    fn test_clear() {
        let history = LoginHistory::new(Arc::new(MemoryStore::new()));
        history.record("u", "u@example.com", LoginKind::Dashboard);
        history.clear().unwrap();
        assert!(history.records().is_empty());
    }
}
