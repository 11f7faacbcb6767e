//! Sliding-window attempt limiter.
//!
//! State lives in memory for the lifetime of the process. One limiter is
//! built at startup and passed by `&mut` to whatever guards an operation.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub max_attempts: u32,
    pub window_ms: u64,
    pub block_duration_ms: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            window_ms: 60_000,
            block_duration_ms: 300_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitEntry {
    pub attempt_count: u32,
    pub window_start_ms: u64,
    pub blocked: bool,
    pub blocked_until_ms: Option<u64>,
}

impl RateLimitEntry {
    fn fresh(now_ms: u64) -> Self {
        Self {
            attempt_count: 1,
            window_start_ms: now_ms,
            blocked: false,
            blocked_until_ms: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub remaining_attempts: u32,
    pub blocked_until_ms: Option<u64>,
}

impl RateLimitDecision {
    /// Milliseconds until the block lifts, zero when not blocked.
    pub fn retry_after_ms(&self, now_ms: u64) -> u64 {
        self.blocked_until_ms
            .map(|until| until.saturating_sub(now_ms))
            .unwrap_or(0)
    }
}

#[derive(Debug, Default)]
pub struct RateLimiter {
    config: RateLimitConfig,
    entries: HashMap<String, RateLimitEntry>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            entries: HashMap::new(),
        }
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    pub fn check(&mut self, key: &str) -> RateLimitDecision {
        self.check_at(key, now_ms())
    }

    /// Record an attempt for `key` at `now_ms` and decide whether it may proceed.
    pub fn check_at(&mut self, key: &str, now_ms: u64) -> RateLimitDecision {
        let config = self.config;
        let allow_fresh = RateLimitDecision {
            allowed: true,
            remaining_attempts: config.max_attempts.saturating_sub(1),
            blocked_until_ms: None,
        };

        let Some(entry) = self.entries.get_mut(key) else {
            self.entries.insert(key.to_string(), RateLimitEntry::fresh(now_ms));
            return allow_fresh;
        };

        if entry.blocked {
            match entry.blocked_until_ms {
                Some(until) if now_ms < until => {
                    return RateLimitDecision {
                        allowed: false,
                        remaining_attempts: 0,
                        blocked_until_ms: Some(until),
                    };
                }
                _ => {
                    *entry = RateLimitEntry::fresh(now_ms);
                    return allow_fresh;
                }
            }
        }

        if now_ms.saturating_sub(entry.window_start_ms) > config.window_ms {
            *entry = RateLimitEntry::fresh(now_ms);
            return allow_fresh;
        }

        entry.attempt_count += 1;

        if entry.attempt_count > config.max_attempts {
            let until = now_ms + config.block_duration_ms;
            entry.blocked = true;
            entry.blocked_until_ms = Some(until);
            tracing::warn!(key, blocked_until_ms = until, "rate limit exceeded");
            return RateLimitDecision {
                allowed: false,
                remaining_attempts: 0,
                blocked_until_ms: Some(until),
            };
        }

        RateLimitDecision {
            allowed: true,
            remaining_attempts: config.max_attempts - entry.attempt_count,
            blocked_until_ms: None,
        }
    }

    /// Forget prior attempts for `key`, typically after a success.
    pub fn reset(&mut self, key: &str) {
        self.entries.remove(key);
    }

    pub fn entry(&self, key: &str) -> Option<&RateLimitEntry> {
        self.entries.get(key)
    }
}

pub(crate) fn now_ms() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}
