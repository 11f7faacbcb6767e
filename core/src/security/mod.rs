//! Input guard for credential-bearing operations.
//!
//! The escaping and the denylist below are heuristics. They are a second line
//! of defense and do not replace context-aware output encoding.

pub mod guard;
pub mod rate_limit;

pub use guard::Guard;
pub use rate_limit::{RateLimitConfig, RateLimitDecision, RateLimitEntry, RateLimiter};

use crate::error::{NtflyError, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

pub const MAX_EMAIL_LEN: usize = 255;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_PASSWORD_LEN: usize = 128;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static THREAT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?is)<script\b.*?</script>",
        r"(?i)javascript:",
        r"(?i)on[a-z0-9_]+\s*=",
        r"(?i)data:\s*text/html",
        r"(?i)<iframe",
        r"(?i)<object",
        r"(?i)<embed",
        r"(?i)expression\s*\(",
        r"(?i)eval\s*\(",
    ]
    .into_iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Escape HTML-significant characters and trim surrounding whitespace.
///
/// Not idempotent: sanitize each raw input exactly once.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            '`' => out.push_str("&#x60;"),
            '=' => out.push_str("&#x3D;"),
            _ => out.push(c),
        }
    }
    out.trim().to_string()
}

pub fn is_valid_email(email: &str) -> bool {
    email.chars().count() <= MAX_EMAIL_LEN && EMAIL_PATTERN.is_match(email)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordCheck {
    pub valid: bool,
    pub reason: Option<&'static str>,
}

pub fn check_password(password: &str) -> PasswordCheck {
    let len = password.chars().count();
    let reason = if len < MIN_PASSWORD_LEN {
        Some("Password must be at least 6 characters")
    } else if len > MAX_PASSWORD_LEN {
        Some("Password too long")
    } else {
        None
    };
    PasswordCheck {
        valid: reason.is_none(),
        reason,
    }
}

pub fn contains_threat_pattern(input: &str) -> bool {
    THREAT_PATTERNS.iter().any(|p| p.is_match(input))
}

/// Fail with [`NtflyError::SecurityViolation`] if `input` matches the denylist.
pub fn ensure_safe(field: &str, input: &str) -> Result<()> {
    if contains_threat_pattern(input) {
        tracing::warn!(field, "threat pattern rejected");
        return Err(NtflyError::SecurityViolation {
            field: field.to_string(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidation {
    pub valid: bool,
    pub sanitized: BTreeMap<String, String>,
    pub errors: Vec<String>,
}

/// Threat-check and sanitize every field of a submitted form.
///
/// Offending fields are reported and left out of `sanitized`.
pub fn validate_form_data<'a, I>(fields: I) -> FormValidation
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut result = FormValidation::default();
    for (name, value) in fields {
        if contains_threat_pattern(value) {
            result.errors.push(format!("Invalid input detected in {name}"));
            continue;
        }
        result.sanitized.insert(name.to_string(), sanitize(value));
    }
    result.valid = result.errors.is_empty();
    result
}
