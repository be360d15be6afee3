//! Shared value objects used across multiple bounded contexts

use super::error::DomainError;
use fancy_regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Call leg identifier assigned by the telephony platform
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallId(String);

impl CallId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// E.164 number the caller asked to be bridged to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationNumber(String);

impl DestinationNumber {
    /// Build a destination from the digits collected on the keypad.
    pub fn from_digits(digits: &str) -> Result<Self, DomainError> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::ValidationError(format!(
                "destination digits must be numeric, got '{}'",
                digits
            )));
        }
        Ok(Self(format!("+{}", digits)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DestinationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// North American dial plan offered to callers.
///
/// A leading `1`, ten more digits, and never the `1900` premium rate prefix.
/// The platform evaluates `PATTERN` while collecting digits; `permits` runs
/// the same expression locally.
pub struct DialPlan;

static DIAL_PLAN: OnceLock<Option<Regex>> = OnceLock::new();

impl DialPlan {
    pub const PATTERN: &'static str = r"^(?!1900)1\d{3}\d{7}$";

    pub fn permits(digits: &str) -> bool {
        DIAL_PLAN
            .get_or_init(|| Regex::new(Self::PATTERN).ok())
            .as_ref()
            .is_some_and(|re| re.is_match(digits).unwrap_or(false))
    }
}
