//! Record identifiers
//!
//! Records are keyed by opaque strings. Freshly created records take the
//! current Unix timestamp in milliseconds; anything already on disk is kept
//! verbatim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier shared by every record type and by derived transactions
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate an identifier from the current timestamp
    pub fn generate() -> Self {
        Self::from_timestamp(Utc::now())
    }

    /// Identifier derived from a timestamp (milliseconds since the epoch)
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_millis().to_string())
    }

    /// Identifier of a savings contribution made to `goal` at `at`
    pub fn contribution(goal: &RecordId, at: DateTime<Utc>) -> Self {
        Self(format!("{}-{}", goal.0, at.timestamp_millis()))
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for RecordId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RecordId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_timestamp() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(RecordId::from_timestamp(at).as_str(), "1700000000123");
    }

    #[test]
    fn test_contribution_id() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_500).unwrap();
        let goal = RecordId::new("42");
        assert_eq!(RecordId::contribution(&goal, at), "42-1700000000500");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = RecordId::new("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
        let back: RecordId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(back, id);
    }
}
