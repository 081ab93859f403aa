//! Strongly-typed identifiers for entities owned by the remote service.
//!
//! The remote service mints its own identifiers, so the client treats them
//! as opaque tokens. The only constraint enforced here is that an identifier
//! can be interpolated into a URL path segment unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an ID from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of ID that failed to parse.
    pub id_type: &'static str,
    /// The reason for the parse failure.
    pub reason: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {}: {}", self.id_type, self.reason)
    }
}

impl std::error::Error for ParseIdError {}

/// Identifier of a candidate, as issued by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CandidateId(String);

impl CandidateId {
    /// Parses an identifier, rejecting anything that is not a single
    /// URL-safe path segment.
    pub fn parse(raw: &str) -> Result<Self, ParseIdError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParseIdError {
                id_type: "CandidateId",
                reason: "identifier is empty".to_string(),
            });
        }
        if let Some(bad) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(ParseIdError {
                id_type: "CandidateId",
                reason: format!("unexpected character {bad:?}"),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CandidateId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CandidateId {
    type Error = ParseIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CandidateId> for String {
    fn from(id: CandidateId) -> Self {
        id.0
    }
}

impl AsRef<str> for CandidateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_object_id() {
        let id: CandidateId = "665f1c2ab4e0d2a1c9f0e123".parse().expect("should parse");
        assert_eq!(id.as_str(), "665f1c2ab4e0d2a1c9f0e123");
        assert_eq!(id.to_string(), "665f1c2ab4e0d2a1c9f0e123");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let id = CandidateId::parse("  abc-123 ").expect("should parse");
        assert_eq!(id.as_str(), "abc-123");
    }

    #[test]
    fn rejects_empty() {
        let err = CandidateId::parse("   ").unwrap_err();
        assert_eq!(err.id_type, "CandidateId");
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn rejects_path_separators() {
        assert!(CandidateId::parse("abc/../admin").is_err());
        assert!(CandidateId::parse("abc?x=1").is_err());
        assert!(CandidateId::parse("a b").is_err());
    }

    #[test]
    fn deserialize_validates() {
        let ok: CandidateId = serde_json::from_str("\"c1\"").expect("deserialize");
        assert_eq!(ok.as_str(), "c1");

        let bad: Result<CandidateId, _> = serde_json::from_str("\"c/1\"");
        assert!(bad.is_err());
    }
}
