//! Role types for client-side access control.
//!
//! The remote service assigns exactly one role per account at login.
//! The client uses it only to choose which views and which layout to show;
//! every real permission check happens remotely.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role assigned to an account by the remote service.
///
/// - `Admin`: manages candidates and reads the vote tally
/// - `Voter`: reads their profile and casts a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Election administrator.
    Admin,
    /// Registered voter.
    Voter,
}

impl Role {
    /// Returns the wire and storage representation of the role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Voter => "voter",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored or received role string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role '{}'", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "voter" => Ok(Self::Voter),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_roles() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("voter".parse::<Role>(), Ok(Role::Voter));
    }

    #[test]
    fn parse_is_case_sensitive() {
        let err = "Admin".parse::<Role>().unwrap_err();
        assert_eq!(err, UnknownRole("Admin".to_string()));
        assert!(err.to_string().contains("Admin"));
    }

    #[test]
    fn display_matches_storage_format() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::Voter.to_string(), "voter");
    }

    #[test]
    fn role_serialization_format() {
        let json = serde_json::to_string(&Role::Admin).expect("serialize");
        assert_eq!(json, "\"admin\"");

        let parsed: Role = serde_json::from_str("\"voter\"").expect("deserialize");
        assert_eq!(parsed, Role::Voter);
    }
}
