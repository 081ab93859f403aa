//! The client's record of who is logged in.
//!
//! A session is created from a successful login response and lives in
//! durable storage until logout or until the remote service answers with an
//! authentication failure. The credential and role are stored together: a
//! session carrying one without the other cannot be constructed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::role::Role;

/// Opaque bearer token issued by the remote service.
///
/// The client never inspects it; any non-empty value counts as
/// authenticated until the remote service says otherwise.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Wraps a token, returning `None` for an empty or blank value.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the value of an `Authorization` header carrying this token.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(..)")
    }
}

/// Aggregate counts returned at login and cached for the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedStats {
    /// Registered voters.
    pub total_users: u64,
    /// Voters who have cast a vote.
    pub total_voted: u64,
    /// Voters who have not voted yet.
    pub not_voted: u64,
    /// Number of candidates standing.
    pub candidates: u64,
}

impl CachedStats {
    /// Parses the stored string form of a count.
    ///
    /// Unparseable values read as zero. The candidates entry has been seen
    /// both as a plain number and as a JSON array of candidates, in which
    /// case the array length is the count.
    #[must_use]
    pub fn parse_count(raw: Option<&str>) -> u64 {
        let Some(raw) = raw.map(str::trim) else {
            return 0;
        };
        if let Ok(count) = raw.parse::<u64>() {
            return count;
        }
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(serde_json::Value::Array(items)) => items.len() as u64,
            Ok(serde_json::Value::Number(n)) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
                .unwrap_or(0),
            _ => 0,
        }
    }

    /// Share of registered voters who have voted, in percent with one decimal.
    #[must_use]
    pub fn voted_percent(&self) -> f64 {
        percent(self.total_voted, self.total_users)
    }

    /// Share of registered voters who have not voted, in percent with one decimal.
    #[must_use]
    pub fn not_voted_percent(&self) -> f64 {
        percent(self.not_voted, self.total_users)
    }
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let raw = part as f64 / whole as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

/// A logged-in session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSession {
    credential: Credential,
    role: Role,
    stats: CachedStats,
}

impl AuthenticatedSession {
    /// Creates a session from the parts of a login response.
    #[must_use]
    pub fn new(credential: Credential, role: Role, stats: CachedStats) -> Self {
        Self {
            credential,
            role,
            stats,
        }
    }

    /// Returns the bearer credential.
    #[must_use]
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Returns the role assigned at login.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the counts cached at login.
    #[must_use]
    pub fn stats(&self) -> &CachedStats {
        &self.stats
    }
}

/// The current session, as read from storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// Nobody is logged in.
    #[default]
    Anonymous,
    /// A credential and role are stored.
    Authenticated(AuthenticatedSession),
}

impl Session {
    /// Returns true if a credential is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Returns true if authenticated with exactly the expected role.
    #[must_use]
    pub fn has_role(&self, expected: Role) -> bool {
        self.role() == Some(expected)
    }

    /// Returns the stored role, if authenticated.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(session) => Some(session.role()),
        }
    }

    /// Returns the stored credential, if authenticated.
    #[must_use]
    pub fn credential(&self) -> Option<&Credential> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(session) => Some(session.credential()),
        }
    }

    /// Returns the cached counts, if authenticated.
    #[must_use]
    pub fn stats(&self) -> Option<&CachedStats> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(session) => Some(session.stats()),
        }
    }
}
