//! Response bodies of the remote service.

use ballotbox_core::CandidateId;
use ballotbox_navigation::View;
use ballotbox_session::{CachedStats, Role};
use serde::{Deserialize, Deserializer};

/// Reads a count that may arrive as a number, a numeric string, or an array
/// whose length is the count.
fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => CachedStats::parse_count(Some(&s)),
        other => CachedStats::parse_count(Some(&other.to_string())),
    })
}

/// Reads an optional string that the remote service may send as a number.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Reads an optional age sent as a number or a numeric string. Anything
/// else, including a negative or fractional number, reads as absent.
fn lenient_age<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Body of a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
    #[serde(default, deserialize_with = "count")]
    pub totalusers: u64,
    #[serde(default, deserialize_with = "count")]
    pub totalvoted: u64,
    #[serde(default, deserialize_with = "count")]
    pub notvoted: u64,
    #[serde(default, deserialize_with = "count")]
    pub candidates: u64,
}

impl LoginResponse {
    /// Counts to cache alongside the credential.
    #[must_use]
    pub fn stats(&self) -> CachedStats {
        CachedStats {
            total_users: self.totalusers,
            total_voted: self.totalvoted,
            not_voted: self.notvoted,
            candidates: self.candidates,
        }
    }
}

/// Result of a successful login, after the session was stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginOutcome {
    pub role: Role,
    /// View to navigate to next.
    pub landing: View,
}

/// A voter's own profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoterProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_age")]
    pub age: Option<u32>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub mobile: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub aadhar_card_number: Option<String>,
    #[serde(default)]
    pub is_voted: bool,
}

impl VoterProfile {
    /// The name to greet the voter with, `User` when none was sent.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.trim() {
            "" => "User",
            name => name,
        }
    }

    /// The Aadhaar number with all but the last four characters hidden.
    #[must_use]
    pub fn masked_aadhaar(&self) -> String {
        mask_aadhaar(self.aadhar_card_number.as_deref())
    }

    /// Upper-cased first letter of the name, for the avatar.
    #[must_use]
    pub fn initial(&self) -> Option<char> {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
    }
}

/// Masks an Aadhaar number as `********` followed by its last four characters.
#[must_use]
pub fn mask_aadhaar(number: Option<&str>) -> String {
    match number.filter(|n| !n.is_empty()) {
        Some(number) => {
            let skip = number.chars().count().saturating_sub(4);
            let tail: String = number.chars().skip(skip).collect();
            format!("********{tail}")
        }
        None => "Not available".to_string(),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProfileEnvelope {
    pub user: VoterProfile,
}

/// A candidate standing for election.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Candidate {
    #[serde(rename = "_id")]
    pub id: CandidateId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub party: String,
    #[serde(default, deserialize_with = "lenient_age")]
    pub age: Option<u32>,
    #[serde(default)]
    pub position: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidatesEnvelope {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A single candidate, which the remote service sends either bare or
/// wrapped in `{ "candidate": .. }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CandidateEnvelope {
    Wrapped { candidate: Candidate },
    Bare(Candidate),
}

impl CandidateEnvelope {
    pub fn into_inner(self) -> Candidate {
        match self {
            Self::Wrapped { candidate } | Self::Bare(candidate) => candidate,
        }
    }
}

/// Votes received by one party.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PartyCount {
    pub party: String,
    #[serde(default, deserialize_with = "count")]
    pub count: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VoteCountEnvelope {
    #[serde(rename = "countRecord", default)]
    pub count_record: Vec<PartyCount>,
}

/// `{ "message": .. }`, sent with most success and failure responses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageBody {
    /// Parses a response body, tolerating anything that is not JSON.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_counts_accept_numbers_strings_and_arrays() {
        let body = r#"{
            "token": "abc",
            "role": "admin",
            "totalusers": 10,
            "totalvoted": "4",
            "notvoted": 6,
            "candidates": [{"name": "a"}, {"name": "b"}]
        }"#;
        let response: LoginResponse = serde_json::from_str(body).expect("should parse");
        assert_eq!(
            response.stats(),
            CachedStats {
                total_users: 10,
                total_voted: 4,
                not_voted: 6,
                candidates: 2,
            }
        );
    }

    #[test]
    fn voter_login_without_counts_defaults_to_zero() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"token": "abc", "role": "voter"}"#).expect("should parse");
        assert_eq!(response.stats(), CachedStats::default());
    }

    #[test]
    fn profile_accepts_numeric_aadhaar() {
        let body = r#"{"user": {
            "name": "asha",
            "age": 30,
            "mobile": 9876543210,
            "aadharCardNumber": 123456789012,
            "isVoted": true
        }}"#;
        let envelope: ProfileEnvelope = serde_json::from_str(body).expect("should parse");
        let profile = envelope.user;
        assert_eq!(profile.masked_aadhaar(), "********9012");
        assert_eq!(profile.mobile.as_deref(), Some("9876543210"));
        assert!(profile.is_voted);
        assert_eq!(profile.initial(), Some('A'));
    }

    #[test]
    fn profile_without_name_greets_user() {
        let envelope: ProfileEnvelope =
            serde_json::from_str(r#"{"user": {"age": 30, "isVoted": false}}"#)
                .expect("should parse");
        let profile = envelope.user;
        assert_eq!(profile.display_name(), "User");
        assert_eq!(profile.initial(), Some('U'));
        assert_eq!(profile.age, Some(30));
    }

    #[test]
    fn candidate_ages_accept_numbers_and_strings() {
        let body = r#"{"candidates": [
            {"_id": "c1", "name": "Ravi", "party": "Green", "age": "40"},
            {"_id": "c2", "name": "Meera", "party": "Blue", "age": 35},
            {"_id": "c3", "name": "Arjun", "party": "Blue", "age": "forty"}
        ]}"#;
        let envelope: CandidatesEnvelope = serde_json::from_str(body).expect("should parse");
        let ages: Vec<_> = envelope.candidates.iter().map(|c| c.age).collect();
        assert_eq!(ages, [Some(40), Some(35), None]);
    }

    #[test]
    fn mask_aadhaar_handles_missing_and_short() {
        assert_eq!(mask_aadhaar(None), "Not available");
        assert_eq!(mask_aadhaar(Some("")), "Not available");
        assert_eq!(mask_aadhaar(Some("12")), "********12");
    }

    #[test]
    fn candidate_envelope_accepts_both_shapes() {
        let bare = r#"{"_id": "c1", "name": "Ravi", "party": "Green"}"#;
        let wrapped = r#"{"candidate": {"_id": "c1", "name": "Ravi", "party": "Green", "age": 40}}"#;

        let bare: CandidateEnvelope = serde_json::from_str(bare).expect("should parse");
        let wrapped: CandidateEnvelope = serde_json::from_str(wrapped).expect("should parse");
        assert_eq!(bare.into_inner().name, "Ravi");
        assert_eq!(wrapped.into_inner().age, Some(40));
    }

    #[test]
    fn message_body_tolerates_non_json() {
        assert_eq!(MessageBody::parse("<html>").message, None);
        assert_eq!(
            MessageBody::parse(r#"{"message": "Invalid token"}"#).message.as_deref(),
            Some("Invalid token")
        );
    }
}
