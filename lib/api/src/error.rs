//! Errors surfaced by the API facade.
//!
//! Views never show these `Display` strings directly: they ask
//! [`ApiError::user_message`] for the text to render inline, and
//! [`ApiError::is_silent`] tells them when nothing should be shown at all.

use std::fmt;

use crate::validation::ValidationError;

/// A remote operation, used to pick fallback messages and label logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Register,
    Login,
    FetchProfile,
    ChangePassword,
    AddCandidate,
    ListCandidates,
    /// The candidate list as loaded by a voter choosing whom to vote for.
    ListBallot,
    FetchCandidate,
    UpdateCandidate,
    DeleteCandidate,
    CastVote,
    VoteCount,
}

impl Operation {
    /// Stable name for logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Login => "login",
            Self::FetchProfile => "fetch_profile",
            Self::ChangePassword => "change_password",
            Self::AddCandidate => "add_candidate",
            Self::ListCandidates => "list_candidates",
            Self::ListBallot => "list_ballot",
            Self::FetchCandidate => "fetch_candidate",
            Self::UpdateCandidate => "update_candidate",
            Self::DeleteCandidate => "delete_candidate",
            Self::CastVote => "cast_vote",
            Self::VoteCount => "vote_count",
        }
    }

    /// Whether the operation sends the stored bearer credential.
    #[must_use]
    pub fn requires_credential(&self) -> bool {
        !matches!(self, Self::Register | Self::Login)
    }

    /// Message shown when the remote service gives no reason of its own.
    #[must_use]
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::Register => "Registration failed",
            Self::Login => "Something went wrong",
            Self::FetchProfile => "An error occurred.",
            Self::ChangePassword | Self::AddCandidate => "Something went wrong.",
            Self::ListCandidates => "Failed to load candidates.",
            Self::ListBallot => "Failed to fetch candidates.",
            Self::FetchCandidate => "Failed to fetch candidate",
            Self::UpdateCandidate => "Error updating candidate",
            Self::DeleteCandidate => "Failed to delete candidate.",
            Self::CastVote => "Voting failed",
            Self::VoteCount => "Failed to fetch vote results",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from the API facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The form was rejected before any request was sent.
    Validation(ValidationError),
    /// The credential is missing or was rejected. The session has already
    /// been cleared and a redirect to login requested.
    Unauthorized { operation: Operation },
    /// The remote service answered with a non-success status.
    Remote {
        operation: Operation,
        status: u16,
        message: Option<String>,
    },
    /// The request never produced a response.
    Transport { operation: Operation, reason: String },
    /// A success response could not be read.
    Decode { operation: Operation, reason: String },
    /// The session could not be written to durable storage.
    SessionStorage { operation: Operation, reason: String },
    /// The HTTP client could not be constructed.
    ClientSetup { reason: String },
    /// The caller cancelled the request before it finished.
    Cancelled,
}

impl ApiError {
    /// Text to render inline next to the form or list.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Unauthorized { .. } => "Please log in again.".to_string(),
            Self::Remote {
                operation, message, ..
            } => message
                .as_deref()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(operation.fallback_message())
                .to_string(),
            Self::Transport { operation, .. }
            | Self::Decode { operation, .. }
            | Self::SessionStorage { operation, .. } => {
                operation.fallback_message().to_string()
            }
            Self::ClientSetup { .. } => "Something went wrong".to_string(),
            Self::Cancelled => String::new(),
        }
    }

    /// Returns true if the view should show nothing: a cancelled request is
    /// discarded, and an unauthorized one has already redirected.
    #[must_use]
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Unauthorized { .. })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid input: {err}"),
            Self::Unauthorized { operation } => {
                write!(f, "{operation}: not authorized")
            }
            Self::Remote {
                operation,
                status,
                message,
            } => match message {
                Some(message) => write!(f, "{operation}: HTTP {status}: {message}"),
                None => write!(f, "{operation}: HTTP {status}"),
            },
            Self::Transport { operation, reason } => {
                write!(f, "{operation}: request failed: {reason}")
            }
            Self::Decode { operation, reason } => {
                write!(f, "{operation}: unreadable response: {reason}")
            }
            Self::SessionStorage { operation, reason } => {
                write!(f, "{operation}: session not stored: {reason}")
            }
            Self::ClientSetup { reason } => {
                write!(f, "failed to build HTTP client: {reason}")
            }
            Self::Cancelled => f.write_str("request cancelled"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_message_wins_over_fallback() {
        let err = ApiError::Remote {
            operation: Operation::CastVote,
            status: 400,
            message: Some("You have already voted".to_string()),
        };
        assert_eq!(err.user_message(), "You have already voted");
        assert!(!err.is_silent());
    }

    #[test]
    fn missing_or_blank_message_uses_fallback() {
        for message in [None, Some("  ".to_string())] {
            let err = ApiError::Remote {
                operation: Operation::DeleteCandidate,
                status: 500,
                message,
            };
            assert_eq!(err.user_message(), "Failed to delete candidate.");
        }
    }

    #[test]
    fn transport_failure_uses_fallback() {
        let err = ApiError::Transport {
            operation: Operation::Register,
            reason: "connection refused".to_string(),
        };
        assert_eq!(err.user_message(), "Registration failed");
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn validation_message_is_shown_as_is() {
        let err = ApiError::from(ValidationError::PasswordMismatch);
        assert_eq!(err.user_message(), "Passwords don't match!");
    }

    #[test]
    fn cancelled_and_unauthorized_are_silent() {
        assert!(ApiError::Cancelled.is_silent());
        assert!(
            ApiError::Unauthorized {
                operation: Operation::FetchProfile
            }
            .is_silent()
        );
    }

    #[test]
    fn voter_and_admin_candidate_lists_have_own_fallbacks() {
        let remote = |operation| ApiError::Remote {
            operation,
            status: 500,
            message: Some("database down".to_string()),
        };
        assert_eq!(remote(Operation::ListBallot).user_message(), "database down");
        assert_eq!(
            Operation::ListBallot.fallback_message(),
            "Failed to fetch candidates."
        );
        assert_eq!(
            Operation::ListCandidates.fallback_message(),
            "Failed to load candidates."
        );
        assert!(Operation::ListBallot.requires_credential());
    }

    #[test]
    fn only_register_and_login_are_public() {
        assert!(!Operation::Register.requires_credential());
        assert!(!Operation::Login.requires_credential());
        assert!(Operation::FetchProfile.requires_credential());
        assert!(Operation::CastVote.requires_credential());
    }
}
