//! Route guard.
//!
//! Runs before a protected view renders. A denied navigation never renders
//! the view, not even briefly; the caller follows the returned redirect
//! instead, replacing the current history entry.

use ballotbox_session::{Role, Session};
use std::fmt;

use crate::route::{Requirement, View};

/// A navigation the caller should perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    /// Destination path.
    pub to: &'static str,
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

impl Redirect {
    /// The login view, replacing the current entry so "back" does not
    /// return to the page that was refused.
    #[must_use]
    pub fn to_login() -> Self {
        Self {
            to: View::Login.pattern(),
            replace: true,
        }
    }
}

/// Why a navigation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// No session is stored.
    Anonymous,
    /// A session exists but holds a different role.
    RoleMismatch { required: Role, actual: Role },
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => f.write_str("not logged in"),
            Self::RoleMismatch { required, actual } => {
                write!(f, "requires role '{required}', session has '{actual}'")
            }
        }
    }
}

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Render the view.
    Allowed,
    /// Do not render; follow the redirect.
    Denied {
        reason: DenialReason,
        redirect: Redirect,
    },
}

impl Decision {
    /// Returns true if the view may render.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Returns the redirect to follow, if denied.
    #[must_use]
    pub fn redirect(&self) -> Option<Redirect> {
        match self {
            Self::Allowed => None,
            Self::Denied { redirect, .. } => Some(*redirect),
        }
    }

    fn deny(reason: DenialReason) -> Self {
        Self::Denied {
            reason,
            redirect: Redirect::to_login(),
        }
    }
}

/// Checks a requirement against a session.
///
/// Authentication is checked before role, so an anonymous session is always
/// denied as [`DenialReason::Anonymous`].
#[must_use]
pub fn evaluate(requirement: Requirement, session: &Session) -> Decision {
    match (requirement, session.role()) {
        (Requirement::None, _) => Decision::Allowed,
        (_, None) => Decision::deny(DenialReason::Anonymous),
        (Requirement::Authenticated, Some(_)) => Decision::Allowed,
        (Requirement::Role(required), Some(actual)) if required == actual => Decision::Allowed,
        (Requirement::Role(required), Some(actual)) => {
            Decision::deny(DenialReason::RoleMismatch { required, actual })
        }
    }
}

/// Checks whether the session may render a view.
#[must_use]
pub fn authorize(view: View, session: &Session) -> Decision {
    let requirement = view.requirement();
    let decision = evaluate(requirement, session);
    match &decision {
        Decision::Allowed => {
            tracing::trace!(view = %view, requirement = %requirement, "Navigation allowed");
        }
        Decision::Denied { reason, redirect } => {
            tracing::debug!(
                view = %view,
                requirement = %requirement,
                reason = %reason,
                redirect = redirect.to,
                "Navigation denied"
            );
        }
    }
    decision
}
