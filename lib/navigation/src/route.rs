//! The application's path table.
//!
//! Every reachable view appears here exactly once together with the
//! requirement a session must meet to render it.

use ballotbox_core::CandidateId;
use ballotbox_session::Role;
use std::fmt;

/// What a session must satisfy before a view may render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// Reachable by anyone, logged in or not.
    None,
    /// Any non-anonymous session.
    Authenticated,
    /// A non-anonymous session holding this role.
    Role(Role),
}

impl Requirement {
    /// Returns true if an anonymous session is turned away.
    #[must_use]
    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Authenticated => f.write_str("authenticated"),
            Self::Role(role) => write!(f, "role:{role}"),
        }
    }
}

/// A navigable destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    About,
    Login,
    Signup,
    Profile,
    ChangePassword,
    AdminDashboard,
    AddCandidate,
    CandidateList,
    UpdateCandidate,
    VoteResults,
    CastVote,
}

impl View {
    /// Every view, in route table order.
    pub const ALL: [View; 12] = [
        View::Home,
        View::About,
        View::Login,
        View::Signup,
        View::Profile,
        View::ChangePassword,
        View::AdminDashboard,
        View::AddCandidate,
        View::CandidateList,
        View::UpdateCandidate,
        View::VoteResults,
        View::CastVote,
    ];

    /// Path pattern; `:id` marks a candidate identifier segment.
    #[must_use]
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Profile => "/profile",
            Self::ChangePassword => "/change-password",
            Self::AdminDashboard => "/admin",
            Self::AddCandidate => "/addcandidate",
            Self::CandidateList => "/candidateslist",
            Self::UpdateCandidate => "/update/:id",
            Self::VoteResults => "/count",
            Self::CastVote => "/vote",
        }
    }

    /// The requirement a session must meet to render this view.
    #[must_use]
    pub fn requirement(&self) -> Requirement {
        match self {
            Self::Home | Self::About | Self::Login | Self::Signup => Requirement::None,
            Self::Profile | Self::ChangePassword => Requirement::Authenticated,
            Self::AdminDashboard
            | Self::AddCandidate
            | Self::CandidateList
            | Self::UpdateCandidate
            | Self::VoteResults => Requirement::Role(Role::Admin),
            Self::CastVote => Requirement::Role(Role::Voter),
        }
    }

    /// Concrete path of a view without parameters.
    ///
    /// Returns `None` for the candidate update view; use
    /// [`View::update_candidate_path`] for it.
    #[must_use]
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Self::UpdateCandidate => None,
            other => Some(other.pattern()),
        }
    }

    /// Path of the update form for one candidate.
    #[must_use]
    pub fn update_candidate_path(id: &CandidateId) -> String {
        format!("/update/{id}")
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

/// A path matched against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// The matched view.
    pub view: View,
    /// Candidate identifier captured from the path, if the pattern has one.
    pub candidate: Option<CandidateId>,
}

/// Matches a path to a view.
///
/// The query string, fragment and a trailing slash are ignored. Unknown
/// paths, and `:id` segments that are not valid identifiers, resolve to
/// `None`.
#[must_use]
pub fn resolve(path: &str) -> Option<ResolvedRoute> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    View::ALL.into_iter().find_map(|view| {
        let pattern: Vec<&str> = view
            .pattern()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        if pattern.len() != segments.len() {
            return None;
        }

        let mut candidate = None;
        for (expected, actual) in pattern.iter().zip(&segments) {
            if *expected == ":id" {
                candidate = Some(CandidateId::parse(actual).ok()?);
            } else if expected != actual {
                return None;
            }
        }
        Some(ResolvedRoute { view, candidate })
    })
}

/// Where a freshly logged-in session lands.
#[must_use]
pub fn landing_view(role: Role) -> View {
    match role {
        Role::Admin => View::AdminDashboard,
        Role::Voter => View::Profile,
    }
}
