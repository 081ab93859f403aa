//! Shared layout selection.
//!
//! Anonymous visitors get the public navigation bar. Logged-in sessions get
//! the sidebar for their role, which also carries the logout action.

use ballotbox_session::{Role, Session};

use crate::route::View;

/// A link in the shared layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub view: View,
}

impl NavLink {
    const fn new(label: &'static str, view: View) -> Self {
        Self { label, view }
    }

    /// Target path of the link.
    #[must_use]
    pub fn href(&self) -> &'static str {
        self.view.pattern()
    }
}

const PUBLIC_LINKS: &[NavLink] = &[
    NavLink::new("Home", View::Home),
    NavLink::new("About", View::About),
    NavLink::new("Login", View::Login),
    NavLink::new("Sign Up", View::Signup),
];

const ADMIN_LINKS: &[NavLink] = &[
    NavLink::new("Dashboard", View::AdminDashboard),
    NavLink::new("Add Candidate", View::AddCandidate),
    NavLink::new("Candidates List", View::CandidateList),
    NavLink::new("Vote Count", View::VoteResults),
];

const VOTER_LINKS: &[NavLink] = &[
    NavLink::new("Profile", View::Profile),
    NavLink::new("Change Password", View::ChangePassword),
    NavLink::new("Give Vote", View::CastVote),
];

/// The layout wrapped around every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chrome {
    PublicNavbar,
    AdminSidebar,
    VoterSidebar,
}

impl Chrome {
    /// Picks the layout for the current session.
    #[must_use]
    pub fn for_session(session: &Session) -> Self {
        match session.role() {
            None => Self::PublicNavbar,
            Some(Role::Admin) => Self::AdminSidebar,
            Some(Role::Voter) => Self::VoterSidebar,
        }
    }

    /// Links shown in this layout, in display order.
    #[must_use]
    pub fn links(&self) -> &'static [NavLink] {
        match self {
            Self::PublicNavbar => PUBLIC_LINKS,
            Self::AdminSidebar => ADMIN_LINKS,
            Self::VoterSidebar => VOTER_LINKS,
        }
    }

    /// Returns true if the layout offers logout.
    #[must_use]
    pub fn has_logout(&self) -> bool {
        !matches!(self, Self::PublicNavbar)
    }

    /// Heading shown at the top of a sidebar.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::PublicNavbar => "Online Voting",
            Self::AdminSidebar => "Admin Panel",
            Self::VoterSidebar => "Voter Panel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard;
    use ballotbox_session::{AuthenticatedSession, CachedStats, Credential};

    fn session(role: Role) -> Session {
        Session::Authenticated(AuthenticatedSession::new(
            Credential::new("token").expect("non-empty"),
            role,
            CachedStats::default(),
        ))
    }

    #[test]
    fn chrome_follows_session() {
        assert_eq!(Chrome::for_session(&Session::Anonymous), Chrome::PublicNavbar);
        assert_eq!(Chrome::for_session(&session(Role::Admin)), Chrome::AdminSidebar);
        assert_eq!(Chrome::for_session(&session(Role::Voter)), Chrome::VoterSidebar);
    }

    #[test]
    fn only_sidebars_offer_logout() {
        assert!(!Chrome::PublicNavbar.has_logout());
        assert!(Chrome::AdminSidebar.has_logout());
        assert!(Chrome::VoterSidebar.has_logout());
    }

    #[test]
    fn every_link_is_reachable_by_its_session() {
        let cases = [
            (Chrome::PublicNavbar, Session::Anonymous),
            (Chrome::AdminSidebar, session(Role::Admin)),
            (Chrome::VoterSidebar, session(Role::Voter)),
        ];
        for (chrome, session) in cases {
            for link in chrome.links() {
                assert!(
                    guard::authorize(link.view, &session).is_allowed(),
                    "{} in {chrome:?}",
                    link.label
                );
            }
        }
    }

    #[test]
    fn voter_sidebar_links() {
        let hrefs: Vec<_> = Chrome::VoterSidebar.links().iter().map(NavLink::href).collect();
        assert_eq!(hrefs, ["/profile", "/change-password", "/vote"]);
    }

    #[test]
    fn admin_sidebar_has_no_parameterized_links() {
        assert!(
            Chrome::AdminSidebar
                .links()
                .iter()
                .all(|link| link.view.path().is_some())
        );
    }
}
