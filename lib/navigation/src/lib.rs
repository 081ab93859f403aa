//! Role-scoped navigation for ballotbox.
//!
//! This crate decides, without touching the network, which views a visitor
//! may reach:
//! - `route`: the path table mapping each path to a view and its requirement
//! - `guard`: the allow/deny decision for a navigation attempt
//! - `chrome`: which shared layout (public bar or per-role sidebar) to show
//! - `navigator`: the seam through which non-UI code asks for a redirect
//!
//! # Access Model
//!
//! Views declare a requirement instead of checking the session themselves.
//! Role requirements are layered on top of authentication: an anonymous
//! session is rejected before its role is ever considered, and a role
//! mismatch is answered with the same redirect to login.
//!
//! # Example
//!
//! ```
//! use ballotbox_navigation::{Decision, View, guard};
//! use ballotbox_session::Session;
//!
//! let decision = guard::authorize(View::AdminDashboard, &Session::Anonymous);
//! assert!(matches!(decision, Decision::Denied { .. }));
//! assert_eq!(decision.redirect().map(|r| r.to), Some("/login"));
//! ```

pub mod chrome;
pub mod guard;
pub mod navigator;
pub mod route;

pub use chrome::{Chrome, NavLink};
pub use guard::{Decision, DenialReason, Redirect};
pub use navigator::{Navigator, RecordingNavigator};
pub use route::{Requirement, ResolvedRoute, View, landing_view, resolve};
