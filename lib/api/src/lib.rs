//! Client facade for the ballotbox remote voting service.
//!
//! This crate provides:
//! - `ApiClient`: every remote operation, with bearer credentials read from
//!   the session store at call time
//! - Form validation that runs before any request is sent
//! - Response models and read-side helpers (search, vote tally)
//! - `SubmitGate` and `cancellable` for in-flight request control
//!
//! # Failure Handling
//!
//! A 401 from an authenticated call, or an authenticated call made with no
//! stored credential, clears the session and redirects to login through the
//! injected `Navigator`. Every other failure leaves the session untouched
//! and carries the remote service's `message`, falling back to a fixed
//! per-operation message.

pub mod cancel;
pub mod client;
pub mod config;
pub mod error;
pub mod gate;
pub mod models;
pub mod roster;
pub mod validation;

pub use cancel::{CancelHandle, cancellable};
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, Operation};
pub use gate::{SubmitGate, SubmitPermit};
pub use models::{Candidate, LoginOutcome, PartyCount, VoterProfile, mask_aadhaar};
pub use roster::{TallyRow, VoteTally};
pub use validation::{CandidateForm, LoginForm, PasswordChangeForm, SignupForm, ValidationError};

/// Result of a facade operation.
pub type ApiResult<T> = ballotbox_core::Result<T, ApiError>;
