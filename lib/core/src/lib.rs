//! Core domain types and utilities for the ballotbox voting client.
//!
//! This crate provides the foundational types and error handling shared by
//! the session, navigation, and API crates.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{CandidateId, ParseIdError};
