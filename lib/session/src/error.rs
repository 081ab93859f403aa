//! Error types for the session crate.
//!
//! Errors are designed for layered context using rootcause.

use std::fmt;

/// Errors from the durable key-value backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backend could not be reached (no window, storage disabled, lock poisoned).
    Unavailable { reason: String },
    /// Writing a key failed (for example, quota exceeded).
    WriteFailed { key: String, reason: String },
    /// Removing a key failed.
    RemoveFailed { key: String, reason: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { reason } => {
                write!(f, "session storage unavailable: {reason}")
            }
            Self::WriteFailed { key, reason } => {
                write!(f, "failed to write '{key}': {reason}")
            }
            Self::RemoveFailed { key, reason } => {
                write!(f, "failed to remove '{key}': {reason}")
            }
        }
    }
}

impl std::error::Error for StorageError {}
