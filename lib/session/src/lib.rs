//! Client-side session state for ballotbox.
//!
//! This crate provides:
//! - Voter roles (`Role`)
//! - The session model (`Session`, `Credential`, `CachedStats`)
//! - Durable key-value backends (`KeyValueStore`, `MemoryStore`, `BrowserStore`)
//! - The injectable `SessionStore` service that defines "logged in"
//!
//! # Session Model
//!
//! A session is either anonymous or carries a bearer credential together
//! with the role the remote service assigned at login. There is no
//! client-side expiry: a session lasts until logout or until the remote
//! service rejects its credential.
//!
//! # Example
//!
//! ```
//! use ballotbox_session::{CachedStats, Credential, MemoryStore, Role, SessionStore};
//!
//! let store = SessionStore::new(MemoryStore::default());
//! assert!(!store.is_authenticated());
//!
//! let credential = Credential::new("abc").expect("non-empty");
//! store
//!     .save(credential, Role::Voter, &CachedStats::default())
//!     .expect("save");
//!
//! assert!(store.is_authenticated());
//! assert!(store.has_role(Role::Voter));
//! assert!(!store.has_role(Role::Admin));
//!
//! store.clear().expect("clear");
//! assert!(!store.is_authenticated());
//! ```

pub mod error;
pub mod role;
pub mod session;
pub mod storage;
pub mod store;

pub use error::StorageError;
pub use role::Role;
pub use session::{AuthenticatedSession, CachedStats, Credential, Session};
#[cfg(feature = "browser")]
pub use storage::BrowserStore;
pub use storage::{KeyValueStore, MemoryStore};
pub use store::{SessionStore, keys};
