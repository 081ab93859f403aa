//! The session service shared by the router, the guard and the API client.

use ballotbox_core::Result;

use crate::error::StorageError;
use crate::role::Role;
use crate::session::{AuthenticatedSession, CachedStats, Credential, Session};
use crate::storage::KeyValueStore;

/// Storage keys, all string-valued and cleared together on logout.
pub mod keys {
    /// Bearer credential.
    pub const TOKEN: &str = "token";
    /// Role assigned at login.
    pub const ROLE: &str = "role";
    /// Registered voter count.
    pub const TOTAL_USERS: &str = "totalusers";
    /// Voters who have voted.
    pub const TOTAL_VOTED: &str = "totalvoted";
    /// Voters who have not voted.
    pub const NOT_VOTED: &str = "notvoted";
    /// Candidate count.
    pub const CANDIDATES: &str = "candidates";

    /// Every key the session owns.
    pub const ALL: [&str; 6] = [TOKEN, ROLE, TOTAL_USERS, TOTAL_VOTED, NOT_VOTED, CANDIDATES];
}

/// Reads and writes the session in a durable key-value backend.
///
/// The store holds no session state of its own: every query reads storage,
/// so a session cleared elsewhere is observed by the next call.
#[derive(Debug, Clone, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Creates a session store over the given backend.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Reads the current session.
    ///
    /// Storage holding a token without a recognized role (or the reverse)
    /// reads as anonymous, as does unreadable storage.
    #[must_use]
    pub fn load(&self) -> Session {
        let credential = self.read(keys::TOKEN).and_then(Credential::new);
        let role = self.read(keys::ROLE).and_then(|raw| match raw.parse::<Role>() {
            Ok(role) => Some(role),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring stored role");
                None
            }
        });

        match (credential, role) {
            (Some(credential), Some(role)) => {
                let stats = CachedStats {
                    total_users: CachedStats::parse_count(self.read(keys::TOTAL_USERS).as_deref()),
                    total_voted: CachedStats::parse_count(self.read(keys::TOTAL_VOTED).as_deref()),
                    not_voted: CachedStats::parse_count(self.read(keys::NOT_VOTED).as_deref()),
                    candidates: CachedStats::parse_count(self.read(keys::CANDIDATES).as_deref()),
                };
                Session::Authenticated(AuthenticatedSession::new(credential, role, stats))
            }
            _ => Session::Anonymous,
        }
    }

    /// Stores a new session, replacing any previous one.
    ///
    /// The token is removed first and written last, so a reader never sees
    /// a token paired with another session's role. If any write fails the
    /// storage is cleared and the error returned.
    pub fn save(
        &self,
        credential: Credential,
        role: Role,
        stats: &CachedStats,
    ) -> Result<(), StorageError> {
        if let Err(report) = self.write_all(&credential, role, stats) {
            tracing::warn!(error = %report, "Failed to persist session; clearing");
            if let Err(clear_err) = self.clear() {
                tracing::warn!(error = %clear_err, "Failed to clear partially written session");
            }
            return Err(report);
        }
        tracing::debug!(role = %role, "Session stored");
        Ok(())
    }

    fn write_all(
        &self,
        credential: &Credential,
        role: Role,
        stats: &CachedStats,
    ) -> Result<(), StorageError> {
        self.storage.remove(keys::TOKEN)?;
        self.storage
            .set(keys::TOTAL_USERS, &stats.total_users.to_string())?;
        self.storage
            .set(keys::TOTAL_VOTED, &stats.total_voted.to_string())?;
        self.storage
            .set(keys::NOT_VOTED, &stats.not_voted.to_string())?;
        self.storage
            .set(keys::CANDIDATES, &stats.candidates.to_string())?;
        self.storage.set(keys::ROLE, role.as_str())?;
        self.storage.set(keys::TOKEN, credential.as_str())?;
        Ok(())
    }

    /// Removes every session key. Clearing an anonymous session is a no-op.
    ///
    /// All keys are attempted even if one removal fails; the first failure
    /// is returned.
    pub fn clear(&self) -> Result<(), StorageError> {
        let mut first_error = None;
        for key in keys::ALL {
            if let Err(report) = self.storage.remove(key)
                && first_error.is_none()
            {
                first_error = Some(report);
            }
        }
        match first_error {
            Some(report) => Err(report),
            None => Ok(()),
        }
    }

    /// Returns true if a credential is stored.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.load().is_authenticated()
    }

    /// Returns true if authenticated with exactly the expected role.
    #[must_use]
    pub fn has_role(&self, expected: Role) -> bool {
        self.load().has_role(expected)
    }

    /// Returns the stored credential, read at call time.
    #[must_use]
    pub fn credential(&self) -> Option<Credential> {
        self.load().credential().cloned()
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(report) => {
                tracing::warn!(key, error = %report, "Failed to read session storage");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn stats() -> CachedStats {
        CachedStats {
            total_users: 10,
            total_voted: 4,
            not_voted: 6,
            candidates: 3,
        }
    }

    fn credential(token: &str) -> Credential {
        Credential::new(token).expect("non-empty")
    }

    /// Fails writes to one key, to exercise partial-write recovery.
    #[derive(Debug, Clone, Default)]
    struct FailingStore {
        inner: MemoryStore,
        fail_key: &'static str,
    }

    impl KeyValueStore for FailingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == self.fail_key {
                return Err(StorageError::WriteFailed {
                    key: key.to_string(),
                    reason: "quota exceeded".to_string(),
                }
                .into());
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn empty_storage_is_anonymous() {
        let store = SessionStore::new(MemoryStore::new());
        assert_eq!(store.load(), Session::Anonymous);
        assert!(!store.is_authenticated());
        assert!(store.credential().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = SessionStore::new(MemoryStore::new());
        store
            .save(credential("abc"), Role::Voter, &stats())
            .expect("save");

        let session = store.load();
        assert_eq!(session.credential().map(Credential::as_str), Some("abc"));
        assert_eq!(session.role(), Some(Role::Voter));
        assert_eq!(session.stats(), Some(&stats()));
    }

    #[test]
    fn save_writes_expected_keys() {
        let backend = MemoryStore::new();
        let store = SessionStore::new(backend.clone());
        store
            .save(credential("abc"), Role::Admin, &stats())
            .expect("save");

        assert_eq!(backend.get(keys::TOKEN).expect("get"), Some("abc".to_string()));
        assert_eq!(backend.get(keys::ROLE).expect("get"), Some("admin".to_string()));
        assert_eq!(backend.get(keys::TOTAL_USERS).expect("get"), Some("10".to_string()));
        assert_eq!(backend.get(keys::TOTAL_VOTED).expect("get"), Some("4".to_string()));
        assert_eq!(backend.get(keys::NOT_VOTED).expect("get"), Some("6".to_string()));
        assert_eq!(backend.get(keys::CANDIDATES).expect("get"), Some("3".to_string()));
        assert_eq!(backend.len(), keys::ALL.len());
    }

    #[test]
    fn save_overwrites_previous_session() {
        let store = SessionStore::new(MemoryStore::new());
        store
            .save(credential("voter-token"), Role::Voter, &stats())
            .expect("save");
        store
            .save(credential("admin-token"), Role::Admin, &CachedStats::default())
            .expect("save");

        let session = store.load();
        assert_eq!(session.credential().map(Credential::as_str), Some("admin-token"));
        assert!(session.has_role(Role::Admin));
        assert_eq!(session.stats(), Some(&CachedStats::default()));
    }

    #[test]
    fn clear_produces_anonymous_session() {
        let backend = MemoryStore::new();
        let store = SessionStore::new(backend.clone());
        store
            .save(credential("abc"), Role::Voter, &stats())
            .expect("save");

        store.clear().expect("clear");
        assert!(!store.is_authenticated());
        assert_eq!(store.load(), Session::Anonymous);
        assert!(backend.is_empty());
    }

    #[test]
    fn clear_is_idempotent() {
        let store = SessionStore::new(MemoryStore::new());
        store.clear().expect("first clear");
        store.clear().expect("second clear");
        assert!(!store.is_authenticated());
    }

    #[test]
    fn has_role_requires_authentication() {
        let backend = MemoryStore::new();
        backend.set(keys::ROLE, "admin").expect("set");
        let store = SessionStore::new(backend);

        // A role without a token is not a session.
        assert!(!store.has_role(Role::Admin));
        assert_eq!(store.load(), Session::Anonymous);
    }

    #[test]
    fn token_without_role_is_anonymous() {
        let backend = MemoryStore::new();
        backend.set(keys::TOKEN, "abc").expect("set");
        let store = SessionStore::new(backend);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn unknown_role_is_anonymous() {
        let backend = MemoryStore::new();
        backend.set(keys::TOKEN, "abc").expect("set");
        backend.set(keys::ROLE, "superuser").expect("set");
        let store = SessionStore::new(backend);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn blank_token_is_anonymous() {
        let backend = MemoryStore::new();
        backend.set(keys::TOKEN, "").expect("set");
        backend.set(keys::ROLE, "voter").expect("set");
        let store = SessionStore::new(backend);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn candidates_stored_as_array_are_counted() {
        let backend = MemoryStore::new();
        backend.set(keys::TOKEN, "abc").expect("set");
        backend.set(keys::ROLE, "admin").expect("set");
        backend.set(keys::CANDIDATES, "[{},{},{}]").expect("set");
        let store = SessionStore::new(backend);
        assert_eq!(store.load().stats().map(|s| s.candidates), Some(3));
    }

    #[test]
    fn failed_save_leaves_storage_cleared() {
        let backend = FailingStore {
            inner: MemoryStore::new(),
            fail_key: keys::ROLE,
        };
        let store = SessionStore::new(backend.clone());

        let err = store
            .save(credential("abc"), Role::Voter, &stats())
            .unwrap_err();
        assert!(err.to_string().contains("role"));
        assert_eq!(store.load(), Session::Anonymous);
        assert!(backend.inner.is_empty());
    }

    #[test]
    fn failed_overwrite_does_not_keep_old_token() {
        let backend = FailingStore {
            inner: MemoryStore::new(),
            fail_key: keys::ROLE,
        };
        backend.inner.set(keys::TOKEN, "old").expect("set");
        backend.inner.set(keys::ROLE, "voter").expect("set");
        let store = SessionStore::new(backend);

        assert!(store.save(credential("new"), Role::Admin, &stats()).is_err());
        assert!(!store.is_authenticated());
    }
}
