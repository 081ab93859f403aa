//! Application-wide services provided through Leptos context.

use ballotbox_api::{ApiClient, ApiError};
use ballotbox_navigation::{Navigator, Redirect};
use ballotbox_session::{BrowserStore, Session, SessionStore};
use leptos::prelude::*;
use rootcause::prelude::Report;

/// The API client as used by the views.
pub type Client = ApiClient<BrowserStore, SignalNavigator>;

/// Copyable handle to the client, for capture in event handlers.
pub type ClientHandle = StoredValue<Client, LocalStorage>;

/// The session store plus a revision counter that views track.
///
/// Storage is not reactive, so anything that changes the session bumps the
/// revision to re-run guards and re-pick the chrome.
#[derive(Debug, Clone)]
pub struct SessionContext {
    store: SessionStore<BrowserStore>,
    revision: RwSignal<u64>,
}

impl SessionContext {
    pub fn new(revision: RwSignal<u64>) -> Self {
        Self {
            store: SessionStore::new(BrowserStore),
            revision,
        }
    }

    /// Reads the session, subscribing the caller to session changes.
    pub fn snapshot(&self) -> Session {
        self.revision.track();
        self.store.load()
    }

    /// Notifies subscribers that the session changed.
    pub fn touch(&self) {
        self.revision.update(|r| *r = r.wrapping_add(1));
    }

    pub fn store(&self) -> &SessionStore<BrowserStore> {
        &self.store
    }
}

/// Navigator that hands redirects to the router through a signal.
///
/// A redirect may be requested from inside an API call; the
/// [`RedirectListener`](crate::components::RedirectListener) performs it.
#[derive(Debug, Clone, Copy)]
pub struct SignalNavigator {
    pending: RwSignal<Option<Redirect>>,
    session_revision: RwSignal<u64>,
}

impl SignalNavigator {
    pub fn new(session_revision: RwSignal<u64>) -> Self {
        Self {
            pending: RwSignal::new(None),
            session_revision,
        }
    }

    /// The redirect waiting to be performed, if any.
    pub fn pending(&self) -> Option<Redirect> {
        self.pending.get()
    }

    /// Marks the pending redirect as performed.
    pub fn complete(&self) {
        self.pending.set(None);
    }
}

impl Navigator for SignalNavigator {
    fn redirect(&self, redirect: Redirect) {
        // Redirects from outside the view layer always follow a session change.
        self.session_revision.update(|r| *r = r.wrapping_add(1));
        self.pending.set(Some(redirect));
    }
}

/// Sets up the session, navigator and client contexts.
pub fn provide_services(client: Client, session: SessionContext, navigator: SignalNavigator) {
    provide_context(session);
    provide_context(navigator);
    provide_context(StoredValue::new_local(client));
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

pub fn use_client() -> ClientHandle {
    expect_context::<ClientHandle>()
}

/// Text to show for a failed call, or `None` when the failure is silent.
pub fn error_message(report: &Report<ApiError>) -> Option<String> {
    let error = report.current_context();
    if error.is_silent() {
        None
    } else {
        Some(error.user_message())
    }
}
