//! The seam through which non-UI code asks for a navigation.
//!
//! The API client redirects to login when the remote service rejects a
//! credential. It does so through [`Navigator`] so the same client runs
//! against the browser router and in tests.

use std::sync::{Arc, Mutex};

use crate::guard::Redirect;

/// Performs redirects on behalf of code outside the view layer.
pub trait Navigator {
    /// Navigates to the redirect's destination.
    fn redirect(&self, redirect: Redirect);
}

impl<N: Navigator + ?Sized> Navigator for Arc<N> {
    fn redirect(&self, redirect: Redirect) {
        (**self).redirect(redirect);
    }
}

/// Records redirects instead of performing them. Clones share the record.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    redirects: Arc<Mutex<Vec<Redirect>>>,
}

impl RecordingNavigator {
    /// Creates a navigator with an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every redirect requested so far, oldest first.
    #[must_use]
    pub fn redirects(&self) -> Vec<Redirect> {
        self.redirects
            .lock()
            .map(|redirects| redirects.clone())
            .unwrap_or_default()
    }

    /// Returns the most recent redirect.
    #[must_use]
    pub fn last(&self) -> Option<Redirect> {
        self.redirects().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, redirect: Redirect) {
        tracing::debug!(to = redirect.to, replace = redirect.replace, "Redirect recorded");
        if let Ok(mut redirects) = self.redirects.lock() {
            redirects.push(redirect);
        }
    }
}
