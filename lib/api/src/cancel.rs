//! Cancellation of in-flight requests owned by a view.

use futures::future::{AbortHandle, Abortable};

use crate::ApiResult;
use crate::error::ApiError;

/// Cancels the request it was created with. Cancelling twice, or after the
/// request finished, does nothing.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    inner: AbortHandle,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.inner.abort();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.is_aborted()
    }
}

/// Wraps a request so its owner can abandon it.
///
/// A cancelled request resolves to [`ApiError::Cancelled`], which views
/// discard without rendering anything. Whatever the remote service already
/// did is not undone.
pub fn cancellable<T, F>(request: F) -> (impl Future<Output = ApiResult<T>>, CancelHandle)
where
    F: Future<Output = ApiResult<T>>,
{
    let (inner, registration) = AbortHandle::new_pair();
    let future = async move {
        match Abortable::new(request, registration).await {
            Ok(result) => result,
            Err(_aborted) => {
                tracing::debug!("Request cancelled by its owner");
                Err(ApiError::Cancelled.into())
            }
        }
    };
    (future, CancelHandle { inner })
}
