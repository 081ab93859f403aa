//! Performs redirects requested outside the view layer.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::context::SignalNavigator;

/// Watches the navigator and forwards redirects to the router.
///
/// Must be mounted inside the `Router`.
#[component]
pub fn RedirectListener() -> impl IntoView {
    let navigator = expect_context::<SignalNavigator>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(redirect) = navigator.pending() {
            navigator.complete();
            tracing::debug!(to = redirect.to, "Following redirect");
            navigate(
                redirect.to,
                NavigateOptions {
                    replace: redirect.replace,
                    ..Default::default()
                },
            );
        }
    });
}
