//! Route guard component.

use ballotbox_navigation::{Decision, View, guard};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::context::use_session;

/// Renders `children` only if the session may reach `target`; otherwise
/// redirects without rendering them.
///
/// The decision is re-evaluated whenever the session changes.
#[component]
pub fn Guarded(target: View, children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    move || match guard::authorize(target, &session.snapshot()) {
        Decision::Allowed => children().into_any(),
        Decision::Denied { redirect, .. } => view! {
            <Redirect
                path=redirect.to
                options=NavigateOptions {
                    replace: redirect.replace,
                    ..Default::default()
                }
            />
        }
        .into_any(),
    }
}
