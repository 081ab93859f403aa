//! Root component and routing.

use ballotbox_api::ApiClient;
use ballotbox_navigation::{ResolvedRoute, View, resolve};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::components::{Guarded, RedirectListener, Shell};
use crate::config::WebConfig;
use crate::context::{SessionContext, SignalNavigator, provide_services};
use crate::pages::*;

/// The main application component.
#[component]
pub fn App(config: WebConfig) -> impl IntoView {
    provide_meta_context();

    let revision = RwSignal::new(0_u64);
    let session = SessionContext::new(revision);
    let navigator = SignalNavigator::new(revision);

    let client = match ApiClient::new(config.api, session.store().clone(), navigator) {
        Ok(client) => client,
        Err(report) => {
            tracing::error!(error = %report, "Failed to build API client");
            return view! {
                <Title text="Online Voting"/>
                <p class="error">"The voting service is unavailable. Please try again later."</p>
            }
            .into_any();
        }
    };
    provide_services(client, session, navigator);

    view! {
        <Title text="Online Voting"/>
        <Router>
            <RedirectListener/>
            <Shell>
                <RoutedPage/>
            </Shell>
        </Router>
    }
    .into_any()
}

/// Resolves the current path against the view table and renders the
/// matching page behind the guard.
#[component]
fn RoutedPage() -> impl IntoView {
    let location = use_location();
    let route = Memo::new(move |_| resolve(&location.pathname.get()));

    move || match route.get() {
        Some(route) => {
            let target = route.view;
            view! { <Guarded target=target>{page(&route)}</Guarded> }.into_any()
        }
        None => "Page not found.".into_any(),
    }
}

fn page(route: &ResolvedRoute) -> AnyView {
    match route.view {
        View::Home => view! { <HomePage/> }.into_any(),
        View::About => view! { <AboutPage/> }.into_any(),
        View::Login => view! { <LoginPage/> }.into_any(),
        View::Signup => view! { <SignupPage/> }.into_any(),
        View::Profile => view! { <ProfilePage/> }.into_any(),
        View::ChangePassword => view! { <ChangePasswordPage/> }.into_any(),
        View::AdminDashboard => view! { <AdminDashboardPage/> }.into_any(),
        View::AddCandidate => view! { <AddCandidatePage/> }.into_any(),
        View::CandidateList => view! { <CandidateListPage/> }.into_any(),
        View::UpdateCandidate => match route.candidate.clone() {
            Some(id) => view! { <UpdateCandidatePage id=id/> }.into_any(),
            None => "Page not found.".into_any(),
        },
        View::VoteResults => view! { <VoteResultsPage/> }.into_any(),
        View::CastVote => view! { <CastVotePage/> }.into_any(),
    }
}
