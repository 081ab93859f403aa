//! Admin dashboard, built from the counts cached at login.

use ballotbox_navigation::{Chrome, View};
use ballotbox_session::CachedStats;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::use_session;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = use_session();
    let stats = move || session.snapshot().stats().copied().unwrap_or_default();

    view! {
        <section class="admin-page">
            <h1>"Admin Dashboard"</h1>
            {move || view! { <StatCards stats=stats()/> }}
            <h2>"Quick actions"</h2>
            <nav class="quick-actions">
                {Chrome::AdminSidebar
                    .links()
                    .iter()
                    .filter(|link| link.view != View::AdminDashboard)
                    .map(|link| view! { <A href=link.href()>{link.label}</A> })
                    .collect_view()}
            </nav>
        </section>
    }
}

#[component]
fn StatCards(stats: CachedStats) -> impl IntoView {
    view! {
        <div class="stats">
            <div class="stat">
                <h3>"Total Voters"</h3>
                <p>{stats.total_users}</p>
            </div>
            <div class="stat">
                <h3>"Voted"</h3>
                <p>{stats.total_voted}</p>
                <small>{format!("{}%", stats.voted_percent())}</small>
            </div>
            <div class="stat">
                <h3>"Not Voted"</h3>
                <p>{stats.not_voted}</p>
                <small>{format!("{}%", stats.not_voted_percent())}</small>
            </div>
            <div class="stat">
                <h3>"Candidates"</h3>
                <p>{stats.candidates}</p>
            </div>
        </div>
    }
}
