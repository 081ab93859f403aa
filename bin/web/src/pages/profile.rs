//! The logged-in voter's profile.

use ballotbox_api::{VoterProfile, cancellable};
use ballotbox_navigation::View;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::components::Feedback;
use crate::context::{error_message, use_client};

/// Fetches the profile on mount. The fetch is cancelled if the page is left
/// before it completes.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let client = use_client();
    let (profile, set_profile) = signal(Option::<VoterProfile>::None);
    let (error, set_error) = signal(Option::<String>::None);

    let api = client.get_value();
    let (request, handle) = cancellable(async move { api.fetch_profile().await });
    on_cleanup(move || handle.cancel());
    spawn_local(async move {
        match request.await {
            Ok(loaded) => set_profile.set(Some(loaded)),
            Err(report) => {
                if let Some(message) = error_message(&report) {
                    set_error.set(Some(message));
                }
            }
        }
    });

    view! {
        <section class="profile-page">
            <h1>"Voter Profile"</h1>
            <Feedback error=error/>
            {move || match profile.get() {
                None => view! { <p>"Loading profile..."</p> }.into_any(),
                Some(profile) => view! { <ProfileDetails profile=profile/> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn ProfileDetails(profile: VoterProfile) -> impl IntoView {
    let or_missing = |value: Option<String>| value.unwrap_or_else(|| "Not provided".to_string());
    let status = if profile.is_voted { "Voted" } else { "Not voted yet" };

    view! {
        <div class="profile-card">
            <div class="avatar">{profile.initial().map(String::from)}</div>
            <h2>{profile.display_name().to_string()}</h2>
            <dl>
                <dt>"Age"</dt>
                <dd>{profile.age.map(|a| a.to_string()).unwrap_or_else(|| "Not provided".to_string())}</dd>
                <dt>"Email"</dt>
                <dd>{or_missing(profile.email.clone())}</dd>
                <dt>"Mobile"</dt>
                <dd>{or_missing(profile.mobile.clone())}</dd>
                <dt>"Address"</dt>
                <dd>{or_missing(profile.address.clone())}</dd>
                <dt>"Aadhar Number"</dt>
                <dd>{profile.masked_aadhaar()}</dd>
                <dt>"Voting Status"</dt>
                <dd>{status}</dd>
            </dl>
            {(!profile.is_voted).then(|| view! {
                <A href=View::CastVote.pattern()>"Give Vote"</A>
            })}
        </div>
    }
}
