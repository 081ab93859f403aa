//! Edit form for one candidate, addressed by `/update/:id`.
//!
//! The identifier has already been validated by route resolution.

use ballotbox_api::CandidateForm;
use ballotbox_core::CandidateId;
use ballotbox_navigation::View;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::components::{Feedback, Field};
use crate::context::{error_message, use_client};

#[component]
pub fn UpdateCandidatePage(id: CandidateId) -> impl IntoView {
    let client = use_client();

    let name = RwSignal::new(String::new());
    let party = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (success, set_success) = signal(Option::<String>::None);

    let api = client.get_value();
    let target = id.clone();
    let id = StoredValue::new(id);
    spawn_local(async move {
        match api.fetch_candidate(&target).await {
            Ok(candidate) => {
                name.set(candidate.name);
                party.set(candidate.party);
                age.set(candidate.age.map(|a| a.to_string()).unwrap_or_default());
            }
            Err(report) => set_error.set(error_message(&report)),
        }
        set_loading.set(false);
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let target = id.get_value();
        let form = CandidateForm {
            name: name.get(),
            party: party.get(),
            age: age.get(),
        };
        let api = client.get_value();

        set_error.set(None);
        set_success.set(None);
        spawn_local(async move {
            match api.update_candidate(&target, &form).await {
                Ok(message) => set_success.set(Some(message)),
                Err(report) => set_error.set(error_message(&report)),
            }
        });
    };

    view! {
        <section class="update-candidate-page">
            <h1>"Update Candidate"</h1>
            <Feedback error=error success=success/>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading candidate..."</p> }>
                <form class="form" on:submit=on_submit>
                    <Field label="Name" value=name/>
                    <Field label="Party" value=party/>
                    <Field label="Age" value=age input_type="number"/>
                    <div class="actions">
                        <A href=View::CandidateList.pattern()>"Cancel"</A>
                        <button type="submit">"Update Candidate"</button>
                    </div>
                </form>
            </Show>
        </section>
    }
}
