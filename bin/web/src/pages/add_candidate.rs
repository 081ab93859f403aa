use ballotbox_api::CandidateForm;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Feedback, Field};
use crate::context::{error_message, use_client};

#[component]
pub fn AddCandidatePage() -> impl IntoView {
    let client = use_client();
    let name = RwSignal::new(String::new());
    let party = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (success, set_success) = signal(Option::<String>::None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = CandidateForm {
            name: name.get(),
            party: party.get(),
            age: age.get(),
        };
        let api = client.get_value();

        set_error.set(None);
        set_success.set(None);
        spawn_local(async move {
            match api.add_candidate(&form).await {
                Ok(message) => {
                    set_success.set(Some(message));
                    name.set(String::new());
                    party.set(String::new());
                    age.set(String::new());
                }
                Err(report) => set_error.set(error_message(&report)),
            }
        });
    };

    view! {
        <section class="add-candidate-page">
            <h1>"Add Candidate"</h1>
            <Feedback error=error success=success/>
            <form class="form" on:submit=on_submit>
                <Field label="Name" value=name placeholder="Candidate Name"/>
                <Field label="Party" value=party placeholder="Party Name"/>
                <Field label="Age" value=age input_type="number"/>
                <button type="submit">"Add Candidate"</button>
            </form>
        </section>
    }
}
