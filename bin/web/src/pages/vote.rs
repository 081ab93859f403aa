//! Candidate list for voters, with one vote per session.

use ballotbox_api::{Candidate, SubmitGate};
use ballotbox_core::CandidateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Feedback;
use crate::context::{error_message, use_client};

/// Vote buttons stay disabled while a vote is in flight and after one has
/// been accepted.
#[component]
pub fn CastVotePage() -> impl IntoView {
    let client = use_client();
    let gate = SubmitGate::new();
    let candidates = RwSignal::new(Vec::<Candidate>::new());
    let (loading, set_loading) = signal(true);
    let (submitting, set_submitting) = signal(false);
    let (voted_for, set_voted_for) = signal(Option::<CandidateId>::None);
    let (message, set_message) = signal(Option::<String>::None);
    let (error, set_error) = signal(Option::<String>::None);

    let api = client.get_value();
    spawn_local(async move {
        match api.ballot().await {
            Ok(list) => candidates.set(list),
            Err(report) => set_error.set(error_message(&report)),
        }
        set_loading.set(false);
    });

    let on_vote = move |id: CandidateId| {
        let api = client.get_value();
        let gate = gate.clone();
        set_submitting.set(true);
        spawn_local(async move {
            let Some(result) = api.cast_vote_once(&gate, &id).await else {
                return;
            };
            match result {
                Ok(text) => {
                    set_error.set(None);
                    set_message.set(Some(text));
                    set_voted_for.set(Some(id));
                }
                Err(report) => {
                    set_message.set(None);
                    set_error.set(error_message(&report));
                }
            }
            set_submitting.set(false);
        });
    };
    let disabled =
        move || submitting.get() || voted_for.with(Option::is_some) || message.with(Option::is_some);

    view! {
        <section class="vote-page">
            <h1>"Cast Your Vote"</h1>
            <Feedback error=error success=message/>
            {move || {
                if loading.get() {
                    return view! { <p>"Loading candidates..."</p> }.into_any();
                }
                let list = candidates.get();
                if list.is_empty() {
                    return view! { <p>"No candidates available."</p> }.into_any();
                }
                list
                    .into_iter()
                    .map(|candidate| {
                        let id = candidate.id.clone();
                        let chosen = {
                            let id = id.clone();
                            move || voted_for.with(|v| v.as_ref() == Some(&id))
                        };
                        let on_vote = on_vote.clone();
                        view! {
                            <div class="candidate-card" class:chosen=chosen>
                                <h3>{candidate.name}</h3>
                                <p>{candidate.party}</p>
                                <button
                                    disabled=disabled
                                    on:click=move |_| on_vote(id.clone())
                                >
                                    "Vote"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </section>
    }
}
