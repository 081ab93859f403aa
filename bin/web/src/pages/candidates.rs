//! Admin candidate list with search, update and delete.

use ballotbox_api::roster::{distinct_parties, search};
use ballotbox_api::Candidate;
use ballotbox_core::CandidateId;
use ballotbox_navigation::View;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::components::Feedback;
use crate::context::{error_message, use_client};

#[component]
pub fn CandidateListPage() -> impl IntoView {
    let client = use_client();
    let candidates = RwSignal::new(Vec::<Candidate>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let term = RwSignal::new(String::new());

    let api = client.get_value();
    spawn_local(async move {
        match api.list_candidates().await {
            Ok(list) => candidates.set(list),
            Err(report) => set_error.set(error_message(&report)),
        }
        set_loading.set(false);
    });

    let on_delete = move |id: CandidateId| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("Are you sure you want to delete this candidate?")
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let api = client.get_value();
        spawn_local(async move {
            match api.delete_candidate(&id).await {
                Ok(()) => candidates.update(|list| list.retain(|c| c.id != id)),
                Err(report) => set_error.set(error_message(&report)),
            }
        });
    };

    let filtered = move || {
        candidates.with(|list| {
            search(list, &term.get())
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="candidates-page">
            <h1>"Candidates"</h1>
            <div class="stats">
                <div class="stat">
                    <h3>"Total Candidates"</h3>
                    <p>{move || candidates.with(Vec::len)}</p>
                </div>
                <div class="stat">
                    <h3>"Parties"</h3>
                    <p>{move || candidates.with(|list| distinct_parties(list))}</p>
                </div>
            </div>
            <input
                type="search"
                placeholder="Search candidates..."
                prop:value=move || term.get()
                on:input=move |ev| term.set(event_target_value(&ev))
            />
            <Feedback error=error/>
            {move || {
                if loading.get() {
                    return view! { <p>"Loading candidates..."</p> }.into_any();
                }
                let rows = filtered();
                if rows.is_empty() {
                    return view! { <p>"No candidates found."</p> }.into_any();
                }
                view! {
                    <table>
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Party"</th>
                                <th>"Age"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|candidate| {
                                    let id = candidate.id.clone();
                                    view! {
                                        <tr>
                                            <td>{candidate.name}</td>
                                            <td>{candidate.party}</td>
                                            <td>{candidate.age.map(|a| a.to_string()).unwrap_or_default()}</td>
                                            <td>
                                                <A href=View::update_candidate_path(&candidate.id)>"Update"</A>
                                                <button on:click=move |_| on_delete(id.clone())>"Delete"</button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </section>
    }
}
