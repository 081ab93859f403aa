//! Vote count per party.

use ballotbox_api::VoteTally;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Feedback;
use crate::context::{error_message, use_client};

#[component]
pub fn VoteResultsPage() -> impl IntoView {
    let client = use_client();
    let (tally, set_tally) = signal(Option::<VoteTally>::None);
    let (error, set_error) = signal(Option::<String>::None);

    let api = client.get_value();
    spawn_local(async move {
        match api.vote_count().await {
            Ok(loaded) => set_tally.set(Some(loaded)),
            Err(report) => set_error.set(error_message(&report)),
        }
    });

    view! {
        <section class="results-page">
            <h1>"Election Results"</h1>
            <Feedback error=error/>
            {move || {
                tally.get().map(|tally| {
                    if tally.is_empty() {
                        return view! { <p>"No votes have been recorded yet."</p> }.into_any();
                    }
                    let download = format!(
                        "data:text/csv;charset=utf-8,{}",
                        String::from(js_sys::encode_uri_component(&tally.to_csv()))
                    );
                    let leader = tally
                        .leader()
                        .map(|p| format!("Leading: {} ({} votes)", p.party, p.count));
                    view! {
                        <p>{format!("Total votes: {}", tally.total())}</p>
                        {leader.map(|text| view! { <p class="leader">{text}</p> })}
                        <ol class="tally">
                            {tally
                                .rows()
                                .into_iter()
                                .map(|row| {
                                    let width = format!("width: {}%", row.percent);
                                    view! {
                                        <li>
                                            <span>{format!("{}. {}", row.rank, row.party)}</span>
                                            <span>{format!("{} votes ({}%)", row.count, row.percent)}</span>
                                            <div class="bar" style=width></div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ol>
                        <a class="download" href=download download="election-results.csv">
                            "Download Results (CSV)"
                        </a>
                    }
                    .into_any()
                })
            }}
        </section>
    }
}
