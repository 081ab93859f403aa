//! Landing page.

use ballotbox_navigation::View;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <h1>"Online Voting"</h1>
            <p>"Register once with your Aadhar number, then cast your vote from anywhere."</p>
            <div class="actions">
                <A href=View::Signup.pattern()>"Register to vote"</A>
                <A href=View::Login.pattern()>"Login"</A>
            </div>
        </section>
    }
}
