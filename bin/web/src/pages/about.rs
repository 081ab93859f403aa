use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about-page">
            <h1>"About"</h1>
            <p>
                "Voters register with their Aadhar number and vote once for a candidate. "
                "Administrators maintain the candidate list and follow the count."
            </p>
            <h2>"How it works"</h2>
            <ol>
                <li>"Sign up with your details."</li>
                <li>"Log in and review your profile."</li>
                <li>"Pick a candidate and cast your vote."</li>
            </ol>
        </section>
    }
}
