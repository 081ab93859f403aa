//! Login page.

use ballotbox_api::LoginForm;
use ballotbox_navigation::View;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::{Feedback, Field};
use crate::context::{error_message, use_client, use_session};

/// Logs in and lands on the dashboard for the returned role.
#[component]
pub fn LoginPage() -> impl IntoView {
    let client = use_client();
    let session = use_session();
    let navigate = use_navigate();

    let aadhaar = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (success, set_success) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            aadhar_card_number: aadhaar.get(),
            password: password.get(),
        };
        let api = client.get_value();
        let session = session.clone();
        let navigate = navigate.clone();

        set_error.set(None);
        set_success.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            match api.login(&form).await {
                Ok(outcome) => {
                    set_success.set(Some("Login successful!".to_string()));
                    session.touch();
                    if let Some(path) = outcome.landing.path() {
                        navigate(path, Default::default());
                    }
                }
                Err(report) => set_error.set(error_message(&report)),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="login-page">
            <h1>"Secure Login"</h1>
            <Feedback error=error success=success/>
            <form class="form" on:submit=on_submit>
                <Field label="Aadhar Number" value=aadhaar placeholder="Enter 12-digit Aadhar"/>
                <Field label="Password" value=password input_type="password" placeholder="Enter Password"/>
                <button type="submit" disabled=move || submitting.get()>"Sign In"</button>
            </form>
            <p>
                "Don't have an account? "
                <A href=View::Signup.pattern()>"Sign up"</A>
            </p>
        </section>
    }
}
