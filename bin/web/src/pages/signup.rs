//! Voter registration page.

use ballotbox_api::SignupForm;
use ballotbox_navigation::View;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::{Feedback, Field};
use crate::context::{error_message, use_client};

#[component]
pub fn SignupPage() -> impl IntoView {
    let client = use_client();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let mobile = RwSignal::new(String::new());
    let aadhaar = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let (error, set_error) = signal(Option::<String>::None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = SignupForm {
            name: name.get(),
            age: age.get(),
            address: address.get(),
            email: email.get(),
            mobile: mobile.get(),
            aadhar_card_number: aadhaar.get(),
            password: password.get(),
            confirm_password: confirm.get(),
        };
        let api = client.get_value();
        let navigate = navigate.clone();

        set_error.set(None);
        spawn_local(async move {
            match api.register(&form).await {
                Ok(message) => {
                    tracing::debug!(message = %message, "Registration accepted");
                    navigate(View::Login.pattern(), Default::default());
                }
                Err(report) => set_error.set(error_message(&report)),
            }
        });
    };

    view! {
        <section class="signup-page">
            <h1>"Voter Registration"</h1>
            <Feedback error=error/>
            <form class="form" on:submit=on_submit>
                <Field label="Full Name" value=name placeholder="John Doe"/>
                <Field label="Age" value=age input_type="number"/>
                <Field label="Address" value=address placeholder="Enter your complete address"/>
                <Field label="Aadhar Card Number" value=aadhaar placeholder="XXXX XXXX XXXX"/>
                <Field label="Email" value=email input_type="email" placeholder="john@example.com"/>
                <Field label="Mobile" value=mobile input_type="tel" placeholder="+91 9876543210"/>
                <Field label="Password" value=password input_type="password"/>
                <Field label="Confirm Password" value=confirm input_type="password"/>
                <button type="submit">"Register Now"</button>
            </form>
            <p>
                "Already have an account? "
                <A href=View::Login.pattern()>"Login here"</A>
            </p>
        </section>
    }
}
