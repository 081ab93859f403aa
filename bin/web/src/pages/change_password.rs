use ballotbox_api::PasswordChangeForm;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Feedback, Field};
use crate::context::{error_message, use_client};

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let client = use_client();
    let current = RwSignal::new(String::new());
    let new = RwSignal::new(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (success, set_success) = signal(Option::<String>::None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = PasswordChangeForm {
            current_password: current.get(),
            new_password: new.get(),
        };
        let api = client.get_value();

        set_error.set(None);
        set_success.set(None);
        spawn_local(async move {
            match api.change_password(&form).await {
                Ok(message) => {
                    set_success.set(Some(message));
                    current.set(String::new());
                    new.set(String::new());
                }
                Err(report) => set_error.set(error_message(&report)),
            }
        });
    };

    view! {
        <section class="change-password-page">
            <h1>"Change Password"</h1>
            <Feedback error=error success=success/>
            <form class="form" on:submit=on_submit>
                <Field label="Current Password" value=current input_type="password"/>
                <Field label="New Password" value=new input_type="password"/>
                <button type="submit">"Update Password"</button>
            </form>
        </section>
    }
}
