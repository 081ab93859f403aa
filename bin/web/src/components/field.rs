//! Form building blocks.

use leptos::prelude::*;

/// A labelled input bound to a string signal.
#[component]
pub fn Field(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span>{label}</span>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Inline error and success messages.
#[component]
pub fn Feedback(
    error: ReadSignal<Option<String>>,
    #[prop(optional)] success: Option<ReadSignal<Option<String>>>,
) -> impl IntoView {
    view! {
        {move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}
        {move || {
            success
                .and_then(|success| success.get())
                .map(|msg| view! { <p class="success">{msg}</p> })
        }}
    }
}
