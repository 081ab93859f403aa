//! Shared layout: public navigation bar or per-role sidebar.

use ballotbox_navigation::{Chrome, NavLink};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::{use_client, use_session};

/// Wraps page content in the chrome chosen for the current session.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let session = use_session();
    let chrome = Memo::new(move |_| Chrome::for_session(&session.snapshot()));

    view! {
        {move || match chrome.get() {
            Chrome::PublicNavbar => view! { <PublicNavbar/> }.into_any(),
            sidebar => view! { <Sidebar chrome=sidebar/> }.into_any(),
        }}
        <main class="content">{children()}</main>
    }
}

fn links(chrome: Chrome) -> impl IntoView {
    chrome
        .links()
        .iter()
        .map(|link: &NavLink| view! { <A href=link.href()>{link.label}</A> })
        .collect_view()
}

#[component]
fn PublicNavbar() -> impl IntoView {
    view! {
        <header class="navbar">
            <span class="logo">{Chrome::PublicNavbar.title()}</span>
            <nav>{links(Chrome::PublicNavbar)}</nav>
        </header>
    }
}

#[component]
fn Sidebar(chrome: Chrome) -> impl IntoView {
    let client = use_client();
    let on_logout = move |_| client.with_value(|client| client.logout());

    view! {
        <aside class="sidebar">
            <h2>{chrome.title()}</h2>
            <nav>{links(chrome)}</nav>
            {chrome
                .has_logout()
                .then(|| view! { <button class="logout" on:click=on_logout>"Logout"</button> })}
        </aside>
    }
}
