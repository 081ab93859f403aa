use ballotbox_web::app::App;
use ballotbox_web::config::WebConfig;
use ballotbox_web::logging;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = WebConfig::load().expect("bundled configuration should be valid");
    logging::init(&config.log.filter);
    tracing::info!(api = %config.api.base_url, "Starting ballotbox web");

    leptos::mount::mount_to_body(move || view! { <App config=config.clone()/> });
}
