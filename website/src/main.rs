// Limiinal website, Leptos 0.8 edition
// The Limiinal Team (c)2024

use leptos::prelude::*;
use limiinal_website::{App, logging, site};

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    tracing::info!("{} website v{}", site::PRODUCT_NAME, env!("CARGO_PKG_VERSION"));
    leptos::mount::mount_to_body(|| view! { <App/> });
}
