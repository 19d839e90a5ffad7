//! Grocery List Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod dialogs;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::bundled_config();
    if let Err(err) = console_logger::init(config::log_level(&loaded)) {
        web_sys::console::warn_1(&err.into());
    }
    let config = config::or_default(loaded);

    mount_to_body(move || view! { <App config=config /> });
}
