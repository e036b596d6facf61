//! Taskboard Frontend Entry Point

mod api;
mod app;
mod board;
mod cache;
mod components;
mod config;
mod context;
mod forms;
mod models;
mod mutation;
mod notify;
mod overlay;
mod policies;
mod query;
mod router;
mod routes;
mod store;
mod sync;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ClientConfig::from_env();
    if let Err(e) = rolling_logger::init(config.log_capacity, tracing::Level::INFO) {
        web_sys::console::warn_1(&format!("logger not installed: {}", e).into());
    }
    tracing::info!(api = %config.api_base_url, "starting taskboard");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
