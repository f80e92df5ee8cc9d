//! Grocery List Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod models;
mod session;
mod state;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use tracing::info;

fn main() {
    console_error_panic_hook::set_once();

    let (config, notices) = AppConfig::load();
    if let Err(e) = console_logger::init(config.log_level, console_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("Logger already initialised: {e}").into());
    }
    for notice in &notices {
        notice.log();
    }
    info!("Grocery list starting against {}", config.api_url);

    mount_to_body(move || view! { <App config=config /> });
}
