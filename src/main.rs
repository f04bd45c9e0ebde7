#![allow(warnings)]
//! Feedback Board Frontend Entry Point

mod commands;
mod context;
mod store;
mod components;
mod pages;
mod app;

use app::App;
use feedback_core::Config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = Config::load();
    let level = if cfg!(debug_assertions) { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    if let Err(err) = rolling_logger::init(config.log_capacity, level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", err).into());
    }
    log::info!("[APP] feedback board starting, api={}", config.api_base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
