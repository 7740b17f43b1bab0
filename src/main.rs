//! Kanban Board Frontend Entry Point

mod config;
mod logging;
mod format;
mod context;
mod store;
mod components;
mod app;

use app::App;
use kanban_core::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, rejected) = match config::load() {
        Ok(config) => (config, None),
        Err(e) => (BoardConfig::default(), Some(e)),
    };
    logging::init(config.level_filter().unwrap_or(log::LevelFilter::Info));
    if let Some(e) = rejected {
        log::warn!("ignoring stored config: {}", e);
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
