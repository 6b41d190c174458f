pub mod app;
pub mod components;
pub mod core;
pub mod features;
pub mod pages;

use leptos::prelude::*;

use crate::app::App;
use crate::core::BoardConfig;

/// Browser entry point: logging, config, then the board.
pub fn run() {
    console_error_panic_hook::set_once();

    let loaded = BoardConfig::from_document();
    let config = loaded.clone().unwrap_or_default();
    crate::core::logging::init(config.level().unwrap_or(tracing::Level::INFO));
    if let Err(e) = loaded {
        tracing::warn!(error = %e, "falling back to default board config");
    }
    tracing::info!(?config, "starting kanban board");

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
