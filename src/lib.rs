// ============================================================================
// LEARNIFY WEB - Yew/WASM client for the Learnify learning platform
// ============================================================================
// - Components / Views: Yew function components
// - Hooks: application context, session, cached timetable
// - ViewModels: pure navigation and timetable logic
// - Services: REST client and realtime connection manager
// - Stores / State: persisted session, UI state machines, notifications
// - Models: shapes shared with the backend
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;
pub mod views;

use crate::config::CONFIG;

/// Installs the panic hook and logger, then mounts the root component
pub fn run() {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 Learnify starting (API {})", CONFIG.api_url);

    yew::Renderer::<components::App>::new().render();
}
