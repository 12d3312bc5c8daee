// ============================================================================
// TUTOR DASHBOARD - Lesson state core (Rust + WebAssembly)
// ============================================================================
// - Models: lessons, tutor, filters (shared with the backend)
// - Services: data sources (mock, HTTP)
// - State: Rc<RefCell> state + change notifications
// - ViewModels: actions and derived lists for the UI
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
pub mod app;

pub use error::{DashboardError, Result};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if config::CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 Tutor Dashboard ({})", config::CONFIG.environment);

    Ok(())
}
