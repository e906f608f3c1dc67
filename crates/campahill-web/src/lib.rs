//! CampaHill Weddings Web Frontend
//!
//! Leptos-based WASM single-page site.

mod app;
mod components;
mod dom;
mod logging;
mod pages;
mod sections;

pub use app::App;

use campahill_core::SiteConfig;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match dom::load_config() {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };

    logging::init(&config.log_filter);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "ignoring site config, using defaults");
    }

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
