//! # client
//!
//! Leptos single-page frontend for StoryVision AI. All business rules live in
//! the `storyboard` crate; this crate holds the reactive state containers,
//! the mocked network layer, and the views.
//!
//! The `csr` feature builds the browser bundle. Without it the crate still
//! compiles (and its tests run) on the host, with browser-only helpers
//! reduced to no-ops.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
