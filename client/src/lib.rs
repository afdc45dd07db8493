//! # client
//!
//! Leptos + WASM front end for the fleet dashboard: login, the admin
//! dashboard (vehicles, users, trips, inspections, service) and the
//! employee dashboard (assigned vehicle, own trips).
//!
//! Domain state lives in the `records` crate; this crate wires it to
//! signals, HTTP and the DOM.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
