//! # client
//!
//! Leptos + WASM admin dashboard for the bus fleet: vehicles, personnel,
//! assignments, maintenance, fuel logs, devices, dispatch and passenger
//! feedback.
//!
//! Request shapes come from the `records` crate and list filtering from
//! `listing`; this crate owns pages, components, reactive state and the
//! browser transport that executes requests with the stored bearer token.

pub mod app;
pub mod components;
pub mod forms;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
