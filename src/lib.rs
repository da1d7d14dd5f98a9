//! # recipe-client
//!
//! Leptos + WASM frontend for the Recipe Chat App. Renders the interactive
//! recipe screens (generate form, generated-recipe preview, saved-recipe
//! detail, and cook mode) against markup-borne configuration emitted by the
//! page-rendering server.
//!
//! This crate contains pages, components, UI state, typed page
//! configuration, and the localStorage progress helpers. State and config
//! parsing are browser-free so the test suite runs natively with no
//! features enabled; everything that touches `web-sys` lives behind the
//! `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod types;
pub mod util;

/// WASM entry point. Installs the panic hook, wires console logging, and
/// mounts [`app::App`] into the host document's body.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
