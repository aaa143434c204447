//! # recipehub-web
//!
//! Leptos + WASM frontend for the RecipeHub recipe-sharing service.
//!
//! The data backend is third-party: a GraphQL gateway for queries and
//! mutations plus a small REST API for uploads. This crate contains the
//! pages, components, application state, and the network layer that talks
//! to both.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
