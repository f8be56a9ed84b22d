//! # modules-ui
//!
//! Leptos + WASM frontend for a module directory: a filterable, sortable
//! listing of registry records plus a per-module detail page.
//!
//! The crate is a view-model layer over two REST endpoints. Records are
//! fetched once into a shared cache; compatibility tags, facets, search,
//! sort, and stats are all derived from that cache and the URL query, so
//! every view is reproducible from a link.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the client to server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
