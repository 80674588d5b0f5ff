//! # feed-client
//!
//! Leptos + WASM frontend for the feed application: login and register
//! screens, the protected feed route, and the session/error state shared
//! between them.
//!
//! ARCHITECTURE
//! ============
//! `state` owns the two client stores (session, errors), `net` speaks to the
//! auth API over HTTP, `util::guard` holds the pure route-guard decision, and
//! `components::require_auth` applies it reactively around protected pages.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point invoked from the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
