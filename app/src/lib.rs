//! # app
//!
//! Leptos + WASM frontend for MirrorLingo, the personal Spanish learning
//! coach.
//!
//! This crate contains the shell, pages, components, client session state,
//! and browser storage utilities. It is built twice: natively with the
//! `ssr` feature for the server-rendered pass, and for `wasm32` with the
//! `hydrate` feature for the browser bundle. Everything that needs a real
//! browser (storage, the wall clock, the analysis delay timer) is gated on
//! `hydrate` with inert native fallbacks, so the server build never links
//! browser APIs.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Maximum console verbosity for a build profile.
///
/// Debug builds keep the full `log` stream; release builds keep warnings
/// and errors only, so routine diagnostics never reach production
/// consoles.
#[must_use]
pub fn console_log_level(debug_build: bool) -> log::Level {
    if debug_build {
        log::Level::Debug
    } else {
        log::Level::Warn
    }
}

// WASM hydration entry point
#[cfg(feature = "hydrate")]
mod hydrate {
    use wasm_bindgen::prelude::wasm_bindgen;

    #[wasm_bindgen(start)]
    pub fn hydrate() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(crate::console_log_level(cfg!(debug_assertions)));
        leptos::mount::hydrate_body(crate::app::App);
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
