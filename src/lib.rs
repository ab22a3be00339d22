//! # aura-client
//!
//! Leptos + WASM front end for the Aura salon dashboard.
//!
//! The heart of the crate is the authentication core: the session store
//! that knows who is signed in, the mode router that binds the
//! login/register/recover panels to the URL, the auth form state machines,
//! and the route guards that keep protected views behind a session (and a
//! selected salon). Pages and components are thin Leptos views over that
//! state.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
