//! # signup-client
//!
//! Leptos + WASM sign-up form with client-side validation, submission to a
//! remote endpoint, and a paginated list of the users created this session.
//!
//! State (`state`) and validation (`util::validation`) are plain Rust and
//! unit-tested natively; `components` and `pages` bind them to signals.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and console logger, then mount.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
