//! # hbm-client
//!
//! Leptos client-side session layer for the HBM web app.
//!
//! This crate holds the browser user's authentication state, keeps it in sync
//! with the token persisted in `localStorage`, and exposes the route table and
//! guard used to send unauthenticated visitors to the `/auth` landing page.
//! Page components live in the host app and read state through
//! [`state::auth::use_auth`].

pub mod net;
pub mod routes;
pub mod state;
pub mod util;

/// Install the panic hook and browser console logger.
///
/// Call once from the host app's hydrate entry point before mounting.
#[cfg(feature = "hydrate")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
}
