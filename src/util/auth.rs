//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded route components should apply identical unauthenticated redirect
//! behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::routes::{LANDING_PATH, requires_auth};
use crate::state::auth::AuthState;
use crate::util::navigate::Navigator;

/// Whether a visitor on `path` must be sent to the landing page.
///
/// Waits while a persisted token is being restored so a reload on a guarded
/// page does not bounce a signed-in user.
pub fn should_redirect_unauth(state: &AuthState, path: &str) -> bool {
    requires_auth(path) && !state.restoring && !state.is_authenticated
}

/// Redirect to the landing page whenever `path` is guarded and nobody is
/// signed in.
pub fn install_unauth_redirect<N>(auth: RwSignal<AuthState>, path: &'static str, navigator: N)
where
    N: Navigator + 'static,
{
    Effect::new(move || {
        if auth.with(|state| should_redirect_unauth(state, path)) {
            navigator.navigate_to(LANDING_PATH);
        }
    });
}
