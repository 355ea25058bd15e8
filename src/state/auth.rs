//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. The token itself lives only in the
//! [`TokenStore`]; memory holds the flags and display identity.
//!
//! DESIGN
//! ======
//! One `RwSignal<AuthState>` is created by [`provide_auth_state`] and shared via
//! context, so every [`AuthSession`] built with [`use_auth`] observes and
//! mutates the same state. All fields change in a single `set`, so readers
//! never see `is_authenticated` paired with a stale `username`.
//!
//! TRADE-OFFS
//! ==========
//! A failed store write or delete is logged and returned, but the in-memory
//! transition still happens. Memory and storage can diverge in that case;
//! surfacing the error is left to the caller.
//!
//! A restore whose server check resolves after the user already logged in or
//! out is dropped: `login`/`logout` clear `restoring`, and `resume` only acts
//! while it is still set.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{ApiError, check_login_status};
use crate::net::types::UserData;
use crate::routes::LANDING_PATH;
use crate::util::navigate::Navigator;
use crate::util::storage::{AUTH_TOKEN_KEY, LocalStorageStore, StorageError, TokenStore};

/// Authentication flags and display identity of the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub username: String,
    pub user_avatar: String,
    /// A persisted token is being re-validated with the server.
    pub restoring: bool,
}

impl AuthState {
    fn authenticated(user: UserData) -> Self {
        Self {
            is_authenticated: true,
            username: user.username,
            user_avatar: user.avatar.unwrap_or_default(),
            restoring: false,
        }
    }
}

/// Session state manager: login/logout over a shared [`AuthState`] signal.
#[derive(Clone)]
pub struct AuthSession<S, N> {
    state: RwSignal<AuthState>,
    store: S,
    navigator: N,
}

impl<S, N> AuthSession<S, N>
where
    S: TokenStore,
    N: Navigator,
{
    pub fn new(state: RwSignal<AuthState>, store: S, navigator: N) -> Self {
        Self { state, store, navigator }
    }

    /// The reactive state, for bindings in views and effects.
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_authenticated)
    }

    pub fn username(&self) -> String {
        self.state.with(|s| s.username.clone())
    }

    pub fn user_avatar(&self) -> String {
        self.state.with(|s| s.user_avatar.clone())
    }

    /// Current state without subscribing the caller.
    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    /// Persist `token` and mark `user` as signed in.
    ///
    /// `token` and `user.username` must be non-empty; validate the server
    /// response before calling.
    ///
    /// # Errors
    ///
    /// Returns the store error if the token could not be persisted. The
    /// in-memory state is authenticated regardless.
    pub fn login(&self, token: &str, user: UserData) -> Result<(), StorageError> {
        debug_assert!(!token.is_empty(), "login requires a token");
        debug_assert!(!user.username.is_empty(), "login requires a username");

        let persisted = self.store.set(AUTH_TOKEN_KEY, token);
        if let Err(e) = &persisted {
            leptos::logging::warn!("auth token not persisted: {e}");
        }
        leptos::logging::log!("login: user={}", user.username);
        self.state.set(AuthState::authenticated(user));
        persisted
    }

    /// Drop the persisted token, clear the session and go to the landing page.
    ///
    /// Safe to call when already signed out; navigation is still requested.
    ///
    /// # Errors
    ///
    /// Returns the store error if the token could not be removed. State is
    /// cleared and navigation requested regardless.
    pub fn logout(&self) -> Result<(), StorageError> {
        let removed = self.store.remove(AUTH_TOKEN_KEY);
        if let Err(e) = &removed {
            leptos::logging::warn!("auth token not removed: {e}");
        }
        self.state.set(AuthState::default());
        leptos::logging::log!("logout: redirecting to {LANDING_PATH}");
        self.navigator.navigate_to(LANDING_PATH);
        removed
    }

    /// The token left in storage by a previous page load, if readable.
    pub fn persisted_token(&self) -> Option<String> {
        match self.store.get(AUTH_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                leptos::logging::warn!("auth token not readable: {e}");
                None
            }
        }
    }

    /// Finish a restore started by [`restore_session`].
    ///
    /// Does nothing if `restoring` was cleared while the check was in flight,
    /// i.e. the user logged in or out in the meantime. Otherwise a confirmed
    /// user is signed in, an explicit rejection (`Ok(None)`) discards the
    /// token, and a failed check keeps the token for the next load. None of
    /// these navigate.
    ///
    /// # Errors
    ///
    /// Returns the store error from the write or delete.
    pub fn resume(
        &self,
        token: &str,
        outcome: Result<Option<UserData>, ApiError>,
    ) -> Result<(), StorageError> {
        if !self.state.with_untracked(|s| s.restoring) {
            leptos::logging::log!("restore: superseded by login/logout, ignoring check result");
            return Ok(());
        }
        match outcome {
            Ok(Some(user)) => self.login(token, user),
            Ok(None) => {
                leptos::logging::log!("restore: persisted token rejected");
                let removed = self.store.remove(AUTH_TOKEN_KEY);
                self.state.update(|s| s.restoring = false);
                removed
            }
            Err(e) => {
                leptos::logging::warn!("restore: check failed, keeping token: {e}");
                self.state.update(|s| s.restoring = false);
                Ok(())
            }
        }
    }
}

/// Re-validate the persisted token with the server and resume the session.
///
/// A fresh manager is never authenticated on its own; this is the explicit
/// bootstrap step that re-reads storage after a reload.
///
/// # Errors
///
/// Returns the store error from [`AuthSession::resume`].
pub async fn restore_session<S, N>(session: &AuthSession<S, N>) -> Result<(), StorageError>
where
    S: TokenStore,
    N: Navigator,
{
    restore_session_with(session, |token| async move { check_login_status(&token).await }).await
}

/// [`restore_session`] with the server check supplied by the caller.
///
/// # Errors
///
/// Returns the store error from [`AuthSession::resume`].
pub async fn restore_session_with<S, N, F, Fut>(
    session: &AuthSession<S, N>,
    check: F,
) -> Result<(), StorageError>
where
    S: TokenStore,
    N: Navigator,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<Option<UserData>, ApiError>>,
{
    let Some(token) = session.persisted_token() else {
        return Ok(());
    };
    session.state.update(|s| s.restoring = true);
    let outcome = check(token.clone()).await;
    session.resume(&token, outcome)
}

/// Create the app-wide auth state and provide it via context.
///
/// Call once in the root component, before any [`use_auth`].
pub fn provide_auth_state() -> RwSignal<AuthState> {
    let state = RwSignal::new(AuthState::default());
    provide_context(state);
    state
}

/// Session manager bound to the shared context state, browser storage and
/// the router. Must be called under `<Router>` after [`provide_auth_state`].
pub fn use_auth() -> AuthSession<LocalStorageStore, impl Fn(&str, NavigateOptions) + Clone> {
    let state = expect_context::<RwSignal<AuthState>>();
    AuthSession::new(state, LocalStorageStore, use_navigate())
}
