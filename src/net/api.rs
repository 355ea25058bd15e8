//! REST API helpers for the `/api/auth` endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Only an explicit `{"is_authenticated": false}` from `/check` counts as a
//! rejected token. Transport failures, non-2xx responses and malformed bodies
//! come back as [`ApiError`] so restore can keep the token for the next load.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::UserData;
use super::types::{PasswordResetRequest, RegisterRequest};
#[cfg(feature = "hydrate")]
use super::types::{CheckStatusResponse, MessageResponse, TokenResponse};

pub const TOKEN_ENDPOINT: &str = "/api/auth/token";
pub const CHECK_ENDPOINT: &str = "/api/auth/check";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";
pub const RESET_PASSWORD_ENDPOINT: &str = "/api/auth/reset-password";

/// Failure of an auth API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("not available on server")]
    Unavailable,
    #[error("request failed: {0}")]
    Request(String),
    #[error("request rejected with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// OAuth2 password-grant form body.
#[cfg(any(test, feature = "hydrate"))]
fn password_form_body(username: &str, password: &str) -> String {
    format!(
        "grant_type=password&username={}&password={}",
        urlencoding::encode(username),
        urlencoding::encode(password)
    )
}

/// Exchange credentials for an access token via `POST /api/auth/token`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] when the server rejects the credentials, and
/// the other variants for transport or decoding failures.
pub async fn request_token(username: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(TOKEN_ENDPOINT)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(password_form_body(username, password))
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: TokenResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.access_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(ApiError::Unavailable)
    }
}

/// Ask `GET /api/auth/check` who owns `token`.
///
/// `Ok(None)` means the server answered and does not recognize the token.
///
/// # Errors
///
/// Returns [`ApiError`] when no usable answer arrived: transport failure,
/// non-2xx status, malformed body, or outside the browser.
pub async fn check_login_status(token: &str) -> Result<Option<UserData>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CHECK_ENDPOINT)
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: CheckStatusResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.into_user())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/auth/register`. Returns the server's
/// confirmation message.
///
/// # Errors
///
/// Returns [`ApiError::Status`] when the username or email is taken (400) or
/// the server fails, and the other variants for transport or decoding failures.
pub async fn register(username: &str, email: &str, password: &str) -> Result<String, ApiError> {
    let request = RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    };
    #[cfg(feature = "hydrate")]
    {
        post_json_for_message(REGISTER_ENDPOINT, &request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Ask `POST /api/auth/reset-password` to send a reset link to `email`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for an unknown email (404) or an empty one
/// (400), and the other variants for transport or decoding failures.
pub async fn request_password_reset(email: &str) -> Result<String, ApiError> {
    let request = PasswordResetRequest { email: email.to_owned() };
    #[cfg(feature = "hydrate")]
    {
        post_json_for_message(RESET_PASSWORD_ENDPOINT, &request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn post_json_for_message<T: serde::Serialize>(url: &str, body: &T) -> Result<String, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    let body: MessageResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(body.message)
}
