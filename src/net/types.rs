//! JSON DTOs for the `/api/auth` endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Display identity handed to `login` after a successful authentication.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub username: String,
    /// Avatar URI or path; the server may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UserData {
    pub fn new(username: impl Into<String>) -> Self {
        Self { username: username.into(), avatar: None }
    }

    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

/// Response of `POST /api/auth/token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/reset-password`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// Plain confirmation returned by register and reset-password.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response of `GET /api/auth/check`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckStatusResponse {
    pub is_authenticated: bool,
    #[serde(default)]
    pub user: Option<UserData>,
}

impl CheckStatusResponse {
    /// The confirmed user, or `None` when the server did not vouch for one.
    pub fn into_user(self) -> Option<UserData> {
        if self.is_authenticated { self.user } else { None }
    }
}
