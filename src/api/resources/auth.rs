//! Session operations: login, logout, auth check and password reset.
//!
//! The backend keeps the session in a cookie, so these calls rely on the
//! gateway's default `CredentialsPolicy::Include`.

use serde_json::Value;
use tracing::info;

use crate::api::{
    RecruitingClient,
    error::ApiError,
    http::HttpMethod,
    models::{LoginRequest, PasswordReset},
};

impl RecruitingClient {
    /// Opens a session. On success the backend sets the session cookie, which
    /// later credentialed calls send back automatically.
    ///
    /// # Errors
    /// * `Http` - 401 for bad credentials, 400 when either field is empty
    pub async fn login(&self, email: &str, password: &str) -> Result<Value, ApiError> {
        info!(%email, "logging in to recruiting backend");
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.call_with("/login", HttpMethod::Post, &body).await
    }

    pub async fn logout(&self) -> Result<Value, ApiError> {
        self.call("/logout", HttpMethod::Post).await
    }

    /// Returns `{"authenticated": bool, "user"?: {...}}`.
    pub async fn check_auth(&self) -> Result<Value, ApiError> {
        self.call("/check-auth", HttpMethod::Get).await
    }

    pub async fn reset_password(&self, email: &str, new_password: &str) -> Result<Value, ApiError> {
        let body = PasswordReset {
            email: email.to_string(),
            new_password: new_password.to_string(),
        };
        self.call_with("/reset-password", HttpMethod::Post, &body).await
    }
}
