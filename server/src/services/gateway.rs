//! Auth API gateway: relays auth submissions to the external backend.
//!
//! ERROR HANDLING
//! ==============
//! The backend is the only authority on credentials. Its body is returned
//! unchanged on 2xx; anything else becomes a [`RemoteAuthError`] carrying the
//! backend's status and `message`. Transport failures map to status 500. No
//! retries and no timeout beyond reqwest's defaults.

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

pub const GENERIC_FAILURE_MESSAGE: &str = "Authentication request failed";
pub const NETWORK_FAILURE_MESSAGE: &str = "Unable to reach the authentication service";

/// Backend auth operations the gateway forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Signup,
    VerifyEmail,
}

impl AuthAction {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/api/auth/login",
            Self::Signup => "/api/auth/signup",
            Self::VerifyEmail => "/api/auth/verify-email",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} (status {status})")]
pub struct RemoteAuthError {
    pub status: StatusCode,
    pub message: String,
}

impl RemoteAuthError {
    /// Build from a non-2xx backend response body, preferring its `message`.
    #[must_use]
    pub fn from_body(status: StatusCode, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned))
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_owned());
        Self { status, message }
    }

    #[must_use]
    pub fn network() -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: NETWORK_FAILURE_MESSAGE.to_owned() }
    }
}

#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// HTTP client bound to the backend base URL.
#[derive(Debug, Clone)]
pub struct AuthGateway {
    client: reqwest::Client,
    base_url: String,
}

impl AuthGateway {
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self { client, base_url: base_url.trim_end_matches('/').to_owned() }
    }

    /// # Errors
    ///
    /// Returns a [`RemoteAuthError`] when the backend rejects or cannot be reached.
    pub async fn login(&self, email: &str, password: &str) -> Result<Value, RemoteAuthError> {
        self.forward(AuthAction::Login, &Credentials { email, password }).await
    }

    /// # Errors
    ///
    /// Returns a [`RemoteAuthError`] when the backend rejects or cannot be reached.
    pub async fn signup(&self, email: &str, password: &str) -> Result<Value, RemoteAuthError> {
        self.forward(AuthAction::Signup, &Credentials { email, password }).await
    }

    /// # Errors
    ///
    /// Returns a [`RemoteAuthError`] when the backend rejects or cannot be reached.
    pub async fn verify_email(&self, payload: &Value) -> Result<Value, RemoteAuthError> {
        self.forward(AuthAction::VerifyEmail, payload).await
    }

    /// POST `payload` to the backend endpoint for `action`.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteAuthError`] when the backend rejects or cannot be reached.
    pub async fn forward<T: Serialize + ?Sized>(&self, action: AuthAction, payload: &T) -> Result<Value, RemoteAuthError> {
        let url = format!("{}{}", self.base_url, action.path());
        let resp = self.client.post(&url).json(payload).send().await.map_err(|e| {
            tracing::warn!(error = %e, ?action, "auth backend unreachable");
            RemoteAuthError::network()
        })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            tracing::warn!(error = %e, ?action, "auth backend response truncated");
            RemoteAuthError::network()
        })?;

        if !status.is_success() {
            let err = RemoteAuthError::from_body(status, &body);
            tracing::info!(status = status.as_u16(), ?action, message = %err.message, "auth backend rejected request");
            return Err(err);
        }

        Ok(relay_body(&body))
    }
}

/// Successful bodies pass through as JSON; non-JSON text is wrapped as a string.
fn relay_body(body: &[u8]) -> Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(body).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

#[cfg(test)]
#[path = "gateway_test.rs"]
mod tests;
