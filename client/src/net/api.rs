//! Browser side of the auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` to the server's
//! `/api/auth/*` relay, which forwards to the external backend.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes a [`RemoteAuthError`] carrying the status and the
//! backend's message, so forms can show it inline. Nothing retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthResponse, Credentials, ErrorBody, VerifyEmailRequest};
#[cfg(feature = "hydrate")]
use super::types::SessionTokenResponse;

/// Status reported when no HTTP response arrived at all.
pub const NETWORK_FAILURE_STATUS: u16 = 500;
pub const GENERIC_FAILURE_MESSAGE: &str = "Authentication request failed";
pub const NETWORK_FAILURE_MESSAGE: &str = "Unable to reach the authentication service";

/// Rejection or transport failure from the auth API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RemoteAuthError {
    pub status: u16,
    pub message: String,
}

impl RemoteAuthError {
    /// Build from a non-2xx status and its raw body, preferring the body's `message`.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_owned());
        Self { status, message }
    }

    #[must_use]
    pub fn network() -> Self {
        Self { status: NETWORK_FAILURE_STATUS, message: NETWORK_FAILURE_MESSAGE.to_owned() }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_endpoint(action: &str) -> String {
    format!("/api/auth/{action}")
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> RemoteAuthError {
    RemoteAuthError { status: NETWORK_FAILURE_STATUS, message: "not available on server".to_owned() }
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(action: &str, payload: &T) -> Result<AuthResponse, RemoteAuthError> {
    let resp = gloo_net::http::Request::post(&auth_endpoint(action))
        .json(payload)
        .map_err(|e| {
            log::error!("failed to encode {action} request: {e}");
            RemoteAuthError::network()
        })?
        .send()
        .await
        .map_err(|e| {
            log::warn!("{action} request failed: {e}");
            RemoteAuthError::network()
        })?;
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    if !resp.ok() {
        return Err(RemoteAuthError::from_response(status, &body));
    }
    Ok(success_body(&body))
}

/// Interpret a 2xx body. Success never turns into an error: empty, `null`,
/// plain-text or otherwise unexpected bodies read as a response with no token.
#[cfg(any(test, feature = "hydrate"))]
fn success_body(body: &str) -> AuthResponse {
    if body.trim().is_empty() {
        return AuthResponse::default();
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value @ serde_json::Value::Object(_)) => serde_json::from_value(value).unwrap_or_else(|e| {
            log::warn!("unexpected auth response shape: {e}");
            AuthResponse::default()
        }),
        Ok(_) | Err(_) => AuthResponse::default(),
    }
}

/// `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the backend's rejection, or a network failure with status 500.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, RemoteAuthError> {
    let payload = Credentials { email: email.to_owned(), password: password.to_owned() };
    #[cfg(feature = "hydrate")]
    {
        post_json("login", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(unavailable())
    }
}

/// `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns the backend's rejection, or a network failure with status 500.
pub async fn signup(email: &str, password: &str) -> Result<AuthResponse, RemoteAuthError> {
    let payload = Credentials { email: email.to_owned(), password: password.to_owned() };
    #[cfg(feature = "hydrate")]
    {
        post_json("signup", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(unavailable())
    }
}

/// `POST /api/auth/verify-email`.
///
/// # Errors
///
/// Returns the backend's rejection, or a network failure with status 500.
pub async fn verify_email(payload: &VerifyEmailRequest) -> Result<AuthResponse, RemoteAuthError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("verify-email", payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(unavailable())
    }
}

/// Collect the token the OAuth callback parked in the session cookie.
///
/// # Errors
///
/// Returns an error when no OAuth hand-off is pending or the request fails.
pub async fn take_oauth_token() -> Result<String, RemoteAuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&auth_endpoint("session-token"))
            .send()
            .await
            .map_err(|_| RemoteAuthError::network())?;
        let status = resp.status();
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RemoteAuthError::from_response(status, &body));
        }
        let body: SessionTokenResponse = resp
            .json()
            .await
            .map_err(|_| RemoteAuthError::from_response(status, ""))?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Expire the OAuth hand-off cookie via `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(&auth_endpoint("logout")).send().await;
    }
}
