//! Wire types for the auth endpoints.
//!
//! These mirror the external backend's JSON. The server relays bodies
//! untouched, so the browser sees exactly what the backend produced.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `POST /api/auth/login` and `/api/auth/signup` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/verify-email` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub code: String,
}

/// Successful auth response. Only `token` and `message` are interpreted;
/// every other field is kept in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Error body relayed for non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /api/auth/session-token` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokenResponse {
    pub token: String,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
