//! Unverified JWT claim decoding.
//!
//! The signature segment is never checked. Decoded claims only drive what the
//! UI shows and where it navigates; the backend re-validates the token on
//! every request it receives.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::{Map, Value};

/// Reasons a token could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("expected 3 token segments, found {0}")]
    SegmentCount(usize),
    #[error("payload is not valid base64url")]
    Base64,
    #[error("payload is not valid JSON: {0}")]
    Json(String),
    #[error("payload is not a JSON object")]
    NotAnObject,
}

/// Roles the backend encodes in the `role` claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Customer,
    Delivery,
    Seller,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Delivery => "delivery",
            Self::Seller => "seller",
        }
    }
}

/// Claims read from a token payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Claims {
    /// Expiry as Unix seconds, when the payload carries a numeric `exp`.
    pub expires_at: Option<i64>,
    /// True only when `isAdmin` is the JSON literal `true`.
    pub is_admin: bool,
    pub role: Option<String>,
    pub user_id: Option<String>,
    pub raw: Map<String, Value>,
}

impl Claims {
    /// `true` once `now` has reached the expiry. Tokens without `exp` never expire here.
    #[must_use]
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|exp| now >= exp)
    }

    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.role.as_deref() == Some(role.as_str())
    }

    fn from_payload(raw: Map<String, Value>) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let expires_at = raw.get("exp").and_then(|v| {
            v.as_i64()
                .or_else(|| v.as_f64().filter(|f| f.is_finite()).map(|f| f.floor() as i64))
        });
        let is_admin = raw.get("isAdmin") == Some(&Value::Bool(true));
        let role = raw
            .get("role")
            .and_then(Value::as_str)
            .map(str::to_owned);
        let user_id = ["id", "userId", "sub"]
            .iter()
            .find_map(|key| match raw.get(*key)? {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            });
        Self { expires_at, is_admin, role, user_id, raw }
    }
}

/// Decode the payload segment of `token`.
///
/// # Errors
///
/// Returns a [`DecodeError`] when the token is not three dot-separated
/// segments or its payload is not a base64url-encoded JSON object.
pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    if segments.len() != 3 {
        return Err(DecodeError::SegmentCount(segments.len()));
    }
    let bytes = URL_SAFE_NO_PAD
        .decode(segments[1].trim_end_matches('='))
        .map_err(|_| DecodeError::Base64)?;
    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(map)) => Ok(Claims::from_payload(map)),
        Ok(_) => Err(DecodeError::NotAnObject),
        Err(e) => Err(DecodeError::Json(e.to_string())),
    }
}

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;
