//! Auth routes: Google OAuth hand-off cookie and backend auth relays.
//!
//! The browser keeps its token in local storage. The cookie set here only
//! carries the token across the OAuth redirect hop; `/auth/success` adopts it
//! through `session_token`, which expires the cookie in the same response.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use serde_json::{Value, json};
use time::Duration;

use crate::services::gateway::RemoteAuthError;
use crate::state::AppState;

pub const COOKIE_NAME: &str = "token";
pub const MISSING_TOKEN_MESSAGE: &str = "Authentication failed: missing token";
const OAUTH_SUCCESS_PATH: &str = "/auth/success";

fn token_cookie(value: String, secure: bool, max_age: Duration) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

fn expired_token_cookie(secure: bool) -> Cookie<'static> {
    token_cookie(String::new(), secure, Duration::ZERO)
}

impl IntoResponse for RemoteAuthError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "message": self.message }))).into_response()
    }
}

// =============================================================================
// OAUTH
// =============================================================================

/// `GET /auth/google`: hand the browser to the backend's Google entry point.
pub async fn google_redirect(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(&format!("{}/api/auth/google", state.config.backend_url))
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    token: Option<String>,
}

/// `GET /api/auth/google/callback?token=…`: stash the token and continue to
/// the success page. A missing or blank token is a 400 with no cookie.
pub async fn google_callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<CallbackQuery>,
) -> Response {
    let Some(token) = params.token.filter(|t| !t.trim().is_empty()) else {
        tracing::warn!("oauth callback without token");
        return (StatusCode::BAD_REQUEST, MISSING_TOKEN_MESSAGE).into_response();
    };

    let max_age = Duration::seconds(state.config.session_cookie_max_age_secs);
    let jar = jar.add(token_cookie(token, state.config.cookie_secure, max_age));
    tracing::info!("oauth callback accepted");
    (jar, Redirect::temporary(OAUTH_SUCCESS_PATH)).into_response()
}

/// `GET /api/auth/session-token`: move the hand-off token into the page.
pub async fn session_token(State(state): State<AppState>, jar: CookieJar) -> Response {
    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default().to_owned();
    if token.is_empty() {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let jar = jar.add(expired_token_cookie(state.config.cookie_secure));
    (jar, Json(json!({ "token": token }))).into_response()
}

/// `POST /api/auth/logout`: clear any lingering hand-off cookie.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let jar = CookieJar::new().add(expired_token_cookie(state.config.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

// =============================================================================
// BACKEND RELAYS
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct CredentialsBody {
    email: String,
    password: String,
}

/// `POST /api/auth/login`
///
/// # Errors
///
/// Relays the backend's rejection status and message.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<CredentialsBody>,
) -> Result<Json<Value>, RemoteAuthError> {
    state.gateway.login(&body.email, &body.password).await.map(Json)
}

/// `POST /api/auth/signup`
///
/// # Errors
///
/// Relays the backend's rejection status and message.
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<CredentialsBody>,
) -> Result<Json<Value>, RemoteAuthError> {
    state.gateway.signup(&body.email, &body.password).await.map(Json)
}

/// `POST /api/auth/verify-email`: payload is forwarded untouched.
///
/// # Errors
///
/// Relays the backend's rejection status and message.
pub async fn verify_email(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, RemoteAuthError> {
    state.gateway.verify_email(&body).await.map(Json)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
