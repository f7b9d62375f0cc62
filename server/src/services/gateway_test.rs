use super::*;

use axum::Json;
use axum::Router;
use axum::http::StatusCode as AxumStatus;
use axum::routing::post;
use serde_json::json;

/// Serve `router` on an ephemeral port and return its base URL.
async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

fn gateway(base: &str) -> AuthGateway {
    AuthGateway::new(reqwest::Client::new(), base)
}

// =============================================================================
// RemoteAuthError
// =============================================================================

#[test]
fn from_body_prefers_backend_message() {
    let err = RemoteAuthError::from_body(StatusCode::UNAUTHORIZED, br#"{"message":"Invalid credentials"}"#);
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert_eq!(err.message, "Invalid credentials");
}

#[test]
fn from_body_falls_back_on_non_json() {
    let err = RemoteAuthError::from_body(StatusCode::BAD_GATEWAY, b"<html>oops</html>");
    assert_eq!(err.message, GENERIC_FAILURE_MESSAGE);
}

#[test]
fn from_body_falls_back_on_blank_message() {
    let err = RemoteAuthError::from_body(StatusCode::BAD_REQUEST, br#"{"message":"  "}"#);
    assert_eq!(err.message, GENERIC_FAILURE_MESSAGE);
}

#[test]
fn network_error_is_500() {
    let err = RemoteAuthError::network();
    assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.message, NETWORK_FAILURE_MESSAGE);
}

#[test]
fn relay_body_handles_empty_and_text() {
    assert_eq!(relay_body(b""), Value::Null);
    assert_eq!(relay_body(b"  \n"), Value::Null);
    assert_eq!(relay_body(b"ok"), Value::String("ok".into()));
    assert_eq!(relay_body(br#"{"token":"t"}"#), json!({"token": "t"}));
}

#[test]
fn new_trims_trailing_slash() {
    let gw = gateway("http://backend.test/");
    assert_eq!(gw.base_url, "http://backend.test");
}

// =============================================================================
// forwarding against a live mock backend
// =============================================================================

#[tokio::test]
async fn login_relays_success_body() {
    let router = Router::new().route(
        "/api/auth/login",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["email"], "a@b.com");
            assert_eq!(body["password"], "secret1");
            Json(json!({"token": "abc.def.ghi", "message": "Welcome"}))
        }),
    );
    let base = spawn_backend(router).await;

    let body = gateway(&base).login("a@b.com", "secret1").await.expect("login ok");
    assert_eq!(body["token"], "abc.def.ghi");
    assert_eq!(body["message"], "Welcome");
}

#[tokio::test]
async fn login_rejection_carries_status_and_message() {
    let router = Router::new().route(
        "/api/auth/login",
        post(|| async { (AxumStatus::UNAUTHORIZED, Json(json!({"message": "Invalid credentials"}))) }),
    );
    let base = spawn_backend(router).await;

    let err = gateway(&base).login("a@b.com", "wrong").await.expect_err("should reject");
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert_eq!(err.message, "Invalid credentials");
}

#[tokio::test]
async fn signup_rejection_without_message_uses_generic() {
    let router = Router::new().route("/api/auth/signup", post(|| async { AxumStatus::CONFLICT }));
    let base = spawn_backend(router).await;

    let err = gateway(&base).signup("a@b.com", "secret1").await.expect_err("should reject");
    assert_eq!(err.status, StatusCode::CONFLICT);
    assert_eq!(err.message, GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn verify_email_forwards_payload_verbatim() {
    let router = Router::new().route(
        "/api/auth/verify-email",
        post(|Json(body): Json<Value>| async move { Json(json!({"echo": body})) }),
    );
    let base = spawn_backend(router).await;

    let payload = json!({"email": "a@b.com", "code": "123456"});
    let body = gateway(&base).verify_email(&payload).await.expect("verify ok");
    assert_eq!(body["echo"], payload);
}

#[tokio::test]
async fn unreachable_backend_maps_to_500() {
    // Bind then drop so the port is closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let err = gateway(&format!("http://{addr}")).login("a@b.com", "secret1").await.expect_err("should fail");
    assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.message, NETWORK_FAILURE_MESSAGE);
}
