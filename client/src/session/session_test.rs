use std::sync::Arc;

use super::test_support::token_with;
use super::*;

const NOW: i64 = 1_800_000_000;

fn session_with(token: Option<&str>) -> (Session, MemoryTokenStore) {
    let store = MemoryTokenStore::new();
    if let Some(token) = token {
        store.set(token);
    }
    let session = Session::with_clock(Arc::new(store.clone()), Arc::new(|| NOW));
    (session, store)
}

#[test]
fn no_token_is_not_authenticated() {
    let (session, _) = session_with(None);
    assert!(!session.is_authenticated());
    assert!(!session.is_admin());
    assert!(!session.is_role(Role::Delivery));
}

#[test]
fn live_admin_token_is_authenticated_and_admin() {
    let token = token_with(&serde_json::json!({ "exp": NOW + 3600, "isAdmin": true }));
    let (session, _) = session_with(Some(&token));
    assert!(session.is_authenticated());
    assert!(session.is_admin());
}

#[test]
fn expired_token_is_evicted_on_check() {
    let token = token_with(&serde_json::json!({ "exp": NOW - 1, "isAdmin": true }));
    let (session, store) = session_with(Some(&token));
    assert!(!session.is_authenticated());
    assert_eq!(store.get(), None);
}

#[test]
fn token_expiring_exactly_now_is_expired() {
    let token = token_with(&serde_json::json!({ "exp": NOW }));
    let (session, store) = session_with(Some(&token));
    assert!(!session.is_authenticated());
    assert_eq!(store.get(), None);
}

#[test]
fn token_without_expiry_stays_valid() {
    let token = token_with(&serde_json::json!({ "id": "u1" }));
    let (session, _) = session_with(Some(&token));
    assert!(session.is_authenticated());
    assert!(!session.is_admin());
}

#[test]
fn malformed_tokens_are_unauthenticated_and_kept() {
    for raw in ["", "garbage", "a.b", "a.%%%.c", "a.b.c.d"] {
        let (session, store) = session_with(Some(raw));
        assert!(!session.is_authenticated(), "{raw:?} should not authenticate");
        assert_eq!(store.get().as_deref(), Some(raw));
    }
}

#[test]
fn is_authenticated_is_idempotent() {
    let token = token_with(&serde_json::json!({ "exp": NOW + 10 }));
    let (session, _) = session_with(Some(&token));
    assert_eq!(session.is_authenticated(), session.is_authenticated());

    let (empty, _) = session_with(None);
    assert_eq!(empty.is_authenticated(), empty.is_authenticated());
}

#[test]
fn role_check_compares_role_claim() {
    let token = token_with(&serde_json::json!({ "exp": NOW + 10, "role": "delivery" }));
    let (session, _) = session_with(Some(&token));
    assert!(session.is_role(Role::Delivery));
    assert!(!session.is_role(Role::Seller));
    assert!(!session.is_admin());
}

#[test]
fn role_check_fails_for_expired_role_token() {
    let token = token_with(&serde_json::json!({ "exp": NOW - 10, "role": "delivery" }));
    let (session, _) = session_with(Some(&token));
    assert!(!session.is_role(Role::Delivery));
}

#[test]
fn login_and_logout_drive_the_store() {
    let (session, store) = session_with(None);
    let token = token_with(&serde_json::json!({ "exp": NOW + 60 }));
    session.login(&token);
    assert_eq!(store.get().as_deref(), Some(token.as_str()));
    assert!(session.is_authenticated());

    session.logout();
    assert!(!session.is_authenticated());
    assert_eq!(store.get(), None);
}

#[test]
fn landing_path_follows_role() {
    let cases = [
        (serde_json::json!({ "isAdmin": true, "role": "seller" }), "/admin"),
        (serde_json::json!({ "role": "delivery" }), "/delivery"),
        (serde_json::json!({ "role": "seller" }), "/seller"),
        (serde_json::json!({ "role": "customer" }), "/"),
    ];
    for (payload, expected) in cases {
        let (session, _) = session_with(Some(&token_with(&payload)));
        assert_eq!(session.landing_path(), expected, "payload {payload}");
    }
    let (anonymous, _) = session_with(None);
    assert_eq!(anonymous.landing_path(), "/");
}

#[test]
fn sessions_sharing_a_store_see_each_others_logout() {
    let token = token_with(&serde_json::json!({ "exp": NOW + 60 }));
    let (a, store) = session_with(Some(&token));
    let b = Session::with_clock(Arc::new(store), Arc::new(|| NOW));
    assert!(b.is_authenticated());
    a.logout();
    assert!(!b.is_authenticated());
}
