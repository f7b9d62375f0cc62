use std::sync::Arc;

use super::*;
use crate::session::{MemoryTokenStore, TokenStore};
use crate::session::test_support::token_with;

const NOW: i64 = 1_800_000_000;

fn session(payload: Option<serde_json::Value>) -> (Session, MemoryTokenStore) {
    let store = MemoryTokenStore::new();
    if let Some(payload) = payload {
        store.set(&token_with(&payload));
    }
    (Session::with_clock(Arc::new(store.clone()), Arc::new(|| NOW)), store)
}

#[test]
fn no_token_redirects_to_login() {
    let (session, _) = session(None);
    assert_eq!(
        evaluate(&session, &GuardPolicy::authenticated()),
        GuardState::Redirecting { to: "/login".to_owned() }
    );
    assert_eq!(
        evaluate(&session, &GuardPolicy::admin()),
        GuardState::Redirecting { to: "/login".to_owned() }
    );
}

#[test]
fn admin_token_passes_admin_guard() {
    let (session, _) = session(Some(serde_json::json!({ "exp": NOW + 3600, "isAdmin": true })));
    assert_eq!(evaluate(&session, &GuardPolicy::admin()), GuardState::Authorized);
    assert_eq!(evaluate(&session, &GuardPolicy::authenticated()), GuardState::Authorized);
}

#[test]
fn non_admin_is_redirected_from_admin_guard() {
    let (session, _) = session(Some(serde_json::json!({ "exp": NOW + 3600, "role": "seller" })));
    assert!(matches!(evaluate(&session, &GuardPolicy::admin()), GuardState::Redirecting { .. }));
    assert_eq!(evaluate(&session, &GuardPolicy::role(Role::Seller)), GuardState::Authorized);
    assert!(matches!(
        evaluate(&session, &GuardPolicy::role(Role::Delivery)),
        GuardState::Redirecting { .. }
    ));
}

#[test]
fn anonymous_guard_sends_signed_in_users_home() {
    let (signed_in, _) = session(Some(serde_json::json!({ "exp": NOW + 60 })));
    assert_eq!(
        evaluate(&signed_in, &GuardPolicy::anonymous()),
        GuardState::Redirecting { to: "/".to_owned() }
    );
    let (anonymous, _) = session(None);
    assert_eq!(evaluate(&anonymous, &GuardPolicy::anonymous()), GuardState::Authorized);
}

#[test]
fn expired_session_redirects_and_is_evicted() {
    let (session, store) = session(Some(serde_json::json!({ "exp": NOW - 5 })));
    assert!(matches!(evaluate(&session, &GuardPolicy::authenticated()), GuardState::Redirecting { .. }));
    assert_eq!(store.get(), None);
}

#[test]
fn redirect_decision_is_advisory_and_leaves_store_alone() {
    // A redirect is a rendering decision, not proof that access was denied:
    // it leaves the session untouched and the backend still has the final say.
    let (session, store) = session(Some(serde_json::json!({ "exp": NOW + 60, "role": "customer" })));
    let before = store.get();
    assert!(matches!(evaluate(&session, &GuardPolicy::admin()), GuardState::Redirecting { .. }));
    assert_eq!(store.get(), before);
}

#[test]
fn only_authorized_renders_children() {
    assert!(!GuardState::Checking.renders_children());
    assert!(!GuardState::Redirecting { to: "/login".to_owned() }.renders_children());
    assert!(GuardState::Authorized.renders_children());
    assert_eq!(GuardState::default(), GuardState::Checking);
}

#[test]
fn route_policies_map_to_guards() {
    assert_eq!(GuardPolicy::for_route(RoutePolicy::Public), None);
    assert_eq!(
        GuardPolicy::for_route(RoutePolicy::RequiresDelivery).map(|p| p.requirement),
        Some(Requirement::Role(Role::Delivery))
    );
    assert_eq!(
        GuardPolicy::for_route(RoutePolicy::RequiresSeller).map(|p| p.requirement),
        Some(Requirement::Role(Role::Seller))
    );
    assert_eq!(
        GuardPolicy::for_route(RoutePolicy::AuthFlow).map(|p| p.fallback_path),
        Some("/".to_owned())
    );
}

#[test]
fn armed_ticket_is_current_until_superseded() {
    let pending = PendingRedirect::new();
    let first = pending.arm();
    assert!(pending.is_current(first));
    let second = pending.arm();
    assert!(!pending.is_current(first));
    assert!(pending.is_current(second));
}

#[test]
fn disarm_invalidates_outstanding_ticket() {
    let pending = PendingRedirect::new();
    let ticket = pending.arm();
    pending.disarm();
    assert!(!pending.is_current(ticket));
    let next = pending.arm();
    assert!(pending.is_current(next));
}

#[test]
fn cancel_on_unmount_invalidates_every_ticket() {
    let pending = PendingRedirect::new();
    let clone = pending.clone();
    let ticket = pending.arm();
    clone.cancel();
    assert!(!pending.is_current(ticket));
    let late = pending.arm();
    assert!(!pending.is_current(late));
}

// =============================================================================
// advance: one guard pass as the mounted component runs it
// =============================================================================

#[test]
fn first_pass_without_token_schedules_redirect() {
    let (session, _) = session(None);
    let pending = PendingRedirect::new();
    let step = advance(&session, &GuardPolicy::authenticated(), &GuardState::Checking, &pending)
        .expect("state changes");
    assert_eq!(step.state, GuardState::Redirecting { to: "/login".to_owned() });
    let redirect = step.redirect.expect("redirect scheduled");
    assert_eq!(redirect.to, "/login");
    assert!(pending.is_current(redirect.ticket));
}

#[test]
fn unchanged_decision_keeps_pending_redirect() {
    let (session, _) = session(None);
    let pending = PendingRedirect::new();
    let policy = GuardPolicy::authenticated();
    let step = advance(&session, &policy, &GuardState::Checking, &pending).expect("state changes");
    let ticket = step.redirect.expect("redirect").ticket;

    assert_eq!(advance(&session, &policy, &step.state, &pending), None);
    assert!(pending.is_current(ticket));
}

#[test]
fn becoming_authorized_disarms_pending_redirect() {
    let (session, store) = session(None);
    let pending = PendingRedirect::new();
    let policy = GuardPolicy::authenticated();
    let step = advance(&session, &policy, &GuardState::Checking, &pending).expect("state changes");
    let ticket = step.redirect.expect("redirect").ticket;

    store.set(&token_with(&serde_json::json!({ "exp": NOW + 3600 })));
    let step = advance(&session, &policy, &step.state, &pending).expect("state changes");
    assert_eq!(step, Transition { state: GuardState::Authorized, redirect: None });

    let mut navigated = false;
    assert!(!pending.fire(ticket, || navigated = true));
    assert!(!navigated);
}

#[test]
fn recheck_after_idle_expiry_redirects() {
    // Same session re-checked later, as on `visibilitychange`.
    let store = MemoryTokenStore::new();
    store.set(&token_with(&serde_json::json!({ "exp": NOW + 60 })));
    let now = Arc::new(std::sync::atomic::AtomicI64::new(NOW));
    let clock = {
        let now = now.clone();
        Arc::new(move || now.load(std::sync::atomic::Ordering::SeqCst))
    };
    let session = Session::with_clock(Arc::new(store.clone()), clock);
    let pending = PendingRedirect::new();
    let policy = GuardPolicy::authenticated();

    let step = advance(&session, &policy, &GuardState::Checking, &pending).expect("state changes");
    assert_eq!(step.state, GuardState::Authorized);

    now.store(NOW + 120, std::sync::atomic::Ordering::SeqCst);
    let step = advance(&session, &policy, &step.state, &pending).expect("state changes");
    assert!(matches!(step.state, GuardState::Redirecting { .. }));
    assert!(step.redirect.is_some());
    assert_eq!(store.get(), None);
}

#[test]
fn fire_runs_only_for_current_ticket() {
    let pending = PendingRedirect::new();
    let ticket = pending.arm();
    let mut calls = 0;
    assert!(pending.fire(ticket, || calls += 1));
    assert_eq!(calls, 1);

    let stale = ticket;
    let _ = pending.arm();
    assert!(!pending.fire(stale, || calls += 1));
    assert_eq!(calls, 1);
}

#[test]
fn unmount_cancels_scheduled_redirect() {
    let (session, _) = session(None);
    let pending = PendingRedirect::new();
    let step = advance(&session, &GuardPolicy::admin(), &GuardState::Checking, &pending).expect("state changes");
    let ticket = step.redirect.expect("redirect").ticket;

    // on_cleanup handler
    pending.cancel();
    let mut navigated = false;
    assert!(!pending.fire(ticket, || navigated = true));
    assert!(!navigated);
}
