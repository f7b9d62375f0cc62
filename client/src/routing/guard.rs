//! Route-guard decisions.
//!
//! A guard is parameterized by a [`GuardPolicy`] rather than specialized per
//! role. [`evaluate`] is a pure function of the policy and the current
//! session; the `RouteGuard` component calls it on mount, on navigation and
//! when the tab becomes visible again.
//!
//! A `Redirecting` outcome is advisory. The redirect happens in the browser
//! and can be skipped by anyone who wants to; the backend's own checks are
//! what actually deny access.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use super::table::RoutePolicy;
use crate::session::{Role, Session};

/// Pause between showing the loading affordance and navigating away.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// What the session must satisfy for the guarded content to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    Authenticated,
    Admin,
    Role(Role),
    /// Only signed-out visitors, used by login/signup pages.
    Anonymous,
}

impl Requirement {
    #[must_use]
    pub fn is_met(self, session: &Session) -> bool {
        match self {
            Self::Authenticated => session.is_authenticated(),
            Self::Admin => session.is_admin(),
            Self::Role(role) => session.is_role(role),
            Self::Anonymous => !session.is_authenticated(),
        }
    }
}

/// Guard descriptor: predicate, fallback destination, loading text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardPolicy {
    pub requirement: Requirement,
    pub fallback_path: String,
    pub loading_label: String,
}

impl GuardPolicy {
    #[must_use]
    pub fn new(requirement: Requirement, fallback_path: &str, loading_label: &str) -> Self {
        Self {
            requirement,
            fallback_path: fallback_path.to_owned(),
            loading_label: loading_label.to_owned(),
        }
    }

    #[must_use]
    pub fn authenticated() -> Self {
        Self::new(Requirement::Authenticated, "/login", "Redirecting to login...")
    }

    #[must_use]
    pub fn admin() -> Self {
        Self::new(Requirement::Admin, "/login", "Checking admin access...")
    }

    #[must_use]
    pub fn role(role: Role) -> Self {
        Self::new(Requirement::Role(role), "/login", "Checking access...")
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self::new(Requirement::Anonymous, "/", "Already signed in, redirecting...")
    }

    /// Policy for a route-table tag, or `None` when the route is unguarded.
    #[must_use]
    pub fn for_route(policy: RoutePolicy) -> Option<Self> {
        match policy {
            RoutePolicy::Public => None,
            RoutePolicy::RequiresAuth => Some(Self::authenticated()),
            RoutePolicy::RequiresAdmin => Some(Self::admin()),
            RoutePolicy::RequiresDelivery => Some(Self::role(Role::Delivery)),
            RoutePolicy::RequiresSeller => Some(Self::role(Role::Seller)),
            RoutePolicy::AuthFlow => Some(Self::anonymous()),
        }
    }
}

/// Per-region guard state. Children render only in `Authorized`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Checking,
    Authorized,
    Redirecting { to: String },
}

impl GuardState {
    #[must_use]
    pub fn renders_children(&self) -> bool {
        matches!(self, Self::Authorized)
    }
}

/// Decide the guard state for `policy` under the current session.
#[must_use]
pub fn evaluate(session: &Session, policy: &GuardPolicy) -> GuardState {
    if policy.requirement.is_met(session) {
        GuardState::Authorized
    } else {
        GuardState::Redirecting { to: policy.fallback_path.clone() }
    }
}

/// Navigation a guard pass asks for, valid while `ticket` is current.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledRedirect {
    pub to: String,
    pub ticket: u64,
}

/// Outcome of a guard pass that changed state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: GuardState,
    pub redirect: Option<ScheduledRedirect>,
}

/// One guard pass, run on mount, on navigation and when the tab becomes
/// visible.
///
/// Returns `None` when the decision matches `current`, leaving any scheduled
/// redirect untouched. Entering `Redirecting` arms a fresh ticket; any other
/// outcome disarms the outstanding one.
#[must_use]
pub fn advance(
    session: &Session,
    policy: &GuardPolicy,
    current: &GuardState,
    pending: &PendingRedirect,
) -> Option<Transition> {
    let next = evaluate(session, policy);
    if &next == current {
        return None;
    }
    let redirect = match &next {
        GuardState::Redirecting { to } => Some(ScheduledRedirect { to: to.clone(), ticket: pending.arm() }),
        _ => {
            pending.disarm();
            None
        }
    };
    Some(Transition { state: next, redirect })
}

/// Cancellation bookkeeping for the delayed redirect.
///
/// Each scheduled redirect gets a ticket. The timer navigates only if its
/// ticket is still the latest one and the guard is still mounted.
#[derive(Clone, Debug)]
pub struct PendingRedirect {
    generation: Arc<AtomicU64>,
    alive: Arc<AtomicBool>,
}

impl Default for PendingRedirect {
    fn default() -> Self {
        Self::new()
    }
}

impl PendingRedirect {
    #[must_use]
    pub fn new() -> Self {
        Self { generation: Arc::new(AtomicU64::new(0)), alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Supersede any earlier ticket and return a fresh one.
    pub fn arm(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Invalidate outstanding tickets without unmounting.
    pub fn disarm(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Invalidate everything for good; called on unmount.
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::SeqCst);
        self.disarm();
    }

    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        self.alive.load(Ordering::SeqCst) && self.generation.load(Ordering::SeqCst) == ticket
    }

    /// Run `navigate` if `ticket` survived the delay. Returns whether it ran.
    pub fn fire(&self, ticket: u64, navigate: impl FnOnce()) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        navigate();
        true
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;
