//! Client session evaluation.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single [`Session`] is provided as Leptos context by the root `App`.
//! Route guards, the header and the auth forms all ask it questions instead
//! of touching storage themselves.
//!
//! DESIGN
//! ======
//! `Session` keeps no authorization state of its own. Every predicate
//! re-reads the token from the [`TokenStore`] and decodes it again, so a
//! logout in one place is seen by every later check. Expired tokens are
//! evicted lazily, on the check that notices them.
//!
//! None of this is access control. The backend validates the token on every
//! API call; these predicates only decide what to render and where to
//! navigate.

pub mod claims;
pub mod store;

use std::fmt;
use std::sync::Arc;

pub use claims::{Claims, DecodeError, Role, decode};
pub use store::{BrowserTokenStore, MemoryTokenStore, TOKEN_KEY, TokenStore};

use crate::util::clock;

/// Source of the current Unix time in seconds.
pub type Clock = Arc<dyn Fn() -> i64 + Send + Sync>;

/// Session evaluator shared through context.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
    clock: Clock,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

impl Session {
    /// Session over `store`, reading the wall clock.
    #[must_use]
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self::with_clock(store, Arc::new(clock::now_secs))
    }

    #[must_use]
    pub fn with_clock(store: Arc<dyn TokenStore>, clock: Clock) -> Self {
        Self { store, clock }
    }

    /// Session backed by browser `localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserTokenStore))
    }

    /// Claims of the current session, or `None` when there is no usable token.
    ///
    /// An expired token is removed from the store as a side effect.
    #[must_use]
    pub fn claims(&self) -> Option<Claims> {
        let token = self.store.get()?;
        let claims = match decode(&token) {
            Ok(claims) => claims,
            Err(e) => {
                log::debug!("ignoring undecodable session token: {e}");
                return None;
            }
        };
        if claims.is_expired_at((self.clock)()) {
            log::info!("session token expired; clearing");
            self.store.clear();
            return None;
        }
        Some(claims)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.claims().is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.claims().is_some_and(|c| c.is_admin)
    }

    #[must_use]
    pub fn is_role(&self, role: Role) -> bool {
        self.claims().is_some_and(|c| c.has_role(role))
    }

    /// Adopt `token` as the current session.
    pub fn login(&self, token: &str) {
        self.store.set(token);
    }

    pub fn logout(&self) {
        self.store.clear();
    }

    /// Where a freshly signed-in user should land.
    #[must_use]
    pub fn landing_path(&self) -> &'static str {
        match self.claims() {
            Some(c) if c.is_admin => "/admin",
            Some(c) if c.has_role(Role::Delivery) => "/delivery",
            Some(c) if c.has_role(Role::Seller) => "/seller",
            _ => "/",
        }
    }
}


#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;
