//! Bearer-token persistence.
//!
//! The store owns the token's lifetime: it is the only place a token is
//! written or removed. Readers always go back to the store instead of keeping
//! a copy, so a logout or eviction is visible on the very next check.

use std::sync::{Arc, Mutex};

use crate::util::storage;

/// Fixed `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Persistent home of the single session token.
///
/// Implementations must never fail: an unavailable backend reads as "no
/// token" and writes are dropped.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// `localStorage`-backed store used in the browser. Inert during SSR.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        storage::get_item(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    fn set(&self, token: &str) {
        storage::set_item(TOKEN_KEY, token);
    }

    fn clear(&self) {
        storage::remove_item(TOKEN_KEY);
    }
}

/// Process-local store for tests and non-browser embedding.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(token.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;
