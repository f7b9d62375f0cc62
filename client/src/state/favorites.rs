//! Favorite products.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::util::storage;

const STORAGE_KEY: &str = "favorites";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritesState {
    pub product_ids: BTreeSet<String>,
}

impl FavoritesState {
    #[must_use]
    pub fn load() -> Self {
        storage::load_json(STORAGE_KEY).unwrap_or_default()
    }

    pub fn save(&self) {
        storage::save_json(STORAGE_KEY, self);
    }

    /// Flip membership of `product_id`; returns whether it is now a favorite.
    pub fn toggle(&mut self, product_id: &str) -> bool {
        if self.product_ids.remove(product_id) {
            false
        } else {
            self.product_ids.insert(product_id.to_owned());
            true
        }
    }

    #[must_use]
    pub fn contains(&self, product_id: &str) -> bool {
        self.product_ids.contains(product_id)
    }
}

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;
