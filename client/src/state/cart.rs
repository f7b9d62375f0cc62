//! Shopping cart context.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

const STORAGE_KEY: &str = "cart";

/// One product line in the cart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub unit_price_cents: u64,
    pub quantity: u32,
}

impl CartItem {
    #[must_use]
    pub fn line_total_cents(&self) -> u64 {
        self.unit_price_cents.saturating_mul(u64::from(self.quantity))
    }
}

/// Cart contents in insertion order. Quantities are always at least 1.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

impl CartState {
    /// Restore the cart saved in browser storage, or an empty cart.
    #[must_use]
    pub fn load() -> Self {
        storage::load_json(STORAGE_KEY).unwrap_or_default()
    }

    pub fn save(&self) {
        storage::save_json(STORAGE_KEY, self);
    }

    /// Add `item`, merging quantities with an existing line for the same product.
    pub fn add(&mut self, item: CartItem) {
        if item.quantity == 0 {
            return;
        }
        match self.items.iter_mut().find(|i| i.product_id == item.product_id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
                existing.unit_price_cents = item.unit_price_cents;
            }
            None => self.items.push(item),
        }
    }

    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Set a line's quantity; zero removes the line. Unknown products are ignored.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().fold(0u32, |acc, i| acc.saturating_add(i.quantity))
    }

    #[must_use]
    pub fn total_cents(&self) -> u64 {
        self.items.iter().map(CartItem::line_total_cents).fold(0u64, u64::saturating_add)
    }
}

/// Render cents as a rupee amount, e.g. `12345` → `"₹123.45"`.
#[must_use]
pub fn format_price(cents: u64) -> String {
    format!("₹{}.{:02}", cents / 100, cents % 100)
}
