//! Cart store.
//!
//! The authoritative in-memory shopping cart for one browser session.
//! Items keep insertion order, at most one line per product id, and the
//! derived totals are recomputed from the items after every mutation —
//! they are never adjusted independently.

pub use ember_commerce::cart::CartLineItem;

use ember_commerce::ids::ProductId;
use ember_commerce::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// The session cart: ordered line items plus derived totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartStore {
    items: Vec<CartLineItem>,
    total_amount: Money,
    total_items: i64,
    currency: Currency,
}

impl CartStore {
    /// Create an empty cart in USD.
    pub fn new() -> Self {
        Self::with_currency(Currency::USD)
    }

    /// Create an empty cart in the given currency.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            total_amount: Money::zero(currency),
            total_items: 0,
            currency,
        }
    }

    /// Add an item.
    ///
    /// If a line with the same product id exists, its quantity grows by
    /// the incoming quantity; otherwise the item is appended. A
    /// non-positive incoming quantity is treated as 1. Always succeeds.
    pub fn add_item(&mut self, item: CartLineItem) {
        let quantity = if item.quantity > 0 { item.quantity } else { 1 };

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == item.product_id)
        {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartLineItem { quantity, ..item });
        }
        self.recompute_totals();
    }

    /// Remove the line with this product id. Silent no-op if absent.
    pub fn remove_item(&mut self, id: ProductId) {
        self.items.retain(|i| i.product_id != id);
        self.recompute_totals();
    }

    /// Set the quantity of the line with this product id.
    ///
    /// A quantity of zero or less removes the line entirely; an absent
    /// id is a silent no-op.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        let Some(item) = self.items.iter_mut().find(|i| i.product_id == id) else {
            return;
        };
        if quantity > 0 {
            item.quantity = quantity;
        } else {
            self.items.retain(|i| i.product_id != id);
        }
        self.recompute_totals();
    }

    /// Reset to an empty cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute_totals();
    }

    /// Replace the entire item sequence wholesale (hydration from a
    /// persisted snapshot).
    pub fn load(&mut self, items: Vec<CartLineItem>) {
        self.items = items;
        self.recompute_totals();
    }

    /// The line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Sum of unit price times quantity over all lines.
    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// Sum of quantities over all lines.
    pub fn total_items(&self) -> i64 {
        self.total_items
    }

    /// Number of distinct product lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the line for a product id, if present.
    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.product_id == id)
    }

    /// Cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    fn recompute_totals(&mut self) {
        let mut total = 0i64;
        for item in &self.items {
            total = total.saturating_add(item.line_total().amount_cents);
        }
        self.total_amount = Money::new(total, self.currency);
        self.total_items = self.items.iter().map(|i| i.quantity).sum();
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
