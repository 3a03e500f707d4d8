//! Wishlist store.

use ember_commerce::catalog::Product;
use ember_commerce::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A saved wishlist entry with its product snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WishlistEntry {
    /// Identifier within the wishlist.
    pub entry_id: u64,
    /// Product this entry refers to.
    pub product_id: ProductId,
    /// Product snapshot at save time.
    pub product: Product,
    /// Unix timestamp when saved.
    pub added_at: i64,
}

/// Products the user has saved for later. At most one entry per product.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WishlistStore {
    entries: Vec<WishlistEntry>,
    next_entry_id: u64,
}

impl WishlistStore {
    /// Create an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a product. No-op if it is already on the wishlist.
    pub fn add(&mut self, product: Product) {
        if self.contains(product.id) {
            return;
        }
        self.next_entry_id += 1;
        self.entries.push(WishlistEntry {
            entry_id: self.next_entry_id,
            product_id: product.id,
            added_at: current_timestamp(),
            product,
        });
    }

    /// Remove the entry for this product. Silent no-op if absent.
    pub fn remove(&mut self, product_id: ProductId) {
        self.entries.retain(|e| e.product_id != product_id);
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Check if a product is on the wishlist.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.entries.iter().any(|e| e.product_id == product_id)
    }

    /// Entries in the order they were saved.
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_commerce::money::{Currency, Money};

    fn product(id: u64, name: &str) -> Product {
        Product::new(ProductId::new(id), name, Money::new(3500, Currency::USD))
    }

    #[test]
    fn test_add_is_idempotent_per_product() {
        let mut wishlist = WishlistStore::new();
        wishlist.add(product(1, "Vanilla & Cedar"));
        wishlist.add(product(1, "Vanilla & Cedar"));

        assert_eq!(wishlist.len(), 1);
        assert!(wishlist.contains(ProductId::new(1)));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut wishlist = WishlistStore::new();
        wishlist.add(product(1, "Vanilla & Cedar"));
        wishlist.add(product(2, "Amber & Moss"));

        wishlist.remove(ProductId::new(1));
        assert!(!wishlist.contains(ProductId::new(1)));
        assert_eq!(wishlist.len(), 1);

        wishlist.remove(ProductId::new(99)); // absent: no-op
        assert_eq!(wishlist.len(), 1);

        wishlist.clear();
        assert!(wishlist.is_empty());
    }
}
