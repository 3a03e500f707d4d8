//! Shared application state.
//!
//! In-memory repositories backing the REST handlers. `DashMap` keeps
//! handler code lock-free at the call site; id counters are monotonic
//! and never reused within a process.

use dashmap::DashMap;
use ember_auth::{AuthToken, UserCredentials};
use ember_commerce::catalog::Product;
use ember_commerce::ids::{ProductId, UserId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared handle passed to every handler.
pub type SharedState = Arc<AppState>;

/// Application state: products, users, and issued tokens.
#[derive(Debug, Default)]
pub struct AppState {
    /// Product catalog keyed by raw product id.
    pub products: DashMap<u64, Product>,
    /// User credentials keyed by raw user id.
    pub users: DashMap<u64, UserCredentials>,
    /// Issued tokens keyed by token string.
    pub tokens: DashMap<String, AuthToken>,

    next_product_id: AtomicU64,
    next_user_id: AtomicU64,
}

impl AppState {
    /// Create empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next product id.
    pub fn next_product_id(&self) -> ProductId {
        ProductId::new(self.next_product_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Allocate the next user id.
    pub fn next_user_id(&self) -> UserId {
        UserId::new(self.next_user_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Insert a product under its own id, bumping the id counter past it
    /// so seeded ids and allocated ids never collide.
    pub fn insert_product(&self, product: Product) {
        self.next_product_id
            .fetch_max(product.id.value(), Ordering::Relaxed);
        self.products.insert(product.id.value(), product);
    }

    /// Look up a user by email (emails are unique).
    pub fn find_user_by_email(&self, email: &str) -> Option<UserCredentials> {
        self.users
            .iter()
            .find(|entry| entry.email.eq_ignore_ascii_case(email))
            .map(|entry| entry.clone())
    }

    /// Check whether an email is already registered.
    pub fn email_taken(&self, email: &str) -> bool {
        self.find_user_by_email(email).is_some()
    }

    /// Store an issued token.
    pub fn store_token(&self, token: AuthToken) {
        self.tokens.insert(token.token.clone(), token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_commerce::money::{Currency, Money};

    #[test]
    fn test_seeded_ids_do_not_collide_with_allocated() {
        let state = AppState::new();
        state.insert_product(Product::new(
            ProductId::new(12),
            "Lemongrass & Ginger",
            Money::new(3800, Currency::USD),
        ));

        assert_eq!(state.next_product_id(), ProductId::new(13));
    }

    #[test]
    fn test_email_lookup_is_case_insensitive() {
        let state = AppState::new();
        let id = state.next_user_id();
        state
            .users
            .insert(id.value(), UserCredentials::new(id, "Jane", "jane@example.com", "hash"));

        assert!(state.email_taken("Jane@Example.com"));
        assert!(state.find_user_by_email("jane@example.com").is_some());
        assert!(!state.email_taken("sam@example.com"));
    }
}
