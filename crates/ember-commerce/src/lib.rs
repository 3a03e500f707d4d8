//! E-commerce domain types for the Ember storefront.
//!
//! This crate provides the shared data model used by both the REST API and
//! the client-side stores:
//!
//! - **Money**: Exact cent-based amounts with currency tagging
//! - **Catalog**: Products with sale pricing, categories, sort orders
//! - **Cart**: Line item records snapshotted from products
//! - **Checkout**: Shipping details and order records
//!
//! # Example
//!
//! ```rust,ignore
//! use ember_commerce::prelude::*;
//!
//! let product = Product::new(ProductId::new(1), "Vanilla & Cedar", Money::new(3500, Currency::USD))
//!     .with_category("Classic Collection")
//!     .with_rating(4.8);
//!
//! // Snapshot the product into a cart line
//! let line = CartLineItem::from_product(&product);
//! println!("{} x{} = {}", line.name, line.quantity, line.line_total().display());
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ids;
pub mod money;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Product, SortKey};

    // Cart
    pub use crate::cart::CartLineItem;

    // Checkout
    pub use crate::checkout::{OrderRecord, OrderStatus, PlacedOrder, ShippingInfo};
}
