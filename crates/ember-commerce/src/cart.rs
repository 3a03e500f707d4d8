//! Cart line item type.
//!
//! A line item is a priced snapshot of a product at the moment it was added
//! to a cart. Prices are copied rather than referenced so that later catalog
//! edits never change what the customer saw.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One product entry in a cart.
///
/// `unit_price` already reflects any discount. When the product was on sale,
/// `original_price` carries the pre-discount price for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    /// Product this line refers to (unique per cart).
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Price per unit, post-discount.
    pub unit_price: Money,
    /// Pre-discount price, present only if the product was discounted.
    pub original_price: Option<Money>,
    /// Quantity, always >= 1 once stored in a cart.
    pub quantity: i64,
    /// Image URI.
    pub image: String,
    /// Discount percentage (0-100), present only if discounted.
    pub discount_percentage: Option<u8>,
}

impl CartLineItem {
    /// Create a line item with quantity 1.
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        image: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            unit_price,
            original_price: None,
            quantity: 1,
            image: image.into(),
            discount_percentage: None,
        }
    }

    /// Snapshot a catalog product into a line item with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.effective_price(),
            original_price: product.original_price(),
            quantity: 1,
            image: product.image.clone(),
            discount_percentage: product.discount_percentage,
        }
    }

    /// Set the quantity.
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Check if this line was discounted when snapshotted.
    pub fn is_discounted(&self) -> bool {
        self.original_price.is_some()
    }

    /// Line total (unit price times quantity), saturating on overflow.
    pub fn line_total(&self) -> Money {
        Money::new(
            self.unit_price.amount_cents.saturating_mul(self.quantity),
            self.unit_price.currency,
        )
    }
}
