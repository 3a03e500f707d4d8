//! Product type.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// `price` is the list price. A discounted product carries a
/// `discount_percentage`; the price customers actually pay comes from
/// [`Product::effective_price`].
///
/// Serialized in camelCase because the storefront wire contract uses
/// JavaScript-style field names (`discountPercentage`, `isBestSeller`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// List price.
    pub price: Money,
    /// Discount percentage (0-100), if on sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<u8>,
    /// Image URI.
    pub image: String,
    /// Category name.
    pub category: String,
    /// Tags for filtering/search.
    pub tags: Vec<String>,
    /// Average rating, 0.0 to 5.0.
    pub rating: f64,
    /// Units in stock.
    pub stock: i64,
    /// Shown in the featured section.
    #[serde(default)]
    pub is_featured: bool,
    /// Best seller badge.
    #[serde(default)]
    pub is_best_seller: bool,
    /// New arrival badge.
    #[serde(default)]
    pub is_new: bool,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Product {
    /// Create a new product.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
            discount_percentage: None,
            image: String::new(),
            category: String::new(),
            tags: Vec::new(),
            rating: 0.0,
            stock: 0,
            is_featured: false,
            is_best_seller: false,
            is_new: false,
            created_at: current_timestamp(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the image URI.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the tags.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Set the stock level.
    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }

    /// Apply a discount percentage (clamped to 0-100).
    pub fn with_discount(mut self, percentage: u8) -> Self {
        self.discount_percentage = Some(percentage.min(100));
        self
    }

    /// Mark as featured.
    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    /// Mark as a best seller.
    pub fn best_seller(mut self) -> Self {
        self.is_best_seller = true;
        self
    }

    /// Mark as a new arrival.
    pub fn new_arrival(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Check if the product is on sale.
    pub fn is_on_sale(&self) -> bool {
        matches!(self.discount_percentage, Some(p) if p > 0)
    }

    /// Price customers pay: the list price reduced by the discount.
    pub fn effective_price(&self) -> Money {
        match self.discount_percentage {
            Some(p) if p > 0 => {
                let remaining = 100 - i64::from(p.min(100));
                Money::new(
                    self.price.amount_cents.saturating_mul(remaining) / 100,
                    self.price.currency,
                )
            }
            _ => self.price,
        }
    }

    /// List price, present only when the product is discounted.
    pub fn original_price(&self) -> Option<Money> {
        if self.is_on_sale() {
            Some(self.price)
        } else {
            None
        }
    }

    /// Check if any units are in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
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
