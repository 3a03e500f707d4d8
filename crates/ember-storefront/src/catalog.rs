//! Catalog view state.
//!
//! The loaded product list plus state derived from it: distinct
//! categories, the featured subset, and the currently selected product.

use ember_commerce::catalog::{self, Product, SortKey};
use ember_commerce::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Client-side view of the product catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogView {
    products: Vec<Product>,
    featured: Vec<Product>,
    categories: Vec<String>,
    selected: Option<Product>,
    error: Option<String>,
}

impl CatalogView {
    /// Create an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a product list, rederiving categories (distinct, insertion
    /// order) and the featured subset.
    pub fn load(&mut self, products: Vec<Product>) {
        self.categories.clear();
        for product in &products {
            if !self.categories.contains(&product.category) {
                self.categories.push(product.category.clone());
            }
        }
        self.featured = products.iter().filter(|p| p.is_featured).cloned().collect();
        self.products = products;
        self.error = None;
    }

    /// Select a product for the detail view (or clear the selection).
    pub fn select(&mut self, product: Option<Product>) {
        self.selected = product;
    }

    /// Select by id from the loaded list.
    pub fn select_by_id(&mut self, id: ProductId) {
        self.selected = self.products.iter().find(|p| p.id == id).cloned();
    }

    /// Sort the loaded list in place.
    pub fn sort(&mut self, key: SortKey) {
        key.apply(&mut self.products);
    }

    /// Products in the given category.
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        catalog::filter_by_category(&self.products, category)
    }

    /// Case-insensitive name search over the loaded list.
    pub fn search(&self, keyword: &str) -> Vec<&Product> {
        catalog::search_by_name(&self.products, keyword)
    }

    /// Record a load error.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn featured(&self) -> &[Product] {
        &self.featured
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
