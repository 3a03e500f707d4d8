//! Sorting and filtering of product lists.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Sort options for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by name A-Z.
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::NameAsc => "Name: A-Z",
            SortKey::NameDesc => "Name: Z-A",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "price-asc" => Some(SortKey::PriceAsc),
            "price-desc" => Some(SortKey::PriceDesc),
            "name-asc" => Some(SortKey::NameAsc),
            "name-desc" => Some(SortKey::NameDesc),
            _ => None,
        }
    }

    /// Sort a product list in place. Uses the list price, not the
    /// discounted price, matching how listings are ordered.
    pub fn apply(&self, products: &mut [Product]) {
        match self {
            SortKey::PriceAsc => {
                products.sort_by_key(|p| p.price.amount_cents);
            }
            SortKey::PriceDesc => {
                products.sort_by_key(|p| std::cmp::Reverse(p.price.amount_cents));
            }
            SortKey::NameAsc => {
                products.sort_by(|a, b| a.name.cmp(&b.name));
            }
            SortKey::NameDesc => {
                products.sort_by(|a, b| b.name.cmp(&a.name));
            }
        }
    }
}

/// Filter products by exact category name.
pub fn filter_by_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| p.category == category).collect()
}

/// Case-insensitive substring match on product name.
pub fn search_by_name<'a>(products: &'a [Product], keyword: &str) -> Vec<&'a Product> {
    let keyword = keyword.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&keyword))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};

    fn sample() -> Vec<Product> {
        vec![
            Product::new(
                ProductId::new(1),
                "Vanilla & Cedar",
                Money::new(3500, Currency::USD),
            )
            .with_category("Classic Collection"),
            Product::new(
                ProductId::new(5),
                "Summer Breeze",
                Money::new(3600, Currency::USD),
            )
            .with_category("Seasonal"),
            Product::new(
                ProductId::new(2),
                "Amber & Moss",
                Money::new(4200, Currency::USD),
            )
            .with_category("Classic Collection"),
        ]
    }

    #[test]
    fn test_sort_price_asc() {
        let mut products = sample();
        SortKey::PriceAsc.apply(&mut products);
        let prices: Vec<i64> = products.iter().map(|p| p.price.amount_cents).collect();
        assert_eq!(prices, vec![3500, 3600, 4200]);
    }

    #[test]
    fn test_sort_name_desc() {
        let mut products = sample();
        SortKey::NameDesc.apply(&mut products);
        assert_eq!(products[0].name, "Vanilla & Cedar");
        assert_eq!(products[2].name, "Amber & Moss");
    }

    #[test]
    fn test_filter_by_category() {
        let products = sample();
        let classic = filter_by_category(&products, "Classic Collection");
        assert_eq!(classic.len(), 2);
        assert!(filter_by_category(&products, "Gift Sets").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let products = sample();
        let hits = search_by_name(&products, "bReEze");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Summer Breeze");
    }

    #[test]
    fn test_sort_key_round_trip() {
        for key in [
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::NameAsc,
            SortKey::NameDesc,
        ] {
            assert_eq!(SortKey::from_str(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::from_str("rating"), None);
    }
}
