//! Demo catalog seed.
//!
//! The candle catalog served by the demo server and exercised by the
//! integration tests.

use crate::state::AppState;
use ember_commerce::catalog::Product;
use ember_commerce::ids::ProductId;
use ember_commerce::money::{Currency, Money};

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400/e9d9c8/333333?text=Ember+Candle";

fn usd(cents: i64) -> Money {
    Money::new(cents, Currency::USD)
}

/// The full demo catalog, in id order.
pub fn demo_catalog() -> Vec<Product> {
    vec![
        Product::new(ProductId::new(1), "Vanilla & Cedar", usd(3500))
            .with_description(
                "A warm and comforting blend of vanilla bean and cedar wood, perfect for \
                 creating a cozy atmosphere in living rooms and bedrooms.",
            )
            .with_image(PLACEHOLDER_IMAGE)
            .with_category("Classic Collection")
            .with_tags(["warm", "cozy", "vanilla", "cedar"])
            .with_rating(4.8)
            .with_stock(25)
            .best_seller()
            .featured(),
        Product::new(ProductId::new(2), "Amber & Moss", usd(4200))
            .with_description(
                "A sophisticated blend of rich amber and earthy moss that evokes the feeling \
                 of a walk through a lush forest after rainfall.",
            )
            .with_image(PLACEHOLDER_IMAGE)
            .with_category("Classic Collection")
            .with_tags(["earthy", "sophisticated", "amber", "moss"])
            .with_rating(4.9)
            .with_stock(18)
            .best_seller()
            .featured(),
        Product::new(ProductId::new(3), "Sandalwood & Lavender", usd(3800))
            .with_description(
                "A calming combination of aromatic sandalwood and soothing lavender, designed \
                 to promote relaxation and tranquility.",
            )
            .with_image(PLACEHOLDER_IMAGE)
            .with_category("Classic Collection")
            .with_tags(["calming", "relaxing", "sandalwood", "lavender"])
            .with_rating(4.7)
            .with_stock(22)
            .best_seller(),
        Product::new(ProductId::new(4), "Bergamot & Jasmine", usd(4000))
            .with_description(
                "A refreshing and uplifting blend of citrusy bergamot and floral jasmine, \
                 perfect for enhancing mood and creating a vibrant atmosphere.",
            )
            .with_image(PLACEHOLDER_IMAGE)
            .with_category("Classic Collection")
            .with_tags(["refreshing", "uplifting", "bergamot", "jasmine"])
            .with_rating(4.6)
            .with_stock(20)
            .best_seller(),
        Product::new(ProductId::new(5), "Summer Breeze", usd(3600))
            .with_description(
                "A light and airy fragrance that combines notes of sea salt, coconut, and \
                 fresh linen for a breezy summer feeling all year round.",
            )
            .with_discount(20)
            .with_image(PLACEHOLDER_IMAGE)
            .with_category("Seasonal")
            .with_tags(["fresh", "light", "summer", "coconut", "sea salt"])
            .with_rating(4.5)
            .with_stock(15)
            .new_arrival(),
        Product::new(ProductId::new(6), "Autumn Spice", usd(3600))
            .with_description(
                "A warm and inviting blend of cinnamon, clove, and nutmeg that captures the \
                 essence of autumn and holiday festivities.",
            )
            .with_image(PLACEHOLDER_IMAGE)
            .with_category("Seasonal")
            .with_tags(["warm", "spicy", "autumn", "cinnamon", "clove"])
            .with_rating(4.7)
            .with_stock(12),
        Product::new(ProductId::new(7), "Winter Fir", usd(3800))
            .with_description(
                "A crisp and invigorating scent of fresh pine needles and winter forest that \
                 brings the outdoors inside during colder months.",
            )
            .with_image(PLACEHOLDER_IMAGE)
            .with_category("Seasonal")
            .with_tags(["crisp", "fresh", "winter", "pine", "forest"])
            .with_rating(4.8)
            .with_stock(10),
        Product::new(ProductId::new(8), "Spring Bloom", usd(3600))
            .with_description(
                "A delicate and floral composition with notes of peony, lily of the valley, \
                 and fresh-cut grass that celebrates new beginnings.",
            )
            .with_image(PLACEHOLDER_IMAGE)
            .with_category("Seasonal")
            .with_tags(["floral", "fresh", "spring", "peony"])
            .with_rating(4.6)
            .with_stock(16)
            .new_arrival(),
        Product::new(ProductId::new(9), "Luxury Gift Set", usd(9500))
            .with_description(
                "Our premium gift set featuring three of our bestselling scents in elegant \
                 packaging, perfect for special occasions or as a thoughtful present.",
            )
            .with_image(PLACEHOLDER_IMAGE)
            .with_category("Gift Sets")
            .with_tags(["gift", "luxury", "set", "premium"])
            .with_rating(4.9)
            .with_stock(8)
            .featured(),
        Product::new(ProductId::new(10), "Travel Collection", usd(6500))
            .with_description(
                "A set of four mini candles in our signature scents, perfect for travelers or \
                 those wanting to experience a variety of fragrances.",
            )
            .with_image(PLACEHOLDER_IMAGE)
            .with_category("Gift Sets")
            .with_tags(["travel", "mini", "collection", "variety"])
            .with_rating(4.7)
            .with_stock(14)
            .new_arrival(),
        Product::new(ProductId::new(11), "Rose & Oud", usd(4500))
            .with_description(
                "An exotic and romantic blend of rose petals and rich oud wood, creating a \
                 sophisticated and deeply sensual atmosphere.",
            )
            .with_image(PLACEHOLDER_IMAGE)
            .with_category("Classic Collection")
            .with_tags(["romantic", "exotic", "rose", "oud"])
            .with_rating(4.8)
            .with_stock(7),
        Product::new(ProductId::new(12), "Lemongrass & Ginger", usd(3800))
            .with_description(
                "An energizing and purifying combination of zesty lemongrass and spicy \
                 ginger, perfect for kitchens and living spaces.",
            )
            .with_image(PLACEHOLDER_IMAGE)
            .with_category("Classic Collection")
            .with_tags(["energizing", "fresh", "lemongrass", "ginger"])
            .with_rating(4.5)
            .with_stock(19),
    ]
}

/// Seed the demo catalog into application state.
pub fn seed_catalog(state: &AppState) {
    for product in demo_catalog() {
        state.insert_product(product);
    }
    tracing::info!(count = state.products.len(), "seeded demo catalog");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let catalog = demo_catalog();
        assert_eq!(catalog.len(), 12);

        let vanilla = &catalog[0];
        assert_eq!(vanilla.id, ProductId::new(1));
        assert_eq!(vanilla.price, usd(3500));
        assert!(vanilla.is_best_seller);

        let summer = &catalog[4];
        assert_eq!(summer.id, ProductId::new(5));
        assert!(summer.is_on_sale());
        assert_eq!(summer.effective_price(), usd(2880));
    }

    #[test]
    fn test_seed_reserves_ids() {
        let state = AppState::new();
        seed_catalog(&state);
        assert_eq!(state.products.len(), 12);
        assert_eq!(state.next_product_id().value(), 13);
    }
}
