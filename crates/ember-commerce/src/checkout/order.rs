//! Order types.

use crate::cart::CartLineItem;
use crate::checkout::ShippingInfo;
use crate::ids::{OrderId, PaymentId, UserId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Order status.
///
/// Orders are created in `Processing` on successful payment and are
/// immutable afterwards; no update or cancel operations exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed and being prepared.
    #[default]
    Processing,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "processing",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
        }
    }
}

/// A snapshot of a completed checkout, written to the order store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRecord {
    /// Customer who placed the order.
    pub user_id: UserId,
    /// Line items at the time of purchase.
    pub items: Vec<CartLineItem>,
    /// Where the order ships.
    pub shipping_address: ShippingInfo,
    /// Total charged.
    pub total_amount: Money,
    /// Payment gateway reference.
    pub payment_id: PaymentId,
    /// Order status.
    pub status: OrderStatus,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl OrderRecord {
    /// Create an order record timestamped now.
    pub fn new(
        user_id: UserId,
        items: Vec<CartLineItem>,
        shipping_address: ShippingInfo,
        total_amount: Money,
        payment_id: PaymentId,
    ) -> Self {
        Self {
            user_id,
            items,
            shipping_address,
            total_amount,
            payment_id,
            status: OrderStatus::Processing,
            created_at: current_timestamp(),
        }
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// An order as stored, with its assigned identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlacedOrder {
    /// Identifier assigned by the order store.
    pub id: OrderId,
    /// The order contents.
    pub record: OrderRecord,
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
    use crate::ids::ProductId;
    use crate::money::Currency;

    #[test]
    fn test_order_record_creation() {
        let items = vec![
            CartLineItem::new(
                ProductId::new(1),
                "Vanilla & Cedar",
                Money::new(3500, Currency::USD),
                "img",
            ),
            CartLineItem::new(
                ProductId::new(5),
                "Summer Breeze",
                Money::new(2880, Currency::USD),
                "img",
            )
            .with_quantity(2),
        ];

        let record = OrderRecord::new(
            UserId::new(7),
            items,
            ShippingInfo::default(),
            Money::new(9260, Currency::USD),
            PaymentId::from("mock_payment_id_12345"),
        );

        assert_eq!(record.status, OrderStatus::Processing);
        assert_eq!(record.item_count(), 3);
        assert!(record.created_at > 0);
    }

    #[test]
    fn test_order_status_strings() {
        assert_eq!(OrderStatus::Processing.as_str(), "processing");
        assert_eq!(OrderStatus::default(), OrderStatus::Processing);
    }
}
