//! Boundary collaborators: payment gateway and order service.
//!
//! The checkout flow talks to these through traits so the shipped mock
//! gateway and in-memory order store can be swapped for real services
//! without touching the flow.

use async_trait::async_trait;
use dashmap::DashMap;
use ember_commerce::checkout::{OrderRecord, PlacedOrder};
use ember_commerce::ids::{OrderId, PaymentId, UserId};
use ember_commerce::money::Money;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use thiserror::Error;

/// Failure from a boundary collaborator.
#[derive(Error, Debug, Clone)]
pub enum RemoteError {
    /// Payment was declined or the gateway failed.
    #[error("payment failed: {0}")]
    Payment(String),

    /// The order store rejected or lost the write.
    #[error("order write failed: {0}")]
    OrderWrite(String),

    /// The collaborator is unreachable.
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

/// Confirmation returned by a successful charge.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    /// Gateway payment reference.
    pub payment_id: PaymentId,
    /// Amount charged.
    pub amount: Money,
}

/// Payment collaborator.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charge the given amount, returning a receipt on success.
    async fn charge(&self, amount: Money) -> Result<PaymentReceipt, RemoteError>;
}

/// Order persistence collaborator.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Write an order record, returning its assigned id. Called once
    /// per successful payment; the flow does not retry on failure.
    async fn create_order(&self, record: OrderRecord) -> Result<OrderId, RemoteError>;

    /// A user's placed orders, most recent first.
    async fn orders_for_user(&self, user_id: UserId) -> Result<Vec<PlacedOrder>, RemoteError>;
}

/// Simulated delay before the mock gateway resolves.
pub const MOCK_PAYMENT_DELAY: Duration = Duration::from_millis(1500);

/// Payment reference the mock gateway always returns.
pub const MOCK_PAYMENT_ID: &str = "mock_payment_id_12345";

/// A gateway that always approves after a fixed simulated delay.
#[derive(Debug, Clone)]
pub struct MockGateway {
    delay: Duration,
}

impl MockGateway {
    /// Mock gateway with the standard 1500 ms delay.
    pub fn new() -> Self {
        Self {
            delay: MOCK_PAYMENT_DELAY,
        }
    }

    /// Mock gateway with a custom delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn charge(&self, amount: Money) -> Result<PaymentReceipt, RemoteError> {
        tokio::time::sleep(self.delay).await;
        Ok(PaymentReceipt {
            payment_id: PaymentId::from(MOCK_PAYMENT_ID),
            amount,
        })
    }
}

/// In-memory reference implementation of [`OrderService`].
#[derive(Debug, Default)]
pub struct InMemoryOrders {
    orders: DashMap<u64, PlacedOrder>,
    next_id: AtomicU64,
}

impl InMemoryOrders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Look up a stored order.
    pub fn get(&self, id: OrderId) -> Option<PlacedOrder> {
        self.orders.get(&id.value()).map(|o| o.clone())
    }
}

#[async_trait]
impl OrderService for InMemoryOrders {
    async fn create_order(&self, record: OrderRecord) -> Result<OrderId, RemoteError> {
        let id = OrderId::new(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        self.orders.insert(id.value(), PlacedOrder { id, record });
        Ok(id)
    }

    async fn orders_for_user(&self, user_id: UserId) -> Result<Vec<PlacedOrder>, RemoteError> {
        let mut orders: Vec<PlacedOrder> = self
            .orders
            .iter()
            .filter(|entry| entry.record.user_id == user_id)
            .map(|entry| entry.clone())
            .collect();
        // Newest first; id order breaks created_at ties within one second
        orders.sort_by(|a, b| {
            b.record
                .created_at
                .cmp(&a.record.created_at)
                .then(b.id.value().cmp(&a.id.value()))
        });
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_commerce::cart::CartLineItem;
    use ember_commerce::checkout::ShippingInfo;
    use ember_commerce::ids::ProductId;
    use ember_commerce::money::Currency;

    fn record(user: u64, cents: i64) -> OrderRecord {
        OrderRecord::new(
            UserId::new(user),
            vec![CartLineItem::new(
                ProductId::new(1),
                "Vanilla & Cedar",
                Money::new(cents, Currency::USD),
                "img",
            )],
            ShippingInfo::default(),
            Money::new(cents, Currency::USD),
            PaymentId::from(MOCK_PAYMENT_ID),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_gateway_resolves_after_delay() {
        let gateway = MockGateway::new();
        let charge = gateway.charge(Money::new(3500, Currency::USD));
        tokio::pin!(charge);

        // Paused time: the future is not ready before the simulated delay
        let receipt = charge.await.unwrap();
        assert_eq!(receipt.payment_id.as_str(), MOCK_PAYMENT_ID);
        assert_eq!(receipt.amount, Money::new(3500, Currency::USD));
    }

    #[tokio::test]
    async fn test_in_memory_orders_assigns_sequential_ids() {
        let orders = InMemoryOrders::new();
        let first = orders.create_order(record(1, 3500)).await.unwrap();
        let second = orders.create_order(record(1, 2880)).await.unwrap();

        assert_eq!(first, OrderId::new(1));
        assert_eq!(second, OrderId::new(2));
        assert_eq!(orders.len(), 2);
        assert!(orders.get(first).is_some());
    }

    #[tokio::test]
    async fn test_order_history_is_newest_first_and_per_user() {
        let orders = InMemoryOrders::new();
        orders.create_order(record(1, 3500)).await.unwrap();
        orders.create_order(record(2, 4200)).await.unwrap();
        orders.create_order(record(1, 2880)).await.unwrap();

        let history = orders.orders_for_user(UserId::new(1)).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, OrderId::new(3));
        assert_eq!(history[1].id, OrderId::new(1));
    }
}
