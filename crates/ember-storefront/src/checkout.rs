//! Checkout flow state machine.
//!
//! A linear two-step wizard over the session stores: collect shipping
//! details, take payment through the gateway, then write the order and
//! clear the cart. One flow instance drives one checkout attempt.

use crate::cart::CartStore;
use crate::error::StoreError;
use crate::remote::{OrderService, PaymentGateway};
use crate::session::SessionStore;
use crate::ui::{Severity, UiStore};
use ember_commerce::checkout::{OrderRecord, ShippingInfo};
use ember_commerce::ids::OrderId;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Stages of the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutStage {
    /// Collecting shipping information.
    ShippingEntry,
    /// Payment form shown, awaiting the gateway.
    PaymentEntry,
    /// Payment confirmed, order write in flight or failed awaiting a
    /// manual retry.
    PaymentProcessing,
    /// Terminal: order placed and cart cleared.
    OrderPlaced,
}

impl CheckoutStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStage::ShippingEntry => "shipping",
            CheckoutStage::PaymentEntry => "payment",
            CheckoutStage::PaymentProcessing => "processing",
            CheckoutStage::OrderPlaced => "placed",
        }
    }

    /// Get the step number shown in the progress header (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStage::ShippingEntry => 1,
            CheckoutStage::PaymentEntry => 2,
            CheckoutStage::PaymentProcessing => 2,
            CheckoutStage::OrderPlaced => 3,
        }
    }
}

/// How a completed checkout finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Order persisted under this id.
    Completed { order_id: OrderId },
    /// No user was signed in, so nothing was persisted; the cart was
    /// still cleared and success reported, matching the shipped
    /// storefront behavior.
    CompletedWithoutOrder,
}

/// Driver for one checkout attempt.
///
/// Constructed via [`CheckoutFlow::begin`], which enforces the
/// empty-cart guard: a flow over an empty cart is never created and the
/// caller should redirect to the product listing instead.
#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    stage: CheckoutStage,
    shipping: ShippingInfo,
}

impl CheckoutFlow {
    /// Start a checkout for a non-empty cart.
    ///
    /// Returns [`StoreError::CartEmpty`] if the cart has no items;
    /// `ShippingEntry` is never reached in that case.
    pub fn begin(cart: &CartStore) -> Result<Self, StoreError> {
        if cart.is_empty() {
            return Err(StoreError::CartEmpty);
        }
        Ok(Self {
            stage: CheckoutStage::ShippingEntry,
            shipping: ShippingInfo::default(),
        })
    }

    /// Current stage.
    pub fn stage(&self) -> CheckoutStage {
        self.stage
    }

    /// Shipping details collected so far.
    pub fn shipping(&self) -> &ShippingInfo {
        &self.shipping
    }

    /// Check if the flow reached its terminal stage.
    pub fn is_complete(&self) -> bool {
        self.stage == CheckoutStage::OrderPlaced
    }

    /// Submit the shipping form and advance to the payment step.
    ///
    /// Rejected with [`StoreError::Validation`] while any required
    /// field is empty; this is form validation, not a system error, and
    /// the flow stays in `ShippingEntry`.
    pub fn submit_shipping(&mut self, info: ShippingInfo) -> Result<(), StoreError> {
        if self.stage != CheckoutStage::ShippingEntry {
            return Err(StoreError::InvalidTransition {
                from: self.stage.as_str(),
                to: CheckoutStage::PaymentEntry.as_str(),
            });
        }

        let missing = info.missing_fields();
        if !missing.is_empty() {
            return Err(StoreError::Validation(format!(
                "missing {}",
                missing.join(", ")
            )));
        }

        self.shipping = info;
        self.stage = CheckoutStage::PaymentEntry;
        Ok(())
    }

    /// Cancel out of the payment step, back to the shipping form.
    /// Shipping data is retained.
    pub fn cancel_payment(&mut self) -> Result<(), StoreError> {
        match self.stage {
            CheckoutStage::PaymentEntry | CheckoutStage::PaymentProcessing => {
                self.stage = CheckoutStage::ShippingEntry;
                Ok(())
            }
            other => Err(StoreError::InvalidTransition {
                from: other.as_str(),
                to: CheckoutStage::ShippingEntry.as_str(),
            }),
        }
    }

    /// Take payment and place the order.
    ///
    /// Charges the gateway with the cart's current total. On payment
    /// success the flow enters `PaymentProcessing` and, if a user is
    /// signed in, writes an [`OrderRecord`]; with no signed-in user the
    /// write is skipped and the outcome says so. On success the cart is
    /// cleared, a success notification is shown, and the flow reaches
    /// `OrderPlaced`. On an order-write failure an error notification is
    /// shown and the flow stays in `PaymentProcessing`; there is no
    /// automatic retry — the user re-submits payment.
    ///
    /// Taking `&mut self` and `&mut` stores means two submissions of
    /// one flow cannot run concurrently. Separate sessions (browser
    /// tabs) hold separate stores and are intentionally unsynchronized.
    pub async fn submit_payment(
        &mut self,
        cart: &mut CartStore,
        ui: &mut UiStore,
        session: &SessionStore,
        gateway: &dyn PaymentGateway,
        orders: &dyn OrderService,
    ) -> Result<CheckoutOutcome, StoreError> {
        match self.stage {
            CheckoutStage::PaymentEntry | CheckoutStage::PaymentProcessing => {}
            other => {
                return Err(StoreError::InvalidTransition {
                    from: other.as_str(),
                    to: CheckoutStage::PaymentProcessing.as_str(),
                });
            }
        }

        let total = cart.total_amount();
        let receipt = match gateway.charge(total).await {
            Ok(receipt) => receipt,
            Err(e) => {
                warn!(error = %e, amount = total.amount_cents, "payment charge failed");
                ui.show_notification("Payment failed. Please try again.", Severity::Error);
                return Err(e.into());
            }
        };
        self.stage = CheckoutStage::PaymentProcessing;

        let outcome = match session.user_id() {
            Some(user_id) => {
                let record = OrderRecord::new(
                    user_id,
                    cart.items().to_vec(),
                    self.shipping.clone(),
                    total,
                    receipt.payment_id,
                );
                match orders.create_order(record).await {
                    Ok(order_id) => {
                        info!(%order_id, %user_id, amount = total.amount_cents, "order placed");
                        CheckoutOutcome::Completed { order_id }
                    }
                    Err(e) => {
                        warn!(error = %e, %user_id, "order write failed");
                        ui.show_notification(
                            "Failed to place order. Please try again.",
                            Severity::Error,
                        );
                        return Err(e.into());
                    }
                }
            }
            None => {
                warn!("checkout completed with no signed-in user; order not persisted");
                CheckoutOutcome::CompletedWithoutOrder
            }
        };

        cart.clear();
        ui.show_notification("Order placed successfully!", Severity::Success);
        self.stage = CheckoutStage::OrderPlaced;
        Ok(outcome)
    }
}
