//! Checkout types: shipping details and order records.

mod order;
mod shipping;

pub use order::{OrderRecord, OrderStatus, PlacedOrder};
pub use shipping::ShippingInfo;
