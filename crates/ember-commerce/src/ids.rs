//! Typed identifiers for commerce entities.
//!
//! Products, users, and orders are keyed by integer identifiers assigned by
//! the owning store. Wrapping them in newtypes keeps a `ProductId` from being
//! passed where a `UserId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines a typed integer identifier.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates an identifier from a raw value.
            pub fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the raw value.
            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

define_id!(
    /// Identifies a product in the catalog.
    ProductId
);
define_id!(
    /// Identifies a registered user.
    UserId
);
define_id!(
    /// Identifies a placed order.
    OrderId
);

/// Opaque payment reference returned by a payment gateway.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(String);

impl PaymentId {
    /// Creates a payment id from a gateway reference string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PaymentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for PaymentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_equality() {
        assert_eq!(ProductId::new(5), ProductId::new(5));
        assert_ne!(ProductId::new(5), ProductId::new(6));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(OrderId::new(42).to_string(), "42");
        assert_eq!(UserId::from(7).value(), 7);
    }

    #[test]
    fn test_payment_id_from_str() {
        let id = PaymentId::from("mock_payment_id_12345");
        assert_eq!(id.as_str(), "mock_payment_id_12345");
        assert_eq!(id.to_string(), "mock_payment_id_12345");
    }

    #[test]
    fn test_id_ordering() {
        assert!(ProductId::new(1) < ProductId::new(2));
    }
}
