//! Shipping information.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Shipping details collected during checkout.
///
/// Every field is required before the shipping step can be submitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingInfo {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State/province.
    pub state: String,
    /// Postal/ZIP code.
    pub zip_code: String,
    /// Country.
    pub country: String,
    /// Phone number.
    pub phone: String,
}

impl ShippingInfo {
    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check if every required field is non-empty.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of required fields that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.first_name.trim().is_empty() {
            missing.push("first name");
        }
        if self.last_name.trim().is_empty() {
            missing.push("last name");
        }
        if self.address.trim().is_empty() {
            missing.push("address");
        }
        if self.city.trim().is_empty() {
            missing.push("city");
        }
        if self.state.trim().is_empty() {
            missing.push("state");
        }
        if self.zip_code.trim().is_empty() {
            missing.push("zip code");
        }
        if self.country.trim().is_empty() {
            missing.push("country");
        }
        if self.phone.trim().is_empty() {
            missing.push("phone");
        }
        missing
    }

    /// Validate that all required fields are filled in.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CommerceError::ValidationError(format!(
                "missing {}",
                missing.join(", ")
            )))
        }
    }
}

impl Default for ShippingInfo {
    /// An empty form. The country is prefilled the way the checkout
    /// form presents it.
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: "United States".to_string(),
            phone: String::new(),
        }
    }
}
