//! Session store: the signed-in user and their address book.

use ember_auth::Role;
use ember_commerce::checkout::ShippingInfo;
use ember_commerce::ids::UserId;
use serde::{Deserialize, Serialize};

/// The signed-in user's profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountProfile {
    /// User ID.
    pub user_id: UserId,
    /// Email address.
    pub email: String,
    /// Display name.
    pub display_name: String,
    /// User role.
    pub role: Role,
    /// Unix timestamp of account creation.
    pub created_at: i64,
}

/// A shipping address saved to the account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedAddress {
    /// Identifier within the address book.
    pub id: u64,
    /// The address fields.
    pub info: ShippingInfo,
    /// The default shipping address for checkout prefill.
    pub is_default: bool,
}

/// Per-session auth state: who is signed in, their saved addresses, and
/// the last auth error shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionStore {
    current_user: Option<AccountProfile>,
    addresses: Vec<SavedAddress>,
    next_address_id: u64,
    error: Option<String>,
}

impl SessionStore {
    /// Create a signed-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful sign-in.
    pub fn sign_in(&mut self, profile: AccountProfile) {
        self.current_user = Some(profile);
        self.error = None;
    }

    /// Sign out, clearing the profile and address book.
    pub fn sign_out(&mut self) {
        self.current_user = None;
        self.addresses.clear();
        self.error = None;
    }

    pub fn is_signed_in(&self) -> bool {
        self.current_user.is_some()
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<&AccountProfile> {
        self.current_user.as_ref()
    }

    /// The signed-in user's id, if any.
    pub fn user_id(&self) -> Option<UserId> {
        self.current_user.as_ref().map(|u| u.user_id)
    }

    /// Save a shipping address. The first saved address becomes the
    /// default.
    pub fn add_address(&mut self, info: ShippingInfo) -> &SavedAddress {
        self.next_address_id += 1;
        let address = SavedAddress {
            id: self.next_address_id,
            info,
            is_default: self.addresses.is_empty(),
        };
        self.addresses.push(address);
        self.addresses.last().expect("just pushed")
    }

    /// All saved addresses.
    pub fn addresses(&self) -> &[SavedAddress] {
        &self.addresses
    }

    /// The default shipping address, if one is saved.
    pub fn default_address(&self) -> Option<&SavedAddress> {
        self.addresses.iter().find(|a| a.is_default)
    }

    /// Record a user-visible auth error.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Clear the auth error.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// The last auth error, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> AccountProfile {
        AccountProfile {
            user_id: UserId::new(7),
            email: "jane@example.com".into(),
            display_name: "Jane".into(),
            role: Role::Customer,
            created_at: 1_700_000_000,
        }
    }

    #[test]
    fn test_sign_in_and_out() {
        let mut session = SessionStore::new();
        assert!(!session.is_signed_in());

        session.set_error("Invalid email or password");
        session.sign_in(profile());
        assert!(session.is_signed_in());
        assert_eq!(session.user_id(), Some(UserId::new(7)));
        assert!(session.error().is_none(), "sign-in clears the error");

        session.sign_out();
        assert!(!session.is_signed_in());
        assert!(session.addresses().is_empty());
    }

    #[test]
    fn test_first_address_becomes_default() {
        let mut session = SessionStore::new();
        session.sign_in(profile());

        let first = ShippingInfo {
            first_name: "Jane".into(),
            ..ShippingInfo::default()
        };
        let second = ShippingInfo {
            first_name: "J.".into(),
            ..ShippingInfo::default()
        };

        session.add_address(first);
        session.add_address(second);

        assert_eq!(session.addresses().len(), 2);
        let default = session.default_address().unwrap();
        assert_eq!(default.info.first_name, "Jane");
        assert!(!session.addresses()[1].is_default);
    }
}
