//! User account types.

use ember_commerce::ids::UserId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// User role for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// Regular customer.
    #[default]
    Customer,
    /// Store administrator.
    Admin,
}

impl Role {
    /// Get role as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
        }
    }

    /// Check if this role has at least the given permission level.
    pub fn has_permission(&self, required: Role) -> bool {
        self.level() >= required.level()
    }

    /// Get permission level (higher = more permissions).
    pub fn level(&self) -> u8 {
        match self {
            Role::Customer => 0,
            Role::Admin => 1,
        }
    }

    /// Check if this is an admin role.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "admin" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}

/// Public-facing account data (no secrets).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserAccount {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// User role.
    pub role: Role,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl UserAccount {
    /// Build the public account view from stored credentials.
    pub fn from_credentials(credentials: &UserCredentials) -> Self {
        Self {
            id: credentials.user_id,
            name: credentials.name.clone(),
            email: credentials.email.clone(),
            role: credentials.role,
            created_at: credentials.created_at,
        }
    }
}

/// Stored user credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCredentials {
    /// User ID.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Hashed password.
    pub password_hash: String,
    /// User role.
    pub role: Role,
    /// Number of failed login attempts since the last success.
    pub failed_attempts: i32,
    /// Timestamp when the account lock expires (if locked).
    pub locked_until: Option<i64>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl UserCredentials {
    /// Create new credentials with the customer role.
    pub fn new(
        user_id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = current_timestamp();
        Self {
            user_id,
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            role: Role::Customer,
            failed_attempts: 0,
            locked_until: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Check if account is currently locked.
    pub fn is_locked(&self) -> bool {
        if let Some(locked_until) = self.locked_until {
            current_timestamp() < locked_until
        } else {
            false
        }
    }

    /// Record a failed login attempt, locking the account once the
    /// attempt limit is reached.
    pub fn record_failed_attempt(&mut self, max_attempts: i32, lock_duration_secs: i64) {
        self.failed_attempts += 1;
        self.updated_at = current_timestamp();

        if self.failed_attempts >= max_attempts {
            self.locked_until = Some(current_timestamp() + lock_duration_secs);
        }
    }

    /// Reset failed attempts (on successful login).
    pub fn reset_failed_attempts(&mut self) {
        self.failed_attempts = 0;
        self.locked_until = None;
        self.updated_at = current_timestamp();
    }

    /// Update the password hash.
    pub fn set_password_hash(&mut self, hash: impl Into<String>) {
        self.password_hash = hash.into();
        self.updated_at = current_timestamp();
    }

    /// Update the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = current_timestamp();
    }

    /// Update the email address.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.updated_at = current_timestamp();
    }
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

    #[test]
    fn test_role_permissions() {
        assert!(Role::Admin.has_permission(Role::Customer));
        assert!(Role::Admin.has_permission(Role::Admin));
        assert!(!Role::Customer.has_permission(Role::Admin));
        assert!(Role::Admin.is_admin());
        assert!(!Role::Customer.is_admin());
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!(Role::from_str("admin"), Ok(Role::Admin));
        assert_eq!(Role::from_str("customer"), Ok(Role::Customer));
        assert!(Role::from_str("staff").is_err());
    }

    #[test]
    fn test_account_lockout() {
        let mut creds =
            UserCredentials::new(UserId::new(1), "Jane", "jane@example.com", "hash");
        assert!(!creds.is_locked());

        creds.record_failed_attempt(3, 900);
        creds.record_failed_attempt(3, 900);
        assert!(!creds.is_locked());

        creds.record_failed_attempt(3, 900);
        assert!(creds.is_locked());

        creds.reset_failed_attempts();
        assert!(!creds.is_locked());
        assert_eq!(creds.failed_attempts, 0);
    }

    #[test]
    fn test_account_view_hides_secrets() {
        let creds = UserCredentials::new(UserId::new(2), "Sam", "sam@example.com", "hash")
            .with_role(Role::Admin);
        let account = UserAccount::from_credentials(&creds);
        assert_eq!(account.id, UserId::new(2));
        assert_eq!(account.role, Role::Admin);
        assert_eq!(account.email, "sam@example.com");
    }
}
