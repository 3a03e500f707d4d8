//! Authentication for the Ember storefront.
//!
//! Provides user accounts, password hashing, and opaque auth tokens.

mod error;
mod password;
mod token;
mod user;

pub use error::AuthError;
pub use password::{hash_password, validate_password, verify_password};
pub use token::{AuthToken, TokenType};
pub use user::{Role, UserAccount, UserCredentials};
