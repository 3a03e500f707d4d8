//! Storefront state errors.

use crate::remote::RemoteError;
use thiserror::Error;

/// Errors surfaced by the storefront stores and the checkout flow.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The checkout flow was entered with an empty cart; the caller
    /// should redirect to the product listing.
    #[error("cart is empty")]
    CartEmpty,

    /// Form validation failed (e.g. missing shipping fields).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Operation not allowed in the current checkout stage.
    #[error("invalid checkout transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    /// A boundary collaborator failed.
    #[error(transparent)]
    Remote(#[from] RemoteError),
}
