//! Session-scoped storefront state for the Ember storefront.
//!
//! Each browser session owns one instance of each store, constructed
//! explicitly and passed to whatever drives it — there are no globals.
//! Store mutations are synchronous `&mut self` methods, atomic per call;
//! the only async pieces are the checkout flow's collaborator calls and
//! the notification auto-hide timer.
//!
//! - [`cart::CartStore`]: line items plus derived totals
//! - [`ui::UiStore`]: panels, auth modal, notification slot, loading
//!   flags, search and filter state
//! - [`checkout::CheckoutFlow`]: shipping → payment → order placement
//! - [`remote`]: payment gateway and order service collaborators
//! - [`session::SessionStore`]: current user and address book
//! - [`wishlist::WishlistStore`] and [`catalog::CatalogView`]: saved
//!   products and the loaded product list

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod notify;
pub mod remote;
pub mod session;
pub mod ui;
pub mod wishlist;

pub use error::StoreError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::CartStore;
    pub use crate::catalog::CatalogView;
    pub use crate::checkout::{CheckoutFlow, CheckoutOutcome, CheckoutStage};
    pub use crate::error::StoreError;
    pub use crate::notify::AutoHideTimer;
    pub use crate::remote::{
        InMemoryOrders, MockGateway, OrderService, PaymentGateway, PaymentReceipt, RemoteError,
    };
    pub use crate::session::{AccountProfile, SessionStore};
    pub use crate::ui::{AuthForm, LoadingKey, Notification, Severity, UiStore};
    pub use crate::wishlist::WishlistStore;
    pub use ember_commerce::prelude::*;
}
