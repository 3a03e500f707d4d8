//! UI coordination store.
//!
//! Session-scoped UI flags, independent of cart/business data: panel and
//! modal visibility, the single notification slot, named loading flags,
//! and transient search/filter state. All mutations are pure and
//! synchronous; the notification auto-hide timer lives with whatever
//! owns the notification display (see [`crate::notify`]), never here.

use ember_commerce::catalog::{Product, SortKey};
use ember_commerce::money::Money;
use serde::{Deserialize, Serialize};

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

/// Which form the auth modal shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AuthForm {
    #[default]
    Login,
    Register,
    Reset,
}

impl AuthForm {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthForm::Login => "login",
            AuthForm::Register => "register",
            AuthForm::Reset => "reset",
        }
    }
}

/// Named loading flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadingKey {
    Global,
    Products,
    Cart,
    Checkout,
    Auth,
}

/// A transient user-facing status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Human-readable message.
    pub message: String,
    /// Severity, which drives presentation.
    pub severity: Severity,
}

/// Active listing filter selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ActiveFilters {
    /// Category filter, if any.
    pub category: Option<String>,
    /// Minimum price, if set.
    pub price_min: Option<Money>,
    /// Maximum price, if set.
    pub price_max: Option<Money>,
    /// Sort selection, if any.
    pub sort: Option<SortKey>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
struct LoadingFlags {
    global: bool,
    products: bool,
    cart: bool,
    checkout: bool,
    auth: bool,
}

/// Session-scoped UI state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UiStore {
    is_cart_open: bool,
    is_auth_modal_open: bool,
    auth_form: AuthForm,
    notification: Option<Notification>,
    is_mobile_menu_open: bool,
    loading: LoadingFlags,
    search_query: String,
    search_results: Vec<Product>,
    filters: ActiveFilters,
}

impl UiStore {
    /// Create the initial state: everything closed, nothing loading.
    pub fn new() -> Self {
        Self::default()
    }

    // Cart panel

    pub fn toggle_cart(&mut self) {
        self.is_cart_open = !self.is_cart_open;
    }

    pub fn set_cart_open(&mut self, open: bool) {
        self.is_cart_open = open;
    }

    pub fn is_cart_open(&self) -> bool {
        self.is_cart_open
    }

    // Auth modal

    pub fn toggle_auth_modal(&mut self) {
        self.is_auth_modal_open = !self.is_auth_modal_open;
    }

    pub fn set_auth_modal_open(&mut self, open: bool) {
        self.is_auth_modal_open = open;
    }

    pub fn is_auth_modal_open(&self) -> bool {
        self.is_auth_modal_open
    }

    pub fn set_auth_form(&mut self, form: AuthForm) {
        self.auth_form = form;
    }

    pub fn auth_form(&self) -> AuthForm {
        self.auth_form
    }

    // Mobile menu

    pub fn toggle_mobile_menu(&mut self) {
        self.is_mobile_menu_open = !self.is_mobile_menu_open;
    }

    pub fn set_mobile_menu_open(&mut self, open: bool) {
        self.is_mobile_menu_open = open;
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.is_mobile_menu_open
    }

    // Notification slot

    /// Show a notification, replacing any currently displayed one.
    /// Whoever owns the display must restart its auto-hide timer.
    pub fn show_notification(&mut self, message: impl Into<String>, severity: Severity) {
        self.notification = Some(Notification {
            message: message.into(),
            severity,
        });
    }

    /// Dismiss the current notification, if any.
    pub fn hide_notification(&mut self) {
        self.notification = None;
    }

    /// The currently visible notification, if any.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    // Loading flags

    pub fn set_loading(&mut self, key: LoadingKey, value: bool) {
        match key {
            LoadingKey::Global => self.loading.global = value,
            LoadingKey::Products => self.loading.products = value,
            LoadingKey::Cart => self.loading.cart = value,
            LoadingKey::Checkout => self.loading.checkout = value,
            LoadingKey::Auth => self.loading.auth = value,
        }
    }

    pub fn is_loading(&self, key: LoadingKey) -> bool {
        match key {
            LoadingKey::Global => self.loading.global,
            LoadingKey::Products => self.loading.products,
            LoadingKey::Cart => self.loading.cart,
            LoadingKey::Checkout => self.loading.checkout,
            LoadingKey::Auth => self.loading.auth,
        }
    }

    // Search

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_results(&mut self, results: Vec<Product>) {
        self.search_results = results;
    }

    pub fn search_results(&self) -> &[Product] {
        &self.search_results
    }

    // Filters

    pub fn set_category_filter(&mut self, category: Option<String>) {
        self.filters.category = category;
    }

    pub fn set_price_filter(&mut self, min: Option<Money>, max: Option<Money>) {
        self.filters.price_min = min;
        self.filters.price_max = max;
    }

    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.filters.sort = sort;
    }

    /// Reset category, price range, and sort.
    pub fn clear_filters(&mut self) {
        self.filters = ActiveFilters::default();
    }

    pub fn filters(&self) -> &ActiveFilters {
        &self.filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_commerce::money::Currency;

    #[test]
    fn test_initial_state() {
        let ui = UiStore::new();
        assert!(!ui.is_cart_open());
        assert!(!ui.is_auth_modal_open());
        assert_eq!(ui.auth_form(), AuthForm::Login);
        assert!(ui.notification().is_none());
        for key in [
            LoadingKey::Global,
            LoadingKey::Products,
            LoadingKey::Cart,
            LoadingKey::Checkout,
            LoadingKey::Auth,
        ] {
            assert!(!ui.is_loading(key));
        }
    }

    #[test]
    fn test_toggles() {
        let mut ui = UiStore::new();
        ui.toggle_cart();
        assert!(ui.is_cart_open());
        ui.toggle_cart();
        assert!(!ui.is_cart_open());

        ui.set_auth_modal_open(true);
        ui.set_auth_form(AuthForm::Register);
        assert!(ui.is_auth_modal_open());
        assert_eq!(ui.auth_form(), AuthForm::Register);

        ui.toggle_mobile_menu();
        assert!(ui.is_mobile_menu_open());
    }

    #[test]
    fn test_new_notification_replaces_current() {
        let mut ui = UiStore::new();
        ui.show_notification("Order placed successfully!", Severity::Success);
        ui.show_notification("Failed to place order. Please try again.", Severity::Error);

        let visible = ui.notification().unwrap();
        assert_eq!(visible.severity, Severity::Error);
        assert_eq!(visible.message, "Failed to place order. Please try again.");

        ui.hide_notification();
        assert!(ui.notification().is_none());
    }

    #[test]
    fn test_loading_flags_are_independent() {
        let mut ui = UiStore::new();
        ui.set_loading(LoadingKey::Checkout, true);
        assert!(ui.is_loading(LoadingKey::Checkout));
        assert!(!ui.is_loading(LoadingKey::Global));
        ui.set_loading(LoadingKey::Checkout, false);
        assert!(!ui.is_loading(LoadingKey::Checkout));
    }

    #[test]
    fn test_clear_filters_resets_all_three() {
        let mut ui = UiStore::new();
        ui.set_category_filter(Some("Seasonal".into()));
        ui.set_price_filter(
            Some(Money::new(2000, Currency::USD)),
            Some(Money::new(5000, Currency::USD)),
        );
        ui.set_sort(Some(SortKey::PriceAsc));

        ui.clear_filters();

        assert_eq!(ui.filters(), &ActiveFilters::default());
    }
}
