//! API configuration and endpoint table.

use std::time::Duration;

/// Configuration for the storefront backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to, e.g.
    /// `"http://localhost:3000/api"`.
    pub base_url: String,

    /// Hard deadline for a single request, including reading the body.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ApiConfig {
    /// Create a configuration for the given base URL with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Backend endpoint paths, relative to [`ApiConfig::base_url`].
pub mod endpoints {
    /// Request an OTP for a phone number.
    pub const SEND_OTP: &str = "/auth/send-otp";
    /// Exchange phone + OTP for a session token.
    pub const VERIFY_OTP: &str = "/auth/verify-otp";
    /// Invalidate the current session.
    pub const LOGOUT: &str = "/auth/logout";
    /// Exchange a refresh token for a new session token.
    pub const REFRESH_TOKEN: &str = "/auth/refresh";

    /// Current user's profile.
    pub const USER_PROFILE: &str = "/user/profile";

    /// Full food catalogue.
    pub const PRODUCTS: &str = "/food";
    /// Catalogue search.
    pub const SEARCH_PRODUCTS: &str = "/food/search";

    /// The authenticated user's cart.
    pub const GET_CART: &str = "/cart";
    /// Add an item to the cart.
    pub const ADD_TO_CART: &str = "/cart/add";
    /// Change the quantity of a cart item.
    pub const UPDATE_CART_QTY: &str = "/cart/update-qty";
    /// Replace the add-on selection of a cart item.
    pub const UPDATE_CART_ADDONS: &str = "/cart/update-addons";
    /// Empty the cart.
    pub const CLEAR_CART: &str = "/cart/clear";

    /// Order history.
    pub const ORDERS: &str = "/orders";
    /// Place a new order.
    pub const CREATE_ORDER: &str = "/orders";

    /// The user's saved addresses.
    pub const ADDRESSES: &str = "/addresses";

    /// Resolve a free-form address to coordinates.
    pub const GEOCODE: &str = "/location/geocode";
    /// Resolve coordinates to a readable address.
    pub const REVERSE_GEOCODE: &str = "/location/reverse-geocode";

    /// Detail endpoint for a single food item.
    #[must_use]
    pub fn product_detail(id: &str) -> String {
        format!("/food/{id}")
    }

    /// Remove a single cart item.
    #[must_use]
    pub fn remove_cart_item(id: &str) -> String {
        format!("/cart/remove/{id}")
    }

    /// Detail endpoint for a single order.
    #[must_use]
    pub fn order_detail(id: &str) -> String {
        format!("/orders/{id}")
    }

    /// Live status of a single order.
    #[must_use]
    pub fn track_order(id: &str) -> String {
        format!("/orders/{id}/track")
    }

    /// Detail endpoint for a single address.
    #[must_use]
    pub fn address_detail(id: &str) -> String {
        format!("/addresses/{id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = ApiConfig::default();

        assert_eq!(config.base_url, "http://localhost:3000/api");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn parameterised_endpoints_interpolate_ids() {
        assert_eq!(endpoints::product_detail("b1"), "/food/b1");
        assert_eq!(endpoints::track_order("o1"), "/orders/o1/track");
    }
}
