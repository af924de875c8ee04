//! Shared fixtures for storefront-level tests.

use std::sync::Arc;

use crate::{
    addresses::{AddressKind, MockAddressesService, NewAddress},
    api::{ApiClient, ApiConfig},
    auth::{LoginResponse, MockAuthService},
    cart::{CartSnapshot, MockCartService},
    catalog::{MockCatalogService, Product},
    location::MockLocationService,
    orders::MockOrdersService,
    storefront::Storefront,
};

/// One mock per remote service, ready to wire into a [`Storefront`].
pub struct Mocks {
    pub auth: MockAuthService,
    pub catalog: MockCatalogService,
    pub cart: MockCartService,
    pub orders: MockOrdersService,
    pub addresses: MockAddressesService,
    pub location: MockLocationService,
}

impl Mocks {
    pub fn new() -> Self {
        Self {
            auth: MockAuthService::new(),
            catalog: MockCatalogService::new(),
            cart: MockCartService::new(),
            orders: MockOrdersService::new(),
            addresses: MockAddressesService::new(),
            location: MockLocationService::new(),
        }
    }

    /// Expect one successful OTP login, including the post-login cart fetch.
    ///
    /// The cart expectation is bounded so tests can stack their own
    /// `fetch_cart` expectations afterwards.
    pub fn expect_login(&mut self) {
        self.auth.expect_verify_otp().times(1).returning(|_, _, _| {
            Ok(LoginResponse {
                token: "session-token".to_string(),
                user: None,
            })
        });
        self.cart
            .expect_fetch_cart()
            .times(1)
            .returning(|| Ok(CartSnapshot::default()));
    }

    pub fn into_storefront(self) -> Storefront {
        let client = ApiClient::new(ApiConfig::default()).expect("client");

        Storefront::with_services(
            client,
            Arc::new(self.auth),
            Arc::new(self.catalog),
            Arc::new(self.cart),
            Arc::new(self.orders),
            Arc::new(self.addresses),
            Arc::new(self.location),
        )
    }
}

/// A catalogue product with empty add-on menus.
pub fn product(id: &str, price: u64) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        description: String::new(),
        price,
        image: None,
        dips: Vec::new(),
        beverages: Vec::new(),
        drinks: Vec::new(),
        nutrition: None,
    }
}

/// A plain home address labelled `name`.
pub fn new_address(name: &str) -> NewAddress {
    NewAddress {
        name: name.to_string(),
        phone: "9999".to_string(),
        street: "123 Main Street".to_string(),
        city: "City".to_string(),
        state: "State".to_string(),
        pincode: "12345".to_string(),
        kind: AddressKind::Home,
        is_default: false,
    }
}
