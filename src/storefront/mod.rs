//! The storefront state container and its operations.
//!
//! [`Storefront`] is what a UI drives: it owns the local state (cart, order
//! history, address book, session, catalogue, resolved location) and the
//! remote service handles, and exposes the operations screens call. Remote
//! and local state follow the backend-first convention of the app this core
//! was built for: destructive cart updates propagate remote failures, while
//! additions fall back to the local cart so the user never loses a tap.

mod errors;

pub use errors::StorefrontError;

use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    addresses::{
        AddressBook, AddressesService, HttpAddressesService, NewAddress,
    },
    api::{ApiClient, ApiConfig},
    auth::{
        AuthService, AuthToken, HttpAuthService, Profile, Session, UserRole,
    },
    cart::{Cart, CartService, HttpCartService, SelectedAddons},
    catalog::{CatalogService, HttpCatalogService, Product},
    location::{GeoPoint, HttpLocationService, LocationService, ResolvedLocation},
    orders::{
        HttpOrdersService, Order, OrderHistory, OrderStatus, OrdersService, PaymentMethod,
        place_order,
    },
    uuids::{AddressUuid, LineUuid, OrderUuid},
};

/// Client-side state container for the storefront.
#[derive(Clone)]
pub struct Storefront {
    client: ApiClient,
    auth: Arc<dyn AuthService>,
    catalog: Arc<dyn CatalogService>,
    cart_api: Arc<dyn CartService>,
    orders_api: Arc<dyn OrdersService>,
    addresses_api: Arc<dyn AddressesService>,
    location_api: Arc<dyn LocationService>,

    session: Session,
    cart: Cart,
    orders: OrderHistory,
    addresses: AddressBook,
    products: Vec<Product>,
    location: Option<ResolvedLocation>,
    delivery_charges: u64,
    grand_total: u64,
    remote_cart_id: Option<String>,
}

impl Storefront {
    /// Build a storefront talking to the backend at `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client fails to initialize.
    pub fn new(config: ApiConfig) -> Result<Self, StorefrontError> {
        let client = ApiClient::new(config)?;

        Ok(Self::with_services(
            client.clone(),
            Arc::new(HttpAuthService::new(client.clone())),
            Arc::new(HttpCatalogService::new(client.clone())),
            Arc::new(HttpCartService::new(client.clone())),
            Arc::new(HttpOrdersService::new(client.clone())),
            Arc::new(HttpAddressesService::new(client.clone())),
            Arc::new(HttpLocationService::new(client)),
        ))
    }

    /// Build a storefront from explicit service implementations.
    #[must_use]
    #[expect(clippy::too_many_arguments, reason = "plain constructor wiring")]
    pub fn with_services(
        client: ApiClient,
        auth: Arc<dyn AuthService>,
        catalog: Arc<dyn CatalogService>,
        cart_api: Arc<dyn CartService>,
        orders_api: Arc<dyn OrdersService>,
        addresses_api: Arc<dyn AddressesService>,
        location_api: Arc<dyn LocationService>,
    ) -> Self {
        Self {
            client,
            auth,
            catalog,
            cart_api,
            orders_api,
            addresses_api,
            location_api,
            session: Session::new(),
            cart: Cart::new(),
            orders: OrderHistory::new(),
            addresses: AddressBook::new(),
            products: Vec::new(),
            location: None,
            delivery_charges: 0,
            grand_total: 0,
            remote_cart_id: None,
        }
    }

    // --- auth -----------------------------------------------------------

    /// Ask the backend to text an OTP to `phone`.
    ///
    /// # Errors
    ///
    /// Propagates the auth service error.
    #[tracing::instrument(skip(self))]
    pub async fn send_otp(&self, phone: &str) -> Result<(), StorefrontError> {
        self.auth.send_otp(phone).await?;

        info!("otp sent");

        Ok(())
    }

    /// Verify the OTP and log in.
    ///
    /// On success the token is stored in the session and installed on the
    /// API client, and the remote cart is fetched best-effort.
    ///
    /// # Errors
    ///
    /// Propagates the auth service error; a failed post-login cart fetch is
    /// only logged.
    #[tracing::instrument(skip(self, otp))]
    pub async fn verify_otp(&mut self, phone: &str, otp: &str) -> Result<(), StorefrontError> {
        let response = self.auth.verify_otp(phone, otp, UserRole::User).await?;

        let token = AuthToken::new(response.token);
        self.client.set_auth_token(token.clone());
        self.session.set_user(response.user, token);

        info!("login successful");

        if let Err(error) = self.refresh_cart().await {
            warn!(%error, "failed to fetch cart after login");
        }

        Ok(())
    }

    /// Log out.
    ///
    /// The session and the client token are cleared even when the remote
    /// call fails; the remote error is still reported.
    ///
    /// # Errors
    ///
    /// Propagates the remote logout error after clearing local state.
    #[tracing::instrument(skip(self))]
    pub async fn logout(&mut self) -> Result<(), StorefrontError> {
        let result = self.auth.logout().await;

        self.client.clear_auth_token();
        self.session.clear();
        self.cart.clear();
        self.remote_cart_id = None;

        if let Err(error) = &result {
            warn!(%error, "remote logout failed; local session cleared anyway");
        }

        Ok(result?)
    }

    /// Fetch the current user's profile and store it in the session.
    ///
    /// # Errors
    ///
    /// Propagates the auth service error.
    pub async fn fetch_profile(&mut self) -> Result<Profile, StorefrontError> {
        let profile = self.auth.fetch_profile().await?;

        self.session.set_profile(profile.clone());

        Ok(profile)
    }

    /// Update the current user's profile.
    ///
    /// # Errors
    ///
    /// Propagates the auth service error.
    pub async fn update_profile(&mut self, profile: &Profile) -> Result<(), StorefrontError> {
        let updated = self.auth.update_profile(profile).await?;

        self.session.set_profile(updated);

        Ok(())
    }

    // --- catalogue ------------------------------------------------------

    /// Refresh the product list from the backend.
    ///
    /// # Errors
    ///
    /// Propagates the catalogue service error.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_products(&mut self) -> Result<&[Product], StorefrontError> {
        self.products = self.catalog.list_products().await?;

        info!(count = self.products.len(), "catalogue refreshed");

        Ok(&self.products)
    }

    /// Search the catalogue without touching the stored product list.
    ///
    /// # Errors
    ///
    /// Propagates the catalogue service error.
    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>, StorefrontError> {
        Ok(self.catalog.search(query).await?)
    }

    // --- cart -----------------------------------------------------------

    /// Add a product to the cart.
    ///
    /// Requires a logged-in session. The addition is pushed to the remote
    /// cart first; when that fails the local addition still happens, so the
    /// cart never silently drops a tap.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::NotAuthenticated`] when logged out.
    #[tracing::instrument(skip(self, product, addons), fields(product = %product.id))]
    pub async fn add_to_cart(
        &mut self,
        product: Product,
        quantity: u32,
        addons: SelectedAddons,
    ) -> Result<LineUuid, StorefrontError> {
        if !self.session.is_logged_in() {
            return Err(StorefrontError::NotAuthenticated);
        }

        if let Err(error) = self.cart_api.add_item(&product.id, quantity, &addons).await {
            warn!(%error, "remote add failed; keeping the local addition");
        }

        Ok(self.cart.add(product, quantity, addons.into()))
    }

    /// Remove a cart line, remotely and locally.
    ///
    /// Lines that came from a cart fetch carry the backend's item id, and the
    /// remote removal uses it; lines that only ever existed locally fall back
    /// to the client id.
    ///
    /// # Errors
    ///
    /// Propagates the remote error (the local line is kept in that case) or
    /// [`crate::cart::CartError::LineNotFound`].
    #[tracing::instrument(skip(self))]
    pub async fn remove_cart_line(&mut self, line: LineUuid) -> Result<(), StorefrontError> {
        let item_id = self
            .cart
            .line(line)
            .ok_or(crate::cart::CartError::LineNotFound(line))?
            .remote_id()
            .map_or_else(|| line.to_string(), str::to_string);

        self.cart_api.remove_item(&item_id).await?;
        self.cart.remove_line(line)?;

        Ok(())
    }

    /// Change the quantity of a cart line, remotely and locally. Quantity is
    /// clamped to a minimum of one.
    ///
    /// # Errors
    ///
    /// Propagates the remote error or
    /// [`crate::cart::CartError::LineNotFound`].
    #[tracing::instrument(skip(self))]
    pub async fn set_cart_quantity(
        &mut self,
        line: LineUuid,
        quantity: u32,
    ) -> Result<(), StorefrontError> {
        let food_id = self
            .cart
            .line(line)
            .ok_or(crate::cart::CartError::LineNotFound(line))?
            .product()
            .id
            .clone();

        self.cart_api
            .update_quantity(&food_id, quantity.max(1))
            .await?;
        self.cart.set_quantity(line, quantity)?;

        Ok(())
    }

    /// Replace the add-on selection of a cart line, remotely and locally.
    ///
    /// # Errors
    ///
    /// Propagates the remote error or
    /// [`crate::cart::CartError::LineNotFound`].
    #[tracing::instrument(skip(self, addons))]
    pub async fn set_cart_addons(
        &mut self,
        line: LineUuid,
        addons: SelectedAddons,
    ) -> Result<(), StorefrontError> {
        let food_id = self
            .cart
            .line(line)
            .ok_or(crate::cart::CartError::LineNotFound(line))?
            .product()
            .id
            .clone();

        self.cart_api.update_addons(&food_id, &addons).await?;
        self.cart.set_customizations(line, addons.into())?;

        Ok(())
    }

    /// Replace the local cart with the backend's snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::NotAuthenticated`] when logged out, or the
    /// remote error.
    #[tracing::instrument(skip(self))]
    pub async fn refresh_cart(&mut self) -> Result<(), StorefrontError> {
        if !self.session.is_logged_in() {
            return Err(StorefrontError::NotAuthenticated);
        }

        let snapshot = self.cart_api.fetch_cart().await?;

        self.delivery_charges = snapshot.delivery_charges;
        self.grand_total = snapshot.grand_total;
        self.remote_cart_id = snapshot.id;

        let mut cart = Cart::new();
        for item in snapshot.items {
            let line = cart.add(item.product, item.quantity, item.customizations);
            cart.set_remote_id(line, item.remote_id);
        }
        self.cart = cart;

        info!(lines = self.cart.len(), "cart refreshed from backend");

        Ok(())
    }

    // --- checkout -------------------------------------------------------

    /// Place an order from the current cart.
    ///
    /// The cart must be non-empty and `address` must be in the book; both
    /// are checked before anything changes. On success the cart is emptied,
    /// the order is prepended to the history, and the backend is notified
    /// best-effort.
    ///
    /// # Errors
    ///
    /// [`crate::orders::OrderError::EmptyCart`] or
    /// [`crate::orders::OrderError::NoAddress`].
    #[tracing::instrument(skip(self))]
    pub async fn place_order(
        &mut self,
        address: AddressUuid,
        payment: PaymentMethod,
    ) -> Result<OrderUuid, StorefrontError> {
        let address = self
            .addresses
            .get(address)
            .ok_or(crate::orders::OrderError::NoAddress)?
            .clone();

        let order = place_order(&mut self.cart, address, payment, self.delivery_charges)?;
        let uuid = order.uuid();

        if let Err(error) = self.orders_api.create_order(&order).await {
            warn!(%error, order = %uuid, "failed to submit order to backend");
        }

        self.orders.record(order);

        info!(order = %uuid, "order placed");

        Ok(uuid)
    }

    /// Refresh the status of a placed order from the tracking endpoint.
    ///
    /// # Errors
    ///
    /// Propagates the remote error.
    pub async fn track_order(&mut self, order: OrderUuid) -> Result<OrderStatus, StorefrontError> {
        let status = self.orders_api.track_order(order).await?;

        self.orders.set_status(order, status);

        Ok(status)
    }

    // --- addresses ------------------------------------------------------

    /// Replace the address book with the backend's list.
    ///
    /// # Errors
    ///
    /// Propagates the remote error.
    pub async fn fetch_addresses(&mut self) -> Result<(), StorefrontError> {
        let addresses = self.addresses_api.list_addresses().await?;

        self.addresses.replace(addresses);

        Ok(())
    }

    /// Save a new address locally and push it to the backend best-effort.
    #[tracing::instrument(skip(self, new))]
    pub async fn add_address(&mut self, new: NewAddress) -> AddressUuid {
        let uuid = self.addresses.add(new);

        if let Some(address) = self.addresses.get(uuid)
            && let Err(error) = self.addresses_api.create_address(address).await
        {
            warn!(%error, address = %uuid, "failed to save address to backend");
        }

        uuid
    }

    /// Mark an address as the default.
    ///
    /// # Errors
    ///
    /// Returns [`crate::addresses::AddressBookError::NotFound`].
    pub fn set_default_address(&mut self, address: AddressUuid) -> Result<(), StorefrontError> {
        Ok(self.addresses.set_default(address)?)
    }

    /// Delete an address locally and on the backend (best-effort).
    ///
    /// # Errors
    ///
    /// Returns [`crate::addresses::AddressBookError::NotFound`].
    #[tracing::instrument(skip(self))]
    pub async fn remove_address(&mut self, address: AddressUuid) -> Result<(), StorefrontError> {
        self.addresses.remove(address)?;

        if let Err(error) = self.addresses_api.delete_address(address).await {
            warn!(%error, address = %address, "failed to delete address on backend");
        }

        Ok(())
    }

    // --- location & misc ------------------------------------------------

    /// Resolve coordinates to a readable address and remember the result.
    ///
    /// # Errors
    ///
    /// Propagates the location service error.
    pub async fn resolve_location(
        &mut self,
        point: GeoPoint,
    ) -> Result<&ResolvedLocation, StorefrontError> {
        let readable_address = self.location_api.reverse_geocode(point).await?;

        Ok(self.location.insert(ResolvedLocation {
            point,
            readable_address,
        }))
    }

    /// Store the delivery slot the user picked.
    pub fn set_delivery_time(&mut self, slot: impl Into<String>) {
        self.session.set_delivery_time(slot);
    }

    // --- accessors ------------------------------------------------------

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn orders(&self) -> &OrderHistory {
        &self.orders
    }

    #[must_use]
    pub fn addresses(&self) -> &AddressBook {
        &self.addresses
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn location(&self) -> Option<&ResolvedLocation> {
        self.location.as_ref()
    }

    /// Delivery charges reported by the last cart fetch, in minor units.
    #[must_use]
    pub fn delivery_charges(&self) -> u64 {
        self.delivery_charges
    }

    /// Grand total reported by the last cart fetch, in minor units.
    #[must_use]
    pub fn grand_total(&self) -> u64 {
        self.grand_total
    }

    /// Backend id of the cart, when one has been fetched.
    #[must_use]
    pub fn remote_cart_id(&self) -> Option<&str> {
        self.remote_cart_id.as_deref()
    }

    /// Look up a full order record by id.
    #[must_use]
    pub fn order(&self, uuid: OrderUuid) -> Option<&Order> {
        self.orders.get(uuid)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        api::{ApiError, ResponseBody},
        auth::{AuthServiceError, LoginResponse},
        cart::{CartServiceError, CartSnapshot, Customizations, SnapshotItem},
        catalog::AddOn,
        orders::OrderError,
        test::{Mocks, new_address, product},
    };

    use super::*;

    fn login_response() -> LoginResponse {
        LoginResponse {
            token: "session-token".to_string(),
            user: Some(Profile {
                id: Some("u1".to_string()),
                name: Some("Asha".to_string()),
                phone: Some("9999".to_string()),
                email: None,
            }),
        }
    }

    #[tokio::test]
    async fn verify_otp_sets_session_and_fetches_cart() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .auth
            .expect_verify_otp()
            .returning(|_, _, _| Ok(login_response()));
        mocks
            .cart
            .expect_fetch_cart()
            .times(1)
            .returning(|| Ok(CartSnapshot::default()));

        let mut storefront = mocks.into_storefront();
        storefront.verify_otp("9999", "1234").await?;

        assert!(storefront.session().is_logged_in());
        assert!(storefront.session().token().is_some());

        Ok(())
    }

    #[tokio::test]
    async fn verify_otp_survives_failed_cart_fetch() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .auth
            .expect_verify_otp()
            .returning(|_, _, _| Ok(login_response()));
        mocks
            .cart
            .expect_fetch_cart()
            .returning(|| Err(CartServiceError::Api(ApiError::Timeout)));

        let mut storefront = mocks.into_storefront();
        storefront.verify_otp("9999", "1234").await?;

        assert!(storefront.session().is_logged_in());

        Ok(())
    }

    #[tokio::test]
    async fn invalid_otp_leaves_session_logged_out() {
        let mut mocks = Mocks::new();

        mocks
            .auth
            .expect_verify_otp()
            .returning(|_, _, _| Err(AuthServiceError::InvalidOtp));

        let mut storefront = mocks.into_storefront();
        let result = storefront.verify_otp("9999", "0000").await;

        assert!(
            matches!(
                result,
                Err(StorefrontError::Auth(AuthServiceError::InvalidOtp))
            ),
            "expected InvalidOtp, got {result:?}"
        );
        assert!(!storefront.session().is_logged_in());
    }

    #[tokio::test]
    async fn logout_clears_session_even_when_remote_fails() -> TestResult {
        let mut mocks = Mocks::new();

        mocks.expect_login();
        mocks
            .auth
            .expect_logout()
            .returning(|| Err(AuthServiceError::Api(ApiError::Timeout)));

        let mut storefront = mocks.into_storefront();
        storefront.verify_otp("9999", "1234").await?;

        let result = storefront.logout().await;

        assert!(result.is_err(), "remote error should be reported");
        assert!(!storefront.session().is_logged_in());
        assert!(storefront.cart().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn add_to_cart_requires_login() {
        let mocks = Mocks::new();
        let mut storefront = mocks.into_storefront();

        let result = storefront
            .add_to_cart(product("b1", 26900), 1, SelectedAddons::default())
            .await;

        assert!(
            matches!(result, Err(StorefrontError::NotAuthenticated)),
            "expected NotAuthenticated, got {result:?}"
        );
        assert!(storefront.cart().is_empty());
    }

    #[tokio::test]
    async fn add_to_cart_falls_back_to_local_on_remote_failure() -> TestResult {
        let mut mocks = Mocks::new();

        mocks.expect_login();
        mocks
            .cart
            .expect_add_item()
            .returning(|_, _, _| Err(CartServiceError::Api(ApiError::Timeout)));

        let mut storefront = mocks.into_storefront();
        storefront.verify_otp("9999", "1234").await?;

        storefront
            .add_to_cart(product("b1", 26900), 2, SelectedAddons::default())
            .await?;

        assert_eq!(storefront.cart().len(), 1);
        assert_eq!(storefront.cart().total_quantity(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn add_to_cart_converts_addons_to_customizations() -> TestResult {
        let mut mocks = Mocks::new();

        mocks.expect_login();
        mocks.cart.expect_add_item().returning(|_, _, _| Ok(()));

        let mut storefront = mocks.into_storefront();
        storefront.verify_otp("9999", "1234").await?;

        let addons = SelectedAddons {
            dip: Some(AddOn {
                id: "d1".to_string(),
                name: "Garlic Mayonnaise".to_string(),
                price: 6900,
            }),
            beverage: None,
            drink: None,
        };

        let line = storefront
            .add_to_cart(product("b1", 26900), 1, addons)
            .await?;

        let line = storefront.cart().line(line).ok_or("line missing")?;
        assert_eq!(line.unit_price(), 26900 + 6900);

        Ok(())
    }

    #[tokio::test]
    async fn remove_cart_line_propagates_remote_failure() -> TestResult {
        let mut mocks = Mocks::new();

        mocks.expect_login();
        mocks.cart.expect_add_item().returning(|_, _, _| Ok(()));
        mocks.cart.expect_remove_item().returning(|_| {
            Err(CartServiceError::Api(ApiError::Status {
                status: 500,
                message: "boom".to_string(),
                body: ResponseBody::Text(String::new()),
            }))
        });

        let mut storefront = mocks.into_storefront();
        storefront.verify_otp("9999", "1234").await?;

        let line = storefront
            .add_to_cart(product("b1", 26900), 1, SelectedAddons::default())
            .await?;

        let result = storefront.remove_cart_line(line).await;

        assert!(result.is_err(), "remote failure should propagate");
        assert_eq!(storefront.cart().len(), 1, "local line must survive");

        Ok(())
    }

    #[tokio::test]
    async fn refresh_cart_replaces_local_state() -> TestResult {
        let mut mocks = Mocks::new();

        mocks.expect_login();
        mocks.cart.expect_fetch_cart().returning(|| {
            Ok(CartSnapshot {
                items: vec![SnapshotItem {
                    remote_id: Some("itm1".to_string()),
                    product: product("b3", 39900),
                    quantity: 2,
                    customizations: Customizations::default(),
                }],
                grand_total: 83800,
                delivery_charges: 4000,
                id: Some("c1".to_string()),
            })
        });

        let mut storefront = mocks.into_storefront();
        storefront.verify_otp("9999", "1234").await?;

        storefront.refresh_cart().await?;

        assert_eq!(storefront.cart().len(), 1);
        assert_eq!(storefront.cart().subtotal(), 2 * 39900);
        assert_eq!(storefront.delivery_charges(), 4000);
        assert_eq!(storefront.grand_total(), 83800);
        assert_eq!(storefront.remote_cart_id(), Some("c1"));

        Ok(())
    }

    #[tokio::test]
    async fn removing_a_fetched_line_sends_the_backend_item_id() -> TestResult {
        let mut mocks = Mocks::new();

        mocks.expect_login();
        mocks.cart.expect_fetch_cart().returning(|| {
            Ok(CartSnapshot {
                items: vec![SnapshotItem {
                    remote_id: Some("itm1".to_string()),
                    product: product("b1", 26900),
                    quantity: 1,
                    customizations: Customizations::default(),
                }],
                grand_total: 26900,
                delivery_charges: 0,
                id: Some("c1".to_string()),
            })
        });
        mocks
            .cart
            .expect_remove_item()
            .withf(|item_id| item_id == "itm1")
            .returning(|_| Ok(()));

        let mut storefront = mocks.into_storefront();
        storefront.verify_otp("9999", "1234").await?;
        storefront.refresh_cart().await?;

        let line = storefront
            .cart()
            .lines()
            .first()
            .ok_or("fetched line missing")?
            .uuid();

        storefront.remove_cart_line(line).await?;

        assert!(storefront.cart().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn set_cart_addons_reprices_the_line() -> TestResult {
        let mut mocks = Mocks::new();

        mocks.expect_login();
        mocks.cart.expect_add_item().returning(|_, _, _| Ok(()));
        mocks
            .cart
            .expect_update_addons()
            .withf(|food_id, _| food_id == "b1")
            .returning(|_, _| Ok(()));

        let mut storefront = mocks.into_storefront();
        storefront.verify_otp("9999", "1234").await?;

        let line = storefront
            .add_to_cart(product("b1", 26900), 2, SelectedAddons::default())
            .await?;

        let addons = SelectedAddons {
            dip: Some(AddOn {
                id: "d1".to_string(),
                name: "Garlic Mayonnaise".to_string(),
                price: 6900,
            }),
            beverage: None,
            drink: None,
        };
        storefront.set_cart_addons(line, addons).await?;

        let line = storefront.cart().line(line).ok_or("line missing")?;
        assert_eq!(line.unit_price(), 26900 + 6900);
        assert_eq!(storefront.cart().subtotal(), 2 * (26900 + 6900));

        Ok(())
    }

    #[tokio::test]
    async fn place_order_with_empty_cart_is_rejected() -> TestResult {
        let mut mocks = Mocks::new();
        mocks.expect_login();
        mocks.addresses.expect_create_address().returning(|_| Ok(()));

        let mut storefront = mocks.into_storefront();
        storefront.verify_otp("9999", "1234").await?;
        let address = storefront.add_address(new_address("Home")).await;

        let result = storefront.place_order(address, PaymentMethod::Cash).await;

        assert!(
            matches!(
                result,
                Err(StorefrontError::Order(OrderError::EmptyCart))
            ),
            "expected EmptyCart, got {result:?}"
        );
        assert!(storefront.orders().is_empty(), "no order may be recorded");

        Ok(())
    }

    #[tokio::test]
    async fn place_order_with_unknown_address_is_rejected() -> TestResult {
        let mut mocks = Mocks::new();

        mocks.expect_login();
        mocks.cart.expect_add_item().returning(|_, _, _| Ok(()));

        let mut storefront = mocks.into_storefront();
        storefront.verify_otp("9999", "1234").await?;
        storefront
            .add_to_cart(product("b1", 26900), 1, SelectedAddons::default())
            .await?;

        let result = storefront
            .place_order(AddressUuid::now_v7(), PaymentMethod::Cash)
            .await;

        assert!(
            matches!(result, Err(StorefrontError::Order(OrderError::NoAddress))),
            "expected NoAddress, got {result:?}"
        );
        assert_eq!(storefront.cart().len(), 1, "cart must be untouched");

        Ok(())
    }

    #[tokio::test]
    async fn place_order_empties_cart_and_records_snapshot() -> TestResult {
        let mut mocks = Mocks::new();

        mocks.expect_login();
        mocks.cart.expect_add_item().returning(|_, _, _| Ok(()));
        mocks.addresses.expect_create_address().returning(|_| Ok(()));
        mocks.orders.expect_create_order().returning(|_| Ok(()));

        let mut storefront = mocks.into_storefront();
        storefront.verify_otp("9999", "1234").await?;

        storefront
            .add_to_cart(product("b1", 26900), 2, SelectedAddons::default())
            .await?;
        let expected_subtotal = storefront.cart().subtotal();
        let address = storefront.add_address(new_address("Home")).await;

        let uuid = storefront.place_order(address, PaymentMethod::Upi).await?;

        assert!(storefront.cart().is_empty());
        assert_eq!(storefront.orders().len(), 1);

        let order = storefront.order(uuid).ok_or("order missing")?;
        assert_eq!(order.subtotal(), expected_subtotal);
        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.lines().first().map(|l| l.quantity), Some(2));
        assert_eq!(order.address().uuid, address);

        Ok(())
    }

    #[tokio::test]
    async fn place_order_survives_backend_rejection() -> TestResult {
        let mut mocks = Mocks::new();

        mocks.expect_login();
        mocks.cart.expect_add_item().returning(|_, _, _| Ok(()));
        mocks.addresses.expect_create_address().returning(|_| Ok(()));
        mocks
            .orders
            .expect_create_order()
            .returning(|_| Err(crate::orders::OrdersServiceError::Api(ApiError::Timeout)));

        let mut storefront = mocks.into_storefront();
        storefront.verify_otp("9999", "1234").await?;

        storefront
            .add_to_cart(product("b1", 26900), 1, SelectedAddons::default())
            .await?;
        let address = storefront.add_address(new_address("Home")).await;

        storefront.place_order(address, PaymentMethod::Cash).await?;

        assert_eq!(storefront.orders().len(), 1);
        assert!(storefront.cart().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn track_order_updates_history() -> TestResult {
        let mut mocks = Mocks::new();

        mocks.expect_login();
        mocks.cart.expect_add_item().returning(|_, _, _| Ok(()));
        mocks.addresses.expect_create_address().returning(|_| Ok(()));
        mocks.orders.expect_create_order().returning(|_| Ok(()));
        mocks
            .orders
            .expect_track_order()
            .returning(|_| Ok(OrderStatus::Preparing));

        let mut storefront = mocks.into_storefront();
        storefront.verify_otp("9999", "1234").await?;

        storefront
            .add_to_cart(product("b1", 26900), 1, SelectedAddons::default())
            .await?;
        let address = storefront.add_address(new_address("Home")).await;
        let uuid = storefront.place_order(address, PaymentMethod::Cash).await?;

        let status = storefront.track_order(uuid).await?;

        assert_eq!(status, OrderStatus::Preparing);
        assert_eq!(
            storefront.order(uuid).map(Order::status),
            Some(OrderStatus::Preparing)
        );

        Ok(())
    }

    #[tokio::test]
    async fn resolve_location_stores_the_result() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .location
            .expect_reverse_geocode()
            .returning(|_| Ok("12 MG Road, Bengaluru".to_string()));

        let mut storefront = mocks.into_storefront();

        let point = GeoPoint {
            latitude: 12.97,
            longitude: 77.59,
        };
        storefront.resolve_location(point).await?;

        let location = storefront.location().ok_or("location missing")?;
        assert_eq!(location.readable_address, "12 MG Road, Bengaluru");

        Ok(())
    }
}
