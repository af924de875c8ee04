//! Storefront errors.

use thiserror::Error;

use crate::{
    addresses::{AddressBookError, AddressesServiceError},
    api::ApiError,
    auth::AuthServiceError,
    cart::{CartError, CartServiceError},
    catalog::CatalogServiceError,
    location::LocationServiceError,
    orders::{OrderError, OrdersServiceError},
};

/// Any failure a storefront operation can report.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// The operation requires a logged-in session.
    #[error("login required")]
    NotAuthenticated,

    #[error(transparent)]
    Auth(#[from] AuthServiceError),

    #[error(transparent)]
    Catalog(#[from] CatalogServiceError),

    #[error(transparent)]
    CartSync(#[from] CartServiceError),

    #[error(transparent)]
    Orders(#[from] OrdersServiceError),

    #[error(transparent)]
    Addresses(#[from] AddressesServiceError),

    #[error(transparent)]
    Location(#[from] LocationServiceError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    AddressBook(#[from] AddressBookError),

    #[error(transparent)]
    Api(#[from] ApiError),
}
