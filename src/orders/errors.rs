//! Order errors.

use thiserror::Error;

use crate::api::ApiError;

/// Errors from local order placement.
#[derive(Debug, Error, PartialEq)]
pub enum OrderError {
    /// Placement requires at least one cart line.
    #[error("cannot place an order with an empty cart")]
    EmptyCart,

    /// Placement requires a known delivery address.
    #[error("no delivery address selected")]
    NoAddress,
}

/// Errors from the remote order endpoints.
#[derive(Debug, Error)]
pub enum OrdersServiceError {
    /// No order with the requested id.
    #[error("order not found")]
    NotFound,

    /// Any other API failure.
    #[error("api error")]
    Api(#[source] ApiError),
}

impl From<ApiError> for OrdersServiceError {
    fn from(error: ApiError) -> Self {
        match error.status() {
            Some(404) => Self::NotFound,
            _ => Self::Api(error),
        }
    }
}
