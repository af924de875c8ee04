//! Cart errors.

use thiserror::Error;

use crate::{api::ApiError, uuids::LineUuid};

/// Errors from local cart mutation.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// No line with the given id exists in the cart.
    #[error("cart line {0} not found")]
    LineNotFound(LineUuid),
}

/// Errors from the remote cart endpoints.
#[derive(Debug, Error)]
pub enum CartServiceError {
    /// The backend has no cart (or cart item) matching the request.
    #[error("cart item not found")]
    NotFound,

    /// Any other API failure.
    #[error("api error")]
    Api(#[source] ApiError),
}

impl From<ApiError> for CartServiceError {
    fn from(error: ApiError) -> Self {
        match error.status() {
            Some(404) => Self::NotFound,
            _ => Self::Api(error),
        }
    }
}
