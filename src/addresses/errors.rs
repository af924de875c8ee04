//! Address errors.

use thiserror::Error;

use crate::{api::ApiError, uuids::AddressUuid};

/// Errors from local address book mutation.
#[derive(Debug, Error, PartialEq)]
pub enum AddressBookError {
    /// No address with the given id exists in the book.
    #[error("address {0} not found")]
    NotFound(AddressUuid),
}

/// Errors from the remote address endpoints.
#[derive(Debug, Error)]
pub enum AddressesServiceError {
    /// No address with the requested id.
    #[error("address not found")]
    NotFound,

    /// Any other API failure.
    #[error("api error")]
    Api(#[source] ApiError),
}

impl From<ApiError> for AddressesServiceError {
    fn from(error: ApiError) -> Self {
        match error.status() {
            Some(404) => Self::NotFound,
            _ => Self::Api(error),
        }
    }
}
