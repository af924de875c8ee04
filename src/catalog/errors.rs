//! Catalogue service errors.

use thiserror::Error;

use crate::api::ApiError;

/// Errors from the food catalogue endpoints.
#[derive(Debug, Error)]
pub enum CatalogServiceError {
    /// No product with the requested id.
    #[error("product not found")]
    NotFound,

    /// Any other API failure.
    #[error("api error")]
    Api(#[source] ApiError),
}

impl From<ApiError> for CatalogServiceError {
    fn from(error: ApiError) -> Self {
        match error.status() {
            Some(404) => Self::NotFound,
            _ => Self::Api(error),
        }
    }
}
