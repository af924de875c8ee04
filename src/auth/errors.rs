//! Auth service errors.

use thiserror::Error;

use crate::api::ApiError;

/// Errors from the OTP auth endpoints.
#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// The backend rejected the OTP (or the session is no longer valid).
    #[error("invalid or expired OTP")]
    InvalidOtp,

    /// Any other API failure.
    #[error("api error")]
    Api(#[source] ApiError),
}

impl From<ApiError> for AuthServiceError {
    fn from(error: ApiError) -> Self {
        match error.status() {
            Some(400 | 401) => Self::InvalidOtp,
            _ => Self::Api(error),
        }
    }
}
