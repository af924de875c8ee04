//! Remote geocoding service.

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    api::{ApiClient, ApiError, endpoints},
    location::GeoPoint,
};

/// Errors from the location endpoints.
#[derive(Debug, Error)]
pub enum LocationServiceError {
    /// The backend could not resolve the input.
    #[error("location could not be resolved")]
    Unresolvable,

    /// Any other API failure.
    #[error("api error")]
    Api(#[source] ApiError),
}

impl From<ApiError> for LocationServiceError {
    fn from(error: ApiError) -> Self {
        match error.status() {
            Some(404 | 422) => Self::Unresolvable,
            _ => Self::Api(error),
        }
    }
}

#[derive(Debug, Serialize)]
struct GeocodeRequest<'a> {
    address: &'a str,
}

#[derive(Debug, Serialize)]
struct ReverseGeocodeRequest {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct ReverseGeocodeResponse {
    #[serde(alias = "readableAddress")]
    address: String,
}

#[automock]
#[async_trait]
pub trait LocationService: Send + Sync {
    /// Resolve a free-form address to coordinates.
    async fn geocode(&self, address: &str) -> Result<GeoPoint, LocationServiceError>;

    /// Resolve coordinates to a readable address.
    async fn reverse_geocode(&self, point: GeoPoint) -> Result<String, LocationServiceError>;
}

/// [`LocationService`] over the REST backend.
#[derive(Debug, Clone)]
pub struct HttpLocationService {
    client: ApiClient,
}

impl HttpLocationService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LocationService for HttpLocationService {
    async fn geocode(&self, address: &str) -> Result<GeoPoint, LocationServiceError> {
        let body = self
            .client
            .post(endpoints::GEOCODE, &GeocodeRequest { address })
            .await?;

        Ok(body.decode().map_err(ApiError::from)?)
    }

    async fn reverse_geocode(&self, point: GeoPoint) -> Result<String, LocationServiceError> {
        let body = self
            .client
            .post(
                endpoints::REVERSE_GEOCODE,
                &ReverseGeocodeRequest {
                    latitude: point.latitude,
                    longitude: point.longitude,
                },
            )
            .await?;

        let response: ReverseGeocodeResponse = body.decode().map_err(ApiError::from)?;

        Ok(response.address)
    }
}
