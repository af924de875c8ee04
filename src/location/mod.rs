//! Delivery location: geocoding and the resolved location state.

mod service;

pub use service::{HttpLocationService, LocationService, LocationServiceError, MockLocationService};

use serde::{Deserialize, Serialize};

/// A pair of coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Coordinates plus the human-readable address they resolve to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLocation {
    /// Where the user is.
    pub point: GeoPoint,

    /// Street-level description of the point.
    pub readable_address: String,
}
