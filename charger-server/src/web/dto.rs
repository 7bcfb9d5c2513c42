//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Coordinate;
use crate::locate::LocatedStation;

/// Query parameters for the postal-code listing.
#[derive(Debug, Default, Deserialize)]
pub struct LocateRequest {
    /// Postal code to match exactly
    #[serde(alias = "zipcode")]
    pub postalcode: Option<String>,

    /// Open Charge Map API key (falls back to the server key)
    pub apikey: Option<String>,

    /// Reference latitude in decimal degrees
    pub latitude: Option<String>,

    /// Reference longitude in decimal degrees
    pub longitude: Option<String>,
}

/// Query parameters for the proximity listing.
#[derive(Debug, Default, Deserialize)]
pub struct NearestRequest {
    /// Open Charge Map API key (falls back to the server key)
    pub apikey: Option<String>,

    /// Reference latitude in decimal degrees
    pub latitude: Option<String>,

    /// Reference longitude in decimal degrees
    pub longitude: Option<String>,

    /// Maximum number of stations to return
    pub limit: Option<usize>,
}

/// JSON listing response.
#[derive(Debug, Serialize)]
pub struct LocateResponse {
    /// Number of stations returned
    pub count: usize,

    /// Point distances were measured from
    pub reference: Coordinate,

    /// Postal code the listing was filtered to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Stations, nearest first
    pub stations: Vec<LocatedStation>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
