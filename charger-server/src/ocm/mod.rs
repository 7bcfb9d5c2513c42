//! Open Charge Map station source.
//!
//! Key characteristics of the provider:
//! - Responses are JSON arrays of POI records with PascalCase field names
//! - The `postalcode` parameter is a hint, not a guarantee: nearby postal
//!   codes can come back too, so results are filtered again locally
//! - Descriptive fields are frequently `null`

mod client;
mod error;
mod mock;

use crate::domain::{Coordinate, Station};

pub use client::{OcmClient, OcmConfig};
pub use error::OcmError;
pub use mock::MockChargerClient;

/// What region to ask the provider for.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchScope {
    /// Stations registered under a postal code.
    PostalCode(String),
    /// Stations within the configured radius of a point.
    Around(Coordinate),
}

/// A single upstream fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub scope: FetchScope,
    /// Forwarded to the provider as-is.
    pub api_key: String,
}

impl FetchRequest {
    /// Fetch by postal code.
    pub fn postal_code(postal_code: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            scope: FetchScope::PostalCode(postal_code.into()),
            api_key: api_key.into(),
        }
    }

    /// Fetch around a point.
    pub fn around(reference: Coordinate, api_key: impl Into<String>) -> Self {
        Self {
            scope: FetchScope::Around(reference),
            api_key: api_key.into(),
        }
    }
}

/// Where station records come from.
#[derive(Debug, Clone)]
pub enum ChargerSource {
    /// The live Open Charge Map API.
    Live(OcmClient),
    /// A fixed data file.
    Mock(MockChargerClient),
}

impl ChargerSource {
    /// Fetch stations for `request`.
    pub async fn fetch(&self, request: &FetchRequest) -> Result<Vec<Station>, OcmError> {
        match self {
            ChargerSource::Live(client) => client.fetch(request).await,
            ChargerSource::Mock(client) => client.fetch(request).await,
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            ChargerSource::Live(_) => "open-charge-map",
            ChargerSource::Mock(_) => "mock",
        }
    }
}

impl From<OcmClient> for ChargerSource {
    fn from(client: OcmClient) -> Self {
        ChargerSource::Live(client)
    }
}

impl From<MockChargerClient> for ChargerSource {
    fn from(client: MockChargerClient) -> Self {
        ChargerSource::Mock(client)
    }
}
