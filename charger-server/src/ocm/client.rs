//! Open Charge Map HTTP client.
//!
//! Fetches POI (point of interest) lists from the public `/poi` endpoint.
//! The API key travels as the `key` query parameter, once per request,
//! because each caller may supply its own.

use std::time::Duration;

use tracing::debug;

use crate::domain::Station;

use super::error::OcmError;
use super::{FetchRequest, FetchScope};

/// Default base URL for the Open Charge Map API.
const DEFAULT_BASE_URL: &str = "https://api.openchargemap.io/v3";

/// Default `maxresults`: effectively unbounded, so nothing matching is cut.
const DEFAULT_MAX_RESULTS: u32 = 1_000_000;

/// Default country filter.
const DEFAULT_COUNTRY_CODE: &str = "US";

/// Search radius in miles for proximity queries.
const DEFAULT_SEARCH_RADIUS_MILES: u32 = 50;

/// Upstream bodies quoted in errors are cut to this many characters.
const MAX_QUOTED_BODY_CHARS: usize = 500;

/// Configuration for the Open Charge Map client.
#[derive(Debug, Clone)]
pub struct OcmConfig {
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// ISO country code sent as `countrycode`
    pub country_code: String,
    /// Upper bound on records per response
    pub max_results: u32,
    /// Radius for proximity queries, in miles
    pub search_radius_miles: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OcmConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the maximum number of results requested.
    pub fn with_max_results(mut self, n: u32) -> Self {
        self.max_results = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for OcmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            search_radius_miles: DEFAULT_SEARCH_RADIUS_MILES,
            timeout_secs: 30,
        }
    }
}

/// Open Charge Map API client.
#[derive(Debug, Clone)]
pub struct OcmClient {
    http: reqwest::Client,
    config: OcmConfig,
}

impl OcmClient {
    /// Create a new client with the given configuration.
    pub fn new(config: OcmConfig) -> Result<Self, OcmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// The `/poi/` endpoint URL.
    fn poi_url(&self) -> String {
        format!("{}/poi/", self.config.base_url.trim_end_matches('/'))
    }

    /// Query parameters for a fetch, key included.
    fn query_params(&self, request: &FetchRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("output", "json".to_string()),
            ("countrycode", self.config.country_code.clone()),
            ("maxresults", self.config.max_results.to_string()),
            ("compact", "true".to_string()),
            ("verbose", "false".to_string()),
        ];

        match &request.scope {
            FetchScope::PostalCode(code) => {
                params.push(("postalcode", code.clone()));
            }
            FetchScope::Around(reference) => {
                params.push(("latitude", reference.latitude.to_string()));
                params.push(("longitude", reference.longitude.to_string()));
                params.push(("distance", self.config.search_radius_miles.to_string()));
                params.push(("distanceunit", "Miles".to_string()));
            }
        }

        params.push(("key", request.api_key.clone()));
        params
    }

    /// Fetch stations for a request.
    ///
    /// The response is returned as decoded; postal-code matching and
    /// distance ranking happen later in [`crate::locate`].
    pub async fn fetch(&self, request: &FetchRequest) -> Result<Vec<Station>, OcmError> {
        let url = self.poi_url();
        debug!(%url, scope = ?request.scope, "fetching stations");

        let response = self
            .http
            .get(&url)
            .query(&self.query_params(request))
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(OcmError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OcmError::Api {
                status: status.as_u16(),
                message: quote_body(&body),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| OcmError::Json {
            message: e.to_string(),
            body: Some(quote_body(&body)),
        })
    }
}

fn quote_body(body: &str) -> String {
    body.chars().take(MAX_QUOTED_BODY_CHARS).collect()
}
