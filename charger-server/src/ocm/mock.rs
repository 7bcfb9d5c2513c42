//! Mock station source for running without API access.
//!
//! Loads a JSON array of stations (in provider format) from a file and
//! serves it for every request.

use std::path::Path;
use std::sync::Arc;

use crate::domain::Station;

use super::FetchRequest;
use super::error::OcmError;

/// Mock client that serves stations from a JSON file.
///
/// The whole file is returned regardless of postal code or position, just
/// as the live API may return near-misses; the locate pipeline does the
/// filtering.
#[derive(Debug, Clone)]
pub struct MockChargerClient {
    stations: Arc<Vec<Station>>,
}

impl MockChargerClient {
    /// Load stations from `path`.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, OcmError> {
        let stations = load(path.as_ref())?;
        Ok(Self::from_stations(stations))
    }

    /// Build a mock directly from in-memory stations.
    pub fn from_stations(stations: Vec<Station>) -> Self {
        Self {
            stations: Arc::new(stations),
        }
    }

    /// Return every loaded station.
    ///
    /// Mimics [`super::OcmClient::fetch`]; the request is ignored.
    pub async fn fetch(&self, _request: &FetchRequest) -> Result<Vec<Station>, OcmError> {
        Ok(self.stations.as_ref().clone())
    }

    /// Number of loaded stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }
}

fn load(path: &Path) -> Result<Vec<Station>, OcmError> {
    let json = std::fs::read_to_string(path).map_err(|e| OcmError::Mock {
        message: format!("failed to read {}: {}", path.display(), e),
    })?;

    serde_json::from_str(&json).map_err(|e| OcmError::Mock {
        message: format!("failed to parse {}: {}", path.display(), e),
    })
}
