//! Application state for the web layer.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::ocm::ChargerSource;

/// Shared application state.
///
/// Cloned per request; everything inside is read-only.
#[derive(Clone)]
pub struct AppState {
    /// Where station records come from
    pub source: Arc<ChargerSource>,

    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(source: impl Into<ChargerSource>, config: ServerConfig) -> Self {
        Self {
            source: Arc::new(source.into()),
            config: Arc::new(config),
        }
    }

    /// The API key to forward upstream.
    ///
    /// A non-blank key from the request wins over the server key. The mock
    /// source needs no key at all.
    pub fn api_key(&self, requested: Option<&str>) -> Option<String> {
        let requested = requested.map(str::trim).filter(|k| !k.is_empty());
        match (requested, &self.config.api_key, self.source.as_ref()) {
            (Some(key), _, _) => Some(key.to_string()),
            (None, Some(key), _) => Some(key.clone()),
            (None, None, ChargerSource::Mock(_)) => Some(String::new()),
            (None, None, ChargerSource::Live(_)) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocm::{MockChargerClient, OcmClient, OcmConfig};

    fn live(server_key: Option<&str>) -> AppState {
        let config = ServerConfig {
            api_key: server_key.map(str::to_string),
            ..ServerConfig::default()
        };
        AppState::new(OcmClient::new(OcmConfig::default()).unwrap(), config)
    }

    #[test]
    fn request_key_wins() {
        let state = live(Some("server"));
        assert_eq!(state.api_key(Some("mine")).as_deref(), Some("mine"));
    }

    #[test]
    fn server_key_is_fallback() {
        let state = live(Some("server"));
        assert_eq!(state.api_key(None).as_deref(), Some("server"));
        assert_eq!(state.api_key(Some("  ")).as_deref(), Some("server"));
    }

    #[test]
    fn live_source_without_any_key() {
        assert_eq!(live(None).api_key(None), None);
    }

    #[test]
    fn mock_source_needs_no_key() {
        let state = AppState::new(
            MockChargerClient::from_stations(vec![]),
            ServerConfig::default(),
        );
        assert_eq!(state.api_key(None).as_deref(), Some(""));
    }
}
