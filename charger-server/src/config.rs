//! Server configuration.
//!
//! Read once at startup from environment variables. Every setting has a
//! default, so an empty environment gives a working server pointed at the
//! public Open Charge Map API.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::domain::{Coordinate, CoordinateError};
use crate::ocm::OcmConfig;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Default reference point: Portland, Maine.
pub const DEFAULT_REFERENCE: Coordinate = Coordinate {
    latitude: 43.70155,
    longitude: -70.23595,
};

/// Default and maximum result counts for proximity queries.
const DEFAULT_NEAREST_LIMIT: usize = 10;
const MAX_NEAREST_LIMIT: usize = 100;

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("{name}: invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// The default reference point is malformed
    #[error("default reference: {0}")]
    Reference(#[from] CoordinateError),
}

/// Top-level server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Reference point used when a request gives no coordinates.
    pub default_reference: Coordinate,

    /// API key used when a request gives none.
    pub api_key: Option<String>,

    /// Upstream client settings.
    pub ocm: OcmConfig,

    /// Serve stations from this file instead of the live API.
    pub mock_file: Option<PathBuf>,

    /// Result count for proximity queries without a `limit`.
    pub nearest_limit: usize,

    /// Upper bound on `limit` for proximity queries.
    pub max_nearest_limit: usize,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps variable names to values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(addr) = get("CHARGER_BIND_ADDR") {
            config.bind_addr = parse_var("CHARGER_BIND_ADDR", &addr)?;
        }

        let lat = get("CHARGER_DEFAULT_LATITUDE");
        let lon = get("CHARGER_DEFAULT_LONGITUDE");
        config.default_reference =
            Coordinate::parse_or(lat.as_deref(), lon.as_deref(), DEFAULT_REFERENCE)?;

        config.api_key = get("OCM_API_KEY");

        if let Some(url) = get("OCM_BASE_URL") {
            config.ocm = config.ocm.with_base_url(url);
        }
        if let Some(secs) = get("OCM_TIMEOUT_SECS") {
            config.ocm = config
                .ocm
                .with_timeout(parse_var("OCM_TIMEOUT_SECS", &secs)?);
        }
        if let Some(n) = get("OCM_MAX_RESULTS") {
            config.ocm = config
                .ocm
                .with_max_results(parse_var("OCM_MAX_RESULTS", &n)?);
        }

        config.mock_file = get("OCM_MOCK_FILE").map(PathBuf::from);

        Ok(config)
    }

    /// Clamp a requested proximity limit into range.
    pub fn nearest_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.nearest_limit)
            .clamp(1, self.max_nearest_limit)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 8080))),
            default_reference: DEFAULT_REFERENCE,
            api_key: None,
            ocm: OcmConfig::default(),
            mock_file: None,
            nearest_limit: DEFAULT_NEAREST_LIMIT,
            max_nearest_limit: MAX_NEAREST_LIMIT,
        }
    }
}

fn parse_var<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = from_pairs(&[]).unwrap();

        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(config.default_reference, DEFAULT_REFERENCE);
        assert_eq!(config.api_key, None);
        assert_eq!(config.ocm.base_url, "https://api.openchargemap.io/v3");
        assert_eq!(config.mock_file, None);
        assert_eq!(config.nearest_limit, 10);
    }

    #[test]
    fn reads_all_variables() {
        let config = from_pairs(&[
            ("CHARGER_BIND_ADDR", "0.0.0.0:3000"),
            ("CHARGER_DEFAULT_LATITUDE", "51.5"),
            ("CHARGER_DEFAULT_LONGITUDE", "-0.12"),
            ("OCM_API_KEY", "abc123"),
            ("OCM_BASE_URL", "http://localhost:9999"),
            ("OCM_TIMEOUT_SECS", "5"),
            ("OCM_MAX_RESULTS", "200"),
            ("OCM_MOCK_FILE", "data/stations.json"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 3000)));
        assert_eq!(config.default_reference.latitude, 51.5);
        assert_eq!(config.default_reference.longitude, -0.12);
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.ocm.base_url, "http://localhost:9999");
        assert_eq!(config.ocm.timeout_secs, 5);
        assert_eq!(config.ocm.max_results, 200);
        assert_eq!(config.mock_file, Some(PathBuf::from("data/stations.json")));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = from_pairs(&[("OCM_API_KEY", "  "), ("OCM_MOCK_FILE", "")]).unwrap();
        assert_eq!(config.api_key, None);
        assert_eq!(config.mock_file, None);
    }

    #[test]
    fn invalid_number_is_an_error() {
        let err = from_pairs(&[("OCM_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "OCM_TIMEOUT_SECS",
                ..
            }
        ));
    }

    #[test]
    fn invalid_bind_addr_is_an_error() {
        assert!(from_pairs(&[("CHARGER_BIND_ADDR", "localhost")]).is_err());
    }

    #[test]
    fn half_default_reference_is_an_error() {
        let err = from_pairs(&[("CHARGER_DEFAULT_LATITUDE", "51.5")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Reference(CoordinateError::Incomplete)
        ));
    }

    #[test]
    fn out_of_range_default_reference_is_an_error() {
        let err = from_pairs(&[
            ("CHARGER_DEFAULT_LATITUDE", "100"),
            ("CHARGER_DEFAULT_LONGITUDE", "0"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::Reference(_)));
    }

    #[test]
    fn nearest_limit_clamps() {
        let config = ServerConfig::default();
        assert_eq!(config.nearest_limit(None), 10);
        assert_eq!(config.nearest_limit(Some(3)), 3);
        assert_eq!(config.nearest_limit(Some(0)), 1);
        assert_eq!(config.nearest_limit(Some(10_000)), 100);
    }
}
