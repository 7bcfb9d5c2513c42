//! Open Charge Map error types.

/// Errors from fetching station data.
#[derive(Debug, thiserror::Error)]
pub enum OcmError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The API rejected the key
    #[error("unauthorized: check the Open Charge Map API key")]
    Unauthorized,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not a list of stations
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Mock data file could not be read
    #[error("mock data error: {message}")]
    Mock { message: String },
}

// Request URLs carry the API key, so they are stripped before the error
// can reach a log line or a response body.
impl From<reqwest::Error> for OcmError {
    fn from(e: reqwest::Error) -> Self {
        OcmError::Http(e.without_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = OcmError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = OcmError::Json {
            message: "expected a sequence".into(),
            body: Some("{}".into()),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected a sequence");

        assert_eq!(
            OcmError::Unauthorized.to_string(),
            "unauthorized: check the Open Charge Map API key"
        );
    }

    #[tokio::test]
    async fn http_error_hides_request_url() {
        let err = reqwest::get("http://127.0.0.1:9/poi/?key=SERVER-SECRET")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("SERVER-SECRET"));

        let err = OcmError::from(err);
        assert!(matches!(err, OcmError::Http(_)));
        assert!(!err.to_string().contains("SERVER-SECRET"));
        assert!(!format!("{err:?}").contains("SERVER-SECRET"));
    }
}
