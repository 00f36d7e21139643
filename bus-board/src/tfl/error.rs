//! TfL client error types.

/// Errors from the TfL HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum TflError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Base URL cannot be used to build request URLs
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TflError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");

        let err = TflError::Json {
            message: "missing field `naptanId`".into(),
            body: None,
        };
        assert_eq!(err.to_string(), "JSON parse error: missing field `naptanId`");

        let err = TflError::InvalidBaseUrl("nope".into());
        assert_eq!(err.to_string(), "invalid base URL: nope");
    }
}
