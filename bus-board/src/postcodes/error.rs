//! Geocoder error types.

/// Errors that can occur when resolving a postcode.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service does not know the postcode
    #[error("postcode not found: {postcode}")]
    NotFound { postcode: String },

    /// The postcode exists but has no usable position
    #[error("postcode {postcode} has no usable coordinates")]
    NoCoordinates { postcode: String },

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
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
        let err = GeocodeError::NotFound {
            postcode: "ZZ1 1ZZ".into(),
        };
        assert_eq!(err.to_string(), "postcode not found: ZZ1 1ZZ");

        let err = GeocodeError::NoCoordinates {
            postcode: "GY1 1AA".into(),
        };
        assert_eq!(err.to_string(), "postcode GY1 1AA has no usable coordinates");

        let err = GeocodeError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = GeocodeError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");
    }
}
