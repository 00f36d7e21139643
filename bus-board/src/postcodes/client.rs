//! postcodes.io HTTP client.

use reqwest::Url;
use tracing::debug;

use crate::domain::Coordinate;

use super::error::GeocodeError;
use super::types::PostcodeResponse;

/// Default base URL for postcodes.io.
const DEFAULT_BASE_URL: &str = "https://api.postcodes.io";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the geocoder client.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocoderConfig {
    /// Create a config pointing at the public postcodes.io service.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the postcodes.io lookup endpoint.
#[derive(Debug, Clone)]
pub struct GeocoderClient {
    http: reqwest::Client,
    base_url: Url,
}

impl GeocoderClient {
    /// Create a new geocoder client.
    pub fn new(config: GeocoderConfig) -> Result<Self, GeocodeError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| GeocodeError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;

        if base_url.cannot_be_a_base() {
            return Err(GeocodeError::InvalidBaseUrl(config.base_url));
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Build the lookup URL, percent-encoding the postcode as one path segment.
    fn lookup_url(&self, postcode: &str) -> Result<Url, GeocodeError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GeocodeError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("postcodes")
            .push(postcode);
        Ok(url)
    }

    /// Look up a postcode and return its coordinates.
    pub async fn get_postcode(&self, postcode: &str) -> Result<Coordinate, GeocodeError> {
        let url = self.lookup_url(postcode)?;
        debug!(%url, "looking up postcode");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GeocodeError::NotFound {
                postcode: postcode.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let envelope: PostcodeResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        let result = envelope.result.ok_or_else(|| GeocodeError::NotFound {
            postcode: postcode.to_string(),
        })?;

        let (Some(latitude), Some(longitude)) = (result.latitude, result.longitude) else {
            return Err(GeocodeError::NoCoordinates {
                postcode: result.postcode,
            });
        };

        let coordinate = Coordinate::new(latitude, longitude).map_err(|_| {
            GeocodeError::NoCoordinates {
                postcode: result.postcode.clone(),
            }
        })?;

        debug!(postcode = %result.postcode, %coordinate, "resolved postcode");
        Ok(coordinate)
    }
}
