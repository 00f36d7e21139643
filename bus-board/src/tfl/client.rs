//! TfL Unified API HTTP client.

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{ArrivalPrediction, Coordinate, StopId, StopPoint};

use super::convert::{convert_arrivals, convert_stop_points};
use super::error::TflError;
use super::types::{ArrivalDto, StopPointsResponse};

/// Default base URL for the TfL Unified API.
const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Stop category filter for radius searches: on-street bus, coach and tram stops.
const STOP_TYPES: &str = "NaptanPublicBusCoachTram";

/// Configuration for the TfL client.
#[derive(Debug, Clone)]
pub struct TflConfig {
    /// Base URL for the API (defaults to production TfL)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TflConfig {
    /// Create a config pointing at the public TfL API.
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

impl Default for TflConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// TfL StopPoint API client.
#[derive(Debug, Clone)]
pub struct TflClient {
    http: reqwest::Client,
    base_url: Url,
}

impl TflClient {
    /// Create a new TfL client with the given configuration.
    pub fn new(config: TflConfig) -> Result<Self, TflError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| TflError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;

        if base_url.cannot_be_a_base() {
            return Err(TflError::InvalidBaseUrl(config.base_url));
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Append path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, TflError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TflError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Find bus stops within `radius_meters` of `coord`.
    ///
    /// Stops are returned in upstream order, which is not guaranteed to be
    /// by distance.
    pub async fn get_stops_near(
        &self,
        coord: Coordinate,
        radius_meters: u32,
    ) -> Result<Vec<StopPoint>, TflError> {
        let url = self.endpoint(&["StopPoint"])?;
        debug!(%url, %coord, radius_meters, "searching for stops");

        let request = self.http.get(url).query(&[
            ("lat", coord.latitude().to_string()),
            ("lon", coord.longitude().to_string()),
            ("stopTypes", STOP_TYPES.to_string()),
            ("radius", radius_meters.to_string()),
        ]);

        let response: StopPointsResponse = self.get_json(request).await?;
        let stops = convert_stop_points(response.stop_points);

        debug!(count = stops.len(), "found stops");
        Ok(stops)
    }

    /// Get predicted arrivals at a stop, in upstream order.
    pub async fn get_arrivals(&self, stop: &StopId) -> Result<Vec<ArrivalPrediction>, TflError> {
        let url = self.endpoint(&["StopPoint", stop.as_str(), "Arrivals"])?;
        debug!(%url, "fetching arrivals");

        let arrivals: Vec<ArrivalDto> = self.get_json(self.http.get(url)).await?;

        debug!(stop = %stop, count = arrivals.len(), "fetched arrivals");
        Ok(convert_arrivals(arrivals))
    }

    /// Send a request and decode a successful JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, TflError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TflError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TflError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}
