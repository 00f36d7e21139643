//! Run parameters for a single board lookup.

use super::error::BoardError;

/// Default search radius around the postcode, in meters.
pub const DEFAULT_RADIUS_METERS: u32 = 500;

/// Default number of stops to report.
pub const DEFAULT_STOP_LIMIT: usize = 5;

/// Inputs for one run of the pipeline.
///
/// Built once at start-up and passed into [`Pipeline::run`](super::Pipeline::run).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunParameters {
    /// Postcode to search around, surrounding whitespace removed.
    pub postcode: String,

    /// Search radius in meters.
    pub radius_meters: u32,

    /// Maximum number of stops to report.
    pub stop_limit: usize,
}

impl RunParameters {
    /// Create parameters for `postcode` with the default radius and limit.
    pub fn new(postcode: impl AsRef<str>) -> Self {
        Self {
            postcode: postcode.as_ref().trim().to_string(),
            radius_meters: DEFAULT_RADIUS_METERS,
            stop_limit: DEFAULT_STOP_LIMIT,
        }
    }

    /// Set the search radius.
    pub fn with_radius(mut self, meters: u32) -> Self {
        self.radius_meters = meters;
        self
    }

    /// Set the maximum number of stops.
    pub fn with_stop_limit(mut self, limit: usize) -> Self {
        self.stop_limit = limit;
        self
    }

    /// Check the parameters before any request is made.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.postcode.is_empty() {
            return Err(BoardError::InvalidParameters(
                "postcode must not be empty".to_string(),
            ));
        }

        if self.radius_meters == 0 {
            return Err(BoardError::InvalidParameters(
                "radius must be greater than zero".to_string(),
            ));
        }

        if self.stop_limit == 0 {
            return Err(BoardError::InvalidParameters(
                "stop limit must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
