//! Board error types.
//!
//! Every failure the pipeline can report, independent of which HTTP client
//! produced it. Upstream failures carry the [`Stage`] they happened in so
//! the final diagnostic can say what was being attempted.

use std::fmt;

use crate::domain::StopId;
use crate::postcodes::GeocodeError;
use crate::tfl::TflError;

/// The upstream call a failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Geocode,
    StopLookup,
    Arrivals,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Geocode => f.write_str("postcode lookup"),
            Stage::StopLookup => f.write_str("stop lookup"),
            Stage::Arrivals => f.write_str("arrivals lookup"),
        }
    }
}

/// Errors reported by the arrival board pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoardError {
    /// Network failure or timeout talking to an upstream service
    #[error("{stage} failed: {message}")]
    Transport { stage: Stage, message: String },

    /// Upstream answered with a non-success status
    #[error("{stage} failed: upstream returned {status}: {message}")]
    Upstream {
        stage: Stage,
        status: u16,
        message: String,
    },

    /// Upstream answered with a body we could not decode
    #[error("{stage} failed: malformed response: {message}")]
    Malformed { stage: Stage, message: String },

    /// The postcode could not be resolved to a position
    #[error("postcode not found: {postcode}")]
    NotFound { postcode: String },

    /// The stop search succeeded but returned nothing
    #[error("no stops found within {radius_meters}m of {postcode}")]
    NoStopsFound { postcode: String, radius_meters: u32 },

    /// A stop has no predicted arrivals
    #[error("no upcoming arrivals at stop {stop}")]
    NoArrivals { stop: StopId },

    /// Run parameters failed validation
    #[error("invalid run parameters: {0}")]
    InvalidParameters(String),
}

impl BoardError {
    /// The upstream stage this error came from, if any.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            BoardError::Transport { stage, .. }
            | BoardError::Upstream { stage, .. }
            | BoardError::Malformed { stage, .. } => Some(*stage),
            BoardError::NotFound { .. } => Some(Stage::Geocode),
            BoardError::NoStopsFound { .. } => Some(Stage::StopLookup),
            BoardError::NoArrivals { .. } => Some(Stage::Arrivals),
            BoardError::InvalidParameters(_) => None,
        }
    }

    /// Attach a stage to a TfL client error.
    pub fn from_tfl(err: TflError, stage: Stage) -> Self {
        match err {
            TflError::Http(e) => BoardError::Transport {
                stage,
                message: transport_message(&e),
            },
            TflError::Api { status, message } => BoardError::Upstream {
                stage,
                status,
                message,
            },
            TflError::Json { message, .. } => BoardError::Malformed { stage, message },
            TflError::InvalidBaseUrl(url) => BoardError::Transport {
                stage,
                message: format!("invalid base URL: {url}"),
            },
        }
    }
}

impl From<GeocodeError> for BoardError {
    fn from(err: GeocodeError) -> Self {
        let stage = Stage::Geocode;
        match err {
            GeocodeError::Http(e) => BoardError::Transport {
                stage,
                message: transport_message(&e),
            },
            GeocodeError::NotFound { postcode } | GeocodeError::NoCoordinates { postcode } => {
                BoardError::NotFound { postcode }
            }
            GeocodeError::Api { status, message } => BoardError::Upstream {
                stage,
                status,
                message,
            },
            GeocodeError::Json { message, .. } => BoardError::Malformed { stage, message },
            GeocodeError::InvalidBaseUrl(url) => BoardError::Transport {
                stage,
                message: format!("invalid base URL: {url}"),
            },
        }
    }
}

fn transport_message(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        format!("could not connect: {err}")
    } else {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = BoardError::Transport {
            stage: Stage::Geocode,
            message: "request timed out".into(),
        };
        assert_eq!(err.to_string(), "postcode lookup failed: request timed out");

        let err = BoardError::Upstream {
            stage: Stage::StopLookup,
            status: 500,
            message: "oops".into(),
        };
        assert_eq!(
            err.to_string(),
            "stop lookup failed: upstream returned 500: oops"
        );

        let err = BoardError::NoStopsFound {
            postcode: "SE7 7FH".into(),
            radius_meters: 50,
        };
        assert_eq!(err.to_string(), "no stops found within 50m of SE7 7FH");

        let err = BoardError::NoArrivals {
            stop: StopId::parse("490008660N").unwrap(),
        };
        assert_eq!(err.to_string(), "no upcoming arrivals at stop 490008660N");
    }

    #[test]
    fn stages() {
        let not_found = BoardError::NotFound {
            postcode: "ZZ1 1ZZ".into(),
        };
        assert_eq!(not_found.stage(), Some(Stage::Geocode));

        let malformed = BoardError::Malformed {
            stage: Stage::Arrivals,
            message: "eof".into(),
        };
        assert_eq!(malformed.stage(), Some(Stage::Arrivals));

        let invalid = BoardError::InvalidParameters("radius".into());
        assert_eq!(invalid.stage(), None);
    }

    #[test]
    fn geocode_errors_convert() {
        let err: BoardError = GeocodeError::NotFound {
            postcode: "ZZ1 1ZZ".into(),
        }
        .into();
        assert_eq!(
            err,
            BoardError::NotFound {
                postcode: "ZZ1 1ZZ".into()
            }
        );

        let err: BoardError = GeocodeError::NoCoordinates {
            postcode: "GY1 1AA".into(),
        }
        .into();
        assert!(matches!(err, BoardError::NotFound { .. }));

        let err: BoardError = GeocodeError::Api {
            status: 500,
            message: "down".into(),
        }
        .into();
        assert_eq!(
            err,
            BoardError::Upstream {
                stage: Stage::Geocode,
                status: 500,
                message: "down".into()
            }
        );
    }

    #[test]
    fn tfl_errors_keep_stage() {
        let err = BoardError::from_tfl(
            TflError::Api {
                status: 429,
                message: "slow down".into(),
            },
            Stage::Arrivals,
        );
        assert_eq!(err.stage(), Some(Stage::Arrivals));
        assert!(matches!(err, BoardError::Upstream { status: 429, .. }));

        let err = BoardError::from_tfl(
            TflError::Json {
                message: "eof".into(),
                body: None,
            },
            Stage::StopLookup,
        );
        assert_eq!(
            err,
            BoardError::Malformed {
                stage: Stage::StopLookup,
                message: "eof".into()
            }
        );
    }
}
