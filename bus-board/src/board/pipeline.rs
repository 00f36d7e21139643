//! The postcode → arrival board pipeline.

use std::future::Future;

use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::domain::{ArrivalPrediction, Coordinate, StopId, StopPoint};

use super::config::RunParameters;
use super::error::BoardError;
use super::report::{BoardReport, StopBoard};
use super::sort::{nearest_stops, sort_arrivals_by_time};

/// Default maximum number of arrival requests in flight at once.
pub const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Resolves a postcode to a position.
pub trait Geocoder {
    fn resolve_coordinates(
        &self,
        postcode: &str,
    ) -> impl Future<Output = Result<Coordinate, BoardError>> + Send;
}

/// Finds stops around a position.
///
/// Implementations need not order their results.
pub trait StopFinder {
    fn find_nearby_stops(
        &self,
        coord: Coordinate,
        radius_meters: u32,
    ) -> impl Future<Output = Result<Vec<StopPoint>, BoardError>> + Send;
}

/// Fetches predicted arrivals at a stop.
///
/// Implementations need not order their results. An empty list is a valid
/// answer, not an error.
pub trait ArrivalFetcher {
    fn fetch_arrivals(
        &self,
        stop: &StopId,
    ) -> impl Future<Output = Result<Vec<ArrivalPrediction>, BoardError>> + Send;
}

/// Arrival board pipeline.
pub struct Pipeline<'a, G, S, A> {
    geocoder: &'a G,
    stop_finder: &'a S,
    arrival_fetcher: &'a A,
    max_concurrent: usize,
}

impl<'a, G: Geocoder, S: StopFinder, A: ArrivalFetcher> Pipeline<'a, G, S, A> {
    /// Create a new pipeline.
    pub fn new(geocoder: &'a G, stop_finder: &'a S, arrival_fetcher: &'a A) -> Self {
        Self {
            geocoder,
            stop_finder,
            arrival_fetcher,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }

    /// Set the maximum number of arrival requests in flight at once.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n.max(1);
        self
    }

    /// Build the arrival board for `params`.
    ///
    /// Failing to geocode the postcode or to find any stops ends the run
    /// with an error. Failing to fetch one stop's arrivals does not: that
    /// stop's [`StopBoard`] carries the error and the other stops are
    /// still reported.
    ///
    /// Arrivals for the selected stops are fetched concurrently, at most
    /// `max_concurrent` at a time; the report lists stops nearest first
    /// regardless of which answered first.
    pub async fn run(&self, params: &RunParameters) -> Result<BoardReport, BoardError> {
        params.validate()?;

        let coordinate = self.geocoder.resolve_coordinates(&params.postcode).await?;
        info!(postcode = %params.postcode, %coordinate, "resolved postcode");

        let stops = self
            .stop_finder
            .find_nearby_stops(coordinate, params.radius_meters)
            .await?;

        if stops.is_empty() {
            return Err(BoardError::NoStopsFound {
                postcode: params.postcode.clone(),
                radius_meters: params.radius_meters,
            });
        }

        let found = stops.len();
        let stops = nearest_stops(stops, params.stop_limit);
        debug!(found, kept = stops.len(), "selected nearest stops");

        let boards: Vec<StopBoard> = stream::iter(stops)
            .map(|stop| self.stop_board(stop))
            .buffered(self.max_concurrent)
            .collect()
            .await;

        Ok(BoardReport {
            postcode: params.postcode.clone(),
            coordinate,
            stops: boards,
        })
    }

    /// Fetch and order the arrivals for one stop.
    async fn stop_board(&self, stop: StopPoint) -> StopBoard {
        let arrivals = match self.arrival_fetcher.fetch_arrivals(&stop.id).await {
            Ok(mut arrivals) if !arrivals.is_empty() => {
                sort_arrivals_by_time(&mut arrivals);
                Ok(arrivals)
            }
            Ok(_) => {
                debug!(stop = %stop.id, "no upcoming arrivals");
                Err(BoardError::NoArrivals {
                    stop: stop.id.clone(),
                })
            }
            Err(e) => {
                warn!(stop = %stop.id, error = %e, "failed to fetch arrivals");
                Err(e)
            }
        };

        StopBoard { stop, arrivals }
    }
}
