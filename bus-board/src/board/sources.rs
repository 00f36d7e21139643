//! Pipeline sources backed by the HTTP clients.

use crate::domain::{ArrivalPrediction, Coordinate, StopId, StopPoint};
use crate::postcodes::GeocoderClient;
use crate::tfl::TflClient;

use super::error::{BoardError, Stage};
use super::pipeline::{ArrivalFetcher, Geocoder, StopFinder};

impl Geocoder for GeocoderClient {
    async fn resolve_coordinates(&self, postcode: &str) -> Result<Coordinate, BoardError> {
        Ok(self.get_postcode(postcode).await?)
    }
}

impl StopFinder for TflClient {
    async fn find_nearby_stops(
        &self,
        coord: Coordinate,
        radius_meters: u32,
    ) -> Result<Vec<StopPoint>, BoardError> {
        self.get_stops_near(coord, radius_meters)
            .await
            .map_err(|e| BoardError::from_tfl(e, Stage::StopLookup))
    }
}

impl ArrivalFetcher for TflClient {
    async fn fetch_arrivals(&self, stop: &StopId) -> Result<Vec<ArrivalPrediction>, BoardError> {
        self.get_arrivals(stop)
            .await
            .map_err(|e| BoardError::from_tfl(e, Stage::Arrivals))
    }
}
