//! TfL API response DTOs.
//!
//! These map directly to the Unified API JSON. Only the fields the board
//! uses are declared; serde ignores the rest. Text fields that TfL
//! sometimes omits are `Option`.

use serde::Deserialize;

/// Response from `GET /StopPoint` with a lat/lon search.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointsResponse {
    /// Stops inside the search radius. Absent when nothing matched.
    #[serde(default)]
    pub stop_points: Vec<StopPointDto>,
}

/// A stop returned by a radius search.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointDto {
    /// NaPTAN identifier, used to fetch arrivals.
    pub naptan_id: String,

    /// Human-readable stop name.
    pub common_name: String,

    /// Stop letter or direction hint, e.g. "Stop K" or "->W".
    pub indicator: Option<String>,

    /// Distance from the search point in meters.
    pub distance: f64,
}

/// One prediction from `GET /StopPoint/{id}/Arrivals`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalDto {
    /// Route name, e.g. "486".
    pub line_name: Option<String>,

    /// Final destination of the vehicle.
    pub destination_name: Option<String>,

    /// Direction of travel shown at the stop.
    pub towards: Option<String>,

    /// Name of the stop this prediction is for.
    pub station_name: Option<String>,

    /// Seconds until arrival.
    pub time_to_station: i64,
}
