//! Rendering of the arrival board.

use std::fmt;

use crate::domain::{ArrivalPrediction, Coordinate, StopPoint};

use super::error::BoardError;

/// Arrivals at one stop, or the reason they could not be shown.
#[derive(Debug, Clone, PartialEq)]
pub struct StopBoard {
    pub stop: StopPoint,

    /// Predictions soonest first. `Err` holds the per-stop failure, which
    /// is reported inline instead of aborting the board.
    pub arrivals: Result<Vec<ArrivalPrediction>, BoardError>,
}

impl StopBoard {
    /// Render this stop's block, without the trailing blank line.
    pub fn lines(&self) -> Vec<String> {
        let distance = format!("{:.0}m away", self.stop.distance_meters);

        let arrivals = match &self.arrivals {
            Ok(arrivals) => arrivals,
            Err(BoardError::NoArrivals { .. }) => {
                return vec![
                    format!("{} ({distance}):", self.stop.label()),
                    "No upcoming arrivals.".to_string(),
                ];
            }
            Err(e) => {
                return vec![
                    format!("{} ({distance}):", self.stop.label()),
                    format!("Arrivals unavailable: {e}"),
                ];
            }
        };

        let Some(nearest) = arrivals.first() else {
            return vec![
                format!("{} ({distance}):", self.stop.label()),
                "No upcoming arrivals.".to_string(),
            ];
        };

        let mut lines = Vec::with_capacity(arrivals.len() + 1);
        lines.push(header(&self.stop, nearest, &distance));
        lines.extend(arrivals.iter().map(arrival_line));
        lines
    }
}

/// Header naming the stop and its direction of travel.
fn header(stop: &StopPoint, nearest: &ArrivalPrediction, distance: &str) -> String {
    let name = if nearest.station_name.is_empty() {
        stop.label()
    } else {
        nearest.station_name.clone()
    };

    if nearest.towards.is_empty() {
        format!("{name} ({distance}):")
    } else {
        format!("{name} towards {} ({distance}):", nearest.towards)
    }
}

/// One line per predicted bus.
///
/// ```
/// use bus_board::board::arrival_line;
/// use bus_board::domain::ArrivalPrediction;
///
/// let prediction = ArrivalPrediction {
///     line_name: "486".into(),
///     destination_name: "Bexleyheath".into(),
///     towards: "Charlton".into(),
///     station_name: "Charlton Church Lane".into(),
///     seconds_to_station: 412,
/// };
/// assert_eq!(
///     arrival_line(&prediction),
///     "Bus number 486 to Bexleyheath will arrive in approximately 6 minutes."
/// );
/// ```
pub fn arrival_line(prediction: &ArrivalPrediction) -> String {
    format!(
        "Bus number {} to {} will arrive in approximately {} minutes.",
        prediction.line_name,
        prediction.destination_name,
        prediction.minutes_to_station()
    )
}

/// Result of a successful board run.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardReport {
    pub postcode: String,
    pub coordinate: Coordinate,

    /// Nearest stops first.
    pub stops: Vec<StopBoard>,
}

impl BoardReport {
    /// Render the report, one blank line after each stop block.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for stop in &self.stops {
            lines.extend(stop.lines());
            lines.push(String::new());
        }
        lines
    }
}

impl fmt::Display for BoardReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
