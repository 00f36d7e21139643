//! Conversion from TfL DTOs to domain types.

use tracing::warn;

use crate::domain::{ArrivalPrediction, StopId, StopPoint};

use super::types::{ArrivalDto, StopPointDto};

/// Convert radius-search results to domain stops, preserving upstream order.
///
/// Entries with an unusable identifier or distance are logged and skipped
/// rather than failing the whole lookup.
pub fn convert_stop_points(dtos: Vec<StopPointDto>) -> Vec<StopPoint> {
    let mut stops = Vec::with_capacity(dtos.len());

    for dto in dtos {
        let id = match StopId::parse(&dto.naptan_id) {
            Ok(id) => id,
            Err(e) => {
                warn!(naptan_id = %dto.naptan_id, error = %e, "skipping stop");
                continue;
            }
        };

        if !dto.distance.is_finite() || dto.distance < 0.0 {
            warn!(naptan_id = %dto.naptan_id, distance = dto.distance, "skipping stop with invalid distance");
            continue;
        }

        let mut stop = StopPoint::new(id, dto.common_name, dto.distance);
        if let Some(indicator) = dto.indicator {
            stop = stop.with_indicator(indicator);
        }
        stops.push(stop);
    }

    stops
}

/// Convert arrival DTOs to domain predictions, preserving upstream order.
///
/// Predictions without a line name are logged and skipped. Other missing
/// text fields become empty strings.
pub fn convert_arrivals(dtos: Vec<ArrivalDto>) -> Vec<ArrivalPrediction> {
    let mut arrivals = Vec::with_capacity(dtos.len());

    for dto in dtos {
        let line_name = match dto.line_name {
            Some(line) if !line.is_empty() => line,
            _ => {
                warn!(
                    time_to_station = dto.time_to_station,
                    "skipping prediction without a line name"
                );
                continue;
            }
        };

        arrivals.push(ArrivalPrediction {
            line_name,
            destination_name: dto.destination_name.unwrap_or_default(),
            towards: dto.towards.unwrap_or_default(),
            station_name: dto.station_name.unwrap_or_default(),
            seconds_to_station: dto.time_to_station,
        });
    }

    arrivals
}
