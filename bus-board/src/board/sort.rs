//! Ordering of stops and arrivals.
//!
//! Both sorts are stable: entries with equal keys keep the order the
//! upstream service returned them in, so output is deterministic.

use crate::domain::{ArrivalPrediction, StopPoint};

/// Sort stops nearest first.
pub fn sort_stops_by_distance(stops: &mut [StopPoint]) {
    stops.sort_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters));
}

/// Sort predictions soonest first.
pub fn sort_arrivals_by_time(arrivals: &mut [ArrivalPrediction]) {
    arrivals.sort_by_key(|a| a.seconds_to_station);
}

/// Keep the `limit` nearest stops, nearest first.
pub fn nearest_stops(mut stops: Vec<StopPoint>, limit: usize) -> Vec<StopPoint> {
    sort_stops_by_distance(&mut stops);
    stops.truncate(limit);
    stops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StopId;

    fn stop(id: &str, distance: f64) -> StopPoint {
        StopPoint::new(StopId::parse(id).unwrap(), format!("Stop {id}"), distance)
    }

    fn arrival(line: &str, seconds: i64) -> ArrivalPrediction {
        ArrivalPrediction {
            line_name: line.to_string(),
            destination_name: "Somewhere".to_string(),
            towards: "Elsewhere".to_string(),
            station_name: "Here".to_string(),
            seconds_to_station: seconds,
        }
    }

    fn ids(stops: &[StopPoint]) -> Vec<&str> {
        stops.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn stops_by_distance() {
        let mut stops = vec![stop("A", 120.0), stop("B", 45.0), stop("C", 300.0)];
        sort_stops_by_distance(&mut stops);
        assert_eq!(ids(&stops), ["B", "A", "C"]);
    }

    #[test]
    fn equal_distances_keep_upstream_order() {
        let mut stops = vec![
            stop("A", 100.0),
            stop("B", 50.0),
            stop("C", 100.0),
            stop("D", 50.0),
        ];
        sort_stops_by_distance(&mut stops);
        assert_eq!(ids(&stops), ["B", "D", "A", "C"]);
    }

    #[test]
    fn nearest_stops_caps_count() {
        let stops = (0..8)
            .map(|i| stop(&format!("S{i}"), 800.0 - f64::from(i) * 100.0))
            .collect();
        let nearest = nearest_stops(stops, 5);
        assert_eq!(ids(&nearest), ["S7", "S6", "S5", "S4", "S3"]);
    }

    #[test]
    fn nearest_stops_with_fewer_than_limit() {
        let stops = vec![stop("A", 20.0), stop("B", 10.0)];
        let nearest = nearest_stops(stops, 5);
        assert_eq!(ids(&nearest), ["B", "A"]);
    }

    #[test]
    fn arrivals_by_time_stable() {
        let mut arrivals = vec![
            arrival("486", 412),
            arrival("53", 95),
            arrival("N1", 412),
            arrival("177", 0),
        ];
        sort_arrivals_by_time(&mut arrivals);
        let lines: Vec<_> = arrivals.iter().map(|a| a.line_name.as_str()).collect();
        assert_eq!(lines, ["177", "53", "486", "N1"]);
    }
}
