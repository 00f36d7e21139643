//! Arrival board aggregation.
//!
//! Turns a postcode into a report of upcoming buses at the nearest stops:
//! geocode the postcode, search for stops around it, keep the nearest few,
//! then fetch and order the arrivals at each one.
//!
//! The pipeline is generic over [`Geocoder`], [`StopFinder`] and
//! [`ArrivalFetcher`] so it can be driven by the real HTTP clients or by
//! in-memory fakes.

mod config;
mod error;
mod pipeline;
mod report;
mod sort;
mod sources;

pub use config::{DEFAULT_RADIUS_METERS, DEFAULT_STOP_LIMIT, RunParameters};
pub use error::{BoardError, Stage};
pub use pipeline::{ArrivalFetcher, DEFAULT_MAX_CONCURRENT, Geocoder, Pipeline, StopFinder};
pub use report::{BoardReport, StopBoard, arrival_line};
pub use sort::{nearest_stops, sort_arrivals_by_time, sort_stops_by_distance};
