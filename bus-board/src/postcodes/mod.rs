//! postcodes.io geocoder client.
//!
//! Resolves a UK postcode to the latitude/longitude of its centroid.
//! Unknown and malformed postcodes both come back as 404 from the
//! service, so they are reported the same way.

mod client;
mod error;
mod types;

pub use client::{GeocoderClient, GeocoderConfig};
pub use error::GeocodeError;
