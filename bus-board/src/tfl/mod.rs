//! TfL Unified API client.
//!
//! Covers the two StopPoint endpoints the board needs:
//! - `GET /StopPoint?lat&lon&stopTypes&radius` finds stops around a point
//! - `GET /StopPoint/{id}/Arrivals` lists predicted arrivals at one stop
//!
//! Neither endpoint orders its results in a way we can rely on, so callers
//! sort what they get back.

mod client;
mod convert;
mod error;
mod types;

pub use client::{TflClient, TflConfig};
pub use error::TflError;
