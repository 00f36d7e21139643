//! Bus arrivals board.
//!
//! Given a UK postcode, finds the nearest bus stops and lists the buses
//! due at each one, using postcodes.io for geocoding and the TfL Unified
//! API for stops and arrival predictions.

pub mod board;
pub mod domain;
pub mod postcodes;
pub mod tfl;

#[cfg(test)]
mod testing;
