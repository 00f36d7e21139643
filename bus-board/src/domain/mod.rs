//! Domain types for the bus arrivals board.
//!
//! These types represent validated data coming back from the geocoder and
//! the transit API. Invariants are enforced at construction time, so code
//! that receives them can trust their validity.

mod arrival;
mod coordinate;
mod stop;

pub use arrival::ArrivalPrediction;
pub use coordinate::{Coordinate, InvalidCoordinate};
pub use stop::{InvalidStopId, StopId, StopPoint};
