//! Domain types for the charger locator.
//!
//! Caller-supplied coordinates are validated at construction time;
//! provider records are carried as decoded.

mod coordinate;
mod station;

pub use coordinate::{Axis, Coordinate, CoordinateError};
pub use station::{AddressInfo, Country, Station};
