//! Great-circle distance between coordinates.
//!
//! Uses the haversine formula on a spherical Earth. Distances are carried
//! in miles.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::domain::Coordinate;

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.0;

/// A non-negative great-circle distance.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl Distance {
    /// Zero distance.
    pub const ZERO: Distance = Distance(0.0);

    /// Distance in miles.
    pub fn miles(self) -> f64 {
        self.0
    }

    /// Whole miles, truncated toward zero.
    pub fn whole_miles(self) -> u32 {
        self.0 as u32
    }

    /// Total order over distances. Never sees NaN for finite inputs.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mi", self.whole_miles())
    }
}

/// Haversine distance between two points.
///
/// Identical points give zero, antipodal points give half the circumference,
/// and longitudes either side of the ±180° meridian take the short way round.
///
/// # Examples
///
/// ```
/// use charger_server::domain::Coordinate;
/// use charger_server::locate::distance;
///
/// let a = Coordinate { latitude: 43.70155, longitude: -70.23595 };
/// assert_eq!(distance(a, a).miles(), 0.0);
/// ```
pub fn distance(a: Coordinate, b: Coordinate) -> Distance {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h a hair past 1 for antipodes.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    Distance(EARTH_RADIUS_MILES * c)
}
