//! Geographic coordinate types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a reference coordinate cannot be built from caller input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    /// The text is not a decimal number
    #[error("{axis} is not a number: {value:?}")]
    NotANumber { axis: Axis, value: String },

    /// The number parsed but is NaN or infinite
    #[error("{axis} must be finite")]
    NotFinite { axis: Axis },

    /// The number is outside the valid range for its axis
    #[error("{axis} {value} is out of range [{min}, {max}]")]
    OutOfRange {
        axis: Axis,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Only one of latitude and longitude was supplied
    #[error("latitude and longitude must be given together")]
    Incomplete,
}

/// Which half of a coordinate an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn bounds(self) -> (f64, f64) {
        match self {
            Axis::Latitude => (-90.0, 90.0),
            Axis::Longitude => (-180.0, 180.0),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// A point on the Earth's surface in signed decimal degrees.
///
/// Fields are public so provider data can be carried without validation;
/// use [`Coordinate::new`] or [`Coordinate::parse`] for caller input.
///
/// # Examples
///
/// ```
/// use charger_server::domain::Coordinate;
///
/// let portland = Coordinate::parse("43.70155", "-70.23595").unwrap();
/// assert_eq!(portland.latitude, 43.70155);
///
/// assert!(Coordinate::parse("91", "0").is_err());
/// assert!(Coordinate::parse("43.7", "west").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, checking both axes are finite and in range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        Ok(Self {
            latitude: check_axis(Axis::Latitude, latitude)?,
            longitude: check_axis(Axis::Longitude, longitude)?,
        })
    }

    /// Parse a coordinate from untyped latitude and longitude strings.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, CoordinateError> {
        let latitude = parse_axis(Axis::Latitude, latitude)?;
        let longitude = parse_axis(Axis::Longitude, longitude)?;
        Self::new(latitude, longitude)
    }

    /// Resolve an optional latitude/longitude pair against a fallback.
    ///
    /// Both absent yields `fallback`. Both present are parsed and validated.
    /// Exactly one present is an error: a half-specified reference is never
    /// completed with a default.
    pub fn parse_or(
        latitude: Option<&str>,
        longitude: Option<&str>,
        fallback: Coordinate,
    ) -> Result<Self, CoordinateError> {
        match (non_blank(latitude), non_blank(longitude)) {
            (None, None) => Ok(fallback),
            (Some(lat), Some(lon)) => Self::parse(lat, lon),
            _ => Err(CoordinateError::Incomplete),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5},{:.5}", self.latitude, self.longitude)
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

fn parse_axis(axis: Axis, s: &str) -> Result<f64, CoordinateError> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| CoordinateError::NotANumber {
            axis,
            value: s.to_string(),
        })
}

fn check_axis(axis: Axis, value: f64) -> Result<f64, CoordinateError> {
    if !value.is_finite() {
        return Err(CoordinateError::NotFinite { axis });
    }
    let (min, max) = axis.bounds();
    if !(min..=max).contains(&value) {
        return Err(CoordinateError::OutOfRange {
            axis,
            value,
            min,
            max,
        });
    }
    Ok(value)
}
