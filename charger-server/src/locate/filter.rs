//! Postal-code filtering.

use serde::Serialize;

use crate::domain::{Coordinate, Station};

use super::distance::{Distance, distance};

/// A station paired with its distance from a reference point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocatedStation {
    #[serde(flatten)]
    pub station: Station,

    /// Great-circle distance from the reference, in miles.
    #[serde(rename = "DistanceMiles")]
    pub distance: Distance,
}

impl LocatedStation {
    /// Pair a station with its distance from `reference`.
    pub fn measure(station: Station, reference: Coordinate) -> Self {
        let distance = distance(station.address_info.coordinate(), reference);
        Self { station, distance }
    }
}

/// Keep stations whose postal code is exactly `postal_code`.
///
/// Each kept station is measured against `reference`. Matches come out in
/// the order they went in; ranking is left to [`rank_by_distance`].
///
/// [`rank_by_distance`]: super::rank_by_distance
pub fn filter_by_postal_code<I>(
    stations: I,
    postal_code: &str,
    reference: Coordinate,
) -> Vec<LocatedStation>
where
    I: IntoIterator<Item = Station>,
{
    stations
        .into_iter()
        .filter(|s| s.address_info.has_postcode(postal_code))
        .map(|s| LocatedStation::measure(s, reference))
        .collect()
}

/// Measure every station against `reference`, ignoring postal code.
pub fn measure_all<I>(stations: I, reference: Coordinate) -> Vec<LocatedStation>
where
    I: IntoIterator<Item = Station>,
{
    stations
        .into_iter()
        .map(|s| LocatedStation::measure(s, reference))
        .collect()
}
