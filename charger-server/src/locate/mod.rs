//! Station location pipeline.
//!
//! Turns raw provider records into a ranked listing:
//!
//! 1. [`filter_by_postal_code`] keeps exact postal-code matches and pairs
//!    each with its [`distance`] from the reference point.
//! 2. [`rank_by_distance`] orders the result nearest-first.
//!
//! Proximity mode skips the postal-code filter and keeps the closest
//! `limit` stations instead. The two modes never mix.

mod distance;
mod filter;
mod rank;

use tracing::debug;

use crate::domain::{Coordinate, Station};

pub use distance::{Distance, EARTH_RADIUS_MILES, distance};
pub use filter::{LocatedStation, filter_by_postal_code, measure_all};
pub use rank::{nearest, rank_by_distance};

/// How stations are selected before ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Exact postal-code match.
    PostalCode(String),
    /// The closest stations regardless of postal code.
    Nearest { limit: usize },
}

/// A complete location request: what to select and where to measure from.
#[derive(Debug, Clone, PartialEq)]
pub struct StationQuery {
    pub selection: Selection,
    pub reference: Coordinate,
}

impl StationQuery {
    /// Postal-code query measured from `reference`.
    pub fn postal_code(postal_code: impl Into<String>, reference: Coordinate) -> Self {
        Self {
            selection: Selection::PostalCode(postal_code.into()),
            reference,
        }
    }

    /// Proximity query for the `limit` closest stations to `reference`.
    pub fn nearest(limit: usize, reference: Coordinate) -> Self {
        Self {
            selection: Selection::Nearest { limit },
            reference,
        }
    }
}

/// Run the pipeline for `query` over `stations`.
pub fn locate(stations: Vec<Station>, query: &StationQuery) -> Vec<LocatedStation> {
    let fetched = stations.len();

    let ranked = match &query.selection {
        Selection::PostalCode(code) => {
            rank_by_distance(filter_by_postal_code(stations, code, query.reference))
        }
        Selection::Nearest { limit } => nearest(measure_all(stations, query.reference), *limit),
    };

    debug!(
        fetched,
        kept = ranked.len(),
        reference = %query.reference,
        selection = ?query.selection,
        "located stations"
    );

    ranked
}
