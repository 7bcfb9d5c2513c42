//! Distance ranking for located stations.

use super::filter::LocatedStation;

/// Rank stations nearest-first.
///
/// The sort is stable, so stations at equal distance keep their input
/// order. Distances are taken as given, not recomputed.
pub fn rank_by_distance(mut stations: Vec<LocatedStation>) -> Vec<LocatedStation> {
    stations.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    stations
}

/// Rank stations nearest-first and keep at most `limit`.
pub fn nearest(stations: Vec<LocatedStation>, limit: usize) -> Vec<LocatedStation> {
    let mut ranked = rank_by_distance(stations);
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::super::filter::test_support::*;
    use super::super::filter::{filter_by_postal_code, measure_all};
    use super::*;

    fn ids(stations: &[LocatedStation]) -> Vec<i64> {
        stations.iter().map(|l| l.station.id).collect()
    }

    #[test]
    fn orders_two_and_seven_miles() {
        let stations = vec![
            north_of_portland(1, "04101", 0.1086),
            north_of_portland(2, "04102", 0.0010),
            north_of_portland(3, "04101", 0.0362),
        ];

        let ranked = rank_by_distance(filter_by_postal_code(stations, "04101", portland()));

        assert_eq!(ids(&ranked), vec![3, 1]);
        assert_eq!(ranked[0].distance.whole_miles(), 2);
        assert_eq!(ranked[1].distance.whole_miles(), 7);
    }

    #[test]
    fn single_station_unchanged() {
        let p = portland();
        let located = filter_by_postal_code(
            vec![station(1, "04101", p.latitude, p.longitude)],
            "04101",
            p,
        );

        let ranked = rank_by_distance(located.clone());
        assert_eq!(ranked, located);
    }

    #[test]
    fn empty_stays_empty() {
        assert!(rank_by_distance(Vec::new()).is_empty());
        assert!(nearest(Vec::new(), 5).is_empty());
    }

    #[test]
    fn ties_keep_input_order() {
        // Stations 1, 3 and 4 share a position.
        let stations = vec![
            north_of_portland(1, "04101", 0.05),
            north_of_portland(2, "04101", 0.01),
            north_of_portland(3, "04101", 0.05),
            north_of_portland(4, "04101", 0.05),
        ];

        let ranked = rank_by_distance(measure_all(stations, portland()));

        assert_eq!(ids(&ranked), vec![2, 1, 3, 4]);
    }

    #[test]
    fn nearest_truncates_after_ranking() {
        let stations = vec![
            north_of_portland(1, "04101", 0.3),
            north_of_portland(2, "90210", 0.1),
            north_of_portland(3, "04102", 0.2),
        ];

        let top = nearest(measure_all(stations, portland()), 2);

        assert_eq!(ids(&top), vec![2, 3]);
    }

    #[test]
    fn nearest_limit_larger_than_input() {
        let stations = vec![north_of_portland(1, "04101", 0.3)];
        assert_eq!(nearest(measure_all(stations, portland()), 10).len(), 1);
    }
}
