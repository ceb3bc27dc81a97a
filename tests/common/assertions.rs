use approx::assert_relative_eq;
use nalgebra::Vector3;
use pavl::geometry::ResolvedStation;

/// Assert that stations are strictly increasing in span and hold finite values
#[track_caller]
pub fn assert_stations_ordered(stations: &[ResolvedStation]) {
    for pair in stations.windows(2) {
        assert!(
            pair[1].span > pair[0].span,
            "Stations not strictly increasing: {} then {}",
            pair[0].span,
            pair[1].span
        );
    }
    for station in stations {
        assert!(
            station.chord.is_finite() && station.chord > 0.0,
            "Bad chord {} at span {}",
            station.chord,
            station.span
        );
        assert!(
            station.leading_edge.iter().all(|v| v.is_finite()),
            "Leading edge is not finite at span {}",
            station.span
        );
        assert!(station.incidence.is_finite(), "Incidence is not finite");
    }
}

/// Find the station at `span`, failing if there is none
#[track_caller]
pub fn assert_station_at(stations: &[ResolvedStation], span: f64) -> &ResolvedStation {
    match stations.iter().find(|s| (s.span - span).abs() < 1e-9) {
        Some(station) => station,
        None => {
            let spans: Vec<f64> = stations.iter().map(|s| s.span).collect();
            panic!("No station at span {}; have {:?}", span, spans)
        }
    }
}

#[track_caller]
pub fn assert_vec3_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
