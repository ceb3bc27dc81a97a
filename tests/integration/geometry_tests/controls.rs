use approx::assert_relative_eq;
use nalgebra::Vector3;
use pavl::{
    components::{ControlSurface, ControlType},
    geometry::{resolve_surface, StationOrigin},
};

use crate::common::{
    assert_station_at, assert_stations_ordered, assert_vec3_eq, create_cranked_wing,
    create_two_section_wing,
};

#[test]
fn test_two_section_wing_with_aileron() {
    let stations = resolve_surface(&create_two_section_wing()).unwrap();
    assert_stations_ordered(&stations);

    let spans: Vec<f64> = stations.iter().map(|s| s.span).collect();
    assert_eq!(spans, vec![0.0, 5.0, 6.0, 10.0]);

    let chords: Vec<f64> = stations.iter().map(|s| s.chord).collect();
    assert_relative_eq!(chords[0], 2.0);
    assert_relative_eq!(chords[1], 1.0);
    assert_relative_eq!(chords[2], 0.9, epsilon = 1e-12);
    assert_relative_eq!(chords[3], 0.5);

    assert!(!stations[0].has_controls());
    assert!(!stations[1].has_controls());
    for station in &stations[2..] {
        assert_eq!(station.controls.len(), 1);
        let aileron = &station.controls[0];
        assert_eq!(aileron.control_type, ControlType::Aileron);
        assert_relative_eq!(aileron.hinge, 0.75);
        assert_eq!(aileron.control_type.duplication_sign(), -1.0);
    }

    assert_eq!(stations[2].origin, StationOrigin::ControlBreakpoint);
    assert_vec3_eq(&stations[2].leading_edge, &Vector3::new(0.0, 6.0, 0.0), 1e-12);
}

#[test]
fn test_breakpoint_on_section_boundary_is_merged() {
    let mut wing = create_two_section_wing();
    wing.controls = vec![ControlSurface::new("flap", ControlType::Flap, 0.7, 0.0, 0.5)];

    let stations = resolve_surface(&wing).unwrap();
    let spans: Vec<f64> = stations.iter().map(|s| s.span).collect();
    assert_eq!(spans, vec![0.0, 5.0, 10.0]);

    let boundary = assert_station_at(&stations, 5.0);
    assert_eq!(boundary.origin, StationOrigin::Section);
    assert_eq!(boundary.controls.len(), 1);
    assert_eq!(boundary.controls[0].name, "flap");
    assert!(assert_station_at(&stations, 0.0).has_controls());
    assert!(!assert_station_at(&stations, 10.0).has_controls());
}

#[test]
fn test_adjacent_controls_share_a_station() {
    let stations = resolve_surface(&create_cranked_wing()).unwrap();
    assert_stations_ordered(&stations);

    let spans: Vec<f64> = stations.iter().map(|s| s.span).collect();
    let expected = [0.0, 0.75, 2.0, 3.75, 6.0, 6.75, 7.5];
    assert_eq!(spans.len(), expected.len());
    for (actual, expected) in spans.iter().zip(expected) {
        assert_relative_eq!(*actual, expected, epsilon = 1e-9);
    }

    let names = |span: f64| -> Vec<String> {
        assert_station_at(&stations, span)
            .controls
            .iter()
            .map(|c| c.name.clone())
            .collect()
    };
    assert!(names(0.0).is_empty());
    assert_eq!(names(0.75), vec!["flap"]);
    assert_eq!(names(2.0), vec!["flap"]);
    assert_eq!(names(3.75), vec!["flap", "aileron"]);
    assert_eq!(names(6.0), vec!["aileron"]);
    assert_eq!(names(6.75), vec!["aileron"]);
    assert!(names(7.5).is_empty());
}

#[test]
fn test_malformed_control_is_dropped() {
    let mut wing = create_two_section_wing();
    wing.controls
        .push(ControlSurface::new("backwards", ControlType::Flap, 0.7, 0.8, 0.2));
    wing.controls
        .push(ControlSurface::new("nan", ControlType::Flap, 0.7, f64::NAN, 0.2));

    let stations = resolve_surface(&wing).unwrap();
    assert_eq!(stations.len(), 4);
    assert!(stations
        .iter()
        .flat_map(|s| &s.controls)
        .all(|c| c.name == "Wing_aileron_1"));
}
