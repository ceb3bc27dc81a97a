use approx::assert_relative_eq;
use nalgebra::Vector3;
use pavl::{
    components::{ChordMode, ChordSpec, Section, Surface, SweepSpec},
    geometry::{
        accumulate_sections, interpolate_at_span, project_leading_edge, resolve_chord,
        resolve_surface, to_spec, GeometryError, StationOrigin,
    },
};

use crate::common::{
    assert_station_at, assert_stations_ordered, assert_vec3_eq, create_cranked_wing,
    create_rectangular_wing, create_two_section_wing,
};

#[test]
fn test_station_count_covers_every_boundary() {
    for surface in [create_two_section_wing(), create_cranked_wing()] {
        let mut bare = surface.clone();
        bare.controls.clear();

        let stations = resolve_surface(&bare).unwrap();
        assert_eq!(stations.len(), bare.sections.len() + 1);
        assert_stations_ordered(&stations);

        let with_controls = resolve_surface(&surface).unwrap();
        assert!(with_controls.len() >= surface.sections.len() + 1);
        assert_stations_ordered(&with_controls);
    }
}

#[test]
fn test_taper_round_trip() {
    for (root, taper) in [(2.0, 0.5), (1.37, 0.81), (0.4, 1.0), (12.0, 0.125), (3.3, 1.6)] {
        let chords = resolve_chord(&ChordSpec::RootAndTaper { root, taper });
        let via_tips = resolve_chord(&to_spec(&chords, ChordMode::RootAndTip));
        assert_relative_eq!(via_tips.taper, taper, epsilon = 1e-12);
        assert_relative_eq!(via_tips.root, root, epsilon = 1e-12);
    }
}

#[test]
fn test_straight_section_endpoints() {
    let surface = create_rectangular_wing(8.0, 1.25, 4.0);
    let stations = resolve_surface(&surface).unwrap();
    assert_eq!(stations.len(), 2);

    let root = assert_station_at(&stations, 0.0);
    assert_relative_eq!(root.chord, 1.25);
    assert_vec3_eq(&root.leading_edge, &Vector3::zeros(), 1e-12);
    assert_eq!(root.incidence, 0.0);

    let tip = assert_station_at(&stations, 8.0);
    assert_relative_eq!(tip.chord, 1.25);
    assert_relative_eq!(tip.leading_edge.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(tip.leading_edge.y, 8.0, epsilon = 1e-12);
    assert_relative_eq!(tip.incidence, 4.0, epsilon = 1e-12);
}

#[test]
fn test_interpolation_is_exact_at_section_boundaries() {
    let surface = create_cranked_wing();
    let total_span = surface.total_span();

    for station in accumulate_sections(&surface).unwrap() {
        let interpolated = interpolate_at_span(&surface, station.span, total_span).unwrap();
        assert_relative_eq!(interpolated.chord, station.chord, epsilon = 1e-9);
        assert_vec3_eq(&interpolated.leading_edge, &station.leading_edge, 1e-9);
        assert_relative_eq!(interpolated.incidence, station.incidence, epsilon = 1e-9);
    }
}

#[test]
fn test_sweep_modes_agree_at_root_and_grow_with_tan_sweep() {
    let sweep = 25.0_f64;
    let chord = ChordSpec::RootAndTaper { root: 2.0, taper: 0.4 };
    let le = Section::new(6.0, chord).with_sweep(SweepSpec::LeadingEdge { angle: sweep });
    let c4 = Section::new(6.0, chord).with_sweep(SweepSpec::QuarterChord { angle: sweep });

    let le_root = resolve_surface(&Surface::new("le", vec![le])).unwrap()[0].leading_edge.x;
    let c4_root = resolve_surface(&Surface::new("c4", vec![c4])).unwrap()[0].leading_edge.x;
    assert_eq!(le_root, 0.0);
    assert_eq!(c4_root, 0.0);

    let tan = sweep.to_radians().tan();
    for span in [1.0, 2.5, 6.0] {
        let dx_le = project_leading_edge(&le, span).x - project_leading_edge(&le, 0.0).x;
        let dx_c4 = project_leading_edge(&c4, span).x - project_leading_edge(&c4, 0.0).x;
        assert_relative_eq!(dx_le, tan * span, epsilon = 1e-12);
        assert_relative_eq!(dx_c4, tan * span, epsilon = 1e-12);
    }
}

#[test]
fn test_out_of_range_interpolation() {
    let surface = create_two_section_wing();
    let err = interpolate_at_span(&surface, 10.5, 10.0).unwrap_err();
    assert_eq!(
        err,
        GeometryError::SpanOutOfRange {
            span: 10.5,
            total_span: 10.0
        }
    );
    assert!(interpolate_at_span(&surface, -0.1, 10.0).is_err());

    // Rounding noise at the tip is tolerated
    let tip = interpolate_at_span(&surface, 10.0 + 1e-12, 10.0).unwrap();
    assert_relative_eq!(tip.chord, 0.5);
    assert_eq!(tip.origin, StationOrigin::ControlBreakpoint);
}

#[test]
fn test_resolution_never_mutates_the_surface() {
    let surface = create_cranked_wing();
    let before = surface.clone();
    let first = resolve_surface(&surface).unwrap();
    let second = resolve_surface(&surface).unwrap();
    assert_eq!(surface, before);
    assert_eq!(first, second);
}
