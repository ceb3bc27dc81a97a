use pavl::{
    components::AircraftConfig,
    config::{AircraftConfigBuilder, ConfigError, SurfaceBuilder},
    geometry::GeometryError,
};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TRAINER_YAML;

fn wing_draft() -> serde_json::Value {
    json!({
        "Name": "Wing",
        "X Loc": "0", "Y Loc": "0", "Z Loc": "0",
        "Incidence": "0", "Twist": "-2.0", "NACA Airfoil": "2412",
        "Sections": [
            { "Span": "1.2", "ChordMode": "Root+Tip", "Root C": "1.6", "Tip C": "1.6",
              "SweepMode": "LE", "LE Sweep": "0", "Dihedral": "0" },
            { "Span": "3.8", "ChordMode": "Taper+Root", "Root C": "1.6", "Taper": "0.625",
              "SweepMode": "C4", "C/4 Sweep": "2.0", "Dihedral": "3.0" }
        ],
        "Controls": [
            { "Control Name": "flap", "Control Type": "Flap", "Hinge Loc": "0.75",
              "Inboard Loc": "0.0", "Outboard Loc": "0.45" },
            { "Control Name": "aileron", "Control Type": "Aileron", "Hinge Loc": "0.75",
              "Inboard Loc": "0.55", "Outboard Loc": "0.95" }
        ]
    })
}

#[test]
fn test_draft_matches_file_definition() {
    let from_file = AircraftConfig::from_yaml_str(TRAINER_YAML).unwrap();
    let from_draft = SurfaceBuilder::from_json("Wing", &wing_draft())
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(from_draft, from_file.surfaces[0]);
}

#[test]
fn test_whole_aircraft_draft() {
    let draft = json!({
        "Name": "Trainer",
        "Units": "MKS",
        "Surfaces": [wing_draft()],
        "Mass": [{ "Name": "Pilot", "Mass": "85", "X": "1.2", "Y": "0", "Z": "0.5" }],
        "Cases": [{ "Name": "Cruise", "Mach": "0.15", "Rho": "1.225", "Cdo": "0.025",
                    "AOA Mode": "CL", "AOA Val": "0.4",
                    "Elevator Mode": "Cm", "Elevator Val": "0" }]
    });
    let aircraft = AircraftConfigBuilder::from_json(&draft)
        .unwrap()
        .build()
        .unwrap();
    let from_file = AircraftConfig::from_yaml_str(TRAINER_YAML).unwrap();

    assert_eq!(aircraft.surfaces[0], from_file.surfaces[0]);
    assert_eq!(aircraft.reference.sref, from_file.reference.sref);
    assert_eq!(aircraft.cases[0], from_file.cases[0]);
}

#[test]
fn test_missing_active_field_names_the_section() {
    let mut draft = wing_draft();
    draft["Sections"][1]
        .as_object_mut()
        .unwrap()
        .remove("Taper");

    let err = SurfaceBuilder::from_json("Wing", &draft)
        .unwrap()
        .build()
        .unwrap_err();
    match err {
        ConfigError::Geometry(GeometryError::MissingField { context, field }) => {
            assert_eq!(context, "Section 1");
            assert_eq!(field, "Taper");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_invalid_modes_are_reported() {
    let mut draft = wing_draft();
    draft["Sections"][0]["ChordMode"] = json!("Area+Span");
    let err = SurfaceBuilder::from_json("Wing", &draft)
        .unwrap()
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Geometry(GeometryError::InvalidChordMode { section: 0, .. })
    ));

    let mut draft = wing_draft();
    draft["Sections"][1]["SweepMode"] = json!("TE");
    let err = SurfaceBuilder::from_json("Wing", &draft)
        .unwrap()
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Geometry(GeometryError::UnsupportedSweepMode { section: 1, .. })
    ));
}

#[test]
fn test_incomplete_control_does_not_block_the_surface() {
    let mut draft = wing_draft();
    draft["Controls"][0]["Hinge Loc"] = json!("");

    let surface = SurfaceBuilder::from_json("Wing", &draft)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(surface.controls.len(), 1);
    assert_eq!(surface.controls[0].name, "aileron");
}

#[test]
fn test_non_finite_values_count_as_missing() {
    let mut draft = wing_draft();
    draft["Sections"][1]["Root C"] = json!("nan");
    let err = SurfaceBuilder::from_json("Wing", &draft)
        .unwrap()
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Geometry(GeometryError::MissingField { ref field, .. }) if field == "Root C"
    ));

    let mut draft = wing_draft();
    draft["Sections"][1]["Taper"] = json!("inf");
    assert!(SurfaceBuilder::from_json("Wing", &draft).unwrap().build().is_err());
}

#[test]
fn test_hinge_past_trailing_edge_drops_the_control() {
    let mut draft = wing_draft();
    draft["Controls"][1]["Hinge Loc"] = json!("1.5");

    let surface = SurfaceBuilder::from_json("Wing", &draft)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(surface.controls.len(), 1);
    assert_eq!(surface.controls[0].name, "flap");
}
