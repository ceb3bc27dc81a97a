use pavl::{
    avl::{AvlRunner, JobFiles},
    components::AircraftConfig,
    config::RunnerConfig,
    geometry::resolve_surface,
};
use std::fs;

use crate::common::TRAINER_YAML;

fn prepare(dir: &std::path::Path, case: &str) -> (AircraftConfig, JobFiles) {
    let aircraft = AircraftConfig::from_yaml_str(TRAINER_YAML).unwrap();
    let runner = AvlRunner::new(RunnerConfig::default().with_results_dir(dir));
    let files = runner
        .prepare("trainer", &aircraft, aircraft.case(case).unwrap())
        .unwrap();
    (aircraft, files)
}

#[test]
fn test_geometry_file_lists_every_station() {
    let dir = tempfile::tempdir().unwrap();
    let (aircraft, files) = prepare(dir.path(), "Cruise");
    let text = fs::read_to_string(&files.geometry).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "trainer");
    assert_eq!(lines[1], "0.1                   !   Mach");
    assert_eq!(lines[3], "13.72 1.401 10       !   Sref   Cref   Bref");
    assert_eq!(
        lines[4],
        "0.40  0.0   0.0       !   Xref   Yref   Zref   moment reference location (arb.)"
    );
    assert_eq!(lines[5], "0.02500                 !   CDp");

    let expected_sections: usize = aircraft
        .surfaces
        .iter()
        .map(|s| resolve_surface(s).unwrap().len())
        .sum();
    assert_eq!(text.matches("\nSECTION\n").count(), expected_sections);
    assert_eq!(text.matches("\nSURFACE\n").count(), 2);
    assert!(text.contains("\nSURFACE\nHorizontal Tail\n"));
    assert!(text.contains("\nANGLE\n     -1.5000\n"));
    assert!(text.contains("\nTRANSLATE\n    4.60000     0.00000     0.10000\n"));
    assert!(text.contains("    elevator     1.0     0.700     0.0 1.0 0.0     1.0\n"));
    assert!(text.contains("    aileron     1.0     0.750     0.0 1.0 0.0     -1.0\n"));
}

#[test]
fn test_mass_and_run_files() {
    let dir = tempfile::tempdir().unwrap();
    let (_, files) = prepare(dir.path(), "Approach");

    let mass = fs::read_to_string(&files.mass).unwrap();
    let mass_lines: Vec<&str> = mass.lines().collect();
    assert_eq!(mass_lines[0], "#1");
    assert_eq!(mass_lines[1], "# trainer");
    assert_eq!(mass_lines[2], "Lunit = 1.0     m");
    assert_eq!(mass_lines[5], "g     = 9.81    ");
    assert_eq!(mass_lines[6], "rho   = 1.22500 ");
    assert!(mass_lines[8].starts_with("520.000000 1.900000   0.000000   0.300000   850.000000"));
    assert!(mass_lines[8].ends_with("! Airframe"));
    assert!(mass_lines[9].ends_with("! Pilot"));

    let run = fs::read_to_string(&files.run).unwrap();
    assert!(run.contains(" Run case  1:  trainer\n"));
    assert!(run.contains(" alpha        ->  alpha       =   6.0000  \n"));
    assert!(run.contains(" flap         ->  flap        =   20.0000 \n"));
    assert!(!run.contains("elevator"));

    let script = fs::read_to_string(&files.commands).unwrap();
    assert!(script.starts_with(&format!("load {}\n", files.geometry.display())));
    assert!(script.ends_with("\n\nquit\n"));
}
