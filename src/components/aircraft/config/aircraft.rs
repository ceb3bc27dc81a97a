use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::components::aircraft::config::{
    AlphaConstraint, ChordSpec, ControlSurface, ControlType, ElevatorConstraint, MassProperty,
    RawAircraftConfig, Section, SimulationCase, Surface, SweepSpec, UnitSystem,
};
use crate::config::ConfigError;
use crate::geometry::PlanformSummary;
use crate::utils::Position;

/// Reference quantities written to the solver header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceDimensions {
    /// Reference area.
    pub sref: f64,
    /// Reference chord.
    pub cref: f64,
    /// Reference span.
    pub bref: f64,
    /// Moment reference point.
    #[serde(default)]
    pub moment: Position,
}

impl ReferenceDimensions {
    /// Full-aircraft references from one (half) surface: area and span are doubled.
    pub fn from_summary(summary: &PlanformSummary) -> Self {
        Self {
            sref: 2.0 * summary.area,
            cref: summary.mac,
            bref: 2.0 * summary.total_span,
            moment: Position::default(),
        }
    }
}

/// The complete aircraft: lifting surfaces, mass items and flight conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfig {
    pub name: String,
    pub units: UnitSystem,
    pub reference: ReferenceDimensions,
    pub surfaces: Vec<Surface>,
    pub mass: Vec<MassProperty>,
    pub cases: Vec<SimulationCase>,
}

impl AircraftConfig {
    /// Creates a new aircraft configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - An `AircraftSource` enum specifying if the configuration is hardcoded
    ///              (`Programmed`) or loaded from a file (`File`).
    ///
    /// # Returns
    /// A `Result` containing the new configuration or an error if the file fails to load
    /// or a surface fails validation.
    pub fn new(source: AircraftSource) -> Result<Self, ConfigError> {
        match source {
            AircraftSource::Programmed(preset) => Ok(Self::from_programmed(preset)),
            AircraftSource::File(path) => Self::from_file(path),
        }
    }

    /// Creates an aircraft configuration for predefined (programmed) types.
    fn from_programmed(preset: AircraftPreset) -> Self {
        match preset {
            AircraftPreset::Trainer => Self::trainer(),
        }
    }

    /// Creates an aircraft configuration by reading from a YAML file.
    ///
    /// # Arguments
    /// * `path` - Path to the YAML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading aircraft from {}", path.display());
        let file_contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&file_contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let raw_config: RawAircraftConfig = serde_yaml::from_str(contents)?;
        Self::from_raw_config(raw_config)
    }

    /// Converts a raw configuration into a validated aircraft configuration.
    ///
    /// Every surface is checked for structure and chord continuity, the same checks an
    /// editing surface applies when a draft is committed.
    pub fn from_raw_config(raw: RawAircraftConfig) -> Result<Self, ConfigError> {
        let surfaces: Vec<Surface> = raw.surfaces.into_iter().map(|s| s.into_surface()).collect();
        for surface in &surfaces {
            surface.validate()?;
            surface.check_chord_continuity()?;
        }

        let derived = surfaces
            .first()
            .map(|surface| ReferenceDimensions::from_summary(&PlanformSummary::from_surface(surface)));

        let pick = |value: Option<f64>, fallback: Option<f64>, label: &str| {
            value
                .or(fallback)
                .ok_or_else(|| ConfigError::MissingRequired(label.to_string()))
        };
        let reference = ReferenceDimensions {
            sref: pick(raw.sref, derived.map(|d| d.sref), "sref")?,
            cref: pick(raw.cref, derived.map(|d| d.cref), "cref")?,
            bref: pick(raw.bref, derived.map(|d| d.bref), "bref")?,
            moment: raw.moment_reference,
        };
        if reference.sref <= 0.0 || reference.cref <= 0.0 || reference.bref <= 0.0 {
            return Err(ConfigError::ValidationError(
                "Sref, Cref, and Bref must be positive.".to_string(),
            ));
        }

        Ok(Self {
            name: raw.name,
            units: raw.units,
            reference,
            surfaces,
            mass: raw.mass,
            cases: raw.cases,
        })
    }

    pub fn surface(&self, name: &str) -> Option<&Surface> {
        self.surfaces.iter().find(|s| s.name == name)
    }

    pub fn case(&self, name: &str) -> Option<&SimulationCase> {
        self.cases.iter().find(|c| c.name == name)
    }

    /// Replaces the reference dimensions with those derived from a named surface.
    pub fn reference_from_surface(&mut self, name: &str) -> Result<(), ConfigError> {
        let summary = self
            .surface(name)
            .map(PlanformSummary::from_surface)
            .ok_or_else(|| ConfigError::ValidationError(format!("Unknown surface '{}'", name)))?;
        self.reference = ReferenceDimensions {
            moment: self.reference.moment,
            ..ReferenceDimensions::from_summary(&summary)
        };
        Ok(())
    }

    /// A small high-wing trainer: tapered wing with flaps and ailerons, tail with elevator.
    pub fn trainer() -> Self {
        let wing = Surface::new(
            "Wing",
            vec![
                Section::new(1.2, ChordSpec::RootAndTip { root: 1.6, tip: 1.6 }),
                Section::new(3.8, ChordSpec::RootAndTaper { root: 1.6, taper: 0.625 })
                    .with_sweep(SweepSpec::QuarterChord { angle: 2.0 })
                    .with_dihedral(3.0),
            ],
        )
        .with_twist(-2.0)
        .with_airfoil("2412")
        .with_control(ControlSurface::new("Wing_flap_1", ControlType::Flap, 0.75, 0.0, 0.45))
        .with_control(ControlSurface::new("Wing_aileron_2", ControlType::Aileron, 0.75, 0.55, 0.95));

        let tail = Surface::new(
            "Horizontal Tail",
            vec![Section::new(1.7, ChordSpec::RootAndTaper { root: 1.0, taper: 0.7 })
                .with_sweep(SweepSpec::LeadingEdge { angle: 8.0 })],
        )
        .with_position(Position::new(4.6, 0.0, 0.1))
        .with_incidence(-1.5)
        .with_airfoil("0012")
        .with_control(ControlSurface::new(
            "Horizontal Tail_elevator_1",
            ControlType::Elevator,
            0.7,
            0.0,
            1.0,
        ));

        let reference = ReferenceDimensions::from_summary(&PlanformSummary::from_surface(&wing));

        Self {
            name: "Trainer".to_string(),
            units: UnitSystem::Mks,
            reference,
            surfaces: vec![wing, tail],
            mass: vec![
                MassProperty::point("Airframe", 520.0, Position::new(1.9, 0.0, 0.3))
                    .with_inertia(850.0, 1100.0, 1800.0),
                MassProperty::point("Engine", 110.0, Position::new(-0.6, 0.0, 0.0))
                    .with_inertia(4.0, 6.0, 6.0),
                MassProperty::point("Pilot", 85.0, Position::new(1.2, 0.0, 0.5)),
            ],
            cases: vec![
                SimulationCase::new("Cruise", 0.15, 1.225)
                    .with_cdo(0.025)
                    .with_alpha(AlphaConstraint::Cl(0.4))
                    .with_elevator(ElevatorConstraint::Cm(0.0)),
                SimulationCase::new("Approach", 0.09, 1.225)
                    .with_cdo(0.04)
                    .with_alpha(AlphaConstraint::Angle(6.0))
                    .with_flap(20.0),
            ],
        }
    }
}

impl Default for AircraftConfig {
    /// The `Trainer` configuration is chosen as the default for convenience.
    fn default() -> Self {
        Self::trainer()
    }
}

/// Source for aircraft configuration.
/// Can either be a hardcoded configuration (`Programmed`) or loaded from a file.
#[derive(Debug, Clone)]
pub enum AircraftSource {
    Programmed(AircraftPreset),
    File(PathBuf),
}

/// Enumeration of built-in aircraft.
#[derive(Debug, Clone, Copy, Deserialize, Hash, PartialEq, Eq)]
pub enum AircraftPreset {
    Trainer,
}
