use serde::Deserialize;

use crate::components::aircraft::config::{
    Discretization, MassProperty, Section, SimulationCase, Surface, UnitSystem,
};
use crate::config::{build_controls, ControlSurfaceBuilder};
use crate::utils::{Position, DEFAULT_AIRFOIL};

/// Aircraft description exactly as it appears in a YAML file.
///
/// Reference dimensions are optional; missing ones are taken from the first surface's
/// planform when the file is converted into an [`super::AircraftConfig`].
#[derive(Debug, Deserialize)]
pub struct RawAircraftConfig {
    /// Aircraft identification
    pub name: String,
    #[serde(default)]
    pub units: UnitSystem,

    /// Reference area, chord and span
    pub sref: Option<f64>,
    pub cref: Option<f64>,
    pub bref: Option<f64>,
    #[serde(default)]
    pub moment_reference: Position,

    /// Lifting surfaces, in output order
    #[serde(default)]
    pub surfaces: Vec<RawSurface>,

    /// Mass items
    #[serde(default)]
    pub mass: Vec<MassProperty>,

    /// Flight conditions
    #[serde(default)]
    pub cases: Vec<SimulationCase>,
}

/// A lifting surface as written in a YAML file.
///
/// Controls are kept as drafts so that an unfinished one can be dropped instead of failing
/// the whole file.
#[derive(Debug, Deserialize)]
pub struct RawSurface {
    pub name: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub incidence: f64,
    #[serde(default)]
    pub twist: f64,
    pub airfoil: Option<String>,
    #[serde(default)]
    pub discretization: Discretization,
    pub sections: Vec<Section>,
    #[serde(default)]
    pub controls: Vec<ControlSurfaceBuilder>,
}

impl RawSurface {
    /// Converts into a [`Surface`], skipping incomplete controls with a warning.
    pub fn into_surface(self) -> Surface {
        let controls = build_controls(&self.name, &self.controls);
        Surface {
            position: self.position,
            incidence: self.incidence,
            twist: self.twist,
            airfoil: self.airfoil.unwrap_or_else(|| DEFAULT_AIRFOIL.to_string()),
            discretization: self.discretization,
            sections: self.sections,
            controls,
            name: self.name,
        }
    }
}

impl From<Surface> for RawSurface {
    fn from(surface: Surface) -> Self {
        let controls = surface
            .controls
            .iter()
            .map(|control| {
                ControlSurfaceBuilder::new()
                    .name(control.name.clone())
                    .control_type(control.control_type.label())
                    .hinge(control.hinge)
                    .inboard(control.inboard)
                    .outboard(control.outboard)
            })
            .collect();
        Self {
            name: surface.name,
            position: surface.position,
            incidence: surface.incidence,
            twist: surface.twist,
            airfoil: Some(surface.airfoil),
            discretization: surface.discretization,
            sections: surface.sections,
            controls,
        }
    }
}
