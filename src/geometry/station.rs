use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::{ControlSurface, ControlType};

/// Control surface data carried by a resolved station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlMetadata {
    pub name: String,
    /// Hinge location as a fraction of local chord.
    pub hinge: f64,
    pub control_type: ControlType,
}

impl From<&ControlSurface> for ControlMetadata {
    fn from(control: &ControlSurface) -> Self {
        Self {
            name: control.name.clone(),
            hinge: control.hinge,
            control_type: control.control_type,
        }
    }
}

/// Where a station came from before merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StationOrigin {
    /// Root or a user-defined section boundary.
    Section,
    /// Interpolated at a control-surface edge.
    ControlBreakpoint,
}

/// A fully resolved cross-section of a lifting surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStation {
    /// Distance from the surface root along the span.
    pub span: f64,
    /// Leading-edge offset from the surface origin.
    pub leading_edge: Vector3<f64>,
    pub chord: f64,
    /// Local incidence (deg).
    pub incidence: f64,
    pub origin: StationOrigin,
    /// Controls whose strip includes this station, in definition order.
    #[serde(default)]
    pub controls: Vec<ControlMetadata>,
}

impl ResolvedStation {
    pub fn new(
        span: f64,
        leading_edge: Vector3<f64>,
        chord: f64,
        incidence: f64,
        origin: StationOrigin,
    ) -> Self {
        Self {
            span,
            leading_edge,
            chord,
            incidence,
            origin,
            controls: Vec::new(),
        }
    }

    /// Attaches a control unless one with the same name is already present.
    pub fn attach_control(&mut self, control: &ControlMetadata) {
        if !self.controls.iter().any(|c| c.name == control.name) {
            self.controls.push(control.clone());
        }
    }

    pub fn has_controls(&self) -> bool {
        !self.controls.is_empty()
    }
}
