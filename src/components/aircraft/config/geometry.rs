use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    geometry::GeometryError,
    utils::{
        approx_eq, Position, CHORD_CONTINUITY_TOLERANCE, DEFAULT_AIRFOIL, DEFAULT_C_SPACE,
        DEFAULT_N_CHORD, DEFAULT_N_SPAN, DEFAULT_S_SPACE, SPAN_MERGE_TOLERANCE,
    },
};

/// Which two of {root chord, tip chord, taper ratio} are authoritative for a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordMode {
    RootAndTaper,
    TipAndTaper,
    RootAndTip,
}

impl ChordMode {
    /// Parses a mode tag as written by the editing surface (`Taper+Root`, ...) or by name.
    ///
    /// # Arguments
    /// * `tag` - The raw mode tag.
    /// * `section` - Index of the owning section, reported on failure.
    pub fn from_tag(tag: &str, section: usize) -> Result<Self, GeometryError> {
        match tag.trim() {
            "Taper+Root" | "Root+Taper" | "RootAndTaper" | "root_and_taper" => {
                Ok(ChordMode::RootAndTaper)
            }
            "Taper+Tip" | "Tip+Taper" | "TipAndTaper" | "tip_and_taper" => {
                Ok(ChordMode::TipAndTaper)
            }
            "Root+Tip" | "RootAndTip" | "root_and_tip" => Ok(ChordMode::RootAndTip),
            other => Err(GeometryError::InvalidChordMode {
                section,
                mode: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ChordMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChordMode::RootAndTaper => write!(f, "Taper+Root"),
            ChordMode::TipAndTaper => write!(f, "Taper+Tip"),
            ChordMode::RootAndTip => write!(f, "Root+Tip"),
        }
    }
}

/// Chord parameterization of a section, carrying only the authoritative values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ChordSpec {
    RootAndTaper { root: f64, taper: f64 },
    TipAndTaper { tip: f64, taper: f64 },
    RootAndTip { root: f64, tip: f64 },
}

impl ChordSpec {
    pub fn mode(&self) -> ChordMode {
        match self {
            ChordSpec::RootAndTaper { .. } => ChordMode::RootAndTaper,
            ChordSpec::TipAndTaper { .. } => ChordMode::TipAndTaper,
            ChordSpec::RootAndTip { .. } => ChordMode::RootAndTip,
        }
    }

    /// The two authoritative values with their editing-surface labels.
    pub fn values(&self) -> [(&'static str, f64); 2] {
        match *self {
            ChordSpec::RootAndTaper { root, taper } => [("Root C", root), ("Taper", taper)],
            ChordSpec::TipAndTaper { tip, taper } => [("Tip C", tip), ("Taper", taper)],
            ChordSpec::RootAndTip { root, tip } => [("Root C", root), ("Tip C", tip)],
        }
    }
}

/// Whether the authoritative sweep angle is measured at the leading edge or quarter chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SweepMode {
    LeadingEdge,
    QuarterChord,
}

impl SweepMode {
    pub fn from_tag(tag: &str, section: usize) -> Result<Self, GeometryError> {
        match tag.trim() {
            "LE" | "LeadingEdge" | "leading_edge" => Ok(SweepMode::LeadingEdge),
            "C4" | "C/4" | "QuarterChord" | "quarter_chord" => Ok(SweepMode::QuarterChord),
            other => Err(GeometryError::UnsupportedSweepMode {
                section,
                mode: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SweepMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepMode::LeadingEdge => write!(f, "LE"),
            SweepMode::QuarterChord => write!(f, "C4"),
        }
    }
}

/// Sweep of a section in degrees, tagged by the line it is measured along.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SweepSpec {
    LeadingEdge {
        #[serde(default)]
        angle: f64,
    },
    QuarterChord {
        #[serde(default)]
        angle: f64,
    },
}

impl SweepSpec {
    pub fn new(mode: SweepMode, angle: f64) -> Self {
        match mode {
            SweepMode::LeadingEdge => SweepSpec::LeadingEdge { angle },
            SweepMode::QuarterChord => SweepSpec::QuarterChord { angle },
        }
    }

    pub fn mode(&self) -> SweepMode {
        match self {
            SweepSpec::LeadingEdge { .. } => SweepMode::LeadingEdge,
            SweepSpec::QuarterChord { .. } => SweepMode::QuarterChord,
        }
    }

    pub fn angle(&self) -> f64 {
        match self {
            SweepSpec::LeadingEdge { angle } | SweepSpec::QuarterChord { angle } => *angle,
        }
    }
}

impl Default for SweepSpec {
    fn default() -> Self {
        SweepSpec::LeadingEdge { angle: 0.0 }
    }
}

/// One spanwise panel of a lifting surface, root to tip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Local span increment of this section.
    pub span: f64,
    /// Chord parameterization.
    pub chord: ChordSpec,
    /// Sweep parameterization, unswept leading edge by default.
    #[serde(default)]
    pub sweep: SweepSpec,
    /// Dihedral angle (deg).
    #[serde(default)]
    pub dihedral: f64,
}

impl Section {
    pub fn new(span: f64, chord: ChordSpec) -> Self {
        Self {
            span,
            chord,
            sweep: SweepSpec::default(),
            dihedral: 0.0,
        }
    }

    pub fn with_sweep(mut self, sweep: SweepSpec) -> Self {
        self.sweep = sweep;
        self
    }

    pub fn with_dihedral(mut self, dihedral: f64) -> Self {
        self.dihedral = dihedral;
        self
    }
}

/// Kinds of control surface the solver distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlType {
    Aileron,
    Elevator,
    Rudder,
    Flap,
}

impl ControlType {
    /// Case-insensitive parse of a control type label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "aileron" => Some(ControlType::Aileron),
            "elevator" => Some(ControlType::Elevator),
            "rudder" => Some(ControlType::Rudder),
            "flap" => Some(ControlType::Flap),
            _ => None,
        }
    }

    /// Hinge axis vector written to the CONTROL record.
    pub fn hinge_axis(&self) -> Vector3<f64> {
        match self {
            ControlType::Rudder => Vector3::new(0.0, 0.0, 1.0),
            _ => Vector3::new(0.0, 1.0, 0.0),
        }
    }

    /// Deflection sign on the mirrored half: ailerons deflect antisymmetrically.
    pub fn duplication_sign(&self) -> f64 {
        match self {
            ControlType::Aileron => -1.0,
            _ => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ControlType::Aileron => "aileron",
            ControlType::Elevator => "elevator",
            ControlType::Rudder => "rudder",
            ControlType::Flap => "flap",
        }
    }
}

impl Default for ControlType {
    fn default() -> Self {
        ControlType::Elevator
    }
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A control surface defined over a fraction of its owning surface's span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlSurface {
    pub name: String,
    #[serde(default)]
    pub control_type: ControlType,
    /// Hinge location as a fraction of local chord.
    pub hinge: f64,
    /// Inboard edge as a fraction of total span.
    pub inboard: f64,
    /// Outboard edge as a fraction of total span.
    pub outboard: f64,
}

impl ControlSurface {
    pub fn new(
        name: impl Into<String>,
        control_type: ControlType,
        hinge: f64,
        inboard: f64,
        outboard: f64,
    ) -> Self {
        Self {
            name: name.into(),
            control_type,
            hinge,
            inboard,
            outboard,
        }
    }

    /// True when `0 <= hinge <= 1` and `0 <= inboard <= outboard <= 1`.
    pub fn is_well_formed(&self) -> bool {
        (0.0..=1.0).contains(&self.hinge)
            && 0.0 <= self.inboard
            && self.inboard <= self.outboard
            && self.outboard <= 1.0
    }
}

/// Vortex-lattice panel counts and spacing for a surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Discretization {
    pub n_chord: u32,
    pub c_space: f64,
    pub n_span: u32,
    pub s_space: f64,
}

impl Default for Discretization {
    fn default() -> Self {
        Self {
            n_chord: DEFAULT_N_CHORD,
            c_space: DEFAULT_C_SPACE,
            n_span: DEFAULT_N_SPAN,
            s_space: DEFAULT_S_SPACE,
        }
    }
}

fn default_airfoil() -> String {
    DEFAULT_AIRFOIL.to_string()
}

/// A lifting surface described root to tip by its sections and control surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub name: String,
    /// Offset of the surface root in the aircraft frame.
    #[serde(default)]
    pub position: Position,
    /// Incidence applied uniformly to the surface (deg).
    #[serde(default)]
    pub incidence: f64,
    /// Total twist at the tip, distributed linearly from the root (deg).
    #[serde(default)]
    pub twist: f64,
    /// Airfoil identifier, e.g. a NACA 4-digit code.
    #[serde(default = "default_airfoil")]
    pub airfoil: String,
    #[serde(default)]
    pub discretization: Discretization,
    pub sections: Vec<Section>,
    #[serde(default)]
    pub controls: Vec<ControlSurface>,
}

impl Surface {
    pub fn new(name: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            name: name.into(),
            position: Position::default(),
            incidence: 0.0,
            twist: 0.0,
            airfoil: default_airfoil(),
            discretization: Discretization::default(),
            sections,
            controls: Vec::new(),
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn with_incidence(mut self, incidence: f64) -> Self {
        self.incidence = incidence;
        self
    }

    pub fn with_twist(mut self, twist: f64) -> Self {
        self.twist = twist;
        self
    }

    pub fn with_airfoil(mut self, airfoil: impl Into<String>) -> Self {
        self.airfoil = airfoil.into();
        self
    }

    pub fn with_control(mut self, control: ControlSurface) -> Self {
        self.controls.push(control);
        self
    }

    /// Sum of all section spans.
    pub fn total_span(&self) -> f64 {
        self.sections.iter().map(|s| s.span).sum()
    }

    /// Checks the structural invariants: at least one section, and for every section a
    /// finite span wider than the station merge tolerance with finite, positive chord values.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.sections.is_empty() {
            return Err(GeometryError::EmptySurface {
                surface: self.name.clone(),
            });
        }
        for (index, section) in self.sections.iter().enumerate() {
            if !(section.span.is_finite() && section.span > SPAN_MERGE_TOLERANCE) {
                return Err(GeometryError::InvalidSpan {
                    section: index,
                    span: section.span,
                    minimum: SPAN_MERGE_TOLERANCE,
                });
            }
            for (field, value) in section.chord.values() {
                if !(value.is_finite() && value > 0.0) {
                    return Err(GeometryError::InvalidChord {
                        section: index,
                        field: field.to_string(),
                        value,
                    });
                }
            }
        }
        Ok(())
    }

    /// Authoring-time check that each section's root chord matches the previous tip chord.
    pub fn check_chord_continuity(&self) -> Result<(), GeometryError> {
        let mut previous_tip: Option<f64> = None;
        for (index, section) in self.sections.iter().enumerate() {
            let chords = crate::geometry::resolve_chord(&section.chord);
            if let Some(previous_tip) = previous_tip {
                if !approx_eq(chords.root, previous_tip, CHORD_CONTINUITY_TOLERANCE) {
                    return Err(GeometryError::ChordDiscontinuity {
                        section: index,
                        previous_tip,
                        root: chords.root,
                    });
                }
            }
            previous_tip = Some(chords.tip);
        }
        Ok(())
    }
}
