use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::{
    components::{
        ChordMode, ChordSpec, ControlSurface, ControlType, Discretization, Section, Surface,
        SweepMode, SweepSpec,
    },
    config::{
        builders::{draft_f64, draft_str, require},
        errors::ConfigError,
    },
    utils::{Position, DEFAULT_AIRFOIL},
};

/// Draft of one section as collected by an editing surface.
///
/// Every value is optional here; which ones are required depends on the chord and sweep
/// modes and is only decided in [`SectionBuilder::build`].
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct SectionBuilder {
    pub span: Option<f64>,
    pub chord_mode: Option<String>,
    pub root_chord: Option<f64>,
    pub tip_chord: Option<f64>,
    pub taper: Option<f64>,
    pub sweep_mode: Option<String>,
    pub le_sweep: Option<f64>,
    pub c4_sweep: Option<f64>,
    pub dihedral: Option<f64>,
}

impl SectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn span(mut self, span: f64) -> Self {
        self.span = Some(span);
        self
    }

    pub fn chord_mode(mut self, mode: impl Into<String>) -> Self {
        self.chord_mode = Some(mode.into());
        self
    }

    pub fn root_chord(mut self, chord: f64) -> Self {
        self.root_chord = Some(chord);
        self
    }

    pub fn tip_chord(mut self, chord: f64) -> Self {
        self.tip_chord = Some(chord);
        self
    }

    pub fn taper(mut self, taper: f64) -> Self {
        self.taper = Some(taper);
        self
    }

    pub fn sweep_mode(mut self, mode: impl Into<String>) -> Self {
        self.sweep_mode = Some(mode.into());
        self
    }

    pub fn le_sweep(mut self, angle: f64) -> Self {
        self.le_sweep = Some(angle);
        self
    }

    pub fn c4_sweep(mut self, angle: f64) -> Self {
        self.c4_sweep = Some(angle);
        self
    }

    pub fn dihedral(mut self, angle: f64) -> Self {
        self.dihedral = Some(angle);
        self
    }

    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        Ok(Self {
            span: draft_f64(value, "Span"),
            chord_mode: draft_str(value, "ChordMode"),
            root_chord: draft_f64(value, "Root C"),
            tip_chord: draft_f64(value, "Tip C"),
            taper: draft_f64(value, "Taper"),
            sweep_mode: draft_str(value, "SweepMode"),
            le_sweep: draft_f64(value, "LE Sweep"),
            c4_sweep: draft_f64(value, "C/4 Sweep"),
            dihedral: draft_f64(value, "Dihedral"),
        })
    }

    /// Builds the section, reading only the fields the active modes need.
    ///
    /// # Arguments
    /// * `index` - Position of the section within its surface, used in error messages.
    pub fn build(&self, index: usize) -> Result<Section, ConfigError> {
        let context = format!("Section {}", index);

        let chord_mode = match &self.chord_mode {
            Some(tag) => ChordMode::from_tag(tag, index)?,
            None => ChordMode::RootAndTaper,
        };
        let chord = match chord_mode {
            ChordMode::RootAndTaper => ChordSpec::RootAndTaper {
                root: require(self.root_chord, &context, "Root C")?,
                taper: require(self.taper, &context, "Taper")?,
            },
            ChordMode::TipAndTaper => ChordSpec::TipAndTaper {
                tip: require(self.tip_chord, &context, "Tip C")?,
                taper: require(self.taper, &context, "Taper")?,
            },
            ChordMode::RootAndTip => ChordSpec::RootAndTip {
                root: require(self.root_chord, &context, "Root C")?,
                tip: require(self.tip_chord, &context, "Tip C")?,
            },
        };

        let sweep_mode = match &self.sweep_mode {
            Some(tag) => SweepMode::from_tag(tag, index)?,
            None => SweepMode::LeadingEdge,
        };
        let sweep_angle = match sweep_mode {
            SweepMode::LeadingEdge => self.le_sweep,
            SweepMode::QuarterChord => self.c4_sweep,
        };

        Ok(Section {
            span: require(self.span, &context, "Span")?,
            chord,
            sweep: SweepSpec::new(sweep_mode, sweep_angle.unwrap_or(0.0)),
            dihedral: self.dihedral.unwrap_or(0.0),
        })
    }
}

/// Draft of one control surface.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct ControlSurfaceBuilder {
    pub name: Option<String>,
    pub control_type: Option<String>,
    pub hinge: Option<f64>,
    pub inboard: Option<f64>,
    pub outboard: Option<f64>,
}

impl ControlSurfaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn control_type(mut self, control_type: impl Into<String>) -> Self {
        self.control_type = Some(control_type.into());
        self
    }

    pub fn hinge(mut self, hinge: f64) -> Self {
        self.hinge = Some(hinge);
        self
    }

    pub fn inboard(mut self, fraction: f64) -> Self {
        self.inboard = Some(fraction);
        self
    }

    pub fn outboard(mut self, fraction: f64) -> Self {
        self.outboard = Some(fraction);
        self
    }

    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        Ok(Self {
            name: draft_str(value, "Control Name"),
            control_type: draft_str(value, "Control Type"),
            hinge: draft_f64(value, "Hinge Loc"),
            inboard: draft_f64(value, "Inboard Loc"),
            outboard: draft_f64(value, "Outboard Loc"),
        })
    }

    /// Builds the control, naming it `<surface>_<type>_<index + 1>` when no name was given.
    pub fn build(&self, surface: &str, index: usize) -> Result<ControlSurface, ConfigError> {
        let control_type = match &self.control_type {
            Some(label) => ControlType::from_label(label).ok_or_else(|| {
                ConfigError::ValidationError(format!(
                    "Control {} on '{}': unknown control type '{}'",
                    index, surface, label
                ))
            })?,
            None => ControlType::default(),
        };
        let name = self
            .name
            .clone()
            .unwrap_or_else(|| format!("{}_{}_{}", surface, control_type.label(), index + 1));

        let context = format!("Control '{}'", name);
        let control = ControlSurface {
            hinge: require(self.hinge, &context, "Hinge Loc")?,
            inboard: require(self.inboard, &context, "Inboard Loc")?,
            outboard: require(self.outboard, &context, "Outboard Loc")?,
            control_type,
            name,
        };

        if !control.is_well_formed() {
            return Err(ConfigError::ValidationError(format!(
                "{}: fractions must satisfy 0 <= hinge <= 1 and 0 <= inboard <= outboard <= 1",
                context
            )));
        }
        Ok(control)
    }
}

/// Builds every complete control of a surface, skipping the rest with a warning.
pub(crate) fn build_controls(
    surface: &str,
    drafts: &[ControlSurfaceBuilder],
) -> Vec<ControlSurface> {
    drafts
        .iter()
        .enumerate()
        .filter_map(|(index, draft)| match draft.build(surface, index) {
            Ok(control) => Some(control),
            Err(e) => {
                warn!(surface = %surface, index, "Skipping incomplete control: {}", e);
                None
            }
        })
        .collect()
}

/// Draft of a complete lifting surface.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceBuilder {
    pub name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub incidence: Option<f64>,
    pub twist: Option<f64>,
    pub airfoil: Option<String>,
    pub discretization: Option<Discretization>,
    pub sections: Vec<SectionBuilder>,
    pub controls: Vec<ControlSurfaceBuilder>,
}

impl SurfaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn position(mut self, x: f64, y: f64, z: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self.z = Some(z);
        self
    }

    pub fn incidence(mut self, incidence: f64) -> Self {
        self.incidence = Some(incidence);
        self
    }

    pub fn twist(mut self, twist: f64) -> Self {
        self.twist = Some(twist);
        self
    }

    pub fn airfoil(mut self, airfoil: impl Into<String>) -> Self {
        self.airfoil = Some(airfoil.into());
        self
    }

    pub fn discretization(mut self, discretization: Discretization) -> Self {
        self.discretization = Some(discretization);
        self
    }

    pub fn section(mut self, section: SectionBuilder) -> Self {
        self.sections.push(section);
        self
    }

    pub fn control(mut self, control: ControlSurfaceBuilder) -> Self {
        self.controls.push(control);
        self
    }

    /// Reads a draft in the editing surface's layout (`"X Loc"`, `"Sections"`, ...).
    ///
    /// The surface name is not part of the draft; pass it separately.
    pub fn from_json(name: &str, value: &Value) -> Result<Self, ConfigError> {
        let mut builder = Self::new().name(name);

        builder.x = draft_f64(value, "X Loc");
        builder.y = draft_f64(value, "Y Loc");
        builder.z = draft_f64(value, "Z Loc");
        builder.incidence = draft_f64(value, "Incidence");
        builder.twist = draft_f64(value, "Twist");
        builder.airfoil = draft_str(value, "NACA Airfoil");

        if let Some(sections) = value.get("Sections").and_then(|v| v.as_array()) {
            builder.sections = sections
                .iter()
                .map(SectionBuilder::from_json)
                .collect::<Result<_, _>>()?;
        }
        if let Some(controls) = value.get("Controls").and_then(|v| v.as_array()) {
            builder.controls = controls
                .iter()
                .map(ControlSurfaceBuilder::from_json)
                .collect::<Result<_, _>>()?;
        }

        Ok(builder)
    }

    /// Commits the draft: builds every section, checks chord continuity, and keeps only the
    /// controls that are complete.
    pub fn build(&self) -> Result<Surface, ConfigError> {
        let name = self
            .name
            .clone()
            .ok_or_else(|| ConfigError::MissingRequired("surface name".to_string()))?;

        let sections = self
            .sections
            .iter()
            .enumerate()
            .map(|(index, section)| section.build(index))
            .collect::<Result<Vec<_>, _>>()?;

        let controls = build_controls(&name, &self.controls);

        let surface = Surface {
            name,
            position: Position::new(
                self.x.unwrap_or(0.0),
                self.y.unwrap_or(0.0),
                self.z.unwrap_or(0.0),
            ),
            incidence: self.incidence.unwrap_or(0.0),
            twist: self.twist.unwrap_or(0.0),
            airfoil: self
                .airfoil
                .clone()
                .unwrap_or_else(|| DEFAULT_AIRFOIL.to_string()),
            discretization: self.discretization.unwrap_or_default(),
            sections,
            controls,
        };

        surface.validate()?;
        surface.check_chord_continuity()?;
        Ok(surface)
    }
}
