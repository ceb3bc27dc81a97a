use serde_json::Value;

use crate::{
    components::{AircraftConfig, RawAircraftConfig, RawSurface, UnitSystem},
    config::{
        builders::{
            draft_f64, draft_str, MassPropertyBuilder, SimulationCaseBuilder, SurfaceBuilder,
        },
        errors::ConfigError,
    },
    utils::Position,
};

/// Assembles a whole aircraft from drafts of its parts.
///
/// Reference dimensions left unset are derived from the first surface when the aircraft
/// is built.
#[derive(Default, Debug, Clone)]
pub struct AircraftConfigBuilder {
    name: Option<String>,
    units: Option<UnitSystem>,
    sref: Option<f64>,
    cref: Option<f64>,
    bref: Option<f64>,
    moment_reference: Position,
    surfaces: Vec<SurfaceBuilder>,
    mass: Vec<MassPropertyBuilder>,
    cases: Vec<SimulationCaseBuilder>,
}

impl AircraftConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn units(mut self, units: UnitSystem) -> Self {
        self.units = Some(units);
        self
    }

    pub fn reference(mut self, sref: f64, cref: f64, bref: f64) -> Self {
        self.sref = Some(sref);
        self.cref = Some(cref);
        self.bref = Some(bref);
        self
    }

    pub fn moment_reference(mut self, position: Position) -> Self {
        self.moment_reference = position;
        self
    }

    pub fn surface(mut self, surface: SurfaceBuilder) -> Self {
        self.surfaces.push(surface);
        self
    }

    pub fn mass(mut self, mass: MassPropertyBuilder) -> Self {
        self.mass.push(mass);
        self
    }

    pub fn case(mut self, case: SimulationCaseBuilder) -> Self {
        self.cases.push(case);
        self
    }

    /// Reads a whole-aircraft draft.
    ///
    /// `"Surfaces"`, `"Mass"` and `"Cases"` are arrays of objects, each carrying its own
    /// `"Name"` next to the fields its builder reads.
    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        let mut builder = Self::new();
        builder.name = draft_str(value, "Name");
        builder.units = match draft_str(value, "Units") {
            Some(label) => Some(UnitSystem::from_label(&label).ok_or_else(|| {
                ConfigError::ValidationError(format!("Unknown unit system '{}'", label))
            })?),
            None => None,
        };
        builder.sref = draft_f64(value, "Sref");
        builder.cref = draft_f64(value, "Cref");
        builder.bref = draft_f64(value, "Bref");
        builder.moment_reference = Position::new(
            draft_f64(value, "Xref").unwrap_or(0.0),
            draft_f64(value, "Yref").unwrap_or(0.0),
            draft_f64(value, "Zref").unwrap_or(0.0),
        );

        for (name, draft) in named_items(value, "Surfaces")? {
            builder.surfaces.push(SurfaceBuilder::from_json(&name, draft)?);
        }
        for (name, draft) in named_items(value, "Mass")? {
            builder.mass.push(MassPropertyBuilder::from_json(&name, draft)?);
        }
        for (name, draft) in named_items(value, "Cases")? {
            builder.cases.push(SimulationCaseBuilder::from_json(&name, draft)?);
        }

        Ok(builder)
    }

    pub fn build(&self) -> Result<AircraftConfig, ConfigError> {
        let raw = RawAircraftConfig {
            name: self
                .name
                .clone()
                .ok_or_else(|| ConfigError::MissingRequired("aircraft name".to_string()))?,
            units: self.units.unwrap_or_default(),
            sref: self.sref,
            cref: self.cref,
            bref: self.bref,
            moment_reference: self.moment_reference,
            surfaces: self
                .surfaces
                .iter()
                .map(|surface| surface.build().map(RawSurface::from))
                .collect::<Result<_, _>>()?,
            mass: self
                .mass
                .iter()
                .map(MassPropertyBuilder::build)
                .collect::<Result<_, _>>()?,
            cases: self
                .cases
                .iter()
                .map(SimulationCaseBuilder::build)
                .collect::<Result<_, _>>()?,
        };
        AircraftConfig::from_raw_config(raw)
    }
}

fn named_items<'a>(value: &'a Value, key: &str) -> Result<Vec<(String, &'a Value)>, ConfigError> {
    let Some(items) = value.get(key) else {
        return Ok(Vec::new());
    };
    let items = items
        .as_array()
        .ok_or_else(|| ConfigError::ValidationError(format!("'{}' must be a list", key)))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            draft_str(item, "Name")
                .map(|name| (name, item))
                .ok_or_else(|| ConfigError::MissingRequired(format!("{}[{}].Name", key, index)))
        })
        .collect()
}
