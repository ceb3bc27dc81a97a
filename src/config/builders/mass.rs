use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    components::MassProperty,
    config::{
        builders::{draft_f64, require},
        errors::ConfigError,
    },
    utils::Position,
};

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct MassPropertyBuilder {
    pub name: Option<String>,
    pub mass: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub ixx: Option<f64>,
    pub iyy: Option<f64>,
    pub izz: Option<f64>,
    pub ixy: Option<f64>,
    pub ixz: Option<f64>,
    pub iyz: Option<f64>,
}

impl MassPropertyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn position(mut self, x: f64, y: f64, z: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self.z = Some(z);
        self
    }

    pub fn inertia(mut self, ixx: f64, iyy: f64, izz: f64) -> Self {
        self.ixx = Some(ixx);
        self.iyy = Some(iyy);
        self.izz = Some(izz);
        self
    }

    pub fn from_json(name: &str, value: &Value) -> Result<Self, ConfigError> {
        Ok(Self {
            name: Some(name.to_string()),
            mass: draft_f64(value, "Mass"),
            x: draft_f64(value, "X"),
            y: draft_f64(value, "Y"),
            z: draft_f64(value, "Z"),
            ixx: draft_f64(value, "Ixx"),
            iyy: draft_f64(value, "Iyy"),
            izz: draft_f64(value, "Izz"),
            ixy: draft_f64(value, "Ixy"),
            ixz: draft_f64(value, "Ixz"),
            iyz: draft_f64(value, "Iyz"),
        })
    }

    /// Mass and position are required; missing inertia terms default to zero.
    pub fn build(&self) -> Result<MassProperty, ConfigError> {
        let name = self
            .name
            .clone()
            .ok_or_else(|| ConfigError::MissingRequired("mass item name".to_string()))?;
        let context = format!("Mass '{}'", name);

        let property = MassProperty {
            mass: require(self.mass, &context, "Mass")?,
            position: Position::new(
                require(self.x, &context, "X")?,
                require(self.y, &context, "Y")?,
                require(self.z, &context, "Z")?,
            ),
            ixx: self.ixx.unwrap_or(0.0),
            iyy: self.iyy.unwrap_or(0.0),
            izz: self.izz.unwrap_or(0.0),
            ixy: self.ixy.unwrap_or(0.0),
            ixz: self.ixz.unwrap_or(0.0),
            iyz: self.iyz.unwrap_or(0.0),
            name,
        };

        if property.mass <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "{}: mass must be > 0",
                context
            )));
        }
        if property.ixx < 0.0 || property.iyy < 0.0 || property.izz < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "{}: moments of inertia must be >= 0",
                context
            )));
        }
        Ok(property)
    }
}
