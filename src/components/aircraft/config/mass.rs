use serde::{Deserialize, Serialize};

use crate::utils::{Position, GRAVITY_FPS, GRAVITY_MKS};

/// Unit system used for the mass file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    #[default]
    #[serde(rename = "MKS", alias = "mks")]
    Mks,
    #[serde(rename = "FPS", alias = "fps")]
    Fps,
}

impl UnitSystem {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "MKS" => Some(UnitSystem::Mks),
            "FPS" => Some(UnitSystem::Fps),
            _ => None,
        }
    }

    /// (length, mass, time) unit labels.
    pub fn unit_labels(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            UnitSystem::Mks => ("m", "kg", "s"),
            UnitSystem::Fps => ("ft", "slug", "s"),
        }
    }

    pub fn gravity(&self) -> f64 {
        match self {
            UnitSystem::Mks => GRAVITY_MKS,
            UnitSystem::Fps => GRAVITY_FPS,
        }
    }
}

/// A point mass with its moments and products of inertia about its own center.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MassProperty {
    pub name: String,
    pub mass: f64,
    /// Location of the item in the aircraft frame.
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub ixx: f64,
    #[serde(default)]
    pub iyy: f64,
    #[serde(default)]
    pub izz: f64,
    #[serde(default)]
    pub ixy: f64,
    #[serde(default)]
    pub ixz: f64,
    #[serde(default)]
    pub iyz: f64,
}

impl MassProperty {
    /// Creates a point mass with no inertia of its own.
    ///
    /// # Arguments
    /// * `name` - Label written after the `!` in the mass file.
    /// * `mass` - Mass in the aircraft's unit system.
    /// * `position` - Location of the item.
    pub fn point(name: impl Into<String>, mass: f64, position: Position) -> Self {
        Self {
            name: name.into(),
            mass,
            position,
            ..Default::default()
        }
    }

    pub fn with_inertia(mut self, ixx: f64, iyy: f64, izz: f64) -> Self {
        self.ixx = ixx;
        self.iyy = iyy;
        self.izz = izz;
        self
    }

    pub fn with_products(mut self, ixy: f64, ixz: f64, iyz: f64) -> Self {
        self.ixy = ixy;
        self.ixz = ixz;
        self.iyz = iyz;
        self
    }
}
