use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    components::{AlphaConstraint, ElevatorConstraint, SimulationCase},
    config::{
        builders::{draft_f64, draft_str, require},
        errors::ConfigError,
    },
};

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct SimulationCaseBuilder {
    pub name: Option<String>,
    pub mach: Option<f64>,
    pub rho: Option<f64>,
    pub cdo: Option<f64>,
    pub aoa_mode: Option<String>,
    pub aoa_value: Option<f64>,
    pub elevator_mode: Option<String>,
    pub elevator_value: Option<f64>,
    pub flap_mode: Option<String>,
    pub flap_value: Option<f64>,
}

impl SimulationCaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn mach(mut self, mach: f64) -> Self {
        self.mach = Some(mach);
        self
    }

    pub fn rho(mut self, rho: f64) -> Self {
        self.rho = Some(rho);
        self
    }

    pub fn cdo(mut self, cdo: f64) -> Self {
        self.cdo = Some(cdo);
        self
    }

    pub fn aoa(mut self, mode: impl Into<String>, value: f64) -> Self {
        self.aoa_mode = Some(mode.into());
        self.aoa_value = Some(value);
        self
    }

    pub fn elevator(mut self, mode: impl Into<String>, value: f64) -> Self {
        self.elevator_mode = Some(mode.into());
        self.elevator_value = Some(value);
        self
    }

    pub fn flap(mut self, value: f64) -> Self {
        self.flap_mode = Some("Deflection".to_string());
        self.flap_value = Some(value);
        self
    }

    pub fn from_json(name: &str, value: &Value) -> Result<Self, ConfigError> {
        Ok(Self {
            name: Some(name.to_string()),
            mach: draft_f64(value, "Mach"),
            rho: draft_f64(value, "Rho"),
            cdo: draft_f64(value, "Cdo"),
            aoa_mode: draft_str(value, "AOA Mode"),
            aoa_value: draft_f64(value, "AOA Val"),
            elevator_mode: draft_str(value, "Elevator Mode"),
            elevator_value: draft_f64(value, "Elevator Val"),
            flap_mode: draft_str(value, "Flap Mode"),
            flap_value: draft_f64(value, "Flap Val"),
        })
    }

    pub fn build(&self) -> Result<SimulationCase, ConfigError> {
        let name = self
            .name
            .clone()
            .ok_or_else(|| ConfigError::MissingRequired("case name".to_string()))?;
        let context = format!("Case '{}'", name);

        let aoa_value = require(self.aoa_value, &context, "AOA Val")?;
        let alpha = match self.aoa_mode.as_deref().unwrap_or("Angle") {
            "Angle" => AlphaConstraint::Angle(aoa_value),
            "CL" => AlphaConstraint::Cl(aoa_value),
            "Cm" => AlphaConstraint::Cm(aoa_value),
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "{}: unknown AOA mode '{}'",
                    context, other
                )))
            }
        };

        let elevator = match self.elevator_mode.as_deref() {
            None => None,
            Some("Deflection") => Some(ElevatorConstraint::Deflection(require(
                self.elevator_value,
                &context,
                "Elevator Val",
            )?)),
            Some("Cm") => Some(ElevatorConstraint::Cm(require(
                self.elevator_value,
                &context,
                "Elevator Val",
            )?)),
            Some(other) => {
                return Err(ConfigError::ValidationError(format!(
                    "{}: unknown elevator mode '{}'",
                    context, other
                )))
            }
        };

        let flap = match self.flap_mode.as_deref() {
            None => None,
            Some("Deflection") => Some(require(self.flap_value, &context, "Flap Val")?),
            Some(other) => {
                return Err(ConfigError::ValidationError(format!(
                    "{}: unknown flap mode '{}'",
                    context, other
                )))
            }
        };

        Ok(SimulationCase {
            mach: require(self.mach, &context, "Mach")?,
            rho: require(self.rho, &context, "Rho")?,
            cdo: self.cdo.unwrap_or(0.0),
            alpha,
            elevator,
            flap,
            name,
        })
    }
}
