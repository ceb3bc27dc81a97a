use serde::{Deserialize, Serialize};

/// Constraint used to trim the angle of attack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value")]
pub enum AlphaConstraint {
    /// Fixed angle of attack (deg).
    Angle(f64),
    /// Target lift coefficient.
    #[serde(rename = "CL")]
    Cl(f64),
    /// Target pitching moment coefficient.
    Cm(f64),
}

impl Default for AlphaConstraint {
    fn default() -> Self {
        AlphaConstraint::Angle(0.0)
    }
}

/// Constraint applied to the elevator control variable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value")]
pub enum ElevatorConstraint {
    Deflection(f64),
    Cm(f64),
}

/// A flight condition to run the solver at.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationCase {
    pub name: String,
    #[serde(default)]
    pub mach: f64,
    /// Air density in the aircraft's unit system.
    #[serde(default)]
    pub rho: f64,
    /// Profile drag coefficient added to every surface.
    #[serde(default)]
    pub cdo: f64,
    #[serde(default)]
    pub alpha: AlphaConstraint,
    #[serde(default)]
    pub elevator: Option<ElevatorConstraint>,
    /// Flap deflection (deg), if the flap is set for this case.
    #[serde(default)]
    pub flap: Option<f64>,
}

impl SimulationCase {
    pub fn new(name: impl Into<String>, mach: f64, rho: f64) -> Self {
        Self {
            name: name.into(),
            mach,
            rho,
            ..Default::default()
        }
    }

    pub fn with_alpha(mut self, alpha: AlphaConstraint) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_elevator(mut self, elevator: ElevatorConstraint) -> Self {
        self.elevator = Some(elevator);
        self
    }

    pub fn with_flap(mut self, deflection: f64) -> Self {
        self.flap = Some(deflection);
        self
    }

    pub fn with_cdo(mut self, cdo: f64) -> Self {
        self.cdo = cdo;
        self
    }
}
