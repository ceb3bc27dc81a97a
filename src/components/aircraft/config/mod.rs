mod aircraft;
mod case;
mod geometry;
mod loader;
mod mass;

pub use aircraft::{AircraftConfig, AircraftPreset, AircraftSource, ReferenceDimensions};
pub use case::{AlphaConstraint, ElevatorConstraint, SimulationCase};
pub use geometry::{
    ChordMode, ChordSpec, ControlSurface, ControlType, Discretization, Section, Surface,
    SweepMode, SweepSpec,
};
pub use loader::{RawAircraftConfig, RawSurface};
pub use mass::{MassProperty, UnitSystem};
