pub mod aircraft;

pub use aircraft::{
    AircraftConfig, AircraftPreset, AircraftSource, AlphaConstraint, ChordMode, ChordSpec,
    ControlSurface, ControlType, Discretization, ElevatorConstraint, MassProperty,
    RawAircraftConfig, RawSurface, ReferenceDimensions, Section, SimulationCase, Surface,
    SweepMode, SweepSpec, UnitSystem,
};
