pub mod config;

pub use config::{
    AircraftConfig, AircraftPreset, AircraftSource, AlphaConstraint, ChordMode, ChordSpec,
    ControlSurface, ControlType, Discretization, ElevatorConstraint, MassProperty,
    RawAircraftConfig, RawSurface, ReferenceDimensions, Section, SimulationCase, Surface,
    SweepMode, SweepSpec, UnitSystem,
};
