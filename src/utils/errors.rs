use std::io;
use thiserror::Error;

use crate::{config::ConfigError, geometry::GeometryError};

/// Top-level error for emitting solver files and running jobs.
#[derive(Error, Debug)]
pub enum PavlError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Simulation case not found: {0}")]
    UnknownCase(String),

    #[error("Solver error: {0}")]
    Solver(String),
}
