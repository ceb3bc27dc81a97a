use thiserror::Error;

use crate::geometry::GeometryError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid geometry: {0}")]
    Geometry(#[from] GeometryError),
    #[error("Missing required parameter: {0}")]
    MissingRequired(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}
