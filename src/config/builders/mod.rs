mod aircraft;
mod case;
mod mass;
mod surface;

pub use aircraft::AircraftConfigBuilder;
pub use case::SimulationCaseBuilder;
pub use mass::MassPropertyBuilder;
pub use surface::{ControlSurfaceBuilder, SectionBuilder, SurfaceBuilder};
pub(crate) use surface::build_controls;

use serde_json::Value;

use crate::geometry::GeometryError;

/// Reads a draft field that may be a JSON number or a numeric string.
///
/// Blank strings, anything that fails to parse, and non-finite values such as `"nan"` or
/// `"inf"` count as absent.
pub(crate) fn draft_f64(value: &Value, key: &str) -> Option<f64> {
    let number = match value.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|v| v.is_finite())
}

/// Reads a draft field as a trimmed, non-empty string.
pub(crate) fn draft_str(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn require(field: Option<f64>, context: &str, key: &str) -> Result<f64, GeometryError> {
    field.ok_or_else(|| GeometryError::MissingField {
        context: context.to_string(),
        field: key.to_string(),
    })
}
