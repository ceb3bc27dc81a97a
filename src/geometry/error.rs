use thiserror::Error;

/// Failures of the planform resolution pipeline and of authoring-time surface checks.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Section {section}: invalid chord mode '{mode}'")]
    InvalidChordMode { section: usize, mode: String },

    #[error("Section {section}: unsupported sweep mode '{mode}'")]
    UnsupportedSweepMode { section: usize, mode: String },

    #[error("{context}: required field '{field}' is missing or not a number")]
    MissingField { context: String, field: String },

    #[error("Span {span:.6} lies outside the surface span [0, {total_span:.6}]")]
    SpanOutOfRange { span: f64, total_span: f64 },

    #[error(
        "Chord discontinuity at section {section}: previous tip {previous_tip:.4}, current root {root:.4}"
    )]
    ChordDiscontinuity {
        section: usize,
        previous_tip: f64,
        root: f64,
    },

    #[error("Surface '{surface}' has no sections")]
    EmptySurface { surface: String },

    #[error("Section {section}: span must be finite and larger than {minimum}, got {span}")]
    InvalidSpan { section: usize, span: f64, minimum: f64 },

    #[error("Section {section}: {field} must be finite and positive, got {value}")]
    InvalidChord {
        section: usize,
        field: String,
        value: f64,
    },
}
