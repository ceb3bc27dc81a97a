use serde::{Deserialize, Serialize};

use crate::{components::Surface, geometry::resolve_chord, utils::deg_to_rad};

/// Aggregate planform figures for one surface half.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanformSummary {
    pub total_span: f64,
    /// Span projected onto the horizontal plane.
    pub projected_span: f64,
    pub area: f64,
    /// Area-weighted mean aerodynamic chord.
    pub mac: f64,
    pub aspect_ratio: f64,
}

impl PlanformSummary {
    /// Sums trapezoidal section areas and weights each section's MAC by its area.
    pub fn from_surface(surface: &Surface) -> Self {
        let mut summary = PlanformSummary::default();
        let mut mac_weighted = 0.0;

        for section in &surface.sections {
            let chords = resolve_chord(&section.chord);
            let area = 0.5 * section.span * (chords.root + chords.tip);
            let taper = chords.tip / chords.root;
            let mac = (2.0 / 3.0) * chords.root * (1.0 + taper + taper * taper) / (1.0 + taper);

            summary.total_span += section.span;
            summary.projected_span += section.span * deg_to_rad(section.dihedral).cos();
            summary.area += area;
            mac_weighted += area * mac;
        }

        if summary.area > 0.0 {
            summary.mac = mac_weighted / summary.area;
            summary.aspect_ratio = summary.total_span.powi(2) / summary.area;
        }

        summary
    }
}
