use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{components::Surface, geometry::ControlMetadata};

/// Which edge of a control surface a breakpoint marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlEdge {
    Inboard,
    Outboard,
}

/// An absolute spanwise location where a control surface starts or ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlBreakpoint {
    pub span: f64,
    pub edge: ControlEdge,
    pub control: ControlMetadata,
}

/// Converts every control's fractional span extents into absolute breakpoints.
///
/// Two breakpoints (inboard then outboard) are produced per control, in definition order.
/// A control with non-finite or out-of-order fractions is dropped with a warning instead of
/// failing the surface.
pub fn resolve_control_breakpoints(surface: &Surface, total_span: f64) -> Vec<ControlBreakpoint> {
    let mut breakpoints = Vec::with_capacity(surface.controls.len() * 2);

    for control in &surface.controls {
        if !control.is_well_formed() {
            warn!(
                surface = %surface.name,
                control = %control.name,
                inboard = control.inboard,
                outboard = control.outboard,
                hinge = control.hinge,
                "Dropping control surface with invalid span fractions"
            );
            continue;
        }

        let metadata = ControlMetadata::from(control);
        breakpoints.push(ControlBreakpoint {
            span: control.inboard * total_span,
            edge: ControlEdge::Inboard,
            control: metadata.clone(),
        });
        breakpoints.push(ControlBreakpoint {
            span: control.outboard * total_span,
            edge: ControlEdge::Outboard,
            control: metadata,
        });
    }

    breakpoints
}
