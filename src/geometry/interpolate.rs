use crate::{
    components::Surface,
    geometry::{
        interpolate_incidence, project_leading_edge, resolve_chord, GeometryError,
        ResolvedStation, StationOrigin,
    },
    utils::{lerp, lerp_vec, SPAN_RANGE_TOLERANCE},
};

/// Evaluates full section geometry at an arbitrary absolute span.
///
/// The target is located in the first section whose closed range `[start, end]` contains it.
/// Chord blends that section's root and tip chords; the leading edge blends the section's
/// projection at `start` and at `end`; incidence is evaluated directly at the target span.
///
/// # Errors
/// `SpanOutOfRange` when the target lies outside `[0, total_span]` beyond a small relative
/// tolerance at either end.
pub fn interpolate_at_span(
    surface: &Surface,
    target: f64,
    total_span: f64,
) -> Result<ResolvedStation, GeometryError> {
    let tolerance = SPAN_RANGE_TOLERANCE * total_span.abs().max(1.0);
    if !target.is_finite() || target < -tolerance || target > total_span + tolerance {
        return Err(GeometryError::SpanOutOfRange {
            span: target,
            total_span,
        });
    }
    let target = target.clamp(0.0, total_span);

    let mut start = 0.0;
    for section in &surface.sections {
        let end = start + section.span;

        if start <= target && target <= end {
            let frac = (target - start) / section.span;
            let chords = resolve_chord(&section.chord);

            let chord = lerp(chords.root, chords.tip, frac);
            let leading_edge = lerp_vec(
                &project_leading_edge(section, start),
                &project_leading_edge(section, end),
                frac,
            );
            let incidence = interpolate_incidence(surface.twist, target, total_span);

            return Ok(ResolvedStation::new(
                target,
                leading_edge,
                chord,
                incidence,
                StationOrigin::ControlBreakpoint,
            ));
        }

        start = end;
    }

    Err(GeometryError::SpanOutOfRange {
        span: target,
        total_span,
    })
}
