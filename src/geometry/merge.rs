use tracing::debug;

use crate::{
    components::Surface,
    geometry::{
        accumulate_sections, interpolate_at_span, resolve_control_breakpoints, ControlBreakpoint,
        GeometryError, ResolvedStation, StationOrigin,
    },
    utils::{approx_eq, SPAN_MERGE_TOLERANCE},
};

/// Resolves a surface into its span-ordered, deduplicated station sequence.
///
/// User-defined boundaries and interpolated control breakpoints are merged; stations within
/// [`SPAN_MERGE_TOLERANCE`] of each other collapse onto one entry whose geometry comes from
/// the user-defined boundary when there is one. Every station inside a control's span also
/// carries that control. The surface itself is never modified.
///
/// # Errors
/// Any structural or interpolation failure aborts the whole surface.
pub fn resolve_surface(surface: &Surface) -> Result<Vec<ResolvedStation>, GeometryError> {
    let user_stations = accumulate_sections(surface)?;
    let total_span = surface.total_span();

    let breakpoints = resolve_control_breakpoints(surface, total_span);
    let control_stations = breakpoints
        .iter()
        .map(|breakpoint| {
            let mut station = interpolate_at_span(surface, breakpoint.span, total_span)?;
            station.attach_control(&breakpoint.control);
            Ok(station)
        })
        .collect::<Result<Vec<_>, GeometryError>>()?;

    let mut stations = merge_stations(user_stations, control_stations);
    attach_spanning_controls(&mut stations, &breakpoints);

    debug!(
        surface = %surface.name,
        sections = surface.sections.len(),
        breakpoints = breakpoints.len(),
        stations = stations.len(),
        total_span,
        "Resolved surface stations"
    );

    Ok(stations)
}

/// Unions user and control stations into one strictly increasing sequence.
///
/// Sorting is stable, so user stations precede control stations at identical spans. When two
/// stations coincide the first-seen one is kept, except that a user-defined station always
/// replaces the geometry of a control station it collides with. Controls of dropped entries
/// move onto the kept entry.
pub fn merge_stations(
    user_stations: Vec<ResolvedStation>,
    control_stations: Vec<ResolvedStation>,
) -> Vec<ResolvedStation> {
    let mut all: Vec<ResolvedStation> = user_stations.into_iter().chain(control_stations).collect();
    all.sort_by(|a, b| a.span.total_cmp(&b.span));

    let mut merged: Vec<ResolvedStation> = Vec::with_capacity(all.len());
    for station in all {
        match merged.last_mut() {
            Some(kept) if approx_eq(station.span, kept.span, SPAN_MERGE_TOLERANCE) => {
                if kept.origin == StationOrigin::ControlBreakpoint
                    && station.origin == StationOrigin::Section
                {
                    let carried = std::mem::take(&mut kept.controls);
                    *kept = station;
                    for control in &carried {
                        kept.attach_control(control);
                    }
                } else {
                    for control in &station.controls {
                        kept.attach_control(control);
                    }
                }
            }
            _ => merged.push(station),
        }
    }

    merged
}

/// Attaches each control to every station lying within its inboard/outboard span.
fn attach_spanning_controls(stations: &mut [ResolvedStation], breakpoints: &[ControlBreakpoint]) {
    for pair in breakpoints.chunks_exact(2) {
        let (inboard, outboard) = (&pair[0], &pair[1]);
        for station in stations.iter_mut() {
            if station.span >= inboard.span - SPAN_MERGE_TOLERANCE
                && station.span <= outboard.span + SPAN_MERGE_TOLERANCE
            {
                station.attach_control(&inboard.control);
            }
        }
    }
}
