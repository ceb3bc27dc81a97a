use nalgebra::Vector3;

use crate::{
    components::Surface,
    geometry::{
        interpolate_incidence, project_leading_edge, resolve_chord, GeometryError,
        ResolvedStation, StationOrigin,
    },
};

/// Resolves the root and every user-defined section boundary of a surface.
///
/// The root station takes the first section's root chord with zero offset and incidence.
/// Each following station sits at the cumulative span of a section's tip, with that
/// section's tip chord and its leading edge projected from the surface root.
pub fn accumulate_sections(surface: &Surface) -> Result<Vec<ResolvedStation>, GeometryError> {
    surface.validate()?;
    let total_span = surface.total_span();

    let mut stations = Vec::with_capacity(surface.sections.len() + 1);
    let root_chord = resolve_chord(&surface.sections[0].chord).root;
    stations.push(ResolvedStation::new(
        0.0,
        Vector3::zeros(),
        root_chord,
        0.0,
        StationOrigin::Section,
    ));

    let mut cumulative_span = 0.0;
    for section in &surface.sections {
        cumulative_span += section.span;
        let chords = resolve_chord(&section.chord);
        stations.push(ResolvedStation::new(
            cumulative_span,
            project_leading_edge(section, cumulative_span),
            chords.tip,
            interpolate_incidence(surface.twist, cumulative_span, total_span),
            StationOrigin::Section,
        ));
    }

    Ok(stations)
}
