use nalgebra::Vector3;

use crate::{
    components::{Section, SweepSpec},
    geometry::resolve_chord,
    utils::deg_to_rad,
};

/// Leading-edge offset of a section evaluated at spanwise distance `span`.
///
/// `span` is the cumulative span measured from the surface root; both the section-boundary
/// walk and the spanwise interpolator call this with that origin.
///
/// The spanwise coordinate is rotated about the root by the section's dihedral. The
/// chordwise offset follows the sweep mode: a straight leading edge for
/// [`SweepSpec::LeadingEdge`], or for [`SweepSpec::QuarterChord`] the quarter-chord line
/// swept from `root/4` with the leading edge backed out by a quarter of the tip chord.
pub fn project_leading_edge(section: &Section, span: f64) -> Vector3<f64> {
    let dihedral = deg_to_rad(section.dihedral);
    let y = span * dihedral.cos();
    let z = span * dihedral.sin();

    let x = match section.sweep {
        SweepSpec::LeadingEdge { angle } => span * deg_to_rad(angle).tan(),
        SweepSpec::QuarterChord { angle } => {
            let chords = resolve_chord(&section.chord);
            let quarter_chord_root = chords.root / 4.0;
            let quarter_chord_tip = quarter_chord_root + span * deg_to_rad(angle).tan();
            quarter_chord_tip - chords.tip / 4.0
        }
    };

    Vector3::new(x, y, z)
}
