/// Local incidence at cumulative span `span` for a surface with tip twist `twist` (deg).
///
/// Twist grows linearly from zero at the root to `twist` at `total_span`, independent of
/// section boundaries. A surface with no span has no twist distribution.
#[inline]
pub fn interpolate_incidence(twist: f64, span: f64, total_span: f64) -> f64 {
    if total_span > 0.0 {
        (twist / total_span) * span
    } else {
        0.0
    }
}
