use nalgebra::Vector3;
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Component-wise linear interpolation between two points
pub fn lerp_vec(start: &Vector3<f64>, end: &Vector3<f64>, factor: f64) -> Vector3<f64> {
    Vector3::new(
        lerp(start.x, end.x, factor),
        lerp(start.y, end.y, factor),
        lerp(start.z, end.z, factor),
    )
}

/// Absolute-tolerance float comparison
#[inline]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}
