//! Geometric range and clean pseudo range model
use nalgebra::Vector3;

/// Euclidean distance (m) between two points.
pub fn geometric_range(rx: &Vector3<f64>, sv: &Vector3<f64>) -> f64 {
    (sv - rx).norm()
}

/// Pseudo range (m) observed by a receiver located at `rx`,
/// whose clock bias (expressed as range) is `clock_bias_m`.
pub fn pseudo_range(rx: &Vector3<f64>, sv: &Vector3<f64>, clock_bias_m: f64) -> f64 {
    geometric_range(rx, sv) + clock_bias_m
}

/// Clean pseudo ranges, index aligned with `sv_positions`.
pub fn pseudo_ranges(
    rx: &Vector3<f64>,
    sv_positions: &[Vector3<f64>],
    clock_bias_m: f64,
) -> Vec<f64> {
    sv_positions
        .iter()
        .map(|sv| pseudo_range(rx, sv, clock_bias_m))
        .collect()
}
