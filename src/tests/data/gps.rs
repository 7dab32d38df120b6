use nalgebra::Vector3;

/// Reference receiver coordinates (ECEF m)
pub const REFERENCE_COORDS_ECEF_M: (f64, f64, f64) = (3582105.291, 532589.7313, 5232754.8054);

/// Reference receiver clock bias, expressed as range (m)
pub const REFERENCE_CLOCK_BIAS_M: f64 = 30.0;

/// GPS vehicles (G02, G03, G05, G08) positions (ECEF m), as observed
/// from the reference site.
pub fn gps_sv_positions() -> Vec<Vector3<f64>> {
    vec![
        Vector3::new(24170352.34904016, -16029029.85873581, -5905924.153143198),
        Vector3::new(16069642.946692571, -8992001.827692423, 23184746.654093638),
        Vector3::new(26119621.94656989, 7791422.617964384, 11558902.718228433),
        Vector3::new(-3601205.0295727667, -20311399.087870672, 21230831.216778148),
    ]
}
