mod constellation;
mod gps;

pub use constellation::Constellation;
pub use gps::{gps_sv_positions, REFERENCE_CLOCK_BIAS_M, REFERENCE_COORDS_ECEF_M};

use nalgebra::Vector3;

/// Reference receiver position
pub fn reference_position() -> Vector3<f64> {
    Vector3::new(
        REFERENCE_COORDS_ECEF_M.0,
        REFERENCE_COORDS_ECEF_M.1,
        REFERENCE_COORDS_ECEF_M.2,
    )
}
