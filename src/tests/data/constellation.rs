use nalgebra::{Rotation3, Vector3};

use crate::constants::EARTH_GRAVITATION_MU_M3_S2;

/// Circular orbit constellation, 6 planes of 4 vehicles.
pub struct Constellation {
    /// Orbital radius (m)
    pub radius_m: f64,
    /// Inclination (rad)
    pub inclination_rad: f64,
    pub planes: usize,
    pub per_plane: usize,
}

impl Default for Constellation {
    fn default() -> Self {
        Self {
            radius_m: 26_571_000.0,
            inclination_rad: 55.0_f64.to_radians(),
            planes: 6,
            per_plane: 4,
        }
    }
}

impl Constellation {
    /// Angular velocity (rad/s)
    fn omega(&self) -> f64 {
        (EARTH_GRAVITATION_MU_M3_S2 / self.radius_m.powi(3)).sqrt()
    }

    /// All vehicle positions (ECEF m) at `t` seconds.
    pub fn positions(&self, t: f64) -> Vec<Vector3<f64>> {
        let mut positions = Vec::with_capacity(self.planes * self.per_plane);
        let tau = std::f64::consts::TAU;

        for plane in 0..self.planes {
            let raan = plane as f64 * tau / self.planes as f64;
            let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), raan)
                * Rotation3::from_axis_angle(&Vector3::x_axis(), self.inclination_rad);

            for sat in 0..self.per_plane {
                let u = self.omega() * t
                    + sat as f64 * tau / self.per_plane as f64
                    + plane as f64 * tau / 24.0;

                let in_plane = Vector3::new(self.radius_m * u.cos(), self.radius_m * u.sin(), 0.0);
                positions.push(rotation * in_plane);
            }
        }

        positions
    }
}

#[cfg(test)]
mod test {
    use super::Constellation;

    #[test]
    fn constellation_geometry() {
        let constellation = Constellation::default();
        for t in [0.0, 60.0, 3600.0] {
            let positions = constellation.positions(t);
            assert_eq!(positions.len(), 24);
            for position in positions {
                assert!((position.norm() - constellation.radius_m).abs() < 1.0E-3);
            }
        }
    }
}
