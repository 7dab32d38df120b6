//! Pseudo range spoofing injection
use log::trace;
use nalgebra::Vector3;

use crate::{prelude::Error, range::pseudo_range};

/// [Spoofer] corrupts pseudo ranges so the victim receiver
/// resolves a fake position. Each pseudo range is blended between its
/// real value and the value a receiver located at the fake position would observe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spoofer {
    /// Fake position we want the victim to resolve (ECEF m)
    fake_position: Vector3<f64>,
    /// 0.0 = no effect, 1.0 = fully spoofed
    power: f64,
}

impl Spoofer {
    /// Builds new [Spoofer] targetting `fake_position` with
    /// desired intensity, which must lie within [0, 1].
    pub fn new(fake_position: Vector3<f64>, power: f64) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&power) {
            return Err(Error::InvalidSpoofingPower(power));
        }
        Ok(Self {
            fake_position,
            power,
        })
    }

    /// Copies and returns [Spoofer] with updated intensity.
    pub fn with_power(&self, power: f64) -> Result<Self, Error> {
        Self::new(self.fake_position, power)
    }

    pub fn fake_position(&self) -> Vector3<f64> {
        self.fake_position
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    /// Corrupts `real` pseudo ranges (index aligned with `sv_positions`).
    /// `clock_bias_m` is the receiver clock bias the forged signals should
    /// carry, expressed as range.
    pub fn corrupt(
        &self,
        sv_positions: &[Vector3<f64>],
        real: &[f64],
        clock_bias_m: f64,
    ) -> Result<Vec<f64>, Error> {
        if sv_positions.len() != real.len() {
            return Err(Error::MismatchedObservations(
                sv_positions.len(),
                real.len(),
            ));
        }

        if self.power == 0.0 {
            return Ok(real.to_vec());
        }

        let spoofed = sv_positions
            .iter()
            .zip(real.iter())
            .map(|(sv, real)| {
                let forged = pseudo_range(&self.fake_position, sv, clock_bias_m);
                let blended = (1.0 - self.power) * real + self.power * forged;
                trace!("spoofed pr: {:.3} -> {:.3}", real, blended);
                blended
            })
            .collect();

        Ok(spoofed)
    }
}
