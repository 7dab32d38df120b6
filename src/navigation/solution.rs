use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{constants::SPEED_OF_LIGHT_M_S, range::geometric_range};

/// [ReceiverSolution] resolved for one epoch
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReceiverSolution {
    /// Position estimate (ECEF m)
    pub position: Vector3<f64>,
    /// Receiver clock bias, expressed as range (m)
    pub clock_bias_m: f64,
    /// Number of iterations performed
    pub iterations: usize,
    /// True when the iteration converged before reaching the iteration limit
    pub converged: bool,
}

impl ReceiverSolution {
    pub fn x(&self) -> f64 {
        self.position[0]
    }

    pub fn y(&self) -> f64 {
        self.position[1]
    }

    pub fn z(&self) -> f64 {
        self.position[2]
    }

    /// Receiver clock bias in seconds
    pub fn clock_bias_s(&self) -> f64 {
        self.clock_bias_m / SPEED_OF_LIGHT_M_S
    }

    /// Post-fit residuals (m): observed minus predicted pseudo range,
    /// index aligned with provided observations.
    pub fn residuals(&self, sv_positions: &[Vector3<f64>], pseudo_ranges: &[f64]) -> Vec<f64> {
        sv_positions
            .iter()
            .zip(pseudo_ranges.iter())
            .map(|(sv, pr)| pr - (geometric_range(&self.position, sv) + self.clock_bias_m))
            .collect()
    }
}
