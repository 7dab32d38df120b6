//! Linearized pseudo range navigation
use log::debug;
use nalgebra::{Matrix1x4, Matrix4, Vector3, Vector4};

pub mod gauss;
mod solution;

pub use solution::ReceiverSolution;

use crate::range::geometric_range;

/// Single observation contribution to the normal equations
pub(crate) struct MatrixContribution {
    /// Design matrix row: unit line of sight + clock term
    pub h: Matrix1x4<f64>,
    /// Linearized residual
    pub b: f64,
}

impl MatrixContribution {
    /// Forms the [MatrixContribution] of a satellite located at `sv`,
    /// observed with pseudo range `pr`, from the current estimate.
    /// Returns None when the predicted range is below `min_range_m`.
    pub fn new(
        estimate: &Vector3<f64>,
        clock_bias_m: f64,
        sv: &Vector3<f64>,
        pr: f64,
        min_range_m: f64,
    ) -> Option<Self> {
        let rho = geometric_range(estimate, sv);
        if rho < min_range_m {
            return None;
        }

        let los = (estimate - sv) / rho;

        Some(Self {
            h: Matrix1x4::new(los[0], los[1], los[2], 1.0),
            b: pr - (rho + clock_bias_m),
        })
    }
}

/// Normal equations system HᵗH · dx = Hᵗb
#[derive(Debug, Clone)]
pub(crate) struct Navigation {
    ht_h: Matrix4<f64>,
    ht_b: Vector4<f64>,
    /// Number of contributions
    pub size: usize,
}

impl Navigation {
    /// Forms the [Navigation] system, linearized at current estimate.
    pub fn new(
        estimate: &Vector3<f64>,
        clock_bias_m: f64,
        sv_positions: &[Vector3<f64>],
        pseudo_ranges: &[f64],
        min_range_m: f64,
    ) -> Self {
        let mut s = Self {
            ht_h: Matrix4::zeros(),
            ht_b: Vector4::zeros(),
            size: 0,
        };

        for (i, (sv, pr)) in sv_positions.iter().zip(pseudo_ranges.iter()).enumerate() {
            match MatrixContribution::new(estimate, clock_bias_m, sv, *pr, min_range_m) {
                Some(contribution) => s.add(&contribution),
                None => {
                    debug!("observation #{} dropped: degenerate geometry", i);
                },
            }
        }

        s
    }

    fn add(&mut self, contribution: &MatrixContribution) {
        let ht = contribution.h.transpose();
        self.ht_h += ht * contribution.h;
        self.ht_b += ht * contribution.b;
        self.size += 1;
    }

    /// Resolves the state correction `dx = (x, y, z, clock_bias)`
    pub fn resolve(&self, pivot_epsilon: f64) -> Vector4<f64> {
        gauss::solve4(self.ht_h, self.ht_b, pivot_epsilon)
    }
}
