//! Pseudo range position solver
use log::{debug, trace, warn};
use nalgebra::Vector3;

use crate::{
    cfg::SolverOpts,
    constants::MIN_OBSERVATIONS,
    navigation::{Navigation, ReceiverSolution},
    prelude::Error,
};

/// [Solver] resolves the receiver position and clock bias
/// from at least 4 pseudo range observations, by Gauss-Newton iteration.
/// [Solver] is stateless: each epoch is resolved independently.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    /// Solver parametrization
    opts: SolverOpts,
}

impl Solver {
    /// Creates a new [Solver] with desired [SolverOpts].
    pub fn new(opts: SolverOpts) -> Result<Self, Error> {
        opts.validate()?;
        Ok(Self { opts })
    }

    /// [SolverOpts] currently in use
    pub fn opts(&self) -> &SolverOpts {
        &self.opts
    }

    /// Resolves one epoch.
    /// ## Inputs
    /// - seed: initial position guess (ECEF m), usually the previous solution.
    /// The clock bias is always initialized at zero.
    /// - sv_positions: satellite positions (ECEF m)
    /// - pseudo_ranges: observed pseudo ranges (m), index aligned with `sv_positions`
    /// ## Returns
    /// - [ReceiverSolution] on success. Reaching the iteration limit
    /// is not an error: the current estimate is returned with `converged = false`.
    /// - [Error::NotEnoughCandidates] below 4 observations
    /// - [Error::MismatchedObservations] when inputs are not aligned
    pub fn resolve(
        &self,
        seed: &Vector3<f64>,
        sv_positions: &[Vector3<f64>],
        pseudo_ranges: &[f64],
    ) -> Result<ReceiverSolution, Error> {
        if sv_positions.len() != pseudo_ranges.len() {
            return Err(Error::MismatchedObservations(
                sv_positions.len(),
                pseudo_ranges.len(),
            ));
        }

        if sv_positions.len() < MIN_OBSERVATIONS {
            return Err(Error::NotEnoughCandidates(sv_positions.len()));
        }

        let max_step = self.opts.max_position_step_m;

        let mut solution = ReceiverSolution {
            position: *seed,
            clock_bias_m: 0.0,
            iterations: 0,
            converged: false,
        };

        while solution.iterations < self.opts.max_iterations {
            let nav = Navigation::new(
                &solution.position,
                solution.clock_bias_m,
                sv_positions,
                pseudo_ranges,
                self.opts.min_range_m,
            );

            let dx = nav.resolve(self.opts.pivot_epsilon);

            let dpos = Vector3::new(
                dx[0].clamp(-max_step, max_step),
                dx[1].clamp(-max_step, max_step),
                dx[2].clamp(-max_step, max_step),
            );

            solution.position += dpos;
            solution.clock_bias_m += dx[3];
            solution.iterations += 1;

            trace!(
                "iter={} ({} obs) dx=({:.4E}, {:.4E}, {:.4E}) dt={:.4E}",
                solution.iterations,
                nav.size,
                dpos[0],
                dpos[1],
                dpos[2],
                dx[3]
            );

            if dpos.iter().all(|d| d.abs() < self.opts.convergence_m) {
                solution.converged = true;
                break;
            }
        }

        if solution.converged {
            debug!(
                "converged after {} iterations: x={:.3}, y={:.3}, z={:.3}, clock={:.3}m",
                solution.iterations,
                solution.x(),
                solution.y(),
                solution.z(),
                solution.clock_bias_m
            );
        } else {
            warn!(
                "no convergence after {} iterations: x={:.3}, y={:.3}, z={:.3}",
                solution.iterations,
                solution.x(),
                solution.y(),
                solution.z()
            );
        }

        Ok(solution)
    }
}
