//! Solver configuration preset

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::Error;

const fn default_max_iterations() -> usize {
    20
}

const fn default_min_range() -> f64 {
    1.0
}

const fn default_max_position_step() -> f64 {
    1.0E5
}

const fn default_convergence() -> f64 {
    1.0E-4
}

const fn default_pivot_epsilon() -> f64 {
    1.0E-10
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverOpts {
    /// Maximal number of Gauss-Newton iterations per epoch
    #[cfg_attr(feature = "serde", serde(default = "default_max_iterations"))]
    pub max_iterations: usize,
    /// Observations whose predicted range (in meters) falls below
    /// this value do not contribute to the current iteration.
    #[cfg_attr(feature = "serde", serde(default = "default_min_range"))]
    pub min_range_m: f64,
    /// Maximal position correction (per axis, in meters) applied per iteration
    #[cfg_attr(feature = "serde", serde(default = "default_max_position_step"))]
    pub max_position_step_m: f64,
    /// Iteration stops once all position corrections are below this value (meters)
    #[cfg_attr(feature = "serde", serde(default = "default_convergence"))]
    pub convergence_m: f64,
    /// Pivots below this magnitude are considered null
    #[cfg_attr(feature = "serde", serde(default = "default_pivot_epsilon"))]
    pub pivot_epsilon: f64,
}

impl Default for SolverOpts {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            min_range_m: default_min_range(),
            max_position_step_m: default_max_position_step(),
            convergence_m: default_convergence(),
            pivot_epsilon: default_pivot_epsilon(),
        }
    }
}

impl SolverOpts {
    /// Copies and returns [SolverOpts] with desired iteration limit.
    pub fn with_max_iterations(&self, max_iterations: usize) -> Self {
        let mut s = self.clone();
        s.max_iterations = max_iterations;
        s
    }

    /// Verifies these [SolverOpts] can be used.
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_iterations == 0 {
            return Err(Error::InvalidConfig("solver requires at least one iteration"));
        }
        if self.max_position_step_m <= 0.0 {
            return Err(Error::InvalidConfig("position step limit must be positive"));
        }
        if self.convergence_m <= 0.0 {
            return Err(Error::InvalidConfig("convergence criteria must be positive"));
        }
        if self.min_range_m < 0.0 || self.pivot_epsilon < 0.0 {
            return Err(Error::InvalidConfig("negative degeneracy limit"));
        }
        Ok(())
    }
}
