#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod detector;
mod profile;
mod solver;

pub use detector::DetectorOpts;
pub use profile::Profile;
pub use solver::SolverOpts;

use crate::prelude::Error;

#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Position solver customization
    #[cfg_attr(feature = "serde", serde(default))]
    pub solver: SolverOpts,
    /// Spoofing detector customization
    #[cfg_attr(feature = "serde", serde(default))]
    pub detector: DetectorOpts,
}

impl Config {
    /// Returns [Config] preset for this application [Profile].
    /// You can then customize [Self] as you will.
    pub fn from_profile(profile: Profile) -> Self {
        Self {
            solver: SolverOpts::default(),
            detector: DetectorOpts::from_profile(profile),
        }
    }

    /// Copies and returns [Config] adapted to this [Profile].
    pub fn with_profile(&self, profile: Profile) -> Self {
        let mut s = self.clone();
        s.detector = s.detector.with_max_speed(profile.max_speed_m_s());
        s
    }

    /// Copies and returns [Config] with desired [SolverOpts].
    pub fn with_solver_opts(&self, opts: SolverOpts) -> Self {
        let mut s = self.clone();
        s.solver = opts;
        s
    }

    /// Copies and returns [Config] with desired [DetectorOpts].
    pub fn with_detector_opts(&self, opts: DetectorOpts) -> Self {
        let mut s = self.clone();
        s.detector = opts;
        s
    }

    /// Verifies this [Config] can be deployed.
    pub fn validate(&self) -> Result<(), Error> {
        self.solver.validate()?;
        self.detector.validate()
    }
}
