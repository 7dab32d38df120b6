//! Spoofing detector configuration preset

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    cfg::Profile,
    prelude::{Error, Metric, ScoringPolicy},
};

const fn default_history_depth() -> usize {
    10
}

const fn default_consistency_min_jump() -> f64 {
    100.0
}

const fn default_consistency_max_drift() -> f64 {
    1.0
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DetectorOpts {
    /// Number of past epochs retained
    #[cfg_attr(feature = "serde", serde(default = "default_history_depth"))]
    pub history_depth: usize,
    /// Position jump (m) above which the consistency check applies
    #[cfg_attr(feature = "serde", serde(default = "default_consistency_min_jump"))]
    pub consistency_min_jump_m: f64,
    /// Mean pseudo range variation (m) below which raw observations
    /// are considered frozen
    #[cfg_attr(feature = "serde", serde(default = "default_consistency_max_drift"))]
    pub consistency_max_drift_m: f64,
    /// [ScoringPolicy] combining all metrics
    #[cfg_attr(feature = "serde", serde(default))]
    pub policy: ScoringPolicy,
}

impl Default for DetectorOpts {
    fn default() -> Self {
        Self {
            history_depth: default_history_depth(),
            consistency_min_jump_m: default_consistency_min_jump(),
            consistency_max_drift_m: default_consistency_max_drift(),
            policy: ScoringPolicy::default(),
        }
    }
}

impl DetectorOpts {
    /// Builds [DetectorOpts] whose velocity limit matches this [Profile].
    pub fn from_profile(profile: Profile) -> Self {
        Self::default().with_max_speed(profile.max_speed_m_s())
    }

    /// Copies and returns [DetectorOpts] with desired velocity limit (m/s).
    pub fn with_max_speed(&self, max_speed_m_s: f64) -> Self {
        let mut s = self.clone();
        s.policy.set_threshold(Metric::Velocity, max_speed_m_s);
        s
    }

    /// Copies and returns [DetectorOpts] with desired [ScoringPolicy].
    pub fn with_policy(&self, policy: ScoringPolicy) -> Self {
        let mut s = self.clone();
        s.policy = policy;
        s
    }

    /// Copies and returns [DetectorOpts] with desired history depth.
    pub fn with_history_depth(&self, depth: usize) -> Self {
        let mut s = self.clone();
        s.history_depth = depth;
        s
    }

    /// Verifies these [DetectorOpts] can be used.
    pub fn validate(&self) -> Result<(), Error> {
        if self.history_depth == 0 {
            return Err(Error::InvalidConfig("history depth must be at least 1"));
        }
        if self.consistency_min_jump_m.is_nan() || self.consistency_max_drift_m.is_nan() {
            return Err(Error::InvalidConfig("invalid consistency criteria"));
        }
        self.policy.validate()
    }
}
