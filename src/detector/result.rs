#[cfg(feature = "serde")]
use serde::Serialize;

use crate::prelude::Metric;

/// [DetectionResult] produced on each epoch
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DetectionResult {
    /// True when spoofing is suspected
    pub spoofing_detected: bool,
    /// Overall confidence, within [0, 1]
    pub confidence: f64,
    /// Mean absolute pseudo range residual (m)
    pub residual_score: f64,
    /// Apparent velocity since previous epoch (m/s)
    pub velocity_score: f64,
    /// Clock bias jump since previous epoch (m)
    pub clock_score: f64,
    /// Position jump (m) while pseudo ranges remained frozen, zero otherwise
    pub consistency_score: f64,
    /// Normalized contribution of each [Metric] of the scoring policy
    pub contributions: Vec<(Metric, f64)>,
    /// Human readable explanation
    pub reason: String,
}

impl DetectionResult {
    /// Normalized contribution of this [Metric], within [0, 1].
    /// Zero if the metric is not part of the scoring policy.
    pub fn contribution(&self, metric: Metric) -> f64 {
        self.contributions
            .iter()
            .find(|(m, _)| *m == metric)
            .map(|(_, c)| *c)
            .unwrap_or(0.0)
    }

    /// Raw score of this [Metric]
    pub fn score(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Residual => self.residual_score,
            Metric::Velocity => self.velocity_score,
            Metric::ClockJump => self.clock_score,
            Metric::Consistency => self.consistency_score,
        }
    }
}
