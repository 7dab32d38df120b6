//! Scoring policy: weighted anomaly metrics
use itertools::Itertools;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::{Error, Profile};

/// Anomaly [Metric]s evaluated on each epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Metric {
    /// Mean absolute post-fit pseudo range residual (m)
    Residual,
    /// Apparent receiver velocity between two epochs (m/s)
    Velocity,
    /// Receiver clock bias discontinuity (m)
    ClockJump,
    /// Position jump (m) while raw pseudo ranges remained frozen
    Consistency,
}

impl Metric {
    /// Unit of the raw score
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Velocity => "m/s",
            _ => "m",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Residual => write!(f, "high residuals"),
            Self::Velocity => write!(f, "impossible speed"),
            Self::ClockJump => write!(f, "clock jump"),
            Self::Consistency => write!(f, "position moved while pseudo ranges did not"),
        }
    }
}

/// [Metric] contributing to the overall confidence
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightedMetric {
    pub metric: Metric,
    /// Raw score that saturates this [Metric] contribution to 1.0
    pub threshold: f64,
    /// Weight in the overall confidence
    pub weight: f64,
}

impl WeightedMetric {
    pub const fn new(metric: Metric, threshold: f64, weight: f64) -> Self {
        Self {
            metric,
            threshold,
            weight,
        }
    }

    /// Normalized contribution of `raw` score, within [0, 1].
    pub fn contribution(&self, raw: f64) -> f64 {
        (raw / self.threshold).clamp(0.0, 1.0)
    }
}

const fn default_detection_threshold() -> f64 {
    0.4
}

const fn default_reason_threshold() -> f64 {
    0.3
}

/// Max. plausible velocity of the default (drone) profile
const DEFAULT_MAX_SPEED_M_S: f64 = 300.0;

fn default_metrics() -> Vec<WeightedMetric> {
    vec![
        WeightedMetric::new(Metric::Residual, 50.0, 0.1),
        WeightedMetric::new(Metric::Velocity, DEFAULT_MAX_SPEED_M_S, 0.3),
        WeightedMetric::new(Metric::ClockJump, 100.0, 0.1),
        WeightedMetric::new(Metric::Consistency, 10_000.0, 0.5),
    ]
}

/// [ScoringPolicy] describes how individual [Metric]s combine into
/// the overall spoofing confidence. Metrics absent from the table
/// do not contribute.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoringPolicy {
    /// Weighted [Metric]s, in reporting order
    #[cfg_attr(feature = "serde", serde(default = "default_metrics"))]
    pub metrics: Vec<WeightedMetric>,
    /// Spoofing is declared when confidence exceeds this value
    #[cfg_attr(feature = "serde", serde(default = "default_detection_threshold"))]
    pub detection_threshold: f64,
    /// Metrics whose contribution exceeds this value are reported
    #[cfg_attr(feature = "serde", serde(default = "default_reason_threshold"))]
    pub reason_threshold: f64,
}

impl Default for ScoringPolicy {
    /// Residual, velocity, clock jump and consistency metrics,
    /// the consistency metric being the most specific spoofing signature.
    fn default() -> Self {
        Self {
            metrics: default_metrics(),
            detection_threshold: default_detection_threshold(),
            reason_threshold: default_reason_threshold(),
        }
    }
}

impl ScoringPolicy {
    /// Earlier [ScoringPolicy] without consistency metric,
    /// bounding velocity to [Profile::Airplane].
    pub fn three_metric() -> Self {
        Self {
            metrics: vec![
                WeightedMetric::new(Metric::Residual, 50.0, 0.5),
                WeightedMetric::new(Metric::Velocity, Profile::Airplane.max_speed_m_s(), 0.3),
                WeightedMetric::new(Metric::ClockJump, 100.0, 0.2),
            ],
            detection_threshold: 0.5,
            reason_threshold: 0.5,
        }
    }

    /// Returns [WeightedMetric] definition, if [Metric] is used.
    pub fn get(&self, metric: Metric) -> Option<&WeightedMetric> {
        self.metrics.iter().find(|m| m.metric == metric)
    }

    /// Updates the saturation threshold of [Metric], if used.
    pub fn set_threshold(&mut self, metric: Metric, threshold: f64) {
        if let Some(m) = self.metrics.iter_mut().find(|m| m.metric == metric) {
            m.threshold = threshold;
        }
    }

    /// Copies and returns [ScoringPolicy] with updated [Metric] threshold.
    pub fn with_threshold(&self, metric: Metric, threshold: f64) -> Self {
        let mut s = self.clone();
        s.set_threshold(metric, threshold);
        s
    }

    /// Verifies this [ScoringPolicy] can be used.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.metrics.iter().map(|m| m.metric).all_unique() {
            return Err(Error::InvalidConfig("duplicate metric in scoring policy"));
        }
        for m in self.metrics.iter() {
            if m.threshold.is_nan() || m.threshold <= 0.0 {
                return Err(Error::InvalidConfig("metric thresholds must be positive"));
            }
            if !m.weight.is_finite() || m.weight < 0.0 {
                return Err(Error::InvalidConfig("metric weights must be positive"));
            }
        }
        if !(0.0..=1.0).contains(&self.detection_threshold) {
            return Err(Error::InvalidConfig("detection threshold must lie within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.reason_threshold) {
            return Err(Error::InvalidConfig("reason threshold must lie within [0, 1]"));
        }
        Ok(())
    }
}
