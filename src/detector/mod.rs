//! GNSS spoofing detector
//!
//! Scores each resolved epoch against physical plausibility and recent history:
//! - post-fit pseudo range residuals
//! - apparent velocity since previous epoch
//! - receiver clock bias discontinuity
//! - consistency between the position jump and raw pseudo range variations
use hifitime::Duration;
use itertools::Itertools;
use log::{debug, warn};
use nalgebra::Vector3;

mod history;
mod policy;
mod result;

pub use history::History;
pub use policy::{Metric, ScoringPolicy, WeightedMetric};
pub use result::DetectionResult;

use crate::{
    cfg::DetectorOpts,
    navigation::ReceiverSolution,
    prelude::Error,
    range::geometric_range,
};

/// Raw metric scores of one epoch
#[derive(Debug, Default, Clone, Copy)]
struct Scores {
    residual: f64,
    velocity: f64,
    clock: f64,
    consistency: f64,
}

impl Scores {
    fn raw(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Residual => self.residual,
            Metric::Velocity => self.velocity,
            Metric::ClockJump => self.clock,
            Metric::Consistency => self.consistency,
        }
    }
}

/// Mean absolute residual between observed pseudo ranges and
/// those predicted from the estimate. Zero without observations.
fn mean_residual(
    position: &Vector3<f64>,
    clock_bias_m: f64,
    sv_positions: &[Vector3<f64>],
    pseudo_ranges: &[f64],
) -> f64 {
    let (sum, count) = sv_positions
        .iter()
        .zip(pseudo_ranges.iter())
        .map(|(sv, pr)| (pr - (geometric_range(position, sv) + clock_bias_m)).abs())
        .fold((0.0, 0_usize), |(sum, count), res| (sum + res, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// [SpoofDetector] follows one receiver over time.
/// Epochs must be presented sequentially: each analysis depends on the previous one.
#[derive(Debug, Clone)]
pub struct SpoofDetector {
    /// Detector parametrization
    opts: DetectorOpts,
    /// Past epochs
    history: History,
    /// Number of analyzed epochs
    epochs: u64,
    /// Number of epochs flagged as spoofed
    detections: u64,
}

impl Default for SpoofDetector {
    fn default() -> Self {
        let opts = DetectorOpts::default();
        Self {
            history: History::new(opts.history_depth),
            opts,
            epochs: 0,
            detections: 0,
        }
    }
}

impl SpoofDetector {
    /// Creates a new [SpoofDetector] with empty history.
    pub fn new(opts: DetectorOpts) -> Result<Self, Error> {
        opts.validate()?;
        Ok(Self {
            history: History::new(opts.history_depth),
            opts,
            epochs: 0,
            detections: 0,
        })
    }

    /// [DetectorOpts] currently in use
    pub fn opts(&self) -> &DetectorOpts {
        &self.opts
    }

    /// Past epochs, most recent last
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of analyzed epochs
    pub fn epochs(&self) -> u64 {
        self.epochs
    }

    /// Number of epochs flagged as spoofed
    pub fn detections(&self) -> u64 {
        self.detections
    }

    /// Analyzes a [ReceiverSolution], see [Self::analyze].
    pub fn analyze_solution(
        &mut self,
        solution: &ReceiverSolution,
        dt: Duration,
        sv_positions: &[Vector3<f64>],
        pseudo_ranges: &[f64],
    ) -> DetectionResult {
        self.analyze(
            &solution.position,
            solution.clock_bias_m,
            dt,
            sv_positions,
            pseudo_ranges,
        )
    }

    /// Analyzes a new epoch.
    /// ## Inputs
    /// - position: estimated position (ECEF m)
    /// - clock_bias_m: estimated clock bias, expressed as range
    /// - dt: elapsed time since previous epoch
    /// - sv_positions: satellite positions (ECEF m)
    /// - pseudo_ranges: raw pseudo ranges, index aligned with `sv_positions`
    ///
    /// This epoch is then stored in the [History], whatever the outcome.
    pub fn analyze(
        &mut self,
        position: &Vector3<f64>,
        clock_bias_m: f64,
        dt: Duration,
        sv_positions: &[Vector3<f64>],
        pseudo_ranges: &[f64],
    ) -> DetectionResult {
        let scores = self.scores(position, clock_bias_m, dt, sv_positions, pseudo_ranges);
        let result = self.score(&scores);

        self.history.push(*position, clock_bias_m, pseudo_ranges);
        self.epochs += 1;

        if result.spoofing_detected {
            self.detections += 1;
            warn!("epoch #{}: {}", self.epochs, result.reason);
        }

        result
    }

    fn scores(
        &self,
        position: &Vector3<f64>,
        clock_bias_m: f64,
        dt: Duration,
        sv_positions: &[Vector3<f64>],
        pseudo_ranges: &[f64],
    ) -> Scores {
        let mut scores = Scores {
            residual: mean_residual(position, clock_bias_m, sv_positions, pseudo_ranges),
            ..Default::default()
        };

        let (prev_position, prev_clock_bias, prev_pseudo_ranges) = match self.history.latest() {
            Some(latest) => latest,
            None => return scores,
        };

        let jump_m = (position - prev_position).norm();
        let dt_s = dt.to_seconds();

        if dt_s > 0.0 {
            scores.velocity = jump_m / dt_s;
        }

        scores.clock = (clock_bias_m - prev_clock_bias).abs();

        if prev_pseudo_ranges.len() != pseudo_ranges.len() || pseudo_ranges.is_empty() {
            debug!(
                "consistency check skipped: {} pseudo ranges, {} previously",
                pseudo_ranges.len(),
                prev_pseudo_ranges.len()
            );
        } else if jump_m > self.opts.consistency_min_jump_m {
            let drift_m = pseudo_ranges
                .iter()
                .zip_eq(prev_pseudo_ranges.iter())
                .map(|(pr, prev)| (pr - prev).abs())
                .sum::<f64>()
                / pseudo_ranges.len() as f64;

            if drift_m < self.opts.consistency_max_drift_m {
                debug!(
                    "position jumped by {:.3}m while pseudo ranges drifted by {:.3}m",
                    jump_m, drift_m
                );
                scores.consistency = jump_m;
            }
        }

        scores
    }

    fn score(&self, scores: &Scores) -> DetectionResult {
        let policy = &self.opts.policy;

        let contributions = policy
            .metrics
            .iter()
            .map(|m| (m.metric, m.contribution(scores.raw(m.metric))))
            .collect::<Vec<_>>();

        let confidence = policy
            .metrics
            .iter()
            .zip(contributions.iter())
            .map(|(m, (_, contribution))| m.weight * contribution)
            .sum::<f64>()
            .clamp(0.0, 1.0);

        let spoofing_detected = confidence > policy.detection_threshold;

        debug!(
            "residual={:.3}m velocity={:.3}m/s clock={:.3}m consistency={:.3}m => confidence={:.3}",
            scores.residual, scores.velocity, scores.clock, scores.consistency, confidence
        );

        let reason = if spoofing_detected {
            let mut reason = format!("SPOOFING DETECTED (confidence={:.2})", confidence);
            for (metric, contribution) in contributions.iter() {
                if *contribution > policy.reason_threshold {
                    reason.push_str(&format!(
                        " - {} ({:.1}{})",
                        metric,
                        scores.raw(*metric),
                        metric.unit()
                    ));
                }
            }
            reason
        } else {
            "OK".to_string()
        };

        DetectionResult {
            spoofing_detected,
            confidence,
            residual_score: scores.residual,
            velocity_score: scores.velocity,
            clock_score: scores.clock,
            consistency_score: scores.consistency,
            contributions,
            reason,
        }
    }
}
