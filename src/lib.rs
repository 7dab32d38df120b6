#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

pub mod constants;
pub mod range;

mod cfg;
mod detector;
mod error;
mod navigation;
mod solver;
mod spoofer;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::{Config, DetectorOpts, Profile, SolverOpts};
    pub use crate::detector::{
        DetectionResult, History, Metric, ScoringPolicy, SpoofDetector, WeightedMetric,
    };
    pub use crate::error::Error;
    pub use crate::navigation::{gauss::solve4, ReceiverSolution};
    pub use crate::solver::Solver;
    pub use crate::spoofer::Spoofer;
    // re-export
    pub use hifitime::Duration;
    pub use nalgebra::Vector3;
}

// pub export
pub use error::Error;
