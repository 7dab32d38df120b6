use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Position solving requires at least 4 observations,
    /// one per unknown (x, y, z, clock bias).
    #[error("not enough candidates provided: {0} (4 required)")]
    NotEnoughCandidates(usize),

    /// Satellite positions and pseudo ranges must be index aligned.
    #[error("mismatched observations: {0} positions for {1} pseudo ranges")]
    MismatchedObservations(usize, usize),

    /// Spoofing intensity must lie within [0, 1].
    #[error("invalid spoofing power {0}")]
    InvalidSpoofingPower(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
