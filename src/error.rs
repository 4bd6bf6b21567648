use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The [Timeline] window is malformed: fewer than two samples,
    /// or a window whose lower bound is not strictly before its upper bound.
    #[error("invalid time window or sample count")]
    InvalidWindow,

    /// Polynomial degree must be at least 1 and strictly
    /// lower than the number of samples being fitted.
    #[error("invalid polynomial degree")]
    InvalidDegree,

    /// The fitted polynomial, evaluated at the observed angle, points
    /// outside of the sampled timeline. The observed angle was not spanned
    /// by the chosen window (or degree).
    #[error("fitted index {index} is out of the sampled range [0, {samples})")]
    IndexOutOfRange { index: i64, samples: usize },

    /// The sampled trajectory does not vary over the window,
    /// so it cannot be inverted.
    #[error("degenerate trajectory: angle is constant over the window")]
    DegenerateTrajectory,

    /// Least squares resolution failure.
    #[error("polynomial fit error: {0}")]
    PolynomialFit(&'static str),

    /// The [Ephemeris] provider failed to evaluate a position.
    #[error("ephemeris failure: {0}")]
    EphemerisFailure(String),

    #[error("invalid timestamp: \"{0}\"")]
    InvalidTimestamp(String),

    #[error("invalid observer site coordinates")]
    InvalidSite,

    #[error("invalid target coordinates")]
    InvalidTarget,

    /// Rise / set crossings only exist for the altitude angle:
    /// the bracketed root strategy cannot resolve the azimuth.
    #[error("bracketed root strategy only resolves the altitude angle")]
    InvalidStrategy,

    #[error("unknown angle kind")]
    UnknownAngleKind,

    #[error("missing header card \"{0}\"")]
    MissingCard(String),

    #[error("invalid header card \"{0}\"")]
    InvalidCard(String),
}
