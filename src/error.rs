//! Error types for the posterior-ts library.

use thiserror::Error;

/// Result type alias for posterior operations.
pub type Result<T> = std::result::Result<T, PosteriorError>;

/// Errors that can occur while building model requests, reading posteriors,
/// or summarizing draws.
///
/// All validation errors are raised synchronously, before anything is handed
/// to an external fitting engine. Engine-side failures arrive through the
/// [`Fitting`](PosteriorError::Fitting) and
/// [`FittingTimeout`](PosteriorError::FittingTimeout) variants unchanged;
/// this library never retries a fit on the caller's behalf.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PosteriorError {
    /// Observation sequence is empty where data is required.
    #[error("empty observation sequence")]
    EmptyObservations,

    /// Covariate sequence does not match the observation sequence length.
    #[error("covariate length mismatch: expected {expected}, got {got}")]
    CovariateLengthMismatch { expected: usize, got: usize },

    /// Malformed sampler settings (chains, burn-in, thinning, iterations).
    #[error("invalid sampler configuration: {0}")]
    InvalidSamplerConfig(String),

    /// Requested parameter was not monitored during fitting.
    #[error("unknown parameter '{name}' (monitored: {monitored:?})")]
    UnknownParameter {
        name: String,
        monitored: Vec<String>,
    },

    /// Model identifier is not in the closed template set.
    #[error("unknown model identifier '{0}'")]
    UnknownModel(String),

    /// No bundled dataset with the given name.
    #[error("unknown dataset '{0}'")]
    UnknownDataset(String),

    /// Quantile probabilities are out of range or out of order.
    #[error("invalid quantile pair: p_lo={p_lo}, p_hi={p_hi} (need 0 <= p_lo < p_hi <= 1)")]
    InvalidQuantile { p_lo: f64, p_hi: f64 },

    /// Extending the sequence by the horizon would overflow its length.
    #[error("horizon {horizon} overflows sequence of length {len}")]
    InvalidHorizon { len: usize, horizon: usize },

    /// Parameter draws disagree on the number of draws within one table.
    #[error("draw count mismatch: expected {expected}, got {got}")]
    DrawCountMismatch { expected: usize, got: usize },

    /// Dimension mismatch between data structures (e.g. ragged draw rows).
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Fitted model exposes no monitored parameters.
    #[error("fitted model has no monitored parameters")]
    NoMonitoredParameters,

    /// Scratch-space I/O failure in an engine adapter.
    #[error("scratch space error: {0}")]
    Scratch(String),

    /// Engine-reported fitting failure, surfaced unchanged.
    #[error("fitting failed: {0}")]
    Fitting(String),

    /// Engine-reported timeout, surfaced unchanged.
    #[error("fitting timed out: {0}")]
    FittingTimeout(String),
}
