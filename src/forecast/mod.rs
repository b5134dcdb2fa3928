//! Forecast extension: append missing markers for joint estimation.
//!
//! Forward-looking prediction is expressed by handing the engine a longer
//! observation sequence whose trailing positions are missing. An engine that
//! marginalizes missing observations (a documented precondition of every
//! supported template) then estimates parameters and extrapolates the
//! trailing positions in one pass; the forecast distribution is read back
//! as the posterior over those positions.

use crate::core::ObservationSequence;
use crate::error::{PosteriorError, Result};

/// An observation sequence extended with placeholder future positions.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendedSequence {
    observations: ObservationSequence,
    original_len: usize,
    horizon: usize,
}

impl ExtendedSequence {
    /// The extended sequence: original values, then `horizon` missing markers.
    pub fn observations(&self) -> &ObservationSequence {
        &self.observations
    }

    /// Total length `N + h`, for inclusion in a subsequent model request.
    pub fn total_len(&self) -> usize {
        self.observations.len()
    }

    /// Length of the original, unextended sequence.
    pub fn original_len(&self) -> usize {
        self.original_len
    }

    /// The forecast horizon appended.
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Positions (0-based) that represent the forecast period.
    pub fn forecast_positions(&self) -> std::ops::Range<usize> {
        self.original_len..self.total_len()
    }
}

/// Extend a sequence with `horizon` missing markers for forecasting.
///
/// Returns the extended sequence together with its new total length. The
/// horizon is a `usize`, so a negative horizon is unrepresentable; the one
/// representable failure, `N + h` overflowing `usize`, is reported as
/// [`PosteriorError::InvalidHorizon`]. A zero horizon returns the sequence
/// unchanged.
pub fn extend_for_forecast(
    observations: &ObservationSequence,
    horizon: usize,
) -> Result<ExtendedSequence> {
    let original_len = observations.len();
    let total = original_len
        .checked_add(horizon)
        .ok_or(PosteriorError::InvalidHorizon {
            len: original_len,
            horizon,
        })?;

    let mut values = observations.values().to_vec();
    values.resize(total, f64::NAN);

    Ok(ExtendedSequence {
        observations: ObservationSequence::from_values(values),
        original_len,
        horizon,
    })
}
