//! Credible interval summarization of posterior draws.
//!
//! The summarizer reduces a draws-by-positions matrix to a per-position
//! `(lower, mean, upper)` band. The band is **pointwise**: each position is
//! reduced independently across the draws dimension. Pointwise bands
//! understate joint uncertainty — the probability that the whole latent
//! path stays inside the band is lower than the per-position coverage — so
//! they must not be read as simultaneous bands.
//!
//! Quantiles use linear interpolation between order statistics (R type 7:
//! index `h = (n - 1) * p`, interpolating between `x[floor(h)]` and
//! `x[floor(h) + 1]`). This rule is deterministic, so identical draws give
//! bit-identical summaries.

use crate::core::ParameterDraws;
use crate::error::{PosteriorError, Result};

/// Default lower quantile probability (2.5%).
pub const DEFAULT_P_LO: f64 = 0.025;

/// Default upper quantile probability (97.5%).
pub const DEFAULT_P_HI: f64 = 0.975;

/// Per-position credible band: lower quantile, mean, upper quantile.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalSummary {
    p_lo: f64,
    p_hi: f64,
    lower: Vec<f64>,
    mean: Vec<f64>,
    upper: Vec<f64>,
}

impl IntervalSummary {
    /// Number of positions summarized.
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    /// Check if the summary covers no positions.
    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Lower quantile probability used.
    pub fn p_lo(&self) -> f64 {
        self.p_lo
    }

    /// Upper quantile probability used.
    pub fn p_hi(&self) -> f64 {
        self.p_hi
    }

    /// Lower band values, one per position.
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Mean values, one per position.
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Upper band values, one per position.
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// The `(lower, mean, upper)` triple at one position.
    pub fn band(&self, position: usize) -> Option<(f64, f64, f64)> {
        Some((
            *self.lower.get(position)?,
            *self.mean.get(position)?,
            *self.upper.get(position)?,
        ))
    }
}

/// Summarize draws into a pointwise credible band.
///
/// NaN draws at a position are skipped; a position with no finite draws
/// yields a NaN triple. Fails with [`PosteriorError::InvalidQuantile`] when
/// `p_lo >= p_hi` or either probability lies outside `[0, 1]`.
pub fn credible_interval(
    draws: &ParameterDraws,
    p_lo: f64,
    p_hi: f64,
) -> Result<IntervalSummary> {
    validate_quantile_pair(p_lo, p_hi)?;

    let positions = draws.num_positions();
    let mut lower = Vec::with_capacity(positions);
    let mut mean = Vec::with_capacity(positions);
    let mut upper = Vec::with_capacity(positions);

    for p in 0..positions {
        let mut finite: Vec<f64> = draws.position_iter(p).filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            lower.push(f64::NAN);
            mean.push(f64::NAN);
            upper.push(f64::NAN);
            continue;
        }
        finite.sort_by(f64::total_cmp);

        let avg = finite.iter().sum::<f64>() / finite.len() as f64;
        lower.push(quantile_sorted(&finite, p_lo));
        mean.push(avg);
        upper.push(quantile_sorted(&finite, p_hi));
    }

    Ok(IntervalSummary {
        p_lo,
        p_hi,
        lower,
        mean,
        upper,
    })
}

/// Summarize with the default 95% band (2.5% / 97.5%).
pub fn credible_interval_default(draws: &ParameterDraws) -> Result<IntervalSummary> {
    credible_interval(draws, DEFAULT_P_LO, DEFAULT_P_HI)
}

/// Type-7 quantile of a slice (need not be sorted; NaN values are skipped).
///
/// Fails with [`PosteriorError::InvalidQuantile`] for `p` outside `[0, 1]`.
/// Returns NaN for a slice with no finite values.
pub fn quantile(values: &[f64], p: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(PosteriorError::InvalidQuantile { p_lo: p, p_hi: p });
    }
    let mut finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Ok(f64::NAN);
    }
    finite.sort_by(f64::total_cmp);
    Ok(quantile_sorted(&finite, p))
}

fn validate_quantile_pair(p_lo: f64, p_hi: f64) -> Result<()> {
    let in_range = (0.0..=1.0).contains(&p_lo) && (0.0..=1.0).contains(&p_hi);
    if !in_range || p_lo >= p_hi {
        return Err(PosteriorError::InvalidQuantile { p_lo, p_hi });
    }
    Ok(())
}

/// Type-7 quantile of a sorted, non-empty, all-finite slice.
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let frac = h - lo as f64;
    if lo + 1 >= n {
        return sorted[n - 1];
    }
    sorted[lo] + frac * (sorted[lo + 1] - sorted[lo])
}
