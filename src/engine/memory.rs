//! In-memory fitted-model handle.
//!
//! [`StoredPosterior`] is the concrete [`FittedModel`] used by engine
//! adapters that read their engine's draws into plain matrices (most
//! sampler front-ends emit exactly that), and by tests that need a handle
//! without a real engine behind it.

use crate::core::{DrawTable, ParameterDraws};
use crate::engine::FittedModel;
use crate::error::{PosteriorError, Result};
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;
use statrs::distribution::Normal;

/// A fitted-model handle backed by an in-memory draw table.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPosterior {
    table: DrawTable,
    monitored: Vec<String>,
}

impl StoredPosterior {
    /// Wrap a draw table as a fitted-model handle.
    ///
    /// The table's parameter names become the monitored set. Fails with
    /// [`PosteriorError::NoMonitoredParameters`] on an empty table; the
    /// shared-draw-count invariant was already enforced on insert.
    pub fn from_table(table: DrawTable) -> Result<Self> {
        if table.is_empty() {
            return Err(PosteriorError::NoMonitoredParameters);
        }
        let monitored = table.names().map(String::from).collect();
        Ok(Self { table, monitored })
    }

    /// The underlying draw table.
    pub fn table(&self) -> &DrawTable {
        &self.table
    }
}

impl FittedModel for StoredPosterior {
    fn monitored_parameters(&self) -> &[String] {
        &self.monitored
    }

    fn num_draws(&self) -> usize {
        // Non-empty by construction.
        self.table.num_draws().unwrap_or(0)
    }

    fn draws(&self, name: &str) -> Result<&ParameterDraws> {
        self.table
            .get(name)
            .ok_or_else(|| PosteriorError::UnknownParameter {
                name: name.to_string(),
                monitored: self.monitored.clone(),
            })
    }
}

/// Generate seeded draws from a Normal distribution.
///
/// Fixture helper for adapters and tests that need a reproducible stand-in
/// posterior; the same seed always yields the same draws.
pub fn synthetic_normal_draws(mean: f64, sd: f64, num_draws: usize, seed: u64) -> Result<Vec<f64>> {
    let normal =
        Normal::new(mean, sd).map_err(|e| PosteriorError::Fitting(e.to_string()))?;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..num_draws).map(|_| normal.sample(&mut rng)).collect())
}

/// Generate a seeded draws-by-positions matrix for a vector-valued
/// parameter, with per-position means.
pub fn synthetic_normal_matrix(
    means: &[f64],
    sd: f64,
    num_draws: usize,
    seed: u64,
) -> Result<ParameterDraws> {
    let normal =
        Normal::new(0.0, sd).map_err(|e| PosteriorError::Fitting(e.to_string()))?;
    let mut rng = StdRng::seed_from_u64(seed);
    let rows: Vec<Vec<f64>> = (0..num_draws)
        .map(|_| means.iter().map(|m| m + normal.sample(&mut rng)).collect())
        .collect();
    ParameterDraws::from_rows(rows)
}
