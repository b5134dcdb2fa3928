//! Draw tables holding posterior samples extracted from a fitted model.

use crate::error::{PosteriorError, Result};
use std::collections::BTreeMap;

/// Posterior draws for one monitored parameter.
///
/// Stored as a draws-by-positions matrix in row-major order. Scalar
/// parameters have a single position; vector-valued parameters (per-timestep
/// states, predictions) have one position per time step.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDraws {
    num_draws: usize,
    num_positions: usize,
    /// Row-major: `values[draw * num_positions + position]`.
    values: Vec<f64>,
}

impl ParameterDraws {
    /// Create draws for a scalar parameter from one value per draw.
    pub fn scalar(draws: Vec<f64>) -> Self {
        Self {
            num_draws: draws.len(),
            num_positions: 1,
            values: draws,
        }
    }

    /// Create draws from rows, one row per draw.
    ///
    /// All rows must have the same width; ragged input is rejected.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let num_positions = rows.first().map(|r| r.len()).unwrap_or(0);
        for row in &rows {
            if row.len() != num_positions {
                return Err(PosteriorError::DimensionMismatch {
                    expected: num_positions,
                    got: row.len(),
                });
            }
        }
        let num_draws = rows.len();
        let mut values = Vec::with_capacity(num_draws * num_positions);
        for row in rows {
            values.extend(row);
        }
        Ok(Self {
            num_draws,
            num_positions,
            values,
        })
    }

    /// Number of posterior draws.
    pub fn num_draws(&self) -> usize {
        self.num_draws
    }

    /// Number of positions (1 for scalar parameters).
    pub fn num_positions(&self) -> usize {
        self.num_positions
    }

    /// Check if this parameter is scalar-valued.
    pub fn is_scalar(&self) -> bool {
        self.num_positions == 1
    }

    /// One draw as a row slice across all positions.
    pub fn draw(&self, d: usize) -> Result<&[f64]> {
        if d >= self.num_draws {
            return Err(PosteriorError::DimensionMismatch {
                expected: self.num_draws,
                got: d,
            });
        }
        let start = d * self.num_positions;
        Ok(&self.values[start..start + self.num_positions])
    }

    /// All draws at one position, in draw order.
    pub fn position(&self, p: usize) -> Result<Vec<f64>> {
        if p >= self.num_positions {
            return Err(PosteriorError::DimensionMismatch {
                expected: self.num_positions,
                got: p,
            });
        }
        Ok((0..self.num_draws)
            .map(|d| self.values[d * self.num_positions + p])
            .collect())
    }

    /// Iterate over all draws at one position without allocating.
    pub(crate) fn position_iter(&self, p: usize) -> impl Iterator<Item = f64> + '_ {
        (0..self.num_draws).map(move |d| self.values[d * self.num_positions + p])
    }
}

/// Named collection of parameter draws from one fitted model.
///
/// Every parameter in a table shares the same number of draws; the invariant
/// is enforced on insert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawTable {
    parameters: BTreeMap<String, ParameterDraws>,
}

impl DrawTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert draws for a parameter.
    ///
    /// Rejects draws whose count disagrees with parameters already present.
    pub fn insert(&mut self, name: impl Into<String>, draws: ParameterDraws) -> Result<()> {
        if let Some(expected) = self.num_draws() {
            if draws.num_draws() != expected {
                return Err(PosteriorError::DrawCountMismatch {
                    expected,
                    got: draws.num_draws(),
                });
            }
        }
        self.parameters.insert(name.into(), draws);
        Ok(())
    }

    /// Look up draws by parameter name.
    pub fn get(&self, name: &str) -> Option<&ParameterDraws> {
        self.parameters.get(name)
    }

    /// Parameter names in deterministic (sorted) order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parameters.keys().map(|k| k.as_str())
    }

    /// Number of parameters in the table.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Check if the table holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Shared draw count, `None` for an empty table.
    pub fn num_draws(&self) -> Option<usize> {
        self.parameters.values().next().map(|d| d.num_draws())
    }

    /// Iterate over `(name, draws)` pairs in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterDraws)> {
        self.parameters.iter().map(|(k, v)| (k.as_str(), v))
    }
}
