//! Observation sequences with missing-value markers.

/// An ordered sequence of observations indexed by time step.
///
/// Missing observations are encoded as `NaN`, matching the convention the
/// external fitting engines read natively: a `NaN` position tells the engine
/// to treat that time step as unobserved and marginalize over it.
///
/// The sequence itself may be empty; contexts that require data (such as
/// [`ModelRequestBuilder::build`](crate::request::ModelRequestBuilder::build))
/// enforce non-emptiness at their own boundary.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObservationSequence {
    values: Vec<f64>,
}

impl ObservationSequence {
    /// Create a sequence from raw values. `NaN` entries are missing markers.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Create a sequence from optional values; `None` becomes a missing marker.
    pub fn from_optional(values: Vec<Option<f64>>) -> Self {
        Self {
            values: values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect(),
        }
    }

    /// Create an empty sequence.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of time steps.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the sequence has no time steps.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw values including missing markers.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Check whether the value at time step `t` (0-based) is missing.
    ///
    /// Out-of-range positions are reported as missing.
    pub fn is_missing(&self, t: usize) -> bool {
        self.values.get(t).map_or(true, |v| v.is_nan())
    }

    /// Number of missing time steps.
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_nan()).count()
    }

    /// Number of observed (non-missing) time steps.
    pub fn observed_count(&self) -> usize {
        self.len() - self.missing_count()
    }

    /// Iterate over values as `Option<f64>`, `None` for missing markers.
    pub fn iter_optional(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.values
            .iter()
            .map(|v| if v.is_nan() { None } else { Some(*v) })
    }
}

impl From<Vec<f64>> for ObservationSequence {
    fn from(values: Vec<f64>) -> Self {
        Self::from_values(values)
    }
}

impl From<&[f64]> for ObservationSequence {
    fn from(values: &[f64]) -> Self {
        Self::from_values(values.to_vec())
    }
}
