//! Bundled example datasets.
//!
//! Small ecological and meteorological series for exercising the request
//! and summary pipeline without an external data source. Read-only: lookup
//! hands out owned copies, there is no write path.

use crate::core::ObservationSequence;
use crate::error::{PosteriorError, Result};
use chrono::{DateTime, TimeZone, Utc};

/// Monthly mean air temperature (°C), two years starting January 2012.
const AIRTEMP_MONTHLY: [f64; 24] = [
    2.1, 2.8, 5.9, 9.4, 13.8, 16.9, 19.2, 18.7, 15.1, 10.4, 6.0, 3.2, //
    1.7, 2.2, 5.1, 9.9, 14.2, 17.5, 19.8, 19.1, 14.6, 10.1, 5.5, 2.9,
];

/// Annual African wild dog pack counts, 1970-1991. Three survey years were
/// skipped and are encoded as missing.
const WILDDOGS_ANNUAL: [f64; 22] = [
    94.0,
    88.0,
    83.0,
    79.0,
    f64::NAN,
    71.0,
    68.0,
    64.0,
    57.0,
    55.0,
    f64::NAN,
    48.0,
    46.0,
    41.0,
    38.0,
    35.0,
    f64::NAN,
    29.0,
    26.0,
    24.0,
    21.0,
    19.0,
];

/// A named, timestamped, read-only series.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: &'static str,
    description: &'static str,
    timestamps: Vec<DateTime<Utc>>,
    values: Vec<f64>,
}

impl Dataset {
    /// Dataset name as used by [`dataset`].
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// One-line description.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Timestamps, one per observation.
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Values, with NaN marking skipped observations.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the dataset has no observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The values as an observation sequence ready for a model request.
    pub fn to_observations(&self) -> ObservationSequence {
        ObservationSequence::from_values(self.values.clone())
    }
}

/// Names of all bundled datasets.
pub fn dataset_names() -> &'static [&'static str] {
    &["airtemp_monthly", "wilddogs"]
}

/// Look up a bundled dataset by name.
///
/// Fails with [`PosteriorError::UnknownDataset`] for names outside
/// [`dataset_names`].
pub fn dataset(name: &str) -> Result<Dataset> {
    match name {
        "airtemp_monthly" => Ok(Dataset {
            name: "airtemp_monthly",
            description: "Monthly mean air temperature (deg C), 2012-2013",
            timestamps: monthly_timestamps(2012, AIRTEMP_MONTHLY.len()),
            values: AIRTEMP_MONTHLY.to_vec(),
        }),
        "wilddogs" => Ok(Dataset {
            name: "wilddogs",
            description: "Annual African wild dog pack counts, 1970-1991",
            timestamps: annual_timestamps(1970, WILDDOGS_ANNUAL.len()),
            values: WILDDOGS_ANNUAL.to_vec(),
        }),
        other => Err(PosteriorError::UnknownDataset(other.to_string())),
    }
}

fn monthly_timestamps(start_year: i32, n: usize) -> Vec<DateTime<Utc>> {
    (0..n)
        .map(|i| {
            let year = start_year + (i / 12) as i32;
            let month = (i % 12) as u32 + 1;
            Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).unwrap()
        })
        .collect()
}

fn annual_timestamps(start_year: i32, n: usize) -> Vec<DateTime<Utc>> {
    (0..n)
        .map(|i| {
            Utc.with_ymd_and_hms(start_year + i as i32, 1, 1, 0, 0, 0)
                .unwrap()
        })
        .collect()
}
