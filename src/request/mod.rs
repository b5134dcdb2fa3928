//! Model requests: the validated payload handed to a fitting engine.
//!
//! A [`ModelRequest`] can only be produced through [`ModelRequestBuilder`],
//! so every request an engine adapter receives has already passed the full
//! validation set: non-empty observations, covariate length agreement, and
//! well-formed sampler settings. Nothing is sent to an engine on failure.

use crate::core::ObservationSequence;
use crate::error::{PosteriorError, Result};

/// MCMC sampler settings passed through to the external engine.
///
/// The engine owns chain parallelism; this layer only declares the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Number of independent chains.
    pub chains: usize,
    /// Iterations discarded as burn-in before draws are collected.
    pub burn_in: usize,
    /// Keep every `thin`-th draw after burn-in.
    pub thin: usize,
    /// Total iterations per chain, including burn-in.
    pub iterations: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            chains: 3,
            burn_in: 5_000,
            thin: 1,
            iterations: 10_000,
        }
    }
}

impl SamplerConfig {
    /// Create a config with the given per-chain iteration count and a
    /// burn-in of half the iterations.
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            burn_in: iterations / 2,
            ..Default::default()
        }
    }

    /// Set the chain count.
    pub fn with_chains(mut self, chains: usize) -> Self {
        self.chains = chains;
        self
    }

    /// Set the burn-in length.
    pub fn with_burn_in(mut self, burn_in: usize) -> Self {
        self.burn_in = burn_in;
        self
    }

    /// Set the thinning interval.
    pub fn with_thin(mut self, thin: usize) -> Self {
        self.thin = thin;
        self
    }

    /// Number of draws retained per chain after burn-in and thinning.
    pub fn draws_per_chain(&self) -> usize {
        self.iterations.saturating_sub(self.burn_in) / self.thin.max(1)
    }

    fn validate(&self) -> Result<()> {
        if self.chains < 1 {
            return Err(PosteriorError::InvalidSamplerConfig(
                "chain count must be at least 1".into(),
            ));
        }
        if self.thin < 1 {
            return Err(PosteriorError::InvalidSamplerConfig(
                "thinning interval must be at least 1".into(),
            ));
        }
        if self.burn_in >= self.iterations {
            return Err(PosteriorError::InvalidSamplerConfig(format!(
                "burn-in ({}) must be less than total iterations ({})",
                self.burn_in, self.iterations
            )));
        }
        Ok(())
    }
}

/// A validated, engine-ready fitting request.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRequest {
    observations: ObservationSequence,
    covariates: Option<Vec<f64>>,
    sampler: SamplerConfig,
    ar_order: usize,
    estimate_drift: bool,
}

impl ModelRequest {
    /// The observation sequence to fit.
    pub fn observations(&self) -> &ObservationSequence {
        &self.observations
    }

    /// Total sequence length, including missing positions.
    pub fn length(&self) -> usize {
        self.observations.len()
    }

    /// Covariate sequence, if one was supplied.
    pub fn covariates(&self) -> Option<&[f64]> {
        self.covariates.as_deref()
    }

    /// Sampler settings for the engine.
    pub fn sampler(&self) -> &SamplerConfig {
        &self.sampler
    }

    /// Requested autoregressive order (0 when not applicable).
    pub fn ar_order(&self) -> usize {
        self.ar_order
    }

    /// Whether the engine should estimate a drift term.
    pub fn estimate_drift(&self) -> bool {
        self.estimate_drift
    }
}

/// Builder for [`ModelRequest`] with fail-fast validation in `build`.
#[derive(Debug, Clone, Default)]
pub struct ModelRequestBuilder {
    observations: ObservationSequence,
    covariates: Option<Vec<f64>>,
    sampler: SamplerConfig,
    ar_order: usize,
    estimate_drift: bool,
}

impl ModelRequestBuilder {
    /// Start a request from an observation sequence.
    pub fn new(observations: impl Into<ObservationSequence>) -> Self {
        Self {
            observations: observations.into(),
            ..Default::default()
        }
    }

    /// Attach a covariate sequence; must match the observation length.
    pub fn covariates(mut self, covariates: Vec<f64>) -> Self {
        self.covariates = Some(covariates);
        self
    }

    /// Override the default sampler settings.
    pub fn sampler(mut self, sampler: SamplerConfig) -> Self {
        self.sampler = sampler;
        self
    }

    /// Set the autoregressive order metadata.
    pub fn ar_order(mut self, order: usize) -> Self {
        self.ar_order = order;
        self
    }

    /// Ask the engine to estimate a drift term.
    pub fn estimate_drift(mut self, estimate: bool) -> Self {
        self.estimate_drift = estimate;
        self
    }

    /// Validate and produce the request.
    ///
    /// Errors: [`PosteriorError::EmptyObservations`],
    /// [`PosteriorError::CovariateLengthMismatch`], or
    /// [`PosteriorError::InvalidSamplerConfig`]. On error, no request exists
    /// and nothing has been sent anywhere.
    pub fn build(self) -> Result<ModelRequest> {
        if self.observations.is_empty() {
            return Err(PosteriorError::EmptyObservations);
        }
        if let Some(cov) = &self.covariates {
            if cov.len() != self.observations.len() {
                return Err(PosteriorError::CovariateLengthMismatch {
                    expected: self.observations.len(),
                    got: cov.len(),
                });
            }
        }
        self.sampler.validate()?;

        Ok(ModelRequest {
            observations: self.observations,
            covariates: self.covariates,
            sampler: self.sampler,
            ar_order: self.ar_order,
            estimate_drift: self.estimate_drift,
        })
    }
}
