//! # posterior-ts
//!
//! Posterior-summary and forecast-extension utilities for Bayesian
//! time-series models fit by external MCMC engines.
//!
//! The heavy lifting — sampling, model compilation — stays behind the
//! [`engine::FittingEngine`] boundary. This crate owns the layer around it:
//!
//! - [`request`]: validated model requests (observations, covariates,
//!   sampler settings) built fail-fast before anything reaches an engine.
//! - [`models`]: the closed set of model templates, from plain regression
//!   through state-space models to dynamic factor analysis.
//! - [`posterior`]: extracting named parameter draws from a fitted-model
//!   handle into draw tables.
//! - [`summary`]: pointwise credible bands with a deterministic quantile
//!   rule.
//! - [`forecast`]: extending an observation sequence with missing markers
//!   so the engine forecasts by marginalization.
//!
//! Every component is a pure function of its inputs; fitted-model handles
//! are only ever read, so everything here is safe to call concurrently
//! against a shared handle.

pub mod core;
pub mod datasets;
pub mod engine;
pub mod error;
pub mod forecast;
pub mod models;
pub mod posterior;
pub mod request;
pub mod summary;

pub use error::{PosteriorError, Result};

pub mod prelude {
    pub use crate::core::{DrawTable, ObservationSequence, ParameterDraws};
    pub use crate::engine::{FittedModel, FittingEngine, StoredPosterior};
    pub use crate::error::{PosteriorError, Result};
    pub use crate::forecast::extend_for_forecast;
    pub use crate::models::{LatentProcess, ModelTemplate};
    pub use crate::posterior::{extract, extract_all, ParameterSelection};
    pub use crate::request::{ModelRequest, ModelRequestBuilder, SamplerConfig};
    pub use crate::summary::{credible_interval, credible_interval_default, IntervalSummary};
}
