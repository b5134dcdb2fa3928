//! The boundary to external fitting engines.
//!
//! Model fitting itself (MCMC sampling, model compilation) is delegated to
//! an external engine behind the [`FittingEngine`] trait. What comes back is
//! an opaque [`FittedModel`] handle that this crate only ever reads.
//!
//! Engine failures are surfaced to the caller unchanged as
//! [`PosteriorError::Fitting`](crate::error::PosteriorError::Fitting) or
//! [`PosteriorError::FittingTimeout`](crate::error::PosteriorError::FittingTimeout)
//! and are never retried here: a fit is stochastic, so a silent retry would
//! silently change results. Callers re-request explicitly, typically with a
//! new seed.

pub mod memory;
pub mod scratch;

pub use memory::StoredPosterior;
pub use scratch::ScratchSpace;

use crate::core::ParameterDraws;
use crate::error::Result;
use crate::models::ModelTemplate;
use crate::request::ModelRequest;

/// A fitted model produced by an external engine.
///
/// The handle records at fit time which parameters were monitored; draw
/// lookups are validated against that metadata rather than discovered
/// lazily. Implementations must be read-only: repeated calls with the same
/// arguments return identical results.
pub trait FittedModel {
    /// Names of the parameters monitored during fitting.
    fn monitored_parameters(&self) -> &[String];

    /// Shared draw count across all monitored parameters.
    fn num_draws(&self) -> usize;

    /// Draws for one monitored parameter.
    ///
    /// Fails with [`PosteriorError::UnknownParameter`](crate::error::PosteriorError::UnknownParameter)
    /// for names outside the monitored set.
    fn draws(&self, name: &str) -> Result<&ParameterDraws>;
}

/// An external fitting engine adapter.
pub trait FittingEngine {
    /// The engine-specific fitted-model handle.
    type Handle: FittedModel;

    /// Fit a model template to a validated request.
    fn fit(&self, request: &ModelRequest, template: &ModelTemplate) -> Result<Self::Handle>;
}
