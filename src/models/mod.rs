//! The closed set of model templates understood by fitting-engine adapters.
//!
//! Each template corresponds to one of the textual model descriptions the
//! lab material hands to its sampling engines. The set is closed: adapters
//! dispatch on the enum, and the string boundary
//! ([`ModelTemplate::from_identifier`]) rejects anything outside it.

use crate::error::{PosteriorError, Result};

/// Latent process driving a state-space model.
///
/// The process-error and observation-error chapters of the source material
/// share this single process description; the split between process noise
/// and observation noise lives in the monitored parameters (`sigma_proc`,
/// `sigma_obs`), not in separate templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatentProcess {
    /// Random walk, optionally with an estimated drift term.
    RandomWalk { drift: bool },
    /// Autoregressive process of the given order (order ≥ 1 for a
    /// meaningful model; order 0 degenerates to white noise).
    Autoregressive { order: usize },
}

/// A named Bayesian time-series model template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTemplate {
    /// Linear regression with independent errors.
    Regression,
    /// Linear regression with AR(1) errors.
    RegressionAutocorrelatedErrors,
    /// Random walk on the observations themselves.
    RandomWalk { drift: bool },
    /// AR(p) on the observations themselves.
    Autoregressive { order: usize },
    /// State-space model: latent process plus noisy observation layer.
    StateSpace { process: LatentProcess },
    /// Dynamic factor analysis: multiple series loading onto latent trends.
    DynamicFactorAnalysis { num_trends: usize },
}

impl ModelTemplate {
    /// The identifier used at the string boundary with engine adapters.
    pub fn identifier(&self) -> &'static str {
        match self {
            ModelTemplate::Regression => "regression",
            ModelTemplate::RegressionAutocorrelatedErrors => {
                "regression_with_autocorrelated_errors"
            }
            ModelTemplate::RandomWalk { .. } => "random_walk",
            ModelTemplate::Autoregressive { .. } => "autoregressive_order_p",
            ModelTemplate::StateSpace {
                process: LatentProcess::RandomWalk { .. },
            } => "state_space_random_walk",
            ModelTemplate::StateSpace {
                process: LatentProcess::Autoregressive { .. },
            } => "state_space_autoregressive",
            ModelTemplate::DynamicFactorAnalysis { .. } => "dynamic_factor_analysis",
        }
    }

    /// Resolve an identifier to its template with default parameterization
    /// (no drift, AR order 1, one latent trend).
    ///
    /// Callers needing a different parameterization construct the variant
    /// directly; this entry point exists for the string-typed engine
    /// boundary and fails with [`PosteriorError::UnknownModel`] on anything
    /// outside the closed set.
    pub fn from_identifier(id: &str) -> Result<Self> {
        match id {
            "regression" => Ok(ModelTemplate::Regression),
            "regression_with_autocorrelated_errors" => {
                Ok(ModelTemplate::RegressionAutocorrelatedErrors)
            }
            "random_walk" => Ok(ModelTemplate::RandomWalk { drift: false }),
            "autoregressive_order_p" => Ok(ModelTemplate::Autoregressive { order: 1 }),
            "state_space_random_walk" => Ok(ModelTemplate::StateSpace {
                process: LatentProcess::RandomWalk { drift: false },
            }),
            "state_space_autoregressive" => Ok(ModelTemplate::StateSpace {
                process: LatentProcess::Autoregressive { order: 1 },
            }),
            "dynamic_factor_analysis" => {
                Ok(ModelTemplate::DynamicFactorAnalysis { num_trends: 1 })
            }
            other => Err(PosteriorError::UnknownModel(other.to_string())),
        }
    }

    /// All identifiers in the closed set.
    pub fn identifiers() -> &'static [&'static str] {
        &[
            "regression",
            "regression_with_autocorrelated_errors",
            "random_walk",
            "autoregressive_order_p",
            "state_space_random_walk",
            "state_space_autoregressive",
            "dynamic_factor_analysis",
        ]
    }

    /// Default monitored-parameter names for this template.
    ///
    /// These are the names a fitted-model handle is expected to expose when
    /// the caller does not override the monitor list. Vector-valued entries
    /// (`states`, `trends`, `loadings`) carry one position per time step or
    /// series.
    pub fn monitored_parameters(&self) -> Vec<&'static str> {
        match self {
            ModelTemplate::Regression => vec!["alpha", "beta", "sigma"],
            ModelTemplate::RegressionAutocorrelatedErrors => {
                vec!["alpha", "beta", "phi", "sigma"]
            }
            ModelTemplate::RandomWalk { drift: false } => vec!["sigma"],
            ModelTemplate::RandomWalk { drift: true } => vec!["mu", "sigma"],
            ModelTemplate::Autoregressive { .. } => vec!["phi", "sigma"],
            ModelTemplate::StateSpace { process } => {
                let mut names = vec!["sigma_proc", "sigma_obs", "states"];
                match process {
                    LatentProcess::RandomWalk { drift: true } => names.insert(0, "mu"),
                    LatentProcess::RandomWalk { drift: false } => {}
                    LatentProcess::Autoregressive { .. } => names.insert(0, "phi"),
                }
                names
            }
            ModelTemplate::DynamicFactorAnalysis { .. } => {
                vec!["loadings", "trends", "sigma_obs"]
            }
        }
    }

    /// Autoregressive order carried by this template, if any.
    pub fn ar_order(&self) -> Option<usize> {
        match self {
            ModelTemplate::Autoregressive { order } => Some(*order),
            ModelTemplate::RegressionAutocorrelatedErrors => Some(1),
            ModelTemplate::StateSpace {
                process: LatentProcess::Autoregressive { order },
            } => Some(*order),
            _ => None,
        }
    }

    /// Whether this template estimates a drift term.
    pub fn estimates_drift(&self) -> bool {
        matches!(
            self,
            ModelTemplate::RandomWalk { drift: true }
                | ModelTemplate::StateSpace {
                    process: LatentProcess::RandomWalk { drift: true },
                }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip_through_the_closed_set() {
        for id in ModelTemplate::identifiers() {
            let template = ModelTemplate::from_identifier(id).unwrap();
            assert_eq!(template.identifier(), *id);
        }
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let err = ModelTemplate::from_identifier("kalman_smoother").unwrap_err();
        assert_eq!(err, PosteriorError::UnknownModel("kalman_smoother".into()));

        // Case-sensitive: the set is closed over exact strings.
        assert!(ModelTemplate::from_identifier("Random_Walk").is_err());
    }

    #[test]
    fn state_space_variants_share_one_template_shape() {
        let rw = ModelTemplate::from_identifier("state_space_random_walk").unwrap();
        let ar = ModelTemplate::from_identifier("state_space_autoregressive").unwrap();

        assert!(matches!(rw, ModelTemplate::StateSpace { .. }));
        assert!(matches!(ar, ModelTemplate::StateSpace { .. }));

        // Both monitor process and observation noise separately.
        for template in [rw, ar] {
            let monitored = template.monitored_parameters();
            assert!(monitored.contains(&"sigma_proc"));
            assert!(monitored.contains(&"sigma_obs"));
            assert!(monitored.contains(&"states"));
        }
    }

    #[test]
    fn drift_flag_changes_monitored_set() {
        let without = ModelTemplate::RandomWalk { drift: false };
        let with = ModelTemplate::RandomWalk { drift: true };

        assert!(!without.monitored_parameters().contains(&"mu"));
        assert!(with.monitored_parameters().contains(&"mu"));
        assert!(with.estimates_drift());
        assert!(!without.estimates_drift());
    }

    #[test]
    fn ar_order_is_exposed_where_meaningful() {
        assert_eq!(
            ModelTemplate::Autoregressive { order: 3 }.ar_order(),
            Some(3)
        );
        assert_eq!(
            ModelTemplate::StateSpace {
                process: LatentProcess::Autoregressive { order: 2 },
            }
            .ar_order(),
            Some(2)
        );
        assert_eq!(ModelTemplate::Regression.ar_order(), None);
    }
}
