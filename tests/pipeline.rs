//! End-to-end pipeline tests: request builder -> engine -> accessor ->
//! summarizer, with a stub engine standing in for the external sampler.

use posterior_ts::core::{DrawTable, ParameterDraws};
use posterior_ts::datasets;
use posterior_ts::engine::memory::{synthetic_normal_draws, synthetic_normal_matrix};
use posterior_ts::engine::{FittedModel, FittingEngine, StoredPosterior};
use posterior_ts::forecast::extend_for_forecast;
use posterior_ts::models::{LatentProcess, ModelTemplate};
use posterior_ts::posterior::{extract, extract_all, ParameterSelection};
use posterior_ts::request::{ModelRequest, ModelRequestBuilder, SamplerConfig};
use posterior_ts::summary::credible_interval_default;
use posterior_ts::{PosteriorError, Result};
use std::cell::Cell;

/// Stub engine: returns a stored posterior with seeded synthetic draws for
/// every parameter the template monitors. Vector-valued parameters get one
/// position per time step of the request.
struct StubEngine {
    num_draws: usize,
    seed: u64,
    fits: Cell<usize>,
}

impl StubEngine {
    fn new(num_draws: usize, seed: u64) -> Self {
        Self {
            num_draws,
            seed,
            fits: Cell::new(0),
        }
    }

    fn fit_count(&self) -> usize {
        self.fits.get()
    }
}

impl FittingEngine for StubEngine {
    type Handle = StoredPosterior;

    fn fit(&self, request: &ModelRequest, template: &ModelTemplate) -> Result<Self::Handle> {
        self.fits.set(self.fits.get() + 1);

        let mut table = DrawTable::new();
        for (i, name) in template.monitored_parameters().iter().enumerate() {
            let seed = self.seed.wrapping_add(i as u64);
            let draws = match *name {
                "states" | "trends" => {
                    // Latent path: anchor each position near the observed
                    // value, or near zero where the observation is missing.
                    let means: Vec<f64> = request
                        .observations()
                        .values()
                        .iter()
                        .map(|v| if v.is_nan() { 0.0 } else { *v })
                        .collect();
                    synthetic_normal_matrix(&means, 1.0, self.num_draws, seed)?
                }
                _ => ParameterDraws::scalar(synthetic_normal_draws(
                    0.5,
                    0.2,
                    self.num_draws,
                    seed,
                )?),
            };
            table.insert(*name, draws)?;
        }
        StoredPosterior::from_table(table)
    }
}

/// Engine that always fails, for pass-through checks.
struct BrokenEngine;

impl FittingEngine for BrokenEngine {
    type Handle = StoredPosterior;

    fn fit(&self, _request: &ModelRequest, _template: &ModelTemplate) -> Result<Self::Handle> {
        Err(PosteriorError::Fitting("chain 1 failed to initialize".into()))
    }
}

#[test]
fn full_pipeline_on_bundled_dataset() {
    let obs = datasets::dataset("wilddogs").unwrap().to_observations();
    let n = obs.len();

    let request = ModelRequestBuilder::new(obs)
        .sampler(SamplerConfig::new(2_000))
        .estimate_drift(true)
        .build()
        .unwrap();

    let template = ModelTemplate::StateSpace {
        process: LatentProcess::RandomWalk { drift: true },
    };

    let engine = StubEngine::new(400, 11);
    let handle = engine.fit(&request, &template).unwrap();

    assert_eq!(handle.num_draws(), 400);
    let table = extract_all(&handle).unwrap();
    assert_eq!(table.num_draws(), Some(400));

    let states = table.get("states").unwrap();
    assert_eq!(states.num_positions(), n);

    let band = credible_interval_default(states).unwrap();
    assert_eq!(band.len(), n);
    for p in 0..band.len() {
        let (lo, mean, hi) = band.band(p).unwrap();
        assert!(lo <= mean && mean <= hi, "position {p}");
    }
}

#[test]
fn forecast_extension_flows_through_the_pipeline() {
    let obs = datasets::dataset("airtemp_monthly").unwrap().to_observations();
    let n = obs.len();
    let horizon = 6;

    let extended = extend_for_forecast(&obs, horizon).unwrap();
    assert_eq!(extended.total_len(), n + horizon);

    let request = ModelRequestBuilder::new(extended.observations().clone())
        .build()
        .unwrap();
    assert_eq!(request.length(), n + horizon);

    let template = ModelTemplate::StateSpace {
        process: LatentProcess::Autoregressive { order: 1 },
    };
    let engine = StubEngine::new(300, 5);
    let handle = engine.fit(&request, &template).unwrap();

    // The latent path covers the forecast period too.
    let states = handle.draws("states").unwrap();
    assert_eq!(states.num_positions(), n + horizon);

    let band = credible_interval_default(states).unwrap();
    for p in extended.forecast_positions() {
        let (lo, _, hi) = band.band(p).unwrap();
        assert!(lo.is_finite() && hi.is_finite(), "forecast position {p}");
    }
}

#[test]
fn builder_failure_means_no_engine_call() {
    let engine = StubEngine::new(100, 1);

    let result = ModelRequestBuilder::new((1..=10).map(f64::from).collect::<Vec<_>>())
        .covariates((1..=9).map(f64::from).collect())
        .build();

    assert_eq!(
        result.unwrap_err(),
        PosteriorError::CovariateLengthMismatch {
            expected: 10,
            got: 9
        }
    );
    // The request never existed, so the engine was never consulted.
    assert_eq!(engine.fit_count(), 0);
}

#[test]
fn unknown_parameter_scenario() {
    let mut table = DrawTable::new();
    table
        .insert(
            "mu",
            ParameterDraws::scalar(synthetic_normal_draws(0.0, 1.0, 50, 3).unwrap()),
        )
        .unwrap();
    table
        .insert(
            "sigma",
            ParameterDraws::scalar(synthetic_normal_draws(1.0, 0.1, 50, 4).unwrap()),
        )
        .unwrap();
    let handle = StoredPosterior::from_table(table).unwrap();

    let err = extract(&handle, &ParameterSelection::named(["gamma"])).unwrap_err();
    assert_eq!(
        err,
        PosteriorError::UnknownParameter {
            name: "gamma".into(),
            monitored: vec!["mu".into(), "sigma".into()],
        }
    );
}

#[test]
fn engine_failure_passes_through_unchanged() {
    let request = ModelRequestBuilder::new(vec![1.0, 2.0, 3.0]).build().unwrap();
    let err = BrokenEngine
        .fit(&request, &ModelTemplate::Regression)
        .unwrap_err();
    assert_eq!(
        err,
        PosteriorError::Fitting("chain 1 failed to initialize".into())
    );
}

#[test]
fn stub_engine_is_seed_reproducible() {
    let request = ModelRequestBuilder::new(vec![1.0, 2.0, 3.0, 4.0])
        .build()
        .unwrap();
    let template = ModelTemplate::RandomWalk { drift: true };

    let a = StubEngine::new(200, 9).fit(&request, &template).unwrap();
    let b = StubEngine::new(200, 9).fit(&request, &template).unwrap();

    assert_eq!(extract_all(&a).unwrap(), extract_all(&b).unwrap());
}

#[test]
fn every_template_yields_its_monitored_set() {
    let request = ModelRequestBuilder::new((1..=12).map(f64::from).collect::<Vec<_>>())
        .build()
        .unwrap();
    let engine = StubEngine::new(50, 21);

    for id in ModelTemplate::identifiers() {
        let template = ModelTemplate::from_identifier(id).unwrap();
        let handle = engine.fit(&request, &template).unwrap();

        let mut expected: Vec<&str> = template.monitored_parameters();
        expected.sort_unstable();
        let mut monitored: Vec<&str> = handle
            .monitored_parameters()
            .iter()
            .map(String::as_str)
            .collect();
        monitored.sort_unstable();
        assert_eq!(monitored, expected, "template {id}");
    }
}
