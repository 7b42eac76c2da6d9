//! Random parameter sweeps.
//!
//! Each trial draws `M ∈ [1, max_m]`, `V ∈ [0.1, max_v]` and
//! `W = ±V·u` with `u ∈ [0, 1)`, then runs independently. A failing trial
//! is logged and counted; it does not stop the sweep.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use lipkin_hal::CircuitOracle;
use lipkin_model::ModelParameters;

use crate::config::SweepConfig;
use crate::error::RunnerResult;
use crate::report::ExperimentResult;
use crate::runner::ExperimentRunner;

/// One sweep trial and its outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepTrial {
    pub index: usize,
    pub params: ModelParameters,
    pub level: usize,
    /// The result, or the error message of a run that aborted.
    pub outcome: Result<ExperimentResult, String>,
}

/// Aggregate of a sweep.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepSummary {
    pub trials: usize,
    /// Completed runs within tolerance.
    pub passed: usize,
    /// Completed runs outside tolerance.
    pub failed: usize,
    /// Runs that aborted with an error.
    pub errors: usize,
    /// Mean relative error (%) over completed runs with a non-zero target.
    pub mean_relative_error: f64,
}

impl SweepSummary {
    /// Number of completed runs.
    pub fn completed(&self) -> usize {
        self.passed + self.failed
    }

    /// Fraction of completed runs within tolerance.
    pub fn pass_rate(&self) -> f64 {
        if self.completed() == 0 {
            return 0.0;
        }
        self.passed as f64 / self.completed() as f64
    }
}

/// Draws parameter sets and runs them.
pub struct ParameterSweep {
    config: SweepConfig,
    rng: StdRng,
}

impl ParameterSweep {
    /// Create a sweep; seeded from the config or OS entropy.
    pub fn new(config: SweepConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Draw one parameter set and level.
    pub fn draw(&mut self) -> RunnerResult<(ModelParameters, usize)> {
        let m = self.rng.gen_range(1..=self.config.max_m.max(1));
        let v = self.rng.gen_range(0.1..=self.config.max_v.max(0.1));
        let sign = if self.rng.r#gen::<bool>() { 1.0 } else { -1.0 };
        let w = sign * v * self.rng.r#gen::<f64>();
        let (nua, nub) = if self.config.random_occupations {
            (self.rng.gen_range(0..=1), self.rng.gen_range(0..=1))
        } else {
            (0, 0)
        };
        let params = ModelParameters::new(m, v, w, nua, nub)?;
        let level = if self.config.random_level {
            self.rng.gen_range(0..=params.max_level())
        } else {
            0
        };
        Ok((params, level))
    }

    /// Run every trial, calling `on_trial` after each one.
    pub fn run<O, F>(&mut self, runner: &mut ExperimentRunner<O>, mut on_trial: F) -> SweepSummary
    where
        O: CircuitOracle,
        F: FnMut(&SweepTrial),
    {
        let mut summary = SweepSummary {
            trials: self.config.trials,
            ..SweepSummary::default()
        };
        let mut relative_errors = Vec::new();

        for index in 0..self.config.trials {
            let trial = match self.draw() {
                Ok((params, level)) => {
                    let outcome = runner
                        .run(&params, level, self.config.shots)
                        .map(|run| *run.result())
                        .map_err(|e| e.to_string());
                    SweepTrial {
                        index,
                        params,
                        level,
                        outcome,
                    }
                }
                Err(e) => {
                    // Only reachable with an unvalidated config.
                    warn!(index, error = %e, "parameter draw rejected");
                    summary.errors += 1;
                    continue;
                }
            };

            match &trial.outcome {
                Ok(result) => {
                    if result.within_tolerance {
                        summary.passed += 1;
                    } else {
                        summary.failed += 1;
                    }
                    if let Some(err) = result.relative_error_percent() {
                        relative_errors.push(err);
                    }
                }
                Err(e) => {
                    warn!(index, params = %trial.params, level = trial.level, error = %e, "trial failed");
                    summary.errors += 1;
                }
            }
            on_trial(&trial);
        }

        if !relative_errors.is_empty() {
            summary.mean_relative_error =
                relative_errors.iter().sum::<f64>() / relative_errors.len() as f64;
        }
        info!(
            trials = summary.trials,
            passed = summary.passed,
            failed = summary.failed,
            errors = summary.errors,
            "sweep complete"
        );
        summary
    }
}
