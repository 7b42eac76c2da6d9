//! The single-run state machine.

use std::fmt;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use lipkin_estimate::{EnergyDistribution, EnergyEstimator};
use lipkin_hal::{Bitstring, BitstringSample, CircuitOracle};
use lipkin_model::{EigenSolver, Hamiltonian, ModelParameters};
use lipkin_prep::{AngleSynthesizer, MeasurementBasis};

use crate::config::RunnerConfig;
use crate::error::{RunnerError, RunnerResult};
use crate::report::{ExperimentReport, ExperimentResult};

/// Pipeline stages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Nothing done yet, or the inputs were rejected.
    Init,
    /// Hamiltonian matrix assembled for the parameters.
    HamiltonianBuilt,
    /// Target eigenpair extracted.
    Diagonalized,
    /// Staircase angles ready for the oracle.
    AnglesSynthesized,
    /// Every active clique sampled and checked.
    Sampled,
    /// Single-shot energies computed.
    Estimated,
    /// Report assembled; the run succeeded.
    Reported,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Init => "init",
            Stage::HamiltonianBuilt => "hamiltonian_built",
            Stage::Diagonalized => "diagonalized",
            Stage::AnglesSynthesized => "angles_synthesized",
            Stage::Sampled => "sampled",
            Stage::Estimated => "estimated",
            Stage::Reported => "reported",
        };
        f.write_str(name)
    }
}

/// A completed run: the report plus the raw data behind it.
#[derive(Debug, Clone)]
pub struct ExperimentRun {
    pub report: ExperimentReport,
    /// Bitstrings, one batch per active clique.
    pub sample: BitstringSample,
    /// Single-shot energies.
    pub distribution: EnergyDistribution,
}

impl ExperimentRun {
    /// Shortcut to the numeric result.
    pub fn result(&self) -> &ExperimentResult {
        &self.report.result
    }
}

/// Runs parameter sets through an oracle.
///
/// Each call to [`run`](Self::run) is independent; [`stage`](Self::stage)
/// records how far the last run got, which tells where a failure happened.
pub struct ExperimentRunner<O: CircuitOracle> {
    oracle: O,
    config: RunnerConfig,
    stage: Stage,
}

impl<O: CircuitOracle> ExperimentRunner<O> {
    /// Create a runner around `oracle`.
    pub fn new(oracle: O, config: RunnerConfig) -> Self {
        Self {
            oracle,
            config,
            stage: Stage::Init,
        }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn oracle_mut(&mut self) -> &mut O {
        &mut self.oracle
    }

    /// Consume the runner, returning the oracle.
    pub fn into_oracle(self) -> O {
        self.oracle
    }

    /// Last stage reached by the most recent run.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    fn advance(&mut self, stage: Stage) {
        debug!(from = %self.stage, to = %stage, "stage transition");
        self.stage = stage;
    }

    fn check_batch(
        &self,
        basis: MeasurementBasis,
        batch: &[Bitstring],
        shots: usize,
        width: usize,
    ) -> RunnerResult<()> {
        let malformed = |what, expected, got| RunnerError::MalformedBatch {
            oracle: self.oracle.name().to_string(),
            basis,
            what,
            expected,
            got,
        };
        if batch.len() != shots {
            return Err(malformed("shots", shots, batch.len()));
        }
        if let Some(bad) = batch.iter().find(|b| b.len() != width) {
            return Err(malformed("bits", width, bad.len()));
        }
        Ok(())
    }

    /// Estimate the energy of `level` with `shots` shots per clique.
    pub fn run(
        &mut self,
        params: &ModelParameters,
        level: usize,
        shots: u32,
    ) -> RunnerResult<ExperimentRun> {
        self.stage = Stage::Init;
        params.validate()?;
        params.check_level(level)?;
        if shots == 0 {
            return Err(RunnerError::InvalidShots(shots));
        }
        debug!(m = params.m, v = params.v, w = params.w, level, shots, "starting run");

        let hamiltonian = Hamiltonian::for_parameters(*params);
        self.advance(Stage::HamiltonianBuilt);

        let pair = EigenSolver::new().solve(&hamiltonian, level)?;
        self.advance(Stage::Diagonalized);

        let angles = AngleSynthesizer::new()
            .with_degenerate_policy(self.config.degenerate_policy)
            .synthesize_pair(&pair)?;
        self.advance(Stage::AnglesSynthesized);

        let mut sample = BitstringSample::new();
        for basis in MeasurementBasis::active_for(angles.num_qubits()) {
            let batch = self.oracle.sample(&angles, shots, basis)?;
            self.check_batch(basis, &batch, shots as usize, angles.num_qubits())?;
            debug!(%basis, shots = batch.len(), "sampled clique");
            sample.insert(basis, batch);
        }
        self.advance(Stage::Sampled);

        let distribution = EnergyEstimator::from_params(params).estimate(&sample)?;
        self.advance(Stage::Estimated);

        let sample_mean = distribution.mean();
        let standard_error = distribution.standard_error();
        let within_tolerance = self.config.acceptance.accepts(
            sample_mean,
            standard_error,
            pair.eigenvalue,
            self.config.tolerance_sigmas,
        );
        let result = ExperimentResult {
            target_energy: pair.eigenvalue,
            sample_mean,
            standard_error,
            within_tolerance,
        };
        let report = ExperimentReport {
            run_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            oracle: self.oracle.name().to_string(),
            params: *params,
            level,
            shots,
            angles: angles.as_slice().to_vec(),
            acceptance: self.config.acceptance,
            tolerance_sigmas: self.config.tolerance_sigmas,
            result,
            relative_error_percent: result.relative_error_percent(),
        };
        self.advance(Stage::Reported);

        info!(
            target = result.target_energy,
            mean = result.sample_mean,
            se = result.standard_error,
            passed = result.within_tolerance,
            "run complete"
        );
        Ok(ExperimentRun {
            report,
            sample,
            distribution,
        })
    }
}
