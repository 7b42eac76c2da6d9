//! LMG energy estimation runs
//!
//! [`ExperimentRunner`] drives one parameter set through the pipeline
//!
//! ```text
//! Init → HamiltonianBuilt → Diagonalized → AnglesSynthesized
//!      → Sampled → Estimated → Reported
//! ```
//!
//! with no retries: the first failing stage aborts the run. A run that
//! completes but misses the tolerance is a normal outcome, reported through
//! [`ExperimentResult::within_tolerance`].
//!
//! [`ParameterSweep`] repeats runs over random parameter draws and
//! summarises them; [`LipkinConfig`] carries every tunable.
//!
//! # Example
//!
//! ```rust
//! use lipkin_adapter_sim::StatevectorOracle;
//! use lipkin_model::ModelParameters;
//! use lipkin_runner::{ExperimentRunner, RunnerConfig};
//!
//! let params = ModelParameters::new(2, 1.0, 0.3, 0, 0).unwrap();
//! let mut runner = ExperimentRunner::new(StatevectorOracle::with_seed(1), RunnerConfig::default());
//! let run = runner.run(&params, 0, 2000).unwrap();
//! assert!(run.report.result.standard_error > 0.0);
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod sweep;

pub use config::{ConfigError, LipkinConfig, LoggingConfig, RunnerConfig, SweepConfig};
pub use error::{RunnerError, RunnerResult};
pub use report::{AcceptanceRule, ExperimentReport, ExperimentResult};
pub use runner::{ExperimentRun, ExperimentRunner, Stage};
pub use sweep::{ParameterSweep, SweepSummary, SweepTrial};
