//! Shared helpers for CLI commands.

use std::time::Duration;

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use lipkin_adapter_sim::StatevectorOracle;
use lipkin_model::ModelParameters;
use lipkin_runner::{ExperimentRun, RunnerConfig};

/// Model couplings and shell occupations; `M` comes from elsewhere.
#[derive(Debug, Clone, Copy)]
pub struct Couplings {
    pub v: f64,
    pub w: f64,
    pub nua: u8,
    pub nub: u8,
}

impl Couplings {
    /// Validated parameters for a model of size `m`.
    pub fn params(self, m: u32) -> Result<ModelParameters> {
        ModelParameters::new(m, self.v, self.w, self.nua, self.nub)
            .context("Invalid model parameters")
    }
}

/// Statevector oracle seeded from `seed`, falling back to the config seed.
pub fn statevector_oracle(config: &RunnerConfig, seed: Option<u64>) -> StatevectorOracle {
    let oracle = match seed.or(config.seed) {
        Some(seed) => StatevectorOracle::with_seed(seed),
        None => StatevectorOracle::new(),
    };
    oracle.with_max_qubits(config.max_qubits)
}

/// Spinner shown while a run samples.
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(template);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Print the outcome of a run.
pub fn print_run(run: &ExperimentRun) {
    let report = &run.report;
    let result = &report.result;

    println!();
    println!("{}", style("Energy estimate:").bold());
    println!("  Parameters:     {}", report.params);
    println!("  Level:          {}", report.level);
    println!("  Shots/clique:   {}", report.shots);
    println!("  Oracle:         {}", report.oracle);
    println!("  Target energy:  {:.10}", result.target_energy);
    println!(
        "  Sample mean:    {:.10} ± {:.10}",
        result.sample_mean, result.standard_error
    );
    match report.relative_error_percent {
        Some(err) => println!("  Relative error: {err:.4}%"),
        None => println!("  Relative error: n/a (zero target)"),
    }

    let verdict = if result.within_tolerance {
        style("PASS").green().bold()
    } else {
        style("FAIL").red().bold()
    };
    println!(
        "  Acceptance:     {} ({} rule, {} sigma)",
        verdict, report.acceptance, report.tolerance_sigmas
    );
}
