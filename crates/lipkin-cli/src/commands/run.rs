//! Run command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use lipkin_hal::corpus;
use lipkin_runner::{ExperimentRunner, LipkinConfig};

use super::common::{Couplings, print_run, spinner, statevector_oracle};

/// Model and sampling arguments of `lipkin run`.
#[derive(Debug, Clone, Copy)]
pub struct RunArgs {
    pub m: u32,
    pub couplings: Couplings,
    pub level: usize,
    pub shots: u32,
    pub seed: Option<u64>,
}

/// Execute the run command.
pub fn execute(
    config: &LipkinConfig,
    args: RunArgs,
    export: Option<&Path>,
    save_bitstrings: Option<&Path>,
) -> Result<()> {
    let params = args.couplings.params(args.m)?;
    params.check_level(args.level).context("Invalid energy level")?;

    println!(
        "{} Estimating level {} of {} ({} shots per clique)",
        style("→").cyan().bold(),
        style(args.level).green(),
        style(params).yellow(),
        args.shots
    );

    let oracle = statevector_oracle(&config.runner, args.seed);
    let mut runner = ExperimentRunner::new(oracle, config.runner.clone());

    let spinner = spinner("Sampling cliques...");
    let run = runner.run(&params, args.level, args.shots);
    spinner.finish_and_clear();
    let run = run.with_context(|| format!("Run stopped after stage '{}'", runner.stage()))?;

    print_run(&run);

    if let Some(path) = export {
        run.report
            .write_json(path)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        println!("  Report:         {}", style(path.display()).green());
    }
    if let Some(path) = save_bitstrings {
        corpus::save(path, &run.sample)
            .with_context(|| format!("Failed to write bitstrings: {}", path.display()))?;
        println!("  Bitstrings:     {}", style(path.display()).green());
    }

    Ok(())
}
