//! Sweep command implementation.

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use lipkin_runner::{ExperimentRunner, LipkinConfig, ParameterSweep};

use super::common::statevector_oracle;

/// Execute the sweep command.
pub fn execute(
    mut config: LipkinConfig,
    trials: Option<usize>,
    shots: Option<u32>,
    max_m: Option<u32>,
    seed: Option<u64>,
) -> Result<()> {
    if let Some(trials) = trials {
        config.sweep.trials = trials;
    }
    if let Some(shots) = shots {
        config.sweep.shots = shots;
    }
    if let Some(max_m) = max_m {
        config.sweep.max_m = max_m;
    }
    if seed.is_some() {
        config.sweep.seed = seed;
    }
    config.validate().context("Invalid sweep settings")?;

    println!(
        "{} Sweeping {} trials (M ≤ {}, V ≤ {}, {} shots per clique)",
        style("→").cyan().bold(),
        style(config.sweep.trials).green(),
        config.sweep.max_m,
        config.sweep.max_v,
        config.sweep.shots
    );

    let oracle = statevector_oracle(&config.runner, config.sweep.seed);
    let mut runner = ExperimentRunner::new(oracle, config.runner.clone());
    let mut sweep = ParameterSweep::new(config.sweep.clone());

    let progress = ProgressBar::new(config.sweep.trials as u64);
    if let Ok(template) =
        ProgressStyle::default_bar().template("{bar:40.cyan/blue} {pos}/{len} {msg}")
    {
        progress.set_style(template.progress_chars("=> "));
    }

    let summary = sweep.run(&mut runner, |trial| {
        let mark = match &trial.outcome {
            Ok(result) if result.within_tolerance => style("pass").green(),
            Ok(_) => style("fail").red(),
            Err(_) => style("error").red().bold(),
        };
        progress.set_message(format!("{} {}", trial.params, mark));
        progress.inc(1);
    });
    progress.finish_and_clear();

    println!();
    println!("{}", style("Sweep summary:").bold());
    println!("  Trials:         {}", summary.trials);
    println!("  Passed:         {}", style(summary.passed).green());
    println!("  Failed:         {}", style(summary.failed).red());
    println!("  Errors:         {}", summary.errors);
    println!("  Pass rate:      {:.1}%", 100.0 * summary.pass_rate());
    println!("  Mean rel. err:  {:.4}%", summary.mean_relative_error);

    Ok(())
}
