//! Replay command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use lipkin_hal::{CorpusFormat, MeasurementBasis, ReplayOracle, corpus};
use lipkin_runner::{ExperimentRunner, LipkinConfig};

use super::common::{Couplings, print_run};

/// Execute the replay command.
///
/// `M` is the corpus bit length and every clique is replayed in full, so the
/// shortest active batch sets the shot count.
pub fn execute(
    config: &LipkinConfig,
    path: &Path,
    format: CorpusFormat,
    couplings: Couplings,
    level: usize,
) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }
    let sample = corpus::load(path, format)
        .with_context(|| format!("Failed to load corpus: {}", path.display()))?;

    let width = sample
        .num_qubits()
        .with_context(|| format!("Corpus is empty: {}", path.display()))?;
    let m = u32::try_from(width).context("Corpus bitstrings are too wide")?;
    let params = couplings.params(m)?;
    params.check_level(level).context("Invalid energy level")?;

    let shots = MeasurementBasis::active_for(width)
        .into_iter()
        .map(|basis| sample.get(basis).map_or(0, <[_]>::len))
        .min()
        .unwrap_or(0);
    let shots = u32::try_from(shots).context("Corpus has too many shots")?;

    println!(
        "{} Replaying {} ({} format, {} qubits, {} shots per clique)",
        style("→").cyan().bold(),
        style(path.display()).green(),
        format,
        width,
        shots
    );

    let mut runner = ExperimentRunner::new(ReplayOracle::new(sample), config.runner.clone());
    let run = runner
        .run(&params, level, shots)
        .with_context(|| format!("Replay stopped after stage '{}'", runner.stage()))?;

    print_run(&run);
    Ok(())
}
