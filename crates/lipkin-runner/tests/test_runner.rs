//! End-to-end runs through the simulator and replay oracles.

use lipkin_adapter_sim::StatevectorOracle;
use lipkin_estimate::EnergyEstimator;
use lipkin_hal::{Bitstring, BitstringSample, CorpusFormat, MeasurementBasis, ReplayOracle, corpus};
use lipkin_model::ModelParameters;
use lipkin_runner::{
    AcceptanceRule, ExperimentReport, ExperimentRunner, ParameterSweep, RunnerConfig, Stage,
    SweepConfig,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn signed_config() -> RunnerConfig {
    RunnerConfig {
        acceptance: AcceptanceRule::Signed,
        tolerance_sigmas: 3.0,
        ..RunnerConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Simulated runs
// ---------------------------------------------------------------------------

#[test]
fn two_level_model_hits_closed_form_energy() {
    let params = ModelParameters::new(1, 1.0, 0.0, 0, 0).unwrap();
    let mut runner = ExperimentRunner::new(StatevectorOracle::with_seed(11), signed_config());
    let run = runner.run(&params, 0, 20_000).unwrap();

    let target = -(1.25_f64).sqrt();
    assert!((run.result().target_energy - target).abs() < 1e-9);
    assert!((run.result().sample_mean - target).abs() <= 5.0 * run.result().standard_error + 1e-12);
    assert_eq!(runner.stage(), Stage::Reported);
}

#[test]
fn five_qubit_ground_state_within_three_sigma() {
    let params = ModelParameters::new(5, 3.2, -1.5, 0, 0).unwrap();
    let mut runner = ExperimentRunner::new(StatevectorOracle::with_seed(2024), signed_config());
    let run = runner.run(&params, 0, 10_000).unwrap();
    let result = run.result();

    assert!(result.standard_error > 0.0);
    assert!(
        (result.sample_mean - result.target_energy).abs() <= 3.0 * result.standard_error,
        "mean {} target {} se {}",
        result.sample_mean,
        result.target_energy,
        result.standard_error
    );
    assert!(result.within_tolerance);
    assert_eq!(run.report.angles.len(), 5);
    assert_eq!(run.distribution.len(), 10_000);
}

#[test]
fn repeated_trials_mostly_within_five_sigma() {
    let params = ModelParameters::new(3, 0.8, -0.3, 0, 1).unwrap();
    let mut runner = ExperimentRunner::new(StatevectorOracle::with_seed(5), signed_config());

    let mut within = 0;
    for _ in 0..20 {
        let run = runner.run(&params, 1, 2000).unwrap();
        let r = run.result();
        if (r.sample_mean - r.target_energy).abs() <= 5.0 * r.standard_error {
            within += 1;
        }
    }
    assert!(within >= 19, "only {within}/20 trials within 5 sigma");
}

#[test]
fn single_qubit_model_only_samples_two_cliques() {
    let params = ModelParameters::new(1, 2.0, 0.5, 1, 0).unwrap();
    let mut runner = ExperimentRunner::new(StatevectorOracle::with_seed(1), RunnerConfig::default());
    let run = runner.run(&params, 1, 100).unwrap();

    assert_eq!(
        run.sample.bases().collect::<Vec<_>>(),
        vec![MeasurementBasis::Z, MeasurementBasis::X]
    );
    assert!(!run.sample.contains(MeasurementBasis::ZzEven));
    assert!(!run.sample.contains(MeasurementBasis::ZzOdd));
}

#[test]
fn excited_levels_run() {
    let params = ModelParameters::new(4, 3.2, -1.5, 1, 0).unwrap();
    let mut runner = ExperimentRunner::new(StatevectorOracle::with_seed(77), signed_config());
    let mut previous = f64::NEG_INFINITY;
    for level in 0..=params.max_level() {
        let run = runner.run(&params, level, 500).unwrap();
        assert!(run.result().target_energy >= previous);
        previous = run.result().target_energy;
    }
}

// ---------------------------------------------------------------------------
// Replay
// ---------------------------------------------------------------------------

#[test]
fn replay_of_a_run_reproduces_its_mean() {
    let params = ModelParameters::new(4, 1.1, 0.9, 1, 1).unwrap();
    let mut live = ExperimentRunner::new(StatevectorOracle::with_seed(31), RunnerConfig::default());
    let first = live.run(&params, 2, 3000).unwrap();

    let mut replay = ExperimentRunner::new(
        ReplayOracle::new(first.sample.clone()),
        RunnerConfig::default(),
    );
    let second = replay.run(&params, 2, 3000).unwrap();

    assert_eq!(second.sample, first.sample);
    assert_eq!(second.result().sample_mean, first.result().sample_mean);
    assert_eq!(second.result().standard_error, first.result().standard_error);
    assert_eq!(second.report.oracle, "replay");
}

#[test]
fn replay_runs_out_of_shots() {
    let params = ModelParameters::new(2, 1.0, 0.0, 0, 0).unwrap();
    let mut live = ExperimentRunner::new(StatevectorOracle::with_seed(3), RunnerConfig::default());
    let sample = live.run(&params, 0, 100).unwrap().sample;

    let mut replay = ExperimentRunner::new(ReplayOracle::new(sample), RunnerConfig::default());
    replay.run(&params, 0, 60).unwrap();
    assert!(replay.run(&params, 0, 60).is_err());
    assert_eq!(replay.stage(), Stage::AnglesSynthesized);

    replay.oracle_mut().rewind();
    assert!(replay.run(&params, 0, 100).is_ok());
}

/// A random corpus at the full 53-qubit width, written and read back
/// through the lines format.
fn synthetic_corpus(shots: usize, seed: u64) -> BitstringSample {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut sample = BitstringSample::new();
    for basis in MeasurementBasis::ALL {
        let batch = (0..shots)
            .map(|_| Bitstring::from_bits((0..53).map(|_| rng.r#gen()).collect()))
            .collect();
        sample.insert(basis, batch);
    }
    sample
}

#[test]
fn fifty_three_qubit_corpus_replays_through_runner() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corpus53.txt");
    corpus::save(&path, &synthetic_corpus(400, 53)).unwrap();

    let loaded = corpus::load(&path, CorpusFormat::Lines).unwrap();
    assert_eq!(loaded.num_qubits(), Some(53));

    let params = ModelParameters::new(53, 3.0_f64.sqrt(), 2.0_f64.sqrt(), 0, 0).unwrap();
    let oracle = ReplayOracle::from_file(&path, CorpusFormat::Lines).unwrap();
    let mut runner = ExperimentRunner::new(oracle, RunnerConfig::default());
    let run = runner.run(&params, 0, 400).unwrap();

    assert!((run.result().target_energy + 52.657_128_482_275_674).abs() < 1e-6);
    assert_eq!(run.report.angles.len(), 53);

    let direct = EnergyEstimator::from_params(&params).estimate(&loaded).unwrap();
    assert!((run.result().sample_mean - direct.mean()).abs() < 1e-9);
    assert!((run.result().standard_error - direct.standard_error()).abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// Reports and sweeps
// ---------------------------------------------------------------------------

#[test]
fn report_round_trips_through_json_file() {
    let params = ModelParameters::new(2, 2.0, 1.0, 1, 0).unwrap();
    let mut runner = ExperimentRunner::new(StatevectorOracle::with_seed(8), RunnerConfig::default());
    let run = runner.run(&params, 1, 200).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    run.report.write_json(&path).unwrap();
    let read = ExperimentReport::read_json(&path).unwrap();

    assert_eq!(read.run_id, run.report.run_id);
    assert_eq!(read.timestamp, run.report.timestamp);
    assert_eq!(read.oracle, "statevector");
    assert_eq!(read.level, 1);
    assert_eq!(read.angles.len(), 2);
    assert!((read.result.sample_mean - run.result().sample_mean).abs() < 1e-12);
    assert_eq!(read.result.within_tolerance, run.result().within_tolerance);
    assert_eq!(read.params, params);
}

#[test]
fn small_sweep_completes() {
    let mut sweep = ParameterSweep::new(SweepConfig {
        trials: 8,
        max_m: 3,
        max_v: 2.0,
        shots: 500,
        random_level: true,
        seed: Some(12),
        ..SweepConfig::default()
    });
    let mut runner = ExperimentRunner::new(StatevectorOracle::with_seed(12), RunnerConfig::default());

    let mut seen = Vec::new();
    let summary = sweep.run(&mut runner, |trial| seen.push(trial.index));

    assert_eq!(summary.trials, 8);
    assert_eq!(summary.errors, 0);
    assert_eq!(summary.completed(), 8);
    assert_eq!(seen, (0..8).collect::<Vec<_>>());
    assert!(summary.mean_relative_error.is_finite());
}
