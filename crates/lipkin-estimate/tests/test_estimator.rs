//! Tests for combining clique batches into energy estimates.

use lipkin_adapter_sim::StatevectorOracle;
use lipkin_estimate::{EnergyEstimator, EstimateError};
use lipkin_hal::{Bitstring, BitstringSample};
use lipkin_model::{EigenSolver, Hamiltonian, ModelParameters};
use lipkin_prep::{AngleSynthesizer, MeasurementBasis};

fn batch(items: &[&str]) -> Vec<Bitstring> {
    items.iter().map(|s| s.parse().unwrap()).collect()
}

fn full_sample(items: &[&str]) -> BitstringSample {
    MeasurementBasis::ALL
        .into_iter()
        .fold(BitstringSample::new(), |s, b| s.with_batch(b, batch(items)))
}

// ---------------------------------------------------------------------------
// Per-shot sums
// ---------------------------------------------------------------------------

#[test]
fn test_shot_energy_is_sum_of_cliques() {
    let estimator = EnergyEstimator::new(3.2, -1.5, 1, 0);
    let d = estimator.estimate(&full_sample(&["0110", "1011"])).unwrap();

    let first = -4.166666666666666 - 0.12883445144359018 + 0.3722335949782887 - 0.09088680476391697;
    let second = -7.5 - 3.8622667611152806 - 2.367784201257724 + 2.0864374110433523;
    assert_eq!(d.len(), 2);
    assert!((d.values()[0] - first).abs() < 1e-12);
    assert!((d.values()[1] - second).abs() < 1e-12);
}

#[test]
fn test_inactive_cliques_are_ignored() {
    // One qubit: only Z and X carry terms, extra batches change nothing.
    let estimator = EnergyEstimator::new(1.0, 0.0, 0, 0);
    let minimal = BitstringSample::new()
        .with_batch(MeasurementBasis::Z, batch(&["0", "1"]))
        .with_batch(MeasurementBasis::X, batch(&["1", "1"]));
    let padded = minimal
        .clone()
        .with_batch(MeasurementBasis::ZzEven, batch(&["1", "0"]))
        .with_batch(MeasurementBasis::ZzOdd, batch(&["0", "0"]));

    let a = estimator.estimate(&minimal).unwrap();
    let b = estimator.estimate(&padded).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.values(), &[0.5, -1.5]);
}

#[test]
fn test_inconsistent_inactive_batch_is_rejected() {
    let estimator = EnergyEstimator::new(1.0, 0.0, 0, 0);
    let base = BitstringSample::new()
        .with_batch(MeasurementBasis::Z, batch(&["0", "1"]))
        .with_batch(MeasurementBasis::X, batch(&["1", "1"]));

    let extra_shot = base
        .clone()
        .with_batch(MeasurementBasis::ZzEven, batch(&["1", "0", "1"]));
    assert!(matches!(
        estimator.estimate(&extra_shot),
        Err(EstimateError::InputLengthMismatch {
            basis: MeasurementBasis::ZzEven,
            what: "shots",
            expected: 2,
            got: 3,
        })
    ));

    let wide = base.with_batch(MeasurementBasis::ZzOdd, batch(&["10", "01"]));
    assert!(matches!(
        estimator.estimate(&wide),
        Err(EstimateError::InputLengthMismatch {
            basis: MeasurementBasis::ZzOdd,
            what: "bits",
            expected: 1,
            got: 2,
        })
    ));
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_missing_cliques() {
    let estimator = EnergyEstimator::new(1.0, 0.5, 0, 0);

    let no_z = BitstringSample::new().with_batch(MeasurementBasis::X, batch(&["01"]));
    assert!(matches!(
        estimator.estimate(&no_z),
        Err(EstimateError::MissingClique(MeasurementBasis::Z))
    ));

    // Three qubits need all four cliques.
    let three = BitstringSample::new()
        .with_batch(MeasurementBasis::Z, batch(&["010"]))
        .with_batch(MeasurementBasis::X, batch(&["010"]))
        .with_batch(MeasurementBasis::ZzEven, batch(&["010"]));
    let err = estimator.estimate(&three).unwrap_err();
    assert!(matches!(err, EstimateError::MissingClique(MeasurementBasis::ZzOdd)));
    assert_eq!(err.to_string(), "Missing bitstrings for clique 4 (zz-odd)");
}

#[test]
fn test_shot_count_mismatch() {
    let estimator = EnergyEstimator::new(1.0, 0.5, 0, 0);
    let sample = BitstringSample::new()
        .with_batch(MeasurementBasis::Z, batch(&["01", "10"]))
        .with_batch(MeasurementBasis::X, batch(&["01"]))
        .with_batch(MeasurementBasis::ZzEven, batch(&["01", "10"]));
    assert!(matches!(
        estimator.estimate(&sample),
        Err(EstimateError::InputLengthMismatch {
            basis: MeasurementBasis::X,
            what: "shots",
            expected: 2,
            got: 1,
        })
    ));
}

#[test]
fn test_bit_length_mismatch() {
    let estimator = EnergyEstimator::new(1.0, 0.5, 0, 0);
    let sample = BitstringSample::new()
        .with_batch(MeasurementBasis::Z, batch(&["01", "10"]))
        .with_batch(MeasurementBasis::X, batch(&["01", "10"]))
        .with_batch(MeasurementBasis::ZzEven, batch(&["01", "101"]));
    assert!(matches!(
        estimator.estimate(&sample),
        Err(EstimateError::InputLengthMismatch {
            what: "bits",
            expected: 2,
            got: 3,
            ..
        })
    ));
}

#[test]
fn test_empty_sample() {
    let estimator = EnergyEstimator::new(1.0, 0.5, 0, 0);
    let sample = BitstringSample::new().with_batch(MeasurementBasis::Z, vec![]);
    assert!(matches!(
        estimator.estimate(&sample),
        Err(EstimateError::EmptySample)
    ));
}

// ---------------------------------------------------------------------------
// Exact expectation
// ---------------------------------------------------------------------------

/// `Σ_cliques Σ_outcomes p · contribution` for the prepared eigenstate.
fn exact_expectation(params: ModelParameters, level: usize) -> (f64, f64) {
    let h = Hamiltonian::for_parameters(params);
    let pair = EigenSolver::new().solve(&h, level).unwrap();
    let angles = AngleSynthesizer::new().synthesize_pair(&pair).unwrap();
    let oracle = StatevectorOracle::with_seed(0);
    let estimator = EnergyEstimator::from_params(&params);

    let mut total = 0.0;
    for basis in MeasurementBasis::active_for(params.num_qubits()) {
        for (bits, p) in oracle.distribution(&angles, basis).unwrap() {
            total += p * estimator.clique_contribution(basis, &bits);
        }
    }
    (total, pair.eigenvalue)
}

#[test]
fn test_exact_expectation_matches_every_eigenvalue() {
    let models = [
        (1, 1.0, 0.0, 0, 0),
        (2, 2.0, 1.0, 1, 0),
        (3, 0.8, -0.3, 0, 1),
        (4, 3.2, -1.5, 1, 0),
        (5, 3.2, -1.5, 0, 0),
        (6, 1.1, 0.9, 1, 1),
    ];
    for (m, v, w, nua, nub) in models {
        let params = ModelParameters::new(m, v, w, nua, nub).unwrap();
        for level in 0..=params.max_level() {
            let (expectation, eigenvalue) = exact_expectation(params, level);
            assert!(
                (expectation - eigenvalue).abs() < 1e-8,
                "{params} level {level}: {expectation} vs {eigenvalue}"
            );
        }
    }
}
