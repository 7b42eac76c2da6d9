//! Corpus round trips through real files.

use lipkin_hal::corpus;
use lipkin_hal::{Bitstring, BitstringSample, CircuitOracle, CorpusFormat, ReplayOracle};
use lipkin_prep::{AngleVector, MeasurementBasis};

fn batch(items: &[&str]) -> Vec<Bitstring> {
    items.iter().map(|s| s.parse().unwrap()).collect()
}

#[test]
fn test_save_then_load_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bitstrings.txt");

    let sample = BitstringSample::new()
        .with_batch(MeasurementBasis::Z, batch(&["010", "100"]))
        .with_batch(MeasurementBasis::X, batch(&["111", "000"]))
        .with_batch(MeasurementBasis::ZzEven, batch(&["001", "011"]))
        .with_batch(MeasurementBasis::ZzOdd, batch(&["110", "101"]));

    corpus::save(&path, &sample).unwrap();
    let loaded = corpus::load(&path, CorpusFormat::Lines).unwrap();
    assert_eq!(loaded, sample);
}

#[test]
fn test_replay_from_flat_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corpus.txt");
    std::fs::write(
        &path,
        "'01',\n\n'10',\n\n'11',\n\n'00',\n\n'01',\n\n'01',\n\n'10',\n\n'10',\n",
    )
    .unwrap();

    let mut oracle = ReplayOracle::from_file(&path, CorpusFormat::Flat).unwrap();
    let angles = AngleVector::from_raw(vec![0.5, 0.5]);
    let x = oracle.sample(&angles, 2, MeasurementBasis::X).unwrap();
    assert_eq!(x, batch(&["11", "00"]));
    assert_eq!(oracle.name(), "replay");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = corpus::load(dir.path().join("nope.txt"), CorpusFormat::Lines).unwrap_err();
    assert!(matches!(err, lipkin_hal::HalError::Io(_)));
}
