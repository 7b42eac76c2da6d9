//! Oracle that serves bitstrings from a recorded sample.

use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::debug;

use lipkin_prep::{AngleVector, MeasurementBasis};

use crate::bitstring::{Bitstring, BitstringSample};
use crate::corpus::{self, CorpusFormat};
use crate::error::{HalError, HalResult};
use crate::oracle::CircuitOracle;

/// Replays a recorded [`BitstringSample`] in order.
///
/// Each basis keeps its own cursor, so consecutive calls walk through the
/// recorded batch. The angles are only checked for register width; the
/// recording is trusted to come from the matching state.
#[derive(Debug, Clone)]
pub struct ReplayOracle {
    sample: BitstringSample,
    cursors: FxHashMap<MeasurementBasis, usize>,
}

impl ReplayOracle {
    /// Replay an in-memory sample.
    pub fn new(sample: BitstringSample) -> Self {
        Self {
            sample,
            cursors: FxHashMap::default(),
        }
    }

    /// Replay a corpus file.
    pub fn from_file(path: impl AsRef<Path>, format: CorpusFormat) -> HalResult<Self> {
        Ok(Self::new(corpus::load(path, format)?))
    }

    /// The recorded sample.
    pub fn sample_data(&self) -> &BitstringSample {
        &self.sample
    }

    /// Shots still available for `basis`.
    pub fn remaining(&self, basis: MeasurementBasis) -> usize {
        let total = self.sample.get(basis).map_or(0, <[Bitstring]>::len);
        total - self.cursor(basis)
    }

    /// Rewind every cursor to the start.
    pub fn rewind(&mut self) {
        self.cursors.clear();
    }

    fn cursor(&self, basis: MeasurementBasis) -> usize {
        self.cursors.get(&basis).copied().unwrap_or(0)
    }
}

impl CircuitOracle for ReplayOracle {
    fn name(&self) -> &str {
        "replay"
    }

    fn sample(
        &mut self,
        angles: &AngleVector,
        shots: u32,
        basis: MeasurementBasis,
    ) -> HalResult<Vec<Bitstring>> {
        let batch = self
            .sample
            .get(basis)
            .ok_or(HalError::MissingBasis(basis))?;

        if let Some(got) = batch.first().map(Bitstring::len) {
            if got != angles.num_qubits() {
                return Err(HalError::QubitMismatch {
                    expected: angles.num_qubits(),
                    got,
                });
            }
        }

        let start = self.cursor(basis);
        let requested = shots as usize;
        let available = batch.len() - start;
        if requested > available {
            return Err(HalError::ReplayExhausted {
                basis,
                requested,
                available,
            });
        }

        let out = batch[start..start + requested].to_vec();
        self.cursors.insert(basis, start + requested);
        debug!(%basis, start, shots = requested, "replayed bitstrings");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorded() -> BitstringSample {
        CorpusFormat::Lines
            .parse("00,01,10,11,\n11,11,00,00,\n01,10,01,10,\n")
            .unwrap()
    }

    fn two_qubit_angles() -> AngleVector {
        AngleVector::from_raw(vec![1.0, 2.0])
    }

    #[test]
    fn test_replay_in_order() {
        let mut oracle = ReplayOracle::new(recorded());
        let angles = two_qubit_angles();
        let first = oracle.sample(&angles, 2, MeasurementBasis::Z).unwrap();
        let second = oracle.sample(&angles, 2, MeasurementBasis::Z).unwrap();
        assert_eq!(first[0].to_string(), "00");
        assert_eq!(second[1].to_string(), "11");
        assert_eq!(oracle.remaining(MeasurementBasis::Z), 0);
        assert_eq!(oracle.remaining(MeasurementBasis::X), 4);
    }

    #[test]
    fn test_exhaustion() {
        let mut oracle = ReplayOracle::new(recorded());
        let err = oracle
            .sample(&two_qubit_angles(), 5, MeasurementBasis::X)
            .unwrap_err();
        assert!(matches!(
            err,
            HalError::ReplayExhausted {
                requested: 5,
                available: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_basis_and_width() {
        let mut oracle = ReplayOracle::new(recorded());
        assert!(matches!(
            oracle.sample(&two_qubit_angles(), 1, MeasurementBasis::ZzOdd),
            Err(HalError::MissingBasis(MeasurementBasis::ZzOdd))
        ));
        let three = AngleVector::from_raw(vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            oracle.sample(&three, 1, MeasurementBasis::Z),
            Err(HalError::QubitMismatch { expected: 3, got: 2 })
        ));
    }

    #[test]
    fn test_rewind() {
        let mut oracle = ReplayOracle::new(recorded());
        let angles = two_qubit_angles();
        let a = oracle.sample(&angles, 4, MeasurementBasis::ZzEven).unwrap();
        oracle.rewind();
        let b = oracle.sample(&angles, 4, MeasurementBasis::ZzEven).unwrap();
        assert_eq!(a, b);
    }
}
