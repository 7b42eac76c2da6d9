//! Measured bitstrings and per-basis batches.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use lipkin_prep::MeasurementBasis;

use crate::error::HalError;

/// One measurement outcome; character `j` is qubit `j`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Bitstring {
    bits: Vec<bool>,
}

impl Bitstring {
    /// Build from explicit bits, qubit 0 first.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Build from the low `num_qubits` bits of a basis-state index, where
    /// bit `q` of the index is qubit `q`.
    pub fn from_index(index: usize, num_qubits: usize) -> Self {
        Self {
            bits: (0..num_qubits).map(|q| (index >> q) & 1 == 1).collect(),
        }
    }

    /// The all-zero outcome.
    pub fn zeros(num_qubits: usize) -> Self {
        Self {
            bits: vec![false; num_qubits],
        }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True if there are no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Outcome of qubit `j`.
    pub fn bit(&self, j: usize) -> bool {
        self.bits[j]
    }

    /// `(−1)^bit` for qubit `j`: the Z eigenvalue of the outcome.
    pub fn sign(&self, j: usize) -> f64 {
        if self.bits[j] { -1.0 } else { 1.0 }
    }

    /// The bits, qubit 0 first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }
}

impl fmt::Display for Bitstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Bitstring {
    type Err = HalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(HalError::InvalidBitstring(s.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bits })
    }
}

impl TryFrom<String> for Bitstring {
    type Error = HalError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Bitstring> for String {
    fn from(b: Bitstring) -> Self {
        b.to_string()
    }
}

/// Bitstrings for up to four measurement settings.
///
/// No consistency is enforced on insertion; the estimator checks shot
/// counts and widths before it uses a sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BitstringSample {
    batches: BTreeMap<MeasurementBasis, Vec<Bitstring>>,
}

impl BitstringSample {
    /// Create an empty sample.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the batch for `basis`, replacing any previous one.
    pub fn insert(&mut self, basis: MeasurementBasis, shots: Vec<Bitstring>) {
        self.batches.insert(basis, shots);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with_batch(mut self, basis: MeasurementBasis, shots: Vec<Bitstring>) -> Self {
        self.insert(basis, shots);
        self
    }

    /// The batch for `basis`, if present.
    pub fn get(&self, basis: MeasurementBasis) -> Option<&[Bitstring]> {
        self.batches.get(&basis).map(Vec::as_slice)
    }

    /// True if a batch is present for `basis`.
    pub fn contains(&self, basis: MeasurementBasis) -> bool {
        self.batches.contains_key(&basis)
    }

    /// Bases with a batch, in clique order.
    pub fn bases(&self) -> impl Iterator<Item = MeasurementBasis> + '_ {
        self.batches.keys().copied()
    }

    /// `(basis, batch)` pairs in clique order.
    pub fn iter(&self) -> impl Iterator<Item = (MeasurementBasis, &[Bitstring])> {
        self.batches.iter().map(|(b, v)| (*b, v.as_slice()))
    }

    /// Number of batches.
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    /// True if no batch is present.
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Shot count of the first batch.
    pub fn shots(&self) -> Option<usize> {
        self.batches.values().next().map(Vec::len)
    }

    /// Width of the first bitstring of the first batch.
    pub fn num_qubits(&self) -> Option<usize> {
        self.batches
            .values()
            .find_map(|v| v.first())
            .map(Bitstring::len)
    }

    /// Outcome histogram for one basis.
    pub fn counts(&self, basis: MeasurementBasis) -> FxHashMap<String, u64> {
        let mut counts = FxHashMap::default();
        if let Some(batch) = self.batches.get(&basis) {
            for b in batch {
                *counts.entry(b.to_string()).or_insert(0) += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let b: Bitstring = "0110".parse().unwrap();
        assert_eq!(b.len(), 4);
        assert!(!b.bit(0));
        assert!(b.bit(1));
        assert_eq!(b.sign(0), 1.0);
        assert_eq!(b.sign(2), -1.0);
        assert_eq!(b.to_string(), "0110");
    }

    #[test]
    fn test_invalid_character() {
        assert!(matches!(
            "01a0".parse::<Bitstring>(),
            Err(HalError::InvalidBitstring(_))
        ));
    }

    #[test]
    fn test_from_index_is_little_endian() {
        // index 6 = 0b110: qubits 1 and 2 set.
        assert_eq!(Bitstring::from_index(6, 4).to_string(), "0110");
        assert_eq!(Bitstring::from_index(1, 3).to_string(), "100");
    }

    #[test]
    fn test_serde_as_string() {
        let b: Bitstring = "101".parse().unwrap();
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, "\"101\"");
        let back: Bitstring = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }

    #[test]
    fn test_sample_accessors_and_counts() {
        let z: Vec<Bitstring> = ["00", "01", "00"].iter().map(|s| s.parse().unwrap()).collect();
        let x: Vec<Bitstring> = ["11", "10", "11"].iter().map(|s| s.parse().unwrap()).collect();
        let sample = BitstringSample::new()
            .with_batch(MeasurementBasis::X, x)
            .with_batch(MeasurementBasis::Z, z);

        assert_eq!(sample.len(), 2);
        assert_eq!(sample.shots(), Some(3));
        assert_eq!(sample.num_qubits(), Some(2));
        assert_eq!(
            sample.bases().collect::<Vec<_>>(),
            vec![MeasurementBasis::Z, MeasurementBasis::X]
        );
        assert_eq!(sample.counts(MeasurementBasis::Z).get("00"), Some(&2));
        assert!(sample.counts(MeasurementBasis::ZzOdd).is_empty());
    }
}
