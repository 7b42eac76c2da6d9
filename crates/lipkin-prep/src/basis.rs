//! Measurement settings for the four commuting groups of the LMG
//! Hamiltonian.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four measurement settings ("cliques").
///
/// Bit `j` of every returned bitstring is the outcome of qubit `j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeasurementBasis {
    /// Computational basis: identity, Z and ZZ terms.
    Z,
    /// Hadamard on every qubit: X terms.
    X,
    /// `CZ` then `H⊗H` on pairs `(0,1), (2,3), …`: XZ/ZX terms.
    ZzEven,
    /// `CZ` then `H⊗H` on pairs `(1,2), (3,4), …`: XZ/ZX terms.
    ZzOdd,
}

impl MeasurementBasis {
    /// All four settings, in clique order.
    pub const ALL: [MeasurementBasis; 4] = [
        MeasurementBasis::Z,
        MeasurementBasis::X,
        MeasurementBasis::ZzEven,
        MeasurementBasis::ZzOdd,
    ];

    /// 1-based clique number.
    pub fn clique(self) -> usize {
        match self {
            MeasurementBasis::Z => 1,
            MeasurementBasis::X => 2,
            MeasurementBasis::ZzEven => 3,
            MeasurementBasis::ZzOdd => 4,
        }
    }

    /// Smallest register for which this setting carries any term.
    pub fn min_qubits(self) -> usize {
        match self {
            MeasurementBasis::Z | MeasurementBasis::X => 1,
            MeasurementBasis::ZzEven => 2,
            MeasurementBasis::ZzOdd => 3,
        }
    }

    /// True if the setting must be sampled for `num_qubits` qubits.
    pub fn is_active(self, num_qubits: usize) -> bool {
        num_qubits >= self.min_qubits()
    }

    /// Settings needed for a register of `num_qubits` qubits.
    pub fn active_for(num_qubits: usize) -> Vec<MeasurementBasis> {
        Self::ALL
            .into_iter()
            .filter(|b| b.is_active(num_qubits))
            .collect()
    }

    /// Adjacent qubit pairs entangled by this setting's basis change.
    pub fn pairs(self, num_qubits: usize) -> Vec<(u32, u32)> {
        let start = match self {
            MeasurementBasis::ZzEven => 0,
            MeasurementBasis::ZzOdd => 1,
            MeasurementBasis::Z | MeasurementBasis::X => return vec![],
        };
        (start..num_qubits.saturating_sub(1))
            .step_by(2)
            .map(|j| (j as u32, j as u32 + 1))
            .collect()
    }

    /// Short label used in logs and files.
    pub fn label(self) -> &'static str {
        match self {
            MeasurementBasis::Z => "z",
            MeasurementBasis::X => "x",
            MeasurementBasis::ZzEven => "zz-even",
            MeasurementBasis::ZzOdd => "zz-odd",
        }
    }
}

impl fmt::Display for MeasurementBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MeasurementBasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "z" | "1" => Ok(MeasurementBasis::Z),
            "x" | "2" => Ok(MeasurementBasis::X),
            "zz-even" | "zz_even" | "3" => Ok(MeasurementBasis::ZzEven),
            "zz-odd" | "zz_odd" | "4" => Ok(MeasurementBasis::ZzOdd),
            other => Err(format!(
                "unknown measurement basis '{other}' (expected z, x, zz-even, zz-odd)"
            )),
        }
    }
}
