//! The circuit oracle boundary.

use lipkin_prep::{AngleVector, MeasurementBasis};

use crate::bitstring::Bitstring;
use crate::error::HalResult;

/// Something that prepares the staircase state and measures it.
///
/// # Contract
///
/// - `sample` MUST return exactly `shots` bitstrings, each of length
///   `angles.num_qubits()`, with character `j` holding qubit `j`.
/// - The call is blocking and returns the complete batch.
/// - Implementations may keep state between calls (an RNG, a replay
///   cursor), hence `&mut self`.
pub trait CircuitOracle {
    /// Oracle name for logs and reports.
    fn name(&self) -> &str;

    /// Sample `shots` outcomes of the staircase state measured in `basis`.
    fn sample(
        &mut self,
        angles: &AngleVector,
        shots: u32,
        basis: MeasurementBasis,
    ) -> HalResult<Vec<Bitstring>>;

    /// Largest register the oracle accepts, if bounded.
    fn max_qubits(&self) -> Option<usize> {
        None
    }
}

impl<O: CircuitOracle + ?Sized> CircuitOracle for Box<O> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn sample(
        &mut self,
        angles: &AngleVector,
        shots: u32,
        basis: MeasurementBasis,
    ) -> HalResult<Vec<Bitstring>> {
        (**self).sample(angles, shots, basis)
    }

    fn max_qubits(&self) -> Option<usize> {
        (**self).max_qubits()
    }
}
