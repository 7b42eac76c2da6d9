//! Preparation and measurement circuits.
//!
//! A measurement circuit is the staircase preparation, a barrier, the basis
//! change of one [`MeasurementBasis`], and a measurement of every qubit `q`
//! into classical bit `q`.

use lipkin_ir::{Circuit, QubitId};
use tracing::debug;

use crate::angles::AngleVector;
use crate::basis::MeasurementBasis;
use crate::error::PrepResult;

/// Build the unary staircase: `RY(a_0)` on q0, then `CRY(a_k)` q(k−1) → qk.
pub fn state_preparation(angles: &AngleVector) -> PrepResult<Circuit> {
    let n = angles.num_qubits() as u32;
    let mut circuit = Circuit::with_size("lmg_prep", n, 0);

    let mut iter = angles.as_slice().iter().enumerate();
    if let Some((_, &first)) = iter.next() {
        circuit.ry(first, QubitId(0))?;
    }
    for (k, &angle) in iter {
        let k = k as u32;
        circuit.cry(angle, QubitId(k - 1), QubitId(k))?;
    }
    Ok(circuit)
}

/// Append the basis change that maps `basis` onto the computational basis.
pub fn append_basis_change(circuit: &mut Circuit, basis: MeasurementBasis) -> PrepResult<()> {
    let n = circuit.num_qubits();
    match basis {
        MeasurementBasis::Z => {}
        MeasurementBasis::X => {
            for q in 0..n as u32 {
                circuit.h(QubitId(q))?;
            }
        }
        MeasurementBasis::ZzEven | MeasurementBasis::ZzOdd => {
            for (a, b) in basis.pairs(n) {
                circuit.cz(QubitId(a), QubitId(b))?;
                circuit.h(QubitId(a))?;
                circuit.h(QubitId(b))?;
            }
        }
    }
    Ok(())
}

/// Build the full circuit sampled for one clique.
pub fn measurement_circuit(angles: &AngleVector, basis: MeasurementBasis) -> PrepResult<Circuit> {
    let prep = state_preparation(angles)?;
    let n = prep.num_qubits() as u32;
    let mut circuit = Circuit::with_size(format!("lmg_{}", basis.label()), n, n);
    circuit.compose(&prep)?;
    circuit.barrier_all()?;
    append_basis_change(&mut circuit, basis)?;
    circuit.measure_all()?;

    debug!(
        basis = %basis,
        num_qubits = n,
        gates = circuit.gate_count(),
        "built measurement circuit"
    );
    Ok(circuit)
}
