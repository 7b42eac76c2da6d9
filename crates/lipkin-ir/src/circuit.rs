//! High-level circuit builder API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{ClbitId, QubitId};

/// A quantum circuit.
///
/// Instructions are kept in program order. Every instruction is validated
/// against the circuit width when it is appended, so a built circuit can
/// be executed without further checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits.
    num_qubits: u32,
    /// Number of classical bits.
    num_clbits: u32,
    /// Instructions in program order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a circuit with a given number of qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            num_clbits,
            instructions: vec![],
        }
    }

    /// Append an instruction after validating its operands.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        let gate_name = instruction.as_gate().map(|g| g.name().to_string());

        if let InstructionKind::Gate(gate) = &instruction.kind {
            let expected = gate.num_qubits();
            let got = instruction.qubits.len() as u32;
            if expected != got {
                return Err(IrError::QubitCountMismatch {
                    gate_name: gate.name().to_string(),
                    expected,
                    got,
                });
            }
            if let Some(angle) = gate.angle() {
                if !angle.is_finite() {
                    return Err(IrError::NonFiniteAngle {
                        gate_name: gate.name().to_string(),
                        angle,
                    });
                }
            }
        }

        for (i, &qubit) in instruction.qubits.iter().enumerate() {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitNotFound {
                    qubit,
                    gate_name: gate_name.clone(),
                });
            }
            if instruction.qubits[..i].contains(&qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: gate_name.clone(),
                });
            }
        }

        for &clbit in &instruction.clbits {
            if clbit.0 >= self.num_clbits {
                return Err(IrError::ClbitNotFound { clbit });
            }
        }

        self.instructions.push(instruction);
        Ok(self)
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::H, qubit))
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::Ry(theta), qubit))
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(StandardGate::CZ, control, target))
    }

    /// Apply controlled-Ry gate.
    pub fn cry(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(
            StandardGate::CRy(theta),
            control,
            target,
        ))
    }

    // =========================================================================
    // Other operations
    // =========================================================================

    /// Measure a qubit to a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.apply(Instruction::measure(qubit, clbit))
    }

    /// Measure every qubit `q` into classical bit `q`, growing the classical
    /// register if needed.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        self.num_clbits = self.num_clbits.max(self.num_qubits);
        for q in 0..self.num_qubits {
            self.measure(QubitId(q), ClbitId(q))?;
        }
        Ok(self)
    }

    /// Apply a barrier to all qubits.
    pub fn barrier_all(&mut self) -> IrResult<&mut Self> {
        let qubits: Vec<_> = (0..self.num_qubits).map(QubitId).collect();
        self.apply(Instruction::barrier(qubits))
    }

    /// Append every instruction of `other`, which must not be wider.
    pub fn compose(&mut self, other: &Circuit) -> IrResult<&mut Self> {
        for inst in &other.instructions {
            self.apply(inst.clone())?;
        }
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.num_clbits as usize
    }

    /// All instructions in program order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of gate instructions (measurements and barriers excluded).
    pub fn gate_count(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_gate()).count()
    }

    /// Count instructions by name, measurements and barriers included.
    pub fn count_ops(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for inst in &self.instructions {
            *counts.entry(inst.name().to_string()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let mut circuit = Circuit::with_size("test", 3, 0);
        circuit
            .ry(0.5, QubitId(0))
            .unwrap()
            .cry(0.25, QubitId(0), QubitId(1))
            .unwrap()
            .cry(0.125, QubitId(1), QubitId(2))
            .unwrap();
        assert_eq!(circuit.gate_count(), 3);
        assert_eq!(circuit.count_ops().get("cry"), Some(&2));
    }

    #[test]
    fn test_qubit_out_of_range() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        let err = circuit.h(QubitId(2)).unwrap_err();
        assert!(matches!(err, IrError::QubitNotFound { qubit: QubitId(2), .. }));
    }

    #[test]
    fn test_duplicate_qubit_rejected() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        let err = circuit.cz(QubitId(1), QubitId(1)).unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { .. }));
    }

    #[test]
    fn test_arity_mismatch_rejected() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        let err = circuit
            .apply(Instruction::gate(StandardGate::CZ, [QubitId(0)]))
            .unwrap_err();
        assert!(matches!(
            err,
            IrError::QubitCountMismatch {
                expected: 2,
                got: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_non_finite_angle_rejected() {
        let mut circuit = Circuit::with_size("test", 1, 0);
        assert!(matches!(
            circuit.ry(f64::NAN, QubitId(0)),
            Err(IrError::NonFiniteAngle { .. })
        ));
    }

    #[test]
    fn test_measure_all_grows_clbits() {
        let mut circuit = Circuit::with_size("test", 3, 0);
        circuit.measure_all().unwrap();
        assert_eq!(circuit.num_clbits(), 3);
        assert_eq!(circuit.count_ops().get("measure"), Some(&3));
    }

    #[test]
    fn test_barrier_is_not_a_gate() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit.h(QubitId(0)).unwrap();
        circuit.barrier_all().unwrap();
        assert_eq!(circuit.gate_count(), 1);
        assert_eq!(circuit.instructions().len(), 2);
        assert_eq!(circuit.instructions()[1].qubits, vec![QubitId(0), QubitId(1)]);
    }

    #[test]
    fn test_compose() {
        let mut a = Circuit::with_size("a", 2, 0);
        a.h(QubitId(0)).unwrap();
        let mut b = Circuit::with_size("b", 2, 0);
        b.cz(QubitId(0), QubitId(1)).unwrap();
        a.compose(&b).unwrap();
        assert_eq!(a.gate_count(), 2);
        assert_eq!(a.instructions()[1].name(), "cz");
    }
}
