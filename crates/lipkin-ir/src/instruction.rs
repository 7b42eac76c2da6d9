//! Circuit instructions: a gate, measurement or barrier plus its operands.

use serde::{Deserialize, Serialize};

use crate::gate::StandardGate;
use crate::qubit::{ClbitId, QubitId};

/// What an instruction does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InstructionKind {
    /// Unitary gate.
    Gate(StandardGate),
    /// Z-basis readout of one qubit into one classical bit.
    Measure,
    /// Marks a boundary; no effect on the state.
    Barrier,
}

/// One step of a circuit.
///
/// Operand order matters for controlled gates: `qubits[0]` is the control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub kind: InstructionKind,
    pub qubits: Vec<QubitId>,
    /// Only non-empty for measurements.
    pub clbits: Vec<ClbitId>,
}

impl Instruction {
    /// Gate on an arbitrary operand list. Arity is checked by `Circuit::apply`.
    pub fn gate(gate: StandardGate, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: InstructionKind::Gate(gate),
            qubits: qubits.into_iter().collect(),
            clbits: Vec::new(),
        }
    }

    pub fn single_qubit_gate(gate: StandardGate, qubit: QubitId) -> Self {
        Self::gate(gate, [qubit])
    }

    pub fn two_qubit_gate(gate: StandardGate, control: QubitId, target: QubitId) -> Self {
        Self::gate(gate, [control, target])
    }

    pub fn measure(qubit: QubitId, clbit: ClbitId) -> Self {
        Self {
            kind: InstructionKind::Measure,
            qubits: vec![qubit],
            clbits: vec![clbit],
        }
    }

    pub fn barrier(qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: InstructionKind::Barrier,
            qubits: qubits.into_iter().collect(),
            clbits: Vec::new(),
        }
    }

    pub fn is_gate(&self) -> bool {
        matches!(self.kind, InstructionKind::Gate(_))
    }

    pub fn as_gate(&self) -> Option<&StandardGate> {
        match &self.kind {
            InstructionKind::Gate(g) => Some(g),
            InstructionKind::Measure | InstructionKind::Barrier => None,
        }
    }

    /// Lower-case mnemonic, e.g. `"cry"` or `"measure"`.
    pub fn name(&self) -> &str {
        match &self.kind {
            InstructionKind::Gate(g) => g.name(),
            InstructionKind::Measure => "measure",
            InstructionKind::Barrier => "barrier",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controlled_gate_operand_order() {
        let inst = Instruction::two_qubit_gate(StandardGate::CRy(0.5), QubitId(3), QubitId(4));
        assert_eq!(inst.qubits, vec![QubitId(3), QubitId(4)]);
        assert_eq!(inst.as_gate(), Some(&StandardGate::CRy(0.5)));
        assert!(inst.clbits.is_empty());
    }

    #[test]
    fn test_measure_is_not_a_gate() {
        let inst = Instruction::measure(QubitId(1), ClbitId(1));
        assert!(!inst.is_gate());
        assert!(inst.as_gate().is_none());
        assert_eq!(inst.name(), "measure");
    }
}
