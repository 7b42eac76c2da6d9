//! Quantum gate types.

use serde::{Deserialize, Serialize};

/// Standard gates with known semantics.
///
/// Only the gates the LMG preparation and measurement circuits are built
/// from. Rotation angles are concrete radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Hadamard gate.
    H,
    /// Rotation around the Y axis: `[[cos θ/2, -sin θ/2], [sin θ/2, cos θ/2]]`.
    Ry(f64),
    /// Controlled-Z gate.
    CZ,
    /// Controlled-Ry gate. First operand is the control.
    CRy(f64),
}

impl StandardGate {
    /// Get the canonical lower-case name of this gate.
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::H => "h",
            StandardGate::Ry(_) => "ry",
            StandardGate::CZ => "cz",
            StandardGate::CRy(_) => "cry",
        }
    }

    /// Get the number of qubits this gate acts on.
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::H | StandardGate::Ry(_) => 1,
            StandardGate::CZ | StandardGate::CRy(_) => 2,
        }
    }

    /// The rotation angle, for parameterised gates.
    pub fn angle(&self) -> Option<f64> {
        match self {
            StandardGate::Ry(theta) | StandardGate::CRy(theta) => Some(*theta),
            _ => None,
        }
    }
}
