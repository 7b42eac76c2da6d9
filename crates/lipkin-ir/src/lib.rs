//! Lipkin circuit intermediate representation.
//!
//! A deliberately small gate-level IR: a [`Circuit`] is an ordered list of
//! [`Instruction`]s over numbered qubits. It carries exactly what the LMG
//! pipeline needs to describe state preparation (`RY`, `CRY`) and the
//! measurement-basis changes (`H`, `CZ`) so that any oracle, simulated or
//! remote, can consume the same description.
//!
//! # Example
//!
//! ```rust
//! use lipkin_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("prep", 2, 2);
//! circuit.ry(1.2, QubitId(0)).unwrap();
//! circuit.cry(0.4, QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.gate_count(), 2);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, QubitId};
