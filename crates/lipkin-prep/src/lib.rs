//! `lipkin-prep`: from an eigenvector to runnable measurement circuits.
//!
//! - [`AngleSynthesizer`] turns a real eigenvector of length `L` into the
//!   `L − 1` rotation angles of a unary staircase: `RY` on qubit 0, then
//!   `CRY` from each qubit onto the next. Register state `|1ⁿ0…0⟩`
//!   carries the amplitude of Fock row `L − 1 − n`.
//! - [`MeasurementBasis`] names the four commuting groups ("cliques") the
//!   LMG Hamiltonian is measured in.
//! - [`circuits`] builds the preparation circuit followed by the basis
//!   change for one clique.
//!
//! # Quick start
//!
//! ```rust
//! use lipkin_prep::{AngleSynthesizer, MeasurementBasis, circuits};
//!
//! let angles = AngleSynthesizer::new().synthesize(&[0.6, -0.8]).unwrap();
//! assert_eq!(angles.num_qubits(), 1);
//!
//! let circuit = circuits::measurement_circuit(&angles, MeasurementBasis::X).unwrap();
//! assert_eq!(circuit.num_qubits(), 1);
//! ```

pub mod angles;
pub mod basis;
pub mod circuits;
pub mod error;

pub use angles::{AngleSynthesizer, AngleVector, DegeneratePolicy, canonical_sign};
pub use basis::MeasurementBasis;
pub use circuits::{append_basis_change, measurement_circuit, state_preparation};
pub use error::{PrepError, PrepResult};
