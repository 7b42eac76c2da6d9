//! Local statevector oracle
//!
//! Simulates the staircase preparation and basis change exactly, then
//! draws shots from the resulting distribution with a seedable RNG.
//! Memory grows as `2^n`, so the oracle is bounded by a qubit limit.
//!
//! | Qubits | Memory |
//! |--------|--------|
//! | 10 | ~16 KB |
//! | 15 | ~512 KB |
//! | 20 | ~16 MB |
//! | 25 | ~512 MB |
//!
//! # Example
//!
//! ```rust
//! use lipkin_adapter_sim::StatevectorOracle;
//! use lipkin_hal::CircuitOracle;
//! use lipkin_prep::{AngleVector, MeasurementBasis};
//!
//! let mut oracle = StatevectorOracle::with_seed(7);
//! // RY(2π) on one qubit leaves it in |0⟩ (up to sign).
//! let angles = AngleVector::from_raw(vec![2.0 * std::f64::consts::PI]);
//! let shots = oracle.sample(&angles, 100, MeasurementBasis::Z).unwrap();
//! assert!(shots.iter().all(|b| b.to_string() == "0"));
//! ```

mod simulator;
mod statevector;

pub use simulator::StatevectorOracle;
pub use statevector::Statevector;
