//! Single-shot energy estimation for the LMG Hamiltonian
//!
//! The Hamiltonian splits into four groups of mutually commuting Pauli
//! strings, one per [`MeasurementBasis`]. Each group has a closed-form
//! weight per qubit (see [`coefficients`]); evaluating every group on the
//! `j`-th bitstring of its batch and summing gives one single-shot
//! estimate of `⟨H⟩`. Averaging many shots estimates the energy.
//!
//! # Example
//!
//! ```rust
//! use lipkin_estimate::EnergyEstimator;
//! use lipkin_hal::{Bitstring, BitstringSample, MeasurementBasis};
//!
//! let bits = |s: &str| -> Vec<Bitstring> { vec![s.parse().unwrap()] };
//! let sample = BitstringSample::new()
//!     .with_batch(MeasurementBasis::Z, bits("0"))
//!     .with_batch(MeasurementBasis::X, bits("0"));
//!
//! // M = 1, V = 1, W = 0: H = Z + X/2 on a single qubit.
//! let distribution = EnergyEstimator::new(1.0, 0.0, 0, 0).estimate(&sample).unwrap();
//! assert!((distribution.mean() - 1.5).abs() < 1e-12);
//! ```

pub mod clique;
pub mod coefficients;
pub mod distribution;
pub mod error;
pub mod estimator;

pub use clique::CliqueWeights;
pub use coefficients::Coefficients;
pub use distribution::EnergyDistribution;
pub use error::{EstimateError, EstimateResult};
pub use estimator::EnergyEstimator;

pub use lipkin_prep::MeasurementBasis;
