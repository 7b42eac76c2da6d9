//! Lipkin sampling abstraction layer
//!
//! The estimator only needs bitstrings. Where they come from is hidden
//! behind [`CircuitOracle`]: given staircase angles, a shot count and a
//! [`MeasurementBasis`], an oracle returns one [`Bitstring`] per shot.
//!
//! | Oracle | Crate | Source of bitstrings |
//! |--------|-------|----------------------|
//! | `StatevectorOracle` | `lipkin-adapter-sim` | Exact statevector, seeded sampling |
//! | [`ReplayOracle`] | `lipkin-hal` | A previously recorded corpus |
//!
//! Recorded corpora use the legacy text formats in [`corpus`].
//!
//! # Implementing an oracle
//!
//! ```rust
//! use lipkin_hal::{Bitstring, CircuitOracle, HalResult};
//! use lipkin_prep::{AngleVector, MeasurementBasis};
//!
//! /// Always reports the all-zero outcome.
//! struct Zeros;
//!
//! impl CircuitOracle for Zeros {
//!     fn name(&self) -> &str {
//!         "zeros"
//!     }
//!
//!     fn sample(
//!         &mut self,
//!         angles: &AngleVector,
//!         shots: u32,
//!         _basis: MeasurementBasis,
//!     ) -> HalResult<Vec<Bitstring>> {
//!         let zero = Bitstring::zeros(angles.num_qubits());
//!         Ok(vec![zero; shots as usize])
//!     }
//! }
//!
//! let angles = AngleVector::from_raw(vec![1.0, 2.0]);
//! let shots = Zeros.sample(&angles, 3, MeasurementBasis::Z).unwrap();
//! assert_eq!(shots.len(), 3);
//! assert_eq!(shots[0].to_string(), "00");
//! ```

pub mod bitstring;
pub mod corpus;
pub mod error;
pub mod oracle;
pub mod replay;

pub use bitstring::{Bitstring, BitstringSample};
pub use corpus::CorpusFormat;
pub use error::{HalError, HalResult};
pub use oracle::CircuitOracle;
pub use replay::ReplayOracle;

pub use lipkin_prep::MeasurementBasis;
