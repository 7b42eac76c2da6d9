//! `lipkin-model`: the classical side of the LMG energy pipeline.
//!
//! Builds the truncated Fock-basis Hamiltonian of the Lipkin–Meshkov–Glick
//! model and diagonalises it to obtain the reference eigenpair that the
//! sampled estimate is later checked against.
//!
//! # Quick start
//!
//! ```rust
//! use lipkin_model::{EigenSolver, HamiltonianBuilder, ModelParameters};
//!
//! let params = ModelParameters::new(1, 1.0, 0.0, 0, 0).unwrap();
//! let h = HamiltonianBuilder::new(params).build();
//! assert_eq!(h.dimension(), 2);
//!
//! let ground = EigenSolver::new().solve(&h, 0).unwrap();
//! assert!((ground.eigenvalue + 1.25_f64.sqrt()).abs() < 1e-9);
//! ```

pub mod eigen;
pub mod error;
pub mod hamiltonian;
pub mod params;

pub use eigen::{EigenPair, EigenSolver, Spectrum};
pub use error::{ModelError, ModelResult};
pub use hamiltonian::{Hamiltonian, HamiltonianBuilder};
pub use params::ModelParameters;
