//! Error types for the model crate.

use thiserror::Error;

/// Errors produced while validating parameters or diagonalising.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// A model parameter is outside its domain.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name (`M`, `V`, `W`, `nua`, `nub`).
        name: &'static str,
        /// Human-readable reason.
        reason: String,
    },

    /// Requested energy level does not exist.
    #[error("Energy level {level} out of range: valid levels are 0..={max}")]
    LevelOutOfRange {
        /// The requested level.
        level: usize,
        /// Highest valid level (equal to M).
        max: usize,
    },

    /// The Hamiltonian contains NaN or infinite entries.
    #[error("Hamiltonian has non-finite entries")]
    NonFiniteHamiltonian,

    /// The symmetric eigensolver failed to converge.
    #[error("Eigen-decomposition of the {0}x{0} Hamiltonian did not converge")]
    EigenDecomposition(usize),
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
