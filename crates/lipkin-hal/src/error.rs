//! Error types for the HAL crate.

use lipkin_prep::MeasurementBasis;
use thiserror::Error;

/// Errors that can occur while sampling or loading bitstrings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// Circuit exceeds oracle capabilities.
    #[error("Circuit exceeds oracle capabilities: {0}")]
    CircuitTooLarge(String),

    /// Invalid number of shots.
    #[error("Invalid shots: {0}")]
    InvalidShots(String),

    /// A bitstring contains characters other than `0` and `1`.
    #[error("Invalid bitstring '{0}'")]
    InvalidBitstring(String),

    /// A corpus file is malformed.
    #[error("Malformed corpus: {0}")]
    Corpus(String),

    /// The recorded corpus has no batch for a basis.
    #[error("Corpus has no bitstrings for basis {0}")]
    MissingBasis(MeasurementBasis),

    /// More shots were requested than remain in a recorded batch.
    #[error("Replay exhausted for basis {basis}: requested {requested}, {available} left")]
    ReplayExhausted {
        /// Basis being replayed.
        basis: MeasurementBasis,
        /// Shots requested.
        requested: usize,
        /// Shots still available.
        available: usize,
    },

    /// Angles and recorded bitstrings disagree on the register width.
    #[error("Qubit count mismatch: angles describe {expected} qubits, bitstrings have {got}")]
    QubitMismatch {
        /// Width implied by the angles.
        expected: usize,
        /// Width of the recorded bitstrings.
        got: usize,
    },

    /// Reading or writing a corpus failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Circuit construction failed.
    #[error("State preparation error: {0}")]
    Prep(#[from] lipkin_prep::PrepError),

    /// Circuit IR error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] lipkin_ir::IrError),
}

/// Result type for HAL operations.
pub type HalResult<T> = Result<T, HalError>;
