//! Error types for experiment runs.

use thiserror::Error;

/// Errors that abort a run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RunnerError {
    /// Shot count must be positive.
    #[error("Invalid shots: {0}")]
    InvalidShots(u32),

    /// Parameter validation or diagonalisation failed.
    #[error(transparent)]
    Model(#[from] lipkin_model::ModelError),

    /// Angle synthesis failed.
    #[error(transparent)]
    Prep(#[from] lipkin_prep::PrepError),

    /// The oracle failed to sample.
    #[error("Oracle error: {0}")]
    Oracle(#[from] lipkin_hal::HalError),

    /// The oracle returned the wrong number of shots or bit width.
    #[error("Oracle '{oracle}' returned {got} {what} for clique {basis}, expected {expected}")]
    MalformedBatch {
        oracle: String,
        basis: lipkin_prep::MeasurementBasis,
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// Bitstrings could not be turned into energies.
    #[error(transparent)]
    Estimate(#[from] lipkin_estimate::EstimateError),

    /// Writing a report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialising a report failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for runner operations.
pub type RunnerResult<T> = Result<T, RunnerError>;
