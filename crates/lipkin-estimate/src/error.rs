//! Error types for estimation.

use lipkin_prep::MeasurementBasis;
use thiserror::Error;

/// Errors raised before any single-shot estimate is computed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EstimateError {
    /// Batches disagree in shot count or bit length.
    #[error("Input length mismatch in {basis} batch: expected {expected} {what}, got {got}")]
    InputLengthMismatch {
        /// Offending batch.
        basis: MeasurementBasis,
        /// `"shots"` or `"bits"`.
        what: &'static str,
        /// Length taken from the Z batch.
        expected: usize,
        /// Length found.
        got: usize,
    },

    /// A clique required for this register width has no batch.
    #[error("Missing bitstrings for clique {n} ({basis})", n = .0.clique(), basis = .0)]
    MissingClique(MeasurementBasis),

    /// The sample holds no shots.
    #[error("Sample contains no shots")]
    EmptySample,

    /// Bitstrings have zero width.
    #[error("Bitstrings must cover at least one qubit")]
    ZeroWidth,
}

/// Result type for estimation.
pub type EstimateResult<T> = Result<T, EstimateError>;
