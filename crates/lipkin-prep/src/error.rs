//! Error types for the state-preparation crate.

use thiserror::Error;

/// Errors produced while turning an eigenvector into circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PrepError {
    /// The eigenvector has fewer than two components.
    #[error("eigenvector needs at least 2 components, got {0}")]
    TooShort(usize),

    /// A component is NaN or infinite.
    #[error("eigenvector component {index} is not finite")]
    NonFinite {
        /// Index of the offending component.
        index: usize,
    },

    /// The eigenvector has zero norm.
    #[error("eigenvector has zero norm")]
    ZeroVector,

    /// The remaining norm at a staircase step is zero, so its angle is
    /// undefined.
    #[error("degenerate state: remaining norm is zero at staircase step {step}")]
    DegenerateState {
        /// Staircase step (index into the reversed vector).
        step: usize,
    },

    /// Circuit construction failed.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] lipkin_ir::IrError),
}

/// Result type for state-preparation operations.
pub type PrepResult<T> = Result<T, PrepError>;
