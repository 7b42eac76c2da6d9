//! Dense symmetric eigen-decomposition of the Hamiltonian.
//!
//! Delegates to nalgebra's `SymmetricEigen`, which returns eigenpairs in
//! no particular order; they are sorted ascending here so that level 0 is
//! the ground state. Eigenvector signs are whatever the solver produced.

use std::cmp::Ordering;

use nalgebra::SymmetricEigen;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ModelError, ModelResult};
use crate::hamiltonian::Hamiltonian;

/// One eigenvalue with its unit-norm eigenvector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EigenPair {
    /// Index into the ascending spectrum.
    pub level: usize,
    /// The eigenvalue.
    pub eigenvalue: f64,
    /// Eigenvector components in Hamiltonian row order.
    pub eigenvector: Vec<f64>,
}

impl EigenPair {
    /// Euclidean norm of the eigenvector.
    pub fn norm(&self) -> f64 {
        self.eigenvector.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Number of components, `M + 1`.
    pub fn len(&self) -> usize {
        self.eigenvector.len()
    }

    /// True if the eigenvector has no components.
    pub fn is_empty(&self) -> bool {
        self.eigenvector.is_empty()
    }
}

/// The full ascending spectrum of a Hamiltonian.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    /// Eigenpairs sorted by ascending eigenvalue.
    pub pairs: Vec<EigenPair>,
}

impl Spectrum {
    /// Ascending eigenvalues.
    pub fn eigenvalues(&self) -> Vec<f64> {
        self.pairs.iter().map(|p| p.eigenvalue).collect()
    }

    /// The lowest eigenpair.
    pub fn ground(&self) -> Option<&EigenPair> {
        self.pairs.first()
    }

    /// Eigenpair at `level`.
    pub fn level(&self, level: usize) -> ModelResult<&EigenPair> {
        self.pairs.get(level).ok_or(ModelError::LevelOutOfRange {
            level,
            max: self.pairs.len().saturating_sub(1),
        })
    }
}

/// Symmetric eigensolver for LMG Hamiltonians.
#[derive(Debug, Clone)]
pub struct EigenSolver {
    /// Convergence threshold passed to the QR iteration.
    eps: f64,
    /// Iteration cap; 0 means unbounded.
    max_iterations: usize,
}

impl EigenSolver {
    /// Create a solver with machine-epsilon convergence and no iteration cap.
    pub fn new() -> Self {
        Self {
            eps: f64::EPSILON,
            max_iterations: 0,
        }
    }

    /// Cap the number of QR iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Select the eigenpair at `level` (0 = ground state).
    ///
    /// Valid levels are `0..=M`.
    pub fn solve(&self, hamiltonian: &Hamiltonian, level: usize) -> ModelResult<EigenPair> {
        hamiltonian.params().check_level(level)?;
        let mut spectrum = self.spectrum(hamiltonian)?;
        let pair = spectrum.pairs.swap_remove(level);
        debug!(level, eigenvalue = pair.eigenvalue, "selected eigenpair");
        Ok(pair)
    }

    /// Compute every eigenpair, sorted ascending.
    pub fn spectrum(&self, hamiltonian: &Hamiltonian) -> ModelResult<Spectrum> {
        if !hamiltonian.is_finite() {
            return Err(ModelError::NonFiniteHamiltonian);
        }
        let dim = hamiltonian.dimension();
        let eigen =
            SymmetricEigen::try_new(hamiltonian.matrix().clone(), self.eps, self.max_iterations)
                .ok_or(ModelError::EigenDecomposition(dim))?;

        let mut order: Vec<usize> = (0..dim).collect();
        order.sort_by(|&a, &b| {
            eigen.eigenvalues[a]
                .partial_cmp(&eigen.eigenvalues[b])
                .unwrap_or(Ordering::Equal)
        });

        let pairs = order
            .into_iter()
            .enumerate()
            .map(|(level, col)| {
                let column = eigen.eigenvectors.column(col);
                let norm = column.norm();
                let eigenvector = if norm > 0.0 {
                    column.iter().map(|x| x / norm).collect()
                } else {
                    column.iter().copied().collect()
                };
                EigenPair {
                    level,
                    eigenvalue: eigen.eigenvalues[col],
                    eigenvector,
                }
            })
            .collect();

        debug!(dim, "diagonalised Hamiltonian");
        Ok(Spectrum { pairs })
    }
}

impl Default for EigenSolver {
    fn default() -> Self {
        Self::new()
    }
}
