//! Fock-basis LMG Hamiltonian.
//!
//! The Hamiltonian is an `(M+1)×(M+1)` real symmetric tridiagonal matrix.
//! Row `i` holds the Fock state with occupation `k = M − i`, so the first
//! row is the fully excited state and the last row the empty one:
//!
//!   H[i][i]   = (−4k + 2M − nua + nub)/2 + W(2k+nua)(2M+nub−2k)/N + W/2,  k = M − i
//!   H[i][i+1] = V/(2N) · √[(nub+2k+1)(nub+2k+2)(2M+nua−2k)(2M+nua−2k−1)],  k = i
//!
//! with `N = 2M + nua + nub`. State preparation relies on this row order.

use nalgebra::DMatrix;
use tracing::debug;

use crate::params::ModelParameters;

/// Diagonal entry for Fock occupation `k`.
pub fn diagonal_entry(params: &ModelParameters, k: u32) -> f64 {
    let m = f64::from(params.m);
    let k = f64::from(k);
    let nua = f64::from(params.nua);
    let nub = f64::from(params.nub);
    let w = params.w;

    (-4.0 * k + 2.0 * m - nua + nub) / 2.0
        + w * (2.0 * k + nua) * (2.0 * m + nub - 2.0 * k) / params.total_occupancy()
        + w / 2.0
}

/// Coupling between rows `k` and `k + 1`, for `k` in `0..M`.
pub fn coupling_entry(params: &ModelParameters, k: u32) -> f64 {
    let m = f64::from(params.m);
    let k = f64::from(k);
    let nua = f64::from(params.nua);
    let nub = f64::from(params.nub);

    let product = (nub + 2.0 * k + 1.0)
        * (nub + 2.0 * k + 2.0)
        * (2.0 * m + nua - 2.0 * k)
        * (2.0 * m + nua - 2.0 * k - 1.0);
    params.v / (2.0 * params.total_occupancy()) * product.sqrt()
}

/// Builds the Fock-basis Hamiltonian for a parameter set.
#[derive(Debug, Clone, Copy)]
pub struct HamiltonianBuilder {
    params: ModelParameters,
}

impl HamiltonianBuilder {
    /// Create a builder. The parameters are expected to be validated.
    pub fn new(params: ModelParameters) -> Self {
        Self { params }
    }

    /// Construct the matrix.
    pub fn build(&self) -> Hamiltonian {
        let p = &self.params;
        let dim = p.dimension();
        let mut matrix = DMatrix::<f64>::zeros(dim, dim);

        for (row, k) in (0..=p.m).rev().enumerate() {
            matrix[(row, row)] = diagonal_entry(p, k);
        }
        for k in 0..p.m {
            let i = k as usize;
            let value = coupling_entry(p, k);
            matrix[(i, i + 1)] = value;
            matrix[(i + 1, i)] = value;
        }

        debug!(m = p.m, v = p.v, w = p.w, nua = p.nua, nub = p.nub, dim, "built LMG Hamiltonian");
        Hamiltonian {
            params: *p,
            matrix,
        }
    }
}

/// The tridiagonal Fock-basis Hamiltonian.
#[derive(Debug, Clone, PartialEq)]
pub struct Hamiltonian {
    params: ModelParameters,
    matrix: DMatrix<f64>,
}

impl Hamiltonian {
    /// Shorthand for `HamiltonianBuilder::new(params).build()`.
    pub fn for_parameters(params: ModelParameters) -> Self {
        HamiltonianBuilder::new(params).build()
    }

    /// The parameters this Hamiltonian was built from.
    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    /// Matrix dimension, `M + 1`.
    pub fn dimension(&self) -> usize {
        self.matrix.nrows()
    }

    /// The dense matrix.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Entry `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.matrix[(row, col)]
    }

    /// Main diagonal, in row order.
    pub fn diagonal(&self) -> Vec<f64> {
        self.matrix.diagonal().iter().copied().collect()
    }

    /// First super-diagonal, in row order.
    pub fn off_diagonal(&self) -> Vec<f64> {
        (0..self.dimension().saturating_sub(1))
            .map(|i| self.matrix[(i, i + 1)])
            .collect()
    }

    /// True if every entry is finite.
    pub fn is_finite(&self) -> bool {
        self.matrix.iter().all(|x| x.is_finite())
    }

    /// True if `|H[i][j] − H[j][i]| ≤ tol` for all entries.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        let n = self.dimension();
        (0..n).all(|i| (0..i).all(|j| (self.matrix[(i, j)] - self.matrix[(j, i)]).abs() <= tol))
    }

    /// True if every entry more than one place off the diagonal is zero.
    pub fn is_tridiagonal(&self) -> bool {
        let n = self.dimension();
        (0..n).all(|i| (0..n).all(|j| i.abs_diff(j) <= 1 || self.matrix[(i, j)] == 0.0))
    }
}
