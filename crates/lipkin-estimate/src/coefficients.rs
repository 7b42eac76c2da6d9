//! Closed-form Pauli coefficients of the qubit-encoded LMG Hamiltonian.
//!
//! `m` is the register width; `k` is a 1-based qubit position. With
//! `N = 2m + nua + nub`:
//!
//! | Term | Method |
//! |------|--------|
//! | `I` | [`identity`](Coefficients::identity) |
//! | `Z_1`, `Z_m` | [`z_first`](Coefficients::z_first), [`z_last`](Coefficients::z_last) |
//! | `Z_k` (interior) | [`z`](Coefficients::z) |
//! | `Z_k Z_{k+1}` | [`zz`](Coefficients::zz) |
//! | `X_k` | [`x`](Coefficients::x) |
//! | `X_k Z_{k+1}`, `Z_k X_{k+1}` | [`xz`](Coefficients::xz), [`zx`](Coefficients::zx) |
//!
//! The expressions are rational functions of the parameters and must stay
//! exactly as written.

use serde::{Deserialize, Serialize};

fn kronecker_delta(i: usize, j: usize) -> f64 {
    if i == j { 1.0 } else { 0.0 }
}

/// Coefficient evaluator for one register width and parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    m: usize,
    v: f64,
    w: f64,
    nua: f64,
    nub: f64,
}

impl Coefficients {
    /// Coefficients for `m` qubits.
    pub fn new(m: usize, v: f64, w: f64, nua: u8, nub: u8) -> Self {
        Self {
            m,
            v,
            w,
            nua: f64::from(nua),
            nub: f64::from(nub),
        }
    }

    /// Register width.
    pub fn m(&self) -> usize {
        self.m
    }

    fn mf(&self) -> f64 {
        self.m as f64
    }

    /// Identity term.
    pub fn identity(&self) -> f64 {
        let (m, w, a, b) = (self.mf(), self.w, self.nua, self.nub);
        let n = 2.0 * m + a + b;
        w * m.powi(3) / (6.0 * n)
            + m.powi(2) * (b - a + w * (1.0 + a + b)) / (4.0 * n)
            + m * (21.0 * (b - a) + w * (14.0 + 21.0 * (a + b) + 6.0 * a * b)) / (24.0 * n)
            + 3.0 * (b - a + w * (a + b + 2.0 * a * b)) / (8.0 * n)
    }

    /// `Z` on the first qubit.
    pub fn z_first(&self) -> f64 {
        let (m, w, a, b) = (self.mf(), self.w, self.nua, self.nub);
        (4.0 * m.powi(2)
            + 3.0 * a
            + 5.0 * b
            + m * (8.0 - 6.0 * w + 4.0 * w * a + 4.0 * b)
            + w * (8.0 + 5.0 * a - 3.0 * b + 2.0 * a * b))
            / (16.0 * m + 8.0 * (a + b))
    }

    /// `Z` on the last qubit.
    pub fn z_last(&self) -> f64 {
        let (m, w, a, b) = (self.mf(), self.w, self.nua, self.nub);
        (4.0 * m.powi(2) + 5.0 * a + 3.0 * b + m * (8.0 + 6.0 * w + 4.0 * a - 4.0 * w * b)
            - w * (8.0 - 3.0 * a + 5.0 * b + 2.0 * a * b))
            / (16.0 * m + 8.0 * (a + b))
    }

    /// `Z` on qubit `k`.
    pub fn z(&self, k: usize) -> f64 {
        let (m, w, a, b) = (self.mf(), self.w, self.nua, self.nub);
        let k = k as f64;
        (2.0 * (-2.0 * m * (w - 1.0) + a + b + w * (4.0 * k + a - b - 2.0)))
            / (8.0 * m + 4.0 * a + 4.0 * b)
    }

    /// `Z` on qubits `k` and `k + 1`.
    pub fn zz(&self, k: usize) -> f64 {
        let (m, w, a, b) = (self.mf(), self.w, self.nua, self.nub);
        let k = k as f64;
        (4.0 * k - 2.0 * m - w + a - b
            - (2.0 * w * (2.0 * k + a) * (2.0 * m - 2.0 * k + b)) / (2.0 * m + a + b))
            / 8.0
    }

    /// `X` on qubit `k`.
    pub fn x(&self, k: usize) -> f64 {
        let boundary = (kronecker_delta(k, self.m) + kronecker_delta(k, 1)) / 2.0;
        self.v / (4.0 * self.mf() + 2.0 * self.nua + 2.0 * self.nub) * (1.0 + boundary) / 2.0
            * self.occupation_root(k)
    }

    /// `X` on qubit `k`, `Z` on `k + 1`.
    pub fn xz(&self, k: usize) -> f64 {
        self.v / 4.0 / (4.0 * self.mf() + 2.0 * self.nua + 2.0 * self.nub) * self.occupation_root(k)
    }

    /// `Z` on qubit `k`, `X` on `k + 1`.
    pub fn zx(&self, k: usize) -> f64 {
        -self.xz(k + 1)
    }

    fn occupation_root(&self, k: usize) -> f64 {
        let (m, a, b) = (self.mf(), self.nua, self.nub);
        let k = k as f64;
        ((a + 2.0 * k) * (a + 2.0 * k - 1.0) * (2.0 * m + b - 2.0 * k + 1.0) * (2.0 * m + b - 2.0 * k + 2.0))
            .sqrt()
    }
}
