//! Eigenvector → rotation-angle staircase.
//!
//! For a vector `v` of length `L` (Hamiltonian row order):
//!
//! 1. Fix the global sign so that `v[0] ≤ 0`.
//! 2. Reverse it, `u[n] = v[L−1−n]`.
//! 3. For `j < L−2`: `a_j = 2·acos(u[j] / ‖u[j..]‖)`.
//! 4. Last pair: `a_{L−2} = 2·sgn(u[L−1])·acos(u[L−2] / ‖u[L−2..]‖)`, with
//!    `sgn(0) = −1`.
//! 5. Fold: `a ≥ 0 → 2π − a`, `a < 0 → 2π + a`.
//!
//! The folded angles drive `RY(a_0)` on qubit 0 and `CRY(a_k)` from qubit
//! `k−1` onto qubit `k`. With RY's `[[c, −s], [s, c]]` convention the
//! register ends in `Σ_n −v[L−1−n]·|1ⁿ0…0⟩`: the input state up to a
//! global sign. Step 1 is what makes the last component's relative sign
//! come out right; without it half of all eigenvectors are prepared with
//! that component flipped.
//!
//! Angles land in `[0, 2π]`. They are not reduced modulo 2π because
//! `CRY(2π)` is a controlled `−I`, not the identity.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use lipkin_model::EigenPair;

use crate::error::{PrepError, PrepResult};

/// What to do when a staircase step has zero remaining norm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Fail with [`PrepError::DegenerateState`].
    #[default]
    Reject,
    /// Use a raw angle of zero for the step. The amplitude below that step
    /// is zero anyway, so the prepared state is unaffected.
    ZeroAngle,
}

/// Rotation angles for the unary staircase, one per qubit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleVector {
    angles: Vec<f64>,
}

impl AngleVector {
    /// Wrap raw angles without checks (e.g. angles loaded from a file).
    pub fn from_raw(angles: Vec<f64>) -> Self {
        Self { angles }
    }

    /// The angles in staircase order.
    pub fn as_slice(&self) -> &[f64] {
        &self.angles
    }

    /// Number of angles.
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// True if there are no angles.
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Number of qubits the staircase occupies (one per angle).
    pub fn num_qubits(&self) -> usize {
        self.angles.len()
    }

    /// Amplitudes the staircase prepares, in Hamiltonian row order.
    ///
    /// Register state `|1ⁿ0…0⟩` has amplitude `s_0⋯s_{n−1}·c_n` (the last
    /// one drops `c`), with `c_i, s_i = cos, sin(a_i / 2)`; it maps to row
    /// `len − n`. The result has `len + 1` entries.
    pub fn amplitudes(&self) -> Vec<f64> {
        let n = self.angles.len();
        let mut unary = Vec::with_capacity(n + 1);
        let mut carry = 1.0;
        for &a in &self.angles {
            let half = a / 2.0;
            unary.push(carry * half.cos());
            carry *= half.sin();
        }
        unary.push(carry);
        unary.reverse();
        unary
    }
}

/// Flip the global sign of `v` so that `v[0] ≤ 0`.
///
/// Eigensolvers return either sign; the staircase relies on this one.
pub fn canonical_sign(v: &[f64]) -> Vec<f64> {
    match v.first() {
        Some(&first) if first > 0.0 => v.iter().map(|x| -x).collect(),
        _ => v.to_vec(),
    }
}

/// Converts normalised eigenvectors into staircase angles.
#[derive(Debug, Clone)]
pub struct AngleSynthesizer {
    policy: DegeneratePolicy,
    /// Remaining norms at or below this are treated as zero. Components of
    /// large-model eigenvectors reach 1e-25, so the default is exact zero.
    zero_threshold: f64,
}

impl AngleSynthesizer {
    /// Create a synthesizer that rejects degenerate states.
    pub fn new() -> Self {
        Self {
            policy: DegeneratePolicy::Reject,
            zero_threshold: 0.0,
        }
    }

    /// Choose how zero-norm staircase steps are handled.
    #[must_use]
    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Override the zero-norm threshold.
    #[must_use]
    pub fn with_zero_threshold(mut self, threshold: f64) -> Self {
        self.zero_threshold = threshold;
        self
    }

    /// Synthesize angles for an eigenpair's vector.
    pub fn synthesize_pair(&self, pair: &EigenPair) -> PrepResult<AngleVector> {
        self.synthesize(&pair.eigenvector)
    }

    /// Synthesize the `L − 1` angles for an eigenvector of length `L`.
    ///
    /// The input is renormalised first, so any non-zero multiple of an
    /// eigenvector yields the same angles up to the sign fix.
    pub fn synthesize(&self, eigenvector: &[f64]) -> PrepResult<AngleVector> {
        let len = eigenvector.len();
        if len < 2 {
            return Err(PrepError::TooShort(len));
        }
        if let Some(index) = eigenvector.iter().position(|x| !x.is_finite()) {
            return Err(PrepError::NonFinite { index });
        }
        let norm = eigenvector.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm <= self.zero_threshold {
            return Err(PrepError::ZeroVector);
        }

        let mut u: Vec<f64> = canonical_sign(eigenvector)
            .into_iter()
            .map(|x| x / norm)
            .collect();
        u.reverse();

        // tail[j] = ‖u[j..]‖
        let mut tail = vec![0.0_f64; len + 1];
        for j in (0..len).rev() {
            tail[j] = (tail[j + 1].powi(2) + u[j] * u[j]).sqrt();
        }

        let mut raw = Vec::with_capacity(len - 1);
        for (j, &uj) in u.iter().enumerate().take(len - 2) {
            raw.push(self.step_angle(j, uj, tail[j])?);
        }

        let last = len - 2;
        let pair_norm = (u[last] * u[last] + u[last + 1] * u[last + 1]).sqrt();
        // Zero counts as negative so a vanishing v[0] keeps the sign fix.
        let sign = if u[last + 1] > 0.0 { 1.0 } else { -1.0 };
        raw.push(sign * self.step_angle(last, u[last], pair_norm)?);

        let angles: Vec<f64> = raw
            .into_iter()
            .map(|a| if a >= 0.0 { 2.0 * PI - a } else { 2.0 * PI + a })
            .collect();

        debug!(len, num_qubits = angles.len(), "synthesised staircase angles");
        Ok(AngleVector { angles })
    }

    /// `2·acos(x / r)`, or the degenerate-policy outcome when `r` is zero.
    fn step_angle(&self, step: usize, x: f64, r: f64) -> PrepResult<f64> {
        if r <= self.zero_threshold {
            return match self.policy {
                DegeneratePolicy::Reject => Err(PrepError::DegenerateState { step }),
                DegeneratePolicy::ZeroAngle => {
                    warn!(step, "zero remaining norm, substituting zero angle");
                    Ok(0.0)
                }
            };
        }
        Ok(2.0 * (x / r).clamp(-1.0, 1.0).acos())
    }
}

impl Default for AngleSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}
