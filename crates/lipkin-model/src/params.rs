//! LMG model parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ModelError, ModelResult};

/// Parameters that fully determine the LMG Hamiltonian.
///
/// `m` is half the particle count and also the number of qubits the
/// prepared state occupies; the Fock space has `m + 1` states. `nua` and
/// `nub` are the unpaired occupations of the two levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Half the particle count, `M ≥ 1`.
    pub m: u32,
    /// Pair-scattering strength.
    pub v: f64,
    /// Exchange strength.
    pub w: f64,
    /// Unpaired occupation of the lower level, 0 or 1.
    pub nua: u8,
    /// Unpaired occupation of the upper level, 0 or 1.
    pub nub: u8,
}

impl ModelParameters {
    /// Create and validate a parameter set.
    pub fn new(m: u32, v: f64, w: f64, nua: u8, nub: u8) -> ModelResult<Self> {
        let params = Self { m, v, w, nua, nub };
        params.validate()?;
        Ok(params)
    }

    /// Check every parameter against its domain.
    pub fn validate(&self) -> ModelResult<()> {
        if self.m < 1 {
            return Err(ModelError::InvalidParameter {
                name: "M",
                reason: format!("must be at least 1, got {}", self.m),
            });
        }
        if !self.v.is_finite() {
            return Err(ModelError::InvalidParameter {
                name: "V",
                reason: format!("must be finite, got {}", self.v),
            });
        }
        if !self.w.is_finite() {
            return Err(ModelError::InvalidParameter {
                name: "W",
                reason: format!("must be finite, got {}", self.w),
            });
        }
        if self.nua > 1 {
            return Err(ModelError::InvalidParameter {
                name: "nua",
                reason: format!("must be 0 or 1, got {}", self.nua),
            });
        }
        if self.nub > 1 {
            return Err(ModelError::InvalidParameter {
                name: "nub",
                reason: format!("must be 0 or 1, got {}", self.nub),
            });
        }
        Ok(())
    }

    /// Dimension of the Fock space, `M + 1`.
    pub fn dimension(&self) -> usize {
        self.m as usize + 1
    }

    /// Number of qubits used by the unary state preparation, `M`.
    pub fn num_qubits(&self) -> usize {
        self.m as usize
    }

    /// Highest valid energy level index.
    pub fn max_level(&self) -> usize {
        self.m as usize
    }

    /// Reject an energy level outside `0..=M`.
    pub fn check_level(&self, level: usize) -> ModelResult<()> {
        if level > self.max_level() {
            return Err(ModelError::LevelOutOfRange {
                level,
                max: self.max_level(),
            });
        }
        Ok(())
    }

    /// `2M + nua + nub`, the denominator shared by most closed forms.
    pub fn total_occupancy(&self) -> f64 {
        f64::from(2 * self.m + u32::from(self.nua) + u32::from(self.nub))
    }
}

impl fmt::Display for ModelParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M={} V={} W={} nua={} nub={}",
            self.m, self.v, self.w, self.nua, self.nub
        )
    }
}
