//! Combining clique batches into per-shot energies.

use serde::{Deserialize, Serialize};
use tracing::debug;

use lipkin_hal::{Bitstring, BitstringSample};
use lipkin_model::ModelParameters;
use lipkin_prep::MeasurementBasis;

use crate::clique::CliqueWeights;
use crate::coefficients::Coefficients;
use crate::distribution::EnergyDistribution;
use crate::error::{EstimateError, EstimateResult};

/// Turns clique bitstrings into single-shot energy estimates.
///
/// The register width is read from the bitstrings, so the same estimator
/// serves any `M` with the given couplings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimator {
    v: f64,
    w: f64,
    nua: u8,
    nub: u8,
}

impl EnergyEstimator {
    /// Create an estimator for the given couplings and occupations.
    pub fn new(v: f64, w: f64, nua: u8, nub: u8) -> Self {
        Self { v, w, nua, nub }
    }

    /// Create an estimator from validated model parameters.
    pub fn from_params(params: &ModelParameters) -> Self {
        Self::new(params.v, params.w, params.nua, params.nub)
    }

    /// Weights for an `m`-qubit register.
    pub fn weights(&self, m: usize) -> CliqueWeights {
        CliqueWeights::new(&Coefficients::new(m, self.v, self.w, self.nua, self.nub))
    }

    /// Contribution of a single bitstring measured in `basis`.
    pub fn clique_contribution(&self, basis: MeasurementBasis, bits: &Bitstring) -> f64 {
        self.weights(bits.len()).contribution(basis, bits)
    }

    /// Estimate the energy of every shot.
    ///
    /// The Z batch fixes the shot count and width. Every clique active at
    /// that width must be present, and every batch present, active or not,
    /// must match that shot count and width. Inactive batches carry no terms
    /// and are otherwise ignored.
    pub fn estimate(&self, sample: &BitstringSample) -> EstimateResult<EnergyDistribution> {
        let reference = sample
            .get(MeasurementBasis::Z)
            .ok_or(EstimateError::MissingClique(MeasurementBasis::Z))?;
        let shots = reference.len();
        if shots == 0 {
            return Err(EstimateError::EmptySample);
        }
        let m = reference[0].len();
        if m == 0 {
            return Err(EstimateError::ZeroWidth);
        }

        for (basis, batch) in sample.iter() {
            check_batch(basis, batch, shots, m)?;
        }

        let batches = MeasurementBasis::active_for(m)
            .into_iter()
            .map(|basis| {
                sample
                    .get(basis)
                    .map(|batch| (basis, batch))
                    .ok_or(EstimateError::MissingClique(basis))
            })
            .collect::<EstimateResult<Vec<_>>>()?;

        let weights = self.weights(m);
        let values = (0..shots)
            .map(|j| {
                batches
                    .iter()
                    .map(|(basis, batch)| weights.contribution(*basis, &batch[j]))
                    .sum()
            })
            .collect();

        debug!(m, shots, cliques = batches.len(), "estimated single-shot energies");
        Ok(EnergyDistribution::new(values))
    }
}

/// Reject a batch whose shot count or width differs from the Z batch.
fn check_batch(
    basis: MeasurementBasis,
    batch: &[Bitstring],
    shots: usize,
    m: usize,
) -> EstimateResult<()> {
    if batch.len() != shots {
        return Err(EstimateError::InputLengthMismatch {
            basis,
            what: "shots",
            expected: shots,
            got: batch.len(),
        });
    }
    if let Some(bad) = batch.iter().find(|b| b.len() != m) {
        return Err(EstimateError::InputLengthMismatch {
            basis,
            what: "bits",
            expected: m,
            got: bad.len(),
        });
    }
    Ok(())
}
