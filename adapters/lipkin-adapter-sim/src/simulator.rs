//! Statevector oracle implementation.

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

use lipkin_hal::{Bitstring, CircuitOracle, HalError, HalResult};
use lipkin_prep::{AngleVector, MeasurementBasis, measurement_circuit, state_preparation};

use crate::statevector::Statevector;

/// Default register limit.
const DEFAULT_MAX_QUBITS: usize = 20;

/// Local oracle backed by an exact statevector.
///
/// The circuit is simulated once per call; shots are drawn from the final
/// distribution. With a seed the outcome sequence is reproducible.
pub struct StatevectorOracle {
    rng: StdRng,
    /// Maximum number of qubits supported.
    max_qubits: usize,
}

impl StatevectorOracle {
    /// Create an oracle seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            max_qubits: DEFAULT_MAX_QUBITS,
        }
    }

    /// Create an oracle with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_qubits: DEFAULT_MAX_QUBITS,
        }
    }

    /// Override the register limit.
    #[must_use]
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Exact outcome distribution for one clique, skipping zero entries.
    pub fn distribution(
        &self,
        angles: &AngleVector,
        basis: MeasurementBasis,
    ) -> HalResult<Vec<(Bitstring, f64)>> {
        let sv = self.simulate(angles, basis)?;
        let n = sv.num_qubits();
        Ok(sv
            .probabilities()
            .into_iter()
            .enumerate()
            .filter(|(_, p)| *p > 1e-15)
            .map(|(i, p)| (Bitstring::from_index(i, n), p))
            .collect())
    }

    /// Real amplitudes of the prepared state, indexed by basis state.
    pub fn prepared_state(&self, angles: &AngleVector) -> HalResult<Vec<f64>> {
        self.check_size(angles.num_qubits())?;
        let circuit = state_preparation(angles)?;
        Ok(Statevector::from_circuit(&circuit)
            .amplitudes()
            .iter()
            .map(|a| a.re)
            .collect())
    }

    fn check_size(&self, num_qubits: usize) -> HalResult<()> {
        if num_qubits > self.max_qubits {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but simulator only supports {}",
                num_qubits, self.max_qubits
            )));
        }
        Ok(())
    }

    fn simulate(&self, angles: &AngleVector, basis: MeasurementBasis) -> HalResult<Statevector> {
        self.check_size(angles.num_qubits())?;
        let circuit = measurement_circuit(angles, basis)?;
        debug!(%basis, ops = ?circuit.count_ops(), "simulating circuit");
        Ok(Statevector::from_circuit(&circuit))
    }
}

impl Default for StatevectorOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl CircuitOracle for StatevectorOracle {
    fn name(&self) -> &str {
        "statevector"
    }

    #[instrument(skip(self, angles), fields(num_qubits = angles.num_qubits()))]
    fn sample(
        &mut self,
        angles: &AngleVector,
        shots: u32,
        basis: MeasurementBasis,
    ) -> HalResult<Vec<Bitstring>> {
        if shots == 0 {
            return Err(HalError::InvalidShots("shots must be positive".into()));
        }
        let start = Instant::now();
        let sv = self.simulate(angles, basis)?;
        let n = sv.num_qubits();

        let out: Vec<Bitstring> = (0..shots)
            .map(|_| Bitstring::from_index(sv.sample(&mut self.rng), n))
            .collect();

        debug!("Sampling completed in {:?}", start.elapsed());
        Ok(out)
    }

    fn max_qubits(&self) -> Option<usize> {
        Some(self.max_qubits)
    }
}
