//! Single-shot energy samples and their statistics.

use serde::{Deserialize, Serialize};

/// One energy estimate per shot, in shot order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyDistribution {
    values: Vec<f64>,
}

impl EnergyDistribution {
    /// Wrap per-shot estimates.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Per-shot estimates.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of shots.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if there are no shots.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sample mean; NaN when empty.
    pub fn mean(&self) -> f64 {
        self.moments().0
    }

    /// Population variance (divides by `n`); NaN when empty.
    pub fn variance(&self) -> f64 {
        let (_, m2) = self.moments();
        m2 / self.values.len() as f64
    }

    /// Population standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Standard error of the mean, `std_dev / √n`.
    pub fn standard_error(&self) -> f64 {
        self.std_dev() / (self.values.len() as f64).sqrt()
    }

    /// Running mean and sum of squared deviations (Welford). Identical
    /// values give a sum of exactly zero.
    fn moments(&self) -> (f64, f64) {
        if self.values.is_empty() {
            return (f64::NAN, f64::NAN);
        }
        let mut mean = 0.0;
        let mut m2 = 0.0;
        for (i, &x) in self.values.iter().enumerate() {
            let delta = x - mean;
            mean += delta / (i + 1) as f64;
            m2 += delta * (x - mean);
        }
        (mean, m2)
    }
}

impl From<Vec<f64>> for EnergyDistribution {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}
