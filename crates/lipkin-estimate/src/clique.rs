//! Per-clique single-shot contributions.
//!
//! Weights are indexed by bitstring character `j` (qubit `j`), which is
//! coefficient position `k = j + 1`.

use lipkin_hal::Bitstring;
use lipkin_prep::MeasurementBasis;

use crate::coefficients::Coefficients;

/// Every coefficient a single shot needs, evaluated once for a register
/// width.
#[derive(Debug, Clone, PartialEq)]
pub struct CliqueWeights {
    m: usize,
    identity: f64,
    z_first: f64,
    /// Zero when `m == 1`; the single qubit uses `z_first` only.
    z_last: f64,
    /// `z[j]` for interior qubits `1..m−1`; ends are zero.
    z: Vec<f64>,
    /// `zz[j]` couples qubits `j` and `j + 1`.
    zz: Vec<f64>,
    x: Vec<f64>,
    xz: Vec<f64>,
    zx: Vec<f64>,
}

impl CliqueWeights {
    /// Evaluate all weights for `coefficients.m()` qubits.
    pub fn new(c: &Coefficients) -> Self {
        let m = c.m();
        let pairs = m.saturating_sub(1);

        let (z_first, z_last) = if m > 1 {
            (c.z_first(), c.z_last())
        } else {
            // A single qubit is both ends: the doubled interior weight.
            (2.0 * c.z(1), 0.0)
        };
        let z = (0..m)
            .map(|j| if j == 0 || j + 1 == m { 0.0 } else { c.z(j + 1) })
            .collect();

        Self {
            m,
            identity: c.identity(),
            z_first,
            z_last,
            z,
            zz: (0..pairs).map(|j| c.zz(j + 1)).collect(),
            x: (0..m).map(|j| c.x(j + 1)).collect(),
            xz: (0..pairs).map(|j| c.xz(j + 1)).collect(),
            zx: (0..pairs).map(|j| c.zx(j + 1)).collect(),
        }
    }

    /// Register width.
    pub fn num_qubits(&self) -> usize {
        self.m
    }

    /// Contribution of one bitstring measured in `basis`.
    ///
    /// Cliques inactive at this width contribute zero.
    pub fn contribution(&self, basis: MeasurementBasis, bits: &Bitstring) -> f64 {
        match basis {
            MeasurementBasis::Z => self.z_clique(bits),
            MeasurementBasis::X => self.x_clique(bits),
            MeasurementBasis::ZzEven => self.paired_clique(bits, 0),
            MeasurementBasis::ZzOdd => self.paired_clique(bits, 1),
        }
    }

    fn z_clique(&self, bits: &Bitstring) -> f64 {
        let m = self.m;
        if m == 0 {
            return 0.0;
        }
        let mut total = self.identity + self.z_first * bits.sign(0);
        if m > 1 {
            total += self.z_last * bits.sign(m - 1);
        }
        for j in 1..m.saturating_sub(1) {
            total += self.z[j] * bits.sign(j);
        }
        for (j, w) in self.zz.iter().enumerate() {
            total += w * bits.sign(j) * bits.sign(j + 1);
        }
        total
    }

    fn x_clique(&self, bits: &Bitstring) -> f64 {
        self.x
            .iter()
            .enumerate()
            .map(|(j, w)| w * bits.sign(j))
            .sum()
    }

    /// `ZzEven` starts at offset 0, `ZzOdd` at 1; both need `j + 1 < m`.
    fn paired_clique(&self, bits: &Bitstring, offset: usize) -> f64 {
        (offset..self.m.saturating_sub(1))
            .step_by(2)
            .map(|j| self.xz[j] * bits.sign(j) + self.zx[j] * bits.sign(j + 1))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(m: usize) -> CliqueWeights {
        CliqueWeights::new(&Coefficients::new(m, 3.2, -1.5, 1, 0))
    }

    fn bits(s: &str) -> Bitstring {
        s.parse().unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_four_qubit_reference_contributions() {
        let w = weights(4);
        let b = bits("0110");
        assert!(close(w.contribution(MeasurementBasis::Z, &b), -4.166666666666666));
        assert!(close(w.contribution(MeasurementBasis::X, &b), -0.12883445144359018));
        assert!(close(w.contribution(MeasurementBasis::ZzEven, &b), 0.3722335949782887));
        assert!(close(w.contribution(MeasurementBasis::ZzOdd, &b), -0.09088680476391697));

        let b = bits("1011");
        assert!(close(w.contribution(MeasurementBasis::Z, &b), -7.5));
        assert!(close(w.contribution(MeasurementBasis::X, &b), -3.8622667611152806));
        assert!(close(w.contribution(MeasurementBasis::ZzEven, &b), -2.367784201257724));
        assert!(close(w.contribution(MeasurementBasis::ZzOdd, &b), 2.0864374110433523));
    }

    #[test]
    fn test_single_qubit_contributions() {
        let w = CliqueWeights::new(&Coefficients::new(1, 1.0, 0.0, 0, 0));
        assert!(close(w.contribution(MeasurementBasis::Z, &bits("0")), 1.0));
        assert!(close(w.contribution(MeasurementBasis::Z, &bits("1")), -1.0));
        assert!(close(w.contribution(MeasurementBasis::X, &bits("0")), 0.5));
        assert!(close(w.contribution(MeasurementBasis::X, &bits("1")), -0.5));
    }

    #[test]
    fn test_paired_cliques_gated_by_width() {
        let one = weights(1);
        assert_eq!(one.contribution(MeasurementBasis::ZzEven, &bits("1")), 0.0);
        assert_eq!(one.contribution(MeasurementBasis::ZzOdd, &bits("1")), 0.0);

        let two = weights(2);
        assert_ne!(two.contribution(MeasurementBasis::ZzEven, &bits("10")), 0.0);
        assert_eq!(two.contribution(MeasurementBasis::ZzOdd, &bits("10")), 0.0);
    }
}
