//! Dense real-basis statevector for the LMG circuits.
//!
//! Only the four kernels the preparation and measurement circuits use are
//! implemented: `H`, `RY`, `CZ` and `CRY`.

use num_complex::Complex64;
use rand::Rng;

use lipkin_ir::{Circuit, Instruction, InstructionKind, StandardGate};

/// Amplitudes over `n` qubits; bit `q` of a basis index is qubit `q`.
#[derive(Debug, Clone)]
pub struct Statevector {
    amplitudes: Vec<Complex64>,
    num_qubits: usize,
}

impl Statevector {
    /// `|0…0⟩` on `num_qubits` qubits.
    pub fn new(num_qubits: usize) -> Self {
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Evolve `|0…0⟩` through every instruction of `circuit`.
    pub fn from_circuit(circuit: &Circuit) -> Self {
        let mut sv = Self::new(circuit.num_qubits());
        for inst in circuit.instructions() {
            sv.apply(inst);
        }
        sv
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Measurements and barriers leave the state untouched; outcomes are
    /// drawn from the final amplitudes by [`Statevector::sample`].
    pub fn apply(&mut self, instruction: &Instruction) {
        if let InstructionKind::Gate(gate) = &instruction.kind {
            let q = &instruction.qubits;
            match *gate {
                StandardGate::H => self.apply_h(q[0].index()),
                StandardGate::Ry(theta) => self.rotate_y(0, 1 << q[0].index(), theta),
                StandardGate::CZ => self.apply_cz(q[0].index(), q[1].index()),
                StandardGate::CRy(theta) => {
                    self.rotate_y(1 << q[0].index(), 1 << q[1].index(), theta)
                }
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let norm = std::f64::consts::FRAC_1_SQRT_2;
        for (i, j) in pairs(self.amplitudes.len(), 1 << qubit) {
            let (a, b) = (self.amplitudes[i], self.amplitudes[j]);
            self.amplitudes[i] = norm * (a + b);
            self.amplitudes[j] = norm * (a - b);
        }
    }

    fn apply_cz(&mut self, a: usize, b: usize) {
        let both = (1 << a) | (1 << b);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & both == both {
                *amp = -*amp;
            }
        }
    }

    /// `RY(θ)` on the `target` bit, restricted to indices where every bit
    /// of `control` is set. `control == 0` is the plain rotation.
    fn rotate_y(&mut self, control: usize, target: usize, theta: f64) {
        let (s, c) = (theta / 2.0).sin_cos();
        for (i, j) in pairs(self.amplitudes.len(), target) {
            if i & control != control {
                continue;
            }
            let (a, b) = (self.amplitudes[i], self.amplitudes[j]);
            self.amplitudes[i] = c * a - s * b;
            self.amplitudes[j] = s * a + c * b;
        }
    }

    /// Outcome probabilities, indexed by basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Draw one basis index with probability `|amplitude|²`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.r#gen();
        let mut cumulative = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return i;
            }
        }
        // Rounding can leave the total just under one.
        self.amplitudes.len() - 1
    }
}

/// Index pairs `(i, i | mask)` below `len` with the `mask` bit of `i` clear.
fn pairs(len: usize, mask: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..len).filter(move |i| i & mask == 0).map(move |i| (i, i | mask))
}
