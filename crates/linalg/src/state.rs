use crate::{LinalgError, C64};

/// Dense n-qubit statevector. Qubit `k` is bit `k` of the basis index.
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    amps: Vec<C64>,
    num_qubits: usize,
}

impl StateVector {
    /// |0…0⟩ on `n` qubits.
    pub fn zero(n: usize) -> Self {
        let mut amps = vec![C64::new(0.0, 0.0); 1 << n];
        amps[0] = C64::new(1.0, 0.0);
        Self { amps, num_qubits: n }
    }

    pub fn from_amplitudes(amps: Vec<C64>) -> Result<Self, LinalgError> {
        let len = amps.len();
        if len == 0 || !len.is_power_of_two() {
            return Err(LinalgError::NotPowerOfTwo(len));
        }
        Ok(Self {
            amps,
            num_qubits: len.trailing_zeros() as usize,
        })
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn dim(&self) -> usize {
        self.amps.len()
    }

    pub fn amplitudes(&self) -> &[C64] {
        &self.amps
    }

    pub fn amplitude(&self, basis: usize) -> C64 {
        self.amps[basis]
    }

    pub fn apply_1q(&mut self, k: usize, u: [[C64; 2]; 2]) {
        assert!(k < self.num_qubits, "qubit {} out of range", k);
        let mask = 1usize << k;

        for b in 0..self.amps.len() {
            if b & mask != 0 {
                continue;
            }
            let a0 = self.amps[b];
            let a1 = self.amps[b | mask];
            self.amps[b] = u[0][0] * a0 + u[0][1] * a1;
            self.amps[b | mask] = u[1][0] * a0 + u[1][1] * a1;
        }
    }

    /// Applies a two-qubit gate. Row/column index of `u` is `p_i * 2 + p_j`,
    /// so `i` is the control of `gates::cnot()`.
    pub fn apply_2q(&mut self, i: usize, j: usize, u: [[C64; 4]; 4]) {
        assert!(i != j, "two-qubit gate on a single qubit {}", i);
        assert!(
            i < self.num_qubits && j < self.num_qubits,
            "qubit pair ({}, {}) out of range",
            i,
            j
        );
        let mi = 1usize << i;
        let mj = 1usize << j;

        for b in 0..self.amps.len() {
            if b & (mi | mj) != 0 {
                continue;
            }
            let idx = [b, b | mj, b | mi, b | mi | mj];
            let old = [
                self.amps[idx[0]],
                self.amps[idx[1]],
                self.amps[idx[2]],
                self.amps[idx[3]],
            ];
            for (p, &target) in idx.iter().enumerate() {
                let mut acc = C64::new(0.0, 0.0);
                for q in 0..4 {
                    acc += u[p][q] * old[q];
                }
                self.amps[target] = acc;
            }
        }
    }

    /// ⟨self|other⟩
    pub fn inner(&self, other: &StateVector) -> C64 {
        assert_eq!(self.dim(), other.dim(), "inner product of mismatched states");
        self.amps
            .iter()
            .zip(&other.amps)
            .map(|(a, b)| a.conj() * b)
            .sum()
    }

    pub fn norm_sqr(&self) -> f64 {
        self.amps.iter().map(|a| a.norm_sqr()).sum()
    }

    pub fn normalize(&mut self) {
        let norm = self.norm_sqr().sqrt();
        if norm == 0.0 {
            return;
        }
        for a in &mut self.amps {
            *a /= norm;
        }
    }

    pub fn probabilities(&self) -> Vec<f64> {
        self.amps.iter().map(|a| a.norm_sqr()).collect()
    }

    /// |⟨a|b⟩|² / (⟨a|a⟩⟨b|b⟩)
    pub fn fidelity(&self, other: &StateVector) -> f64 {
        let denom = self.norm_sqr() * other.norm_sqr();
        if denom == 0.0 {
            return 0.0;
        }
        self.inner(other).norm_sqr() / denom
    }
}
