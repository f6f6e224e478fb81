//! Hardware-efficient `TwoLocal` ansatz: layers of parametrized
//! single-qubit rotations separated by fixed two-qubit entanglers.

use crate::gates::{cnot, cz, rx, ry, C64};
use linalg::StateVector;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnsatzError {
    #[error("ansatz expects {expected} parameters, got {found}")]
    ParameterCount { expected: usize, found: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Ry,
    Rx,
}

impl Rotation {
    fn matrix(self, theta: f64) -> [[C64; 2]; 2] {
        match self {
            Rotation::Ry => ry(theta),
            Rotation::Rx => rx(theta),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entangler {
    Cz,
    Cx,
}

impl Entangler {
    fn matrix(self) -> [[C64; 4]; 4] {
        match self {
            Entangler::Cz => cz(),
            Entangler::Cx => cnot(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entanglement {
    /// Every pair `(i, j)` with `i < j`.
    Full,
    /// Nearest neighbours `(i, i + 1)`.
    Linear,
    /// `(n - 1, 0)` followed by the linear chain.
    Circular,
}

impl Entanglement {
    pub fn pairs(self, n: usize) -> Vec<(usize, usize)> {
        let linear = (0..n.saturating_sub(1)).map(|i| (i, i + 1));
        match self {
            Entanglement::Full => (0..n)
                .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
                .collect(),
            Entanglement::Linear => linear.collect(),
            Entanglement::Circular if n > 2 => std::iter::once((n - 1, 0)).chain(linear).collect(),
            Entanglement::Circular => linear.collect(),
        }
    }
}

impl fmt::Display for Entanglement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entanglement::Full => "full",
            Entanglement::Linear => "linear",
            Entanglement::Circular => "circular",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsatzConfig {
    pub reps: usize,
    pub rotation: Rotation,
    pub entangler: Entangler,
    pub entanglement: Entanglement,
}

impl Default for AnsatzConfig {
    fn default() -> Self {
        Self {
            reps: 2,
            rotation: Rotation::Ry,
            entangler: Entangler::Cz,
            entanglement: Entanglement::Full,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TwoLocal {
    num_qubits: usize,
    config: AnsatzConfig,
    pairs: Vec<(usize, usize)>,
}

impl TwoLocal {
    pub fn new(num_qubits: usize, config: AnsatzConfig) -> Self {
        Self {
            num_qubits,
            config,
            pairs: config.entanglement.pairs(num_qubits),
        }
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// One rotation per qubit per layer, `reps + 1` rotation layers.
    pub fn num_parameters(&self) -> usize {
        self.num_qubits * (self.config.reps + 1)
    }

    pub fn entangling_pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Prepares the ansatz state on `|0…0⟩`.
    pub fn prepare(&self, params: &[f64]) -> Result<StateVector, AnsatzError> {
        if params.len() != self.num_parameters() {
            return Err(AnsatzError::ParameterCount {
                expected: self.num_parameters(),
                found: params.len(),
            });
        }

        let mut psi = StateVector::zero(self.num_qubits);
        let entangler = self.config.entangler.matrix();

        for (layer, thetas) in params.chunks(self.num_qubits.max(1)).enumerate() {
            for (q, &theta) in thetas.iter().enumerate() {
                psi.apply_1q(q, self.config.rotation.matrix(theta));
            }
            if layer < self.config.reps {
                for &(i, j) in &self.pairs {
                    psi.apply_2q(i, j, entangler);
                }
            }
        }

        Ok(psi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_entanglement_on_four_qubits() {
        assert_eq!(
            Entanglement::Full.pairs(4),
            vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
        );
        assert_eq!(Entanglement::Circular.pairs(4)[0], (3, 0));
        assert_eq!(Entanglement::Linear.pairs(1), vec![]);
    }

    #[test]
    fn default_has_twelve_parameters_on_four_qubits() {
        let ansatz = TwoLocal::new(4, AnsatzConfig::default());
        assert_eq!(ansatz.num_parameters(), 12);
    }

    #[test]
    fn zero_angles_leave_vacuum() {
        let ansatz = TwoLocal::new(4, AnsatzConfig::default());
        let psi = ansatz.prepare(&[0.0; 12]).unwrap();
        assert!((psi.amplitude(0).re - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pi_rotations_flip_selected_qubits() {
        let ansatz = TwoLocal::new(
            2,
            AnsatzConfig {
                reps: 0,
                ..AnsatzConfig::default()
            },
        );
        let psi = ansatz.prepare(&[std::f64::consts::PI, 0.0]).unwrap();
        assert!((psi.amplitude(0b01).norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn linear_ansatz_uses_nearest_neighbour_pairs() {
        let config = AnsatzConfig {
            entanglement: Entanglement::Linear,
            ..AnsatzConfig::default()
        };
        let ansatz = TwoLocal::new(4, config);
        assert_eq!(ansatz.entangling_pairs(), &[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(TwoLocal::new(4, AnsatzConfig::default()).entangling_pairs().len(), 6);
    }

    #[test]
    fn wrong_parameter_count() {
        let ansatz = TwoLocal::new(4, AnsatzConfig::default());
        assert_eq!(
            ansatz.prepare(&[0.0; 3]).unwrap_err(),
            AnsatzError::ParameterCount { expected: 12, found: 3 }
        );
    }
}
