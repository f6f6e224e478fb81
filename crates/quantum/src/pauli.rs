//! Single-qubit Pauli operators and fixed-width Pauli strings.
//!
//! Character `k` of a label acts on qubit `k`, and qubit `k` is bit `k` of a
//! computational-basis index: `"XIZI"` is `X₀ Z₂`.

use crate::gates::C64;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PauliError {
    #[error("invalid Pauli character '{ch}' at position {pos}")]
    InvalidChar { ch: char, pos: usize },
    #[error("operator acts on {found} qubits, expected {expected}")]
    QubitMismatch { expected: usize, found: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pauli {
    I,
    X,
    Y,
    Z,
}

impl Pauli {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'I' | 'i' => Some(Pauli::I),
            'X' | 'x' => Some(Pauli::X),
            'Y' | 'y' => Some(Pauli::Y),
            'Z' | 'z' => Some(Pauli::Z),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Pauli::I => 'I',
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }

    pub fn flips(self) -> bool {
        matches!(self, Pauli::X | Pauli::Y)
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Tensor product of Paulis over a fixed number of qubits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PauliString {
    ops: Vec<Pauli>,
}

impl PauliString {
    pub fn identity(n: usize) -> Self {
        Self {
            ops: vec![Pauli::I; n],
        }
    }

    /// `n`-qubit string with the given non-identity factors.
    pub fn from_sparse(n: usize, factors: &[(usize, Pauli)]) -> Self {
        let mut s = Self::identity(n);
        for &(q, p) in factors {
            assert!(q < n, "qubit {} out of range for {}-qubit string", q, n);
            s.ops[q] = p;
        }
        s
    }

    pub fn from_label(label: &str) -> Result<Self, PauliError> {
        label
            .chars()
            .enumerate()
            .map(|(pos, ch)| Pauli::from_char(ch).ok_or(PauliError::InvalidChar { ch, pos }))
            .collect::<Result<Vec<_>, _>>()
            .map(|ops| Self { ops })
    }

    pub fn num_qubits(&self) -> usize {
        self.ops.len()
    }

    pub fn get(&self, q: usize) -> Pauli {
        self.ops[q]
    }

    pub fn ops(&self) -> &[Pauli] {
        &self.ops
    }

    pub fn is_identity(&self) -> bool {
        self.ops.iter().all(|&p| p == Pauli::I)
    }

    /// Only I and Z factors.
    pub fn is_diagonal(&self) -> bool {
        self.ops.iter().all(|&p| matches!(p, Pauli::I | Pauli::Z))
    }

    /// Non-identity factors as `(qubit, pauli)`.
    pub fn support(&self) -> impl Iterator<Item = (usize, Pauli)> + '_ {
        self.ops
            .iter()
            .enumerate()
            .filter(|(_, p)| **p != Pauli::I)
            .map(|(q, &p)| (q, p))
    }

    /// Image of basis state `|b⟩`: `P|b⟩ = phase · |b'⟩`.
    pub fn phase_flip(&self, basis: usize) -> (usize, C64) {
        let mut target = basis;
        let mut phase = C64::new(1.0, 0.0);
        for (q, p) in self.support() {
            let bit = (basis >> q) & 1;
            match p {
                Pauli::X => target ^= 1 << q,
                Pauli::Y => {
                    target ^= 1 << q;
                    phase *= if bit == 0 {
                        C64::new(0.0, 1.0)
                    } else {
                        C64::new(0.0, -1.0)
                    };
                }
                Pauli::Z => {
                    if bit == 1 {
                        phase = -phase;
                    }
                }
                Pauli::I => {}
            }
        }
        (target, phase)
    }
}

impl FromStr for PauliString {
    type Err = PauliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s.trim())
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.ops {
            write!(f, "{}", p)?;
        }
        Ok(())
    }
}
