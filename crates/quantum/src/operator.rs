//! Weighted sums of Pauli strings.

use crate::gates::C64;
use crate::pauli::{PauliError, PauliString};
use linalg::{DenseMatrix, StateVector};
use std::collections::HashMap;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Coefficients with modulus at or below this are dropped by [`PauliSum::simplify`].
pub const SIMPLIFY_ATOL: f64 = 1e-8;

/// `Σ cᵢ Pᵢ` over a fixed number of qubits.
///
/// Terms are kept in insertion order and may repeat until simplified.
#[derive(Debug, Clone, PartialEq)]
pub struct PauliSum {
    num_qubits: usize,
    terms: Vec<(PauliString, C64)>,
}

impl PauliSum {
    /// The zero operator on `n` qubits.
    pub fn zero(n: usize) -> Self {
        Self {
            num_qubits: n,
            terms: Vec::new(),
        }
    }

    pub fn identity(n: usize, coeff: impl Into<C64>) -> Self {
        Self::term(PauliString::identity(n), coeff)
    }

    pub fn term(string: PauliString, coeff: impl Into<C64>) -> Self {
        Self {
            num_qubits: string.num_qubits(),
            terms: vec![(string, coeff.into())],
        }
    }

    /// Single term with coefficient 1, e.g. `PauliSum::from_label("IZII")`.
    pub fn from_label(label: &str) -> Result<Self, PauliError> {
        Ok(Self::term(PauliString::from_label(label)?, 1.0))
    }

    pub fn from_terms(n: usize, terms: Vec<(PauliString, C64)>) -> Result<Self, PauliError> {
        if let Some((s, _)) = terms.iter().find(|(s, _)| s.num_qubits() != n) {
            return Err(PauliError::QubitMismatch {
                expected: n,
                found: s.num_qubits(),
            });
        }
        Ok(Self { num_qubits: n, terms })
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn terms(&self) -> &[(PauliString, C64)] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Summed coefficient of `string` (zero if absent).
    pub fn coefficient(&self, string: &PauliString) -> C64 {
        self.terms
            .iter()
            .filter(|(s, _)| s == string)
            .map(|(_, c)| *c)
            .sum()
    }

    pub fn try_add(&self, other: &PauliSum) -> Result<PauliSum, PauliError> {
        if other.num_qubits != self.num_qubits {
            return Err(PauliError::QubitMismatch {
                expected: self.num_qubits,
                found: other.num_qubits,
            });
        }
        let mut terms = self.terms.clone();
        terms.extend(other.terms.iter().cloned());
        Ok(Self {
            num_qubits: self.num_qubits,
            terms,
        })
    }

    pub fn scale(&self, factor: impl Into<C64>) -> PauliSum {
        let factor = factor.into();
        Self {
            num_qubits: self.num_qubits,
            terms: self
                .terms
                .iter()
                .map(|(s, c)| (s.clone(), c * factor))
                .collect(),
        }
    }

    pub fn simplify(&self) -> PauliSum {
        self.simplify_with(SIMPLIFY_ATOL)
    }

    /// Merges repeated strings (first occurrence fixes the order) and drops
    /// terms whose merged coefficient has modulus `<= atol`.
    pub fn simplify_with(&self, atol: f64) -> PauliSum {
        let mut index: HashMap<&PauliString, usize> = HashMap::new();
        let mut merged: Vec<(PauliString, C64)> = Vec::new();

        for (s, c) in &self.terms {
            match index.get(s) {
                Some(&i) => merged[i].1 += c,
                None => {
                    index.insert(s, merged.len());
                    merged.push((s.clone(), *c));
                }
            }
        }

        merged.retain(|(_, c)| c.norm() > atol);
        Self {
            num_qubits: self.num_qubits,
            terms: merged,
        }
    }

    /// Pauli strings are self-adjoint, so only the coefficients conjugate.
    pub fn adjoint(&self) -> PauliSum {
        Self {
            num_qubits: self.num_qubits,
            terms: self.terms.iter().map(|(s, c)| (s.clone(), c.conj())).collect(),
        }
    }

    /// Dense `2ⁿ × 2ⁿ` matrix in the computational basis.
    pub fn to_matrix(&self) -> DenseMatrix {
        let dim = 1usize << self.num_qubits;
        let mut m = DenseMatrix::zeros(dim);
        for (s, c) in &self.terms {
            for col in 0..dim {
                let (row, phase) = s.phase_flip(col);
                m.add_at(row, col, c * phase);
            }
        }
        m
    }

    pub fn is_hermitian(&self, tol: f64) -> bool {
        self.to_matrix().is_hermitian(tol)
    }

    fn check_state(&self, psi: &StateVector) -> Result<(), PauliError> {
        if psi.num_qubits() != self.num_qubits {
            return Err(PauliError::QubitMismatch {
                expected: self.num_qubits,
                found: psi.num_qubits(),
            });
        }
        Ok(())
    }

    /// `H|ψ⟩`
    pub fn apply(&self, psi: &StateVector) -> Result<StateVector, PauliError> {
        self.check_state(psi)?;
        let amps = psi.amplitudes();
        let mut out = vec![C64::new(0.0, 0.0); amps.len()];
        for (s, c) in &self.terms {
            for (b, a) in amps.iter().enumerate() {
                let (t, phase) = s.phase_flip(b);
                out[t] += c * phase * a;
            }
        }
        // same length as `psi`, always a power of two
        StateVector::from_amplitudes(out).map_err(|_| PauliError::QubitMismatch {
            expected: self.num_qubits,
            found: psi.num_qubits(),
        })
    }

    /// `Re ⟨ψ|H|ψ⟩`
    pub fn expectation(&self, psi: &StateVector) -> Result<f64, PauliError> {
        let h_psi = self.apply(psi)?;
        Ok(psi.inner(&h_psi).re)
    }
}

impl Add for PauliSum {
    type Output = PauliSum;

    fn add(self, rhs: PauliSum) -> PauliSum {
        assert_eq!(
            self.num_qubits, rhs.num_qubits,
            "adding Pauli sums of different widths"
        );
        let mut terms = self.terms;
        terms.extend(rhs.terms);
        PauliSum {
            num_qubits: self.num_qubits,
            terms,
        }
    }
}

impl Neg for PauliSum {
    type Output = PauliSum;

    fn neg(self) -> PauliSum {
        self.scale(-1.0)
    }
}

impl Sub for PauliSum {
    type Output = PauliSum;

    fn sub(self, rhs: PauliSum) -> PauliSum {
        self + (-rhs)
    }
}

impl Mul<f64> for PauliSum {
    type Output = PauliSum;

    fn mul(self, rhs: f64) -> PauliSum {
        self.scale(rhs)
    }
}

impl Mul<PauliSum> for f64 {
    type Output = PauliSum;

    fn mul(self, rhs: PauliSum) -> PauliSum {
        rhs.scale(self)
    }
}

impl Mul<C64> for PauliSum {
    type Output = PauliSum;

    fn mul(self, rhs: C64) -> PauliSum {
        self.scale(rhs)
    }
}

impl fmt::Display for PauliSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0 ({} qubits)", self.num_qubits);
        }
        for (i, (s, c)) in self.terms.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            if c.im.abs() <= SIMPLIFY_ATOL {
                write!(f, "{:+.6} * {}", c.re, s)?;
            } else {
                write!(f, "({:+.6}{:+.6}i) * {}", c.re, c.im, s)?;
            }
        }
        Ok(())
    }
}
