//! Two-site Jaynes-Cummings-Hubbard model mapped onto four qubits.
//!
//! Each site holds a two-level atom and a photon mode truncated to
//! occupation 0/1. Qubit layout is fixed; every term below depends on it.

use crate::operator::PauliSum;
use crate::pauli::{Pauli, PauliString};

pub const NUM_SITES: usize = 2;
pub const NUM_QUBITS: usize = 2 * NUM_SITES;

/// Qubit carrying the atom of `site`.
pub const fn atom(site: usize) -> usize {
    2 * site
}

/// Qubit carrying the photon mode of `site`.
pub const fn photon(site: usize) -> usize {
    2 * site + 1
}

/// Cavity frequency, atom-photon coupling and inter-site hopping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JchParams {
    pub wc: f64,
    pub g: f64,
    pub j: f64,
}

impl JchParams {
    pub fn new(wc: f64, g: f64, j: f64) -> Self {
        Self { wc, g, j }
    }

    pub fn scaled(&self, k: f64) -> Self {
        Self::new(self.wc * k, self.g * k, self.j * k)
    }
}

impl Default for JchParams {
    fn default() -> Self {
        Self::new(1.0, 0.05, 0.1)
    }
}

fn op(factors: &[(usize, Pauli)]) -> PauliSum {
    PauliSum::term(PauliString::from_sparse(NUM_QUBITS, factors), 1.0)
}

fn identity() -> PauliSum {
    PauliSum::identity(NUM_QUBITS, 1.0)
}

/// `P_a P_b` for each of X and Y: the qubit form of `σ⁺σ⁻ + σ⁻σ⁺` up to 1/2.
fn exchange(a: usize, b: usize) -> PauliSum {
    op(&[(a, Pauli::X), (b, Pauli::X)]) + op(&[(a, Pauli::Y), (b, Pauli::Y)])
}

/// `wc (a†a + σz/2)` on every site, with `a†a = (I − Z)/2`.
pub fn site_energy(wc: f64) -> PauliSum {
    (0..NUM_SITES).fold(PauliSum::zero(NUM_QUBITS), |acc, site| {
        acc + wc * 0.5 * (identity() - op(&[(photon(site), Pauli::Z)]))
            + wc * 0.5 * op(&[(atom(site), Pauli::Z)])
    })
}

/// On-site atom-photon exchange `g (a†σ⁻ + aσ⁺)`.
pub fn jaynes_cummings(g: f64) -> PauliSum {
    (0..NUM_SITES).fold(PauliSum::zero(NUM_QUBITS), |acc, site| {
        acc + 0.5 * g * exchange(atom(site), photon(site))
    })
}

/// Photon hopping `-J (a₀†a₁ + a₁†a₀)` between the two cavities.
pub fn hopping(j: f64) -> PauliSum {
    -0.5 * j * exchange(photon(0), photon(1))
}

/// Simplified JCH Hamiltonian. Total: any finite parameters are accepted.
pub fn jch_hamiltonian(params: JchParams) -> PauliSum {
    (site_energy(params.wc) + jaynes_cummings(params.g) + hopping(params.j)).simplify()
}
