//! Exact diagonalization of Hermitian matrices.
//!
//! A Hermitian `H = A + iB` is diagonalized through its real symmetric
//! embedding `[[A, -B], [B, A]]`, which carries every eigenvalue of `H`
//! twice. A real eigenvector `[u; v]` of the embedding maps back to the
//! eigenvector `u + iv` of `H`.

use crate::{DenseMatrix, StateVector, C64};
use faer::{Mat, Side};

fn real_embedding(h: &DenseMatrix) -> Mat<f64> {
    let n = h.dim();
    Mat::from_fn(2 * n, 2 * n, |i, j| {
        let z = h.get(i % n, j % n);
        match (i / n, j / n) {
            (0, 0) | (1, 1) => z.re,
            (0, 1) => -z.im,
            _ => z.im,
        }
    })
}

/// Ascending eigenvalues of a Hermitian matrix.
pub fn hermitian_spectrum(h: &DenseMatrix) -> Vec<f64> {
    let m = real_embedding(h);
    let mut doubled = m.selfadjoint_eigenvalues(Side::Lower);
    doubled.sort_by(|a, b| a.total_cmp(b));
    doubled.into_iter().step_by(2).collect()
}

pub fn min_eigenvalue(h: &DenseMatrix) -> f64 {
    hermitian_spectrum(h).first().copied().unwrap_or(0.0)
}

fn rayleigh(h: &DenseMatrix, psi: &StateVector) -> f64 {
    let amps = psi.amplitudes();
    let mut acc = C64::new(0.0, 0.0);
    for r in 0..h.dim() {
        let mut row = C64::new(0.0, 0.0);
        for c in 0..h.dim() {
            row += h.get(r, c) * amps[c];
        }
        acc += amps[r].conj() * row;
    }
    acc.re
}

/// Lowest eigenpair `(energy, normalized eigenstate)` of a Hermitian matrix.
pub fn ground_state(h: &DenseMatrix) -> (f64, StateVector) {
    let n = h.dim();
    let m = real_embedding(h);
    let evd = m.selfadjoint_eigendecomposition(Side::Lower);
    let u = evd.u();

    let mut best: Option<(f64, StateVector)> = None;
    for col in 0..u.ncols() {
        let amps: Vec<C64> = (0..n)
            .map(|r| C64::new(u.read(r, col), u.read(r + n, col)))
            .collect();
        let Ok(mut psi) = StateVector::from_amplitudes(amps) else {
            continue;
        };
        if psi.norm_sqr() == 0.0 {
            continue;
        }
        psi.normalize();
        let e = rayleigh(h, &psi);
        if best.as_ref().map_or(true, |(b, _)| e < *b) {
            best = Some((e, psi));
        }
    }

    best.unwrap_or_else(|| (0.0, StateVector::zero(n.max(1).trailing_zeros() as usize)))
}
