use crate::{LinalgError, StateVector, C64};

/// Row-major square complex matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix {
    data: Vec<C64>,
    dim: usize,
}

impl DenseMatrix {
    pub fn zeros(dim: usize) -> Self {
        Self {
            data: vec![C64::new(0.0, 0.0); dim * dim],
            dim,
        }
    }

    pub fn from_fn<F>(dim: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> C64,
    {
        let mut m = Self::zeros(dim);
        for r in 0..dim {
            for c in 0..dim {
                m.set(r, c, f(r, c));
            }
        }
        m
    }

    #[inline]
    fn idx(&self, r: usize, c: usize) -> usize {
        r * self.dim + c
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn get(&self, r: usize, c: usize) -> C64 {
        self.data[self.idx(r, c)]
    }

    pub fn set(&mut self, r: usize, c: usize, v: C64) {
        let i = self.idx(r, c);
        self.data[i] = v;
    }

    pub fn add_at(&mut self, r: usize, c: usize, v: C64) {
        let i = self.idx(r, c);
        self.data[i] += v;
    }

    /// Conjugate transpose.
    pub fn adjoint(&self) -> Self {
        Self::from_fn(self.dim, |r, c| self.get(c, r).conj())
    }

    pub fn max_abs_diff(&self, other: &DenseMatrix) -> f64 {
        assert_eq!(self.dim, other.dim, "comparing matrices of different size");
        self.data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| (a - b).norm())
            .fold(0.0, f64::max)
    }

    pub fn is_hermitian(&self, tol: f64) -> bool {
        for r in 0..self.dim {
            for c in r..self.dim {
                if (self.get(r, c) - self.get(c, r).conj()).norm() > tol {
                    return false;
                }
            }
        }
        true
    }

    pub fn is_diagonal(&self, tol: f64) -> bool {
        (0..self.dim).all(|r| (0..self.dim).all(|c| r == c || self.get(r, c).norm() <= tol))
    }

    pub fn apply(&self, psi: &StateVector) -> Result<StateVector, LinalgError> {
        if psi.dim() != self.dim {
            return Err(LinalgError::DimensionMismatch {
                expected: self.dim,
                found: psi.dim(),
            });
        }
        let amps = psi.amplitudes();
        let out = (0..self.dim)
            .map(|r| (0..self.dim).map(|c| self.get(r, c) * amps[c]).sum())
            .collect();
        StateVector::from_amplitudes(out)
    }
}
