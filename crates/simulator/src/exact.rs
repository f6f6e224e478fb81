use linalg::{eigen::ground_state, StateVector};
use quantum::PauliSum;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ExactResult {
    pub eigenvalue: f64,
    pub eigenstate: StateVector,
}

/// Dense diagonalization of the full operator. Fine up to a dozen qubits.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactSolver;

impl ExactSolver {
    pub fn new() -> Self {
        Self
    }

    pub fn compute_minimum_eigenvalue(&self, h: &PauliSum) -> ExactResult {
        let matrix = h.to_matrix();
        debug!(dim = matrix.dim(), terms = h.len(), "diagonalizing");
        let (eigenvalue, eigenstate) = ground_state(&matrix);
        ExactResult {
            eigenvalue,
            eigenstate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_z_ground_state() {
        let h = PauliSum::from_label("Z").unwrap();
        let r = ExactSolver::new().compute_minimum_eigenvalue(&h);
        assert!((r.eigenvalue + 1.0).abs() < 1e-12);
        assert!(r.eigenstate.amplitude(1).norm() > 1.0 - 1e-9);
    }
}
