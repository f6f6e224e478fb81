use quantum::{AnsatzError, PauliError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Hamiltonian acts on {hamiltonian} qubits but the ansatz on {ansatz}")]
    QubitMismatch { hamiltonian: usize, ansatz: usize },
    #[error(transparent)]
    Ansatz(#[from] AnsatzError),
    #[error(transparent)]
    Pauli(#[from] PauliError),
    #[error("plotting failed: {0}")]
    Plot(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
